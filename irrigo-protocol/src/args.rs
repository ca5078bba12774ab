//! Command arguments
//!
//! Handlers receive the tokens that follow the command name and pull
//! them one at a time, as integers, only when they need them.

use core::num::{IntErrorKind, ParseIntError};
use core::str::{FromStr, SplitAsciiWhitespace};

/// Errors from pulling an argument token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArgError {
    /// No token left on the line
    Missing,
    /// Token is not an integer
    Invalid,
    /// Token is an integer but outside the accepted range
    OutOfRange,
}

impl ArgError {
    /// Short human-readable description for console replies
    pub fn as_str(&self) -> &'static str {
        match self {
            ArgError::Missing => "missing argument",
            ArgError::Invalid => "not a number",
            ArgError::OutOfRange => "out of range",
        }
    }
}

impl From<ParseIntError> for ArgError {
    fn from(e: ParseIntError) -> Self {
        match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ArgError::OutOfRange,
            _ => ArgError::Invalid,
        }
    }
}

/// Remaining tokens of a command line
#[derive(Debug, Clone)]
pub struct Args<'a> {
    tokens: SplitAsciiWhitespace<'a>,
}

impl<'a> Args<'a> {
    /// Wrap the text that follows the command name
    pub fn new(rest: &'a str) -> Self {
        Self {
            tokens: rest.split_ascii_whitespace(),
        }
    }

    /// Next raw token, if any
    pub fn next_token(&mut self) -> Option<&'a str> {
        self.tokens.next()
    }

    /// Check whether any tokens remain without consuming them
    pub fn is_empty(&self) -> bool {
        self.tokens.clone().next().is_none()
    }

    /// Pull the next token as an integer
    pub fn next_int<T>(&mut self) -> Result<T, ArgError>
    where
        T: FromStr<Err = ParseIntError>,
    {
        let token = self.next_token().ok_or(ArgError::Missing)?;
        Ok(token.parse::<T>()?)
    }

    /// Pull the next token as an integer no greater than `max`
    pub fn next_at_most<T>(&mut self, max: T) -> Result<T, ArgError>
    where
        T: FromStr<Err = ParseIntError> + PartialOrd,
    {
        let value = self.next_int::<T>()?;
        if value > max {
            return Err(ArgError::OutOfRange);
        }
        Ok(value)
    }

    /// Pull the next token as an integer if one is present
    ///
    /// Returns `Ok(None)` on an exhausted line, which lets a handler act
    /// as a getter when called without arguments.
    pub fn optional_int<T>(&mut self) -> Result<Option<T>, ArgError>
    where
        T: FromStr<Err = ParseIntError>,
    {
        match self.next_token() {
            None => Ok(None),
            Some(token) => Ok(Some(token.parse::<T>()?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tokens_pulled_in_order() {
        let mut args = Args::new("  7   30 ");
        assert_eq!(args.next_int::<u8>(), Ok(7));
        assert_eq!(args.next_int::<u8>(), Ok(30));
        assert_eq!(args.next_int::<u8>(), Err(ArgError::Missing));
        assert!(args.is_empty());
    }

    #[test]
    fn test_invalid_and_overflow() {
        let mut args = Args::new("abc 300 -1");
        assert_eq!(args.next_int::<u8>(), Err(ArgError::Invalid));
        assert_eq!(args.next_int::<u8>(), Err(ArgError::OutOfRange));
        assert_eq!(args.next_int::<u8>(), Err(ArgError::Invalid));
    }

    #[test]
    fn test_bounded() {
        let mut args = Args::new("180 181");
        assert_eq!(args.next_at_most::<u8>(180), Ok(180));
        assert_eq!(args.next_at_most::<u8>(180), Err(ArgError::OutOfRange));
    }

    #[test]
    fn test_optional() {
        let mut args = Args::new("");
        assert_eq!(args.optional_int::<u16>(), Ok(None));

        let mut args = Args::new("600");
        assert!(!args.is_empty());
        assert_eq!(args.optional_int::<u16>(), Ok(Some(600)));
    }

    #[test]
    fn test_is_empty_does_not_consume() {
        let mut args = Args::new("5");
        assert!(!args.is_empty());
        assert_eq!(args.next_int::<u16>(), Ok(5));
    }

    proptest! {
        #[test]
        fn any_u16_parses_back(value: u16) {
            let mut text = heapless::String::<8>::new();
            core::fmt::Write::write_fmt(&mut text, format_args!("{}", value)).unwrap();
            let mut args = Args::new(text.as_str());
            prop_assert_eq!(args.next_int::<u16>(), Ok(value));
        }
    }
}
