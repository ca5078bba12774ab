//! Line assembly for the serial console.
//!
//! Bytes arrive one at a time from the UART. The [`LineBuffer`] collects
//! them until a line terminator (CR or LF) and hands back the complete
//! line. CRLF pairs and blank lines are swallowed silently.

use heapless::String;

/// Maximum accepted line length in bytes (terminator excluded)
pub const MAX_LINE_LEN: usize = 64;

/// Errors that can occur while assembling a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line exceeded [`MAX_LINE_LEN`]; the rest of it was discarded
    Overflow,
    /// Line contained bytes that are not valid UTF-8
    InvalidUtf8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssemblyState {
    /// Appending bytes to the current line
    Collecting,
    /// Line overflowed, dropping bytes until the next terminator
    Discarding,
}

/// State machine for assembling incoming lines
#[derive(Debug, Clone)]
pub struct LineBuffer {
    state: AssemblyState,
    buffer: heapless::Vec<u8, MAX_LINE_LEN>,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// Create an empty line buffer
    pub fn new() -> Self {
        Self {
            state: AssemblyState::Collecting,
            buffer: heapless::Vec::new(),
        }
    }

    /// Drop any partially received line
    pub fn reset(&mut self) {
        self.state = AssemblyState::Collecting;
        self.buffer.clear();
    }

    /// Number of bytes buffered for the line in progress
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Feed a single byte
    ///
    /// Returns `Ok(Some(line))` when a terminator completes a non-empty
    /// line, `Ok(None)` when more bytes are needed, or `Err` when the
    /// finished line had to be rejected.
    pub fn feed(&mut self, byte: u8) -> Result<Option<String<MAX_LINE_LEN>>, LineError> {
        let terminator = byte == b'\r' || byte == b'\n';

        match self.state {
            AssemblyState::Discarding => {
                if terminator {
                    self.reset();
                    return Err(LineError::Overflow);
                }
                Ok(None)
            }
            AssemblyState::Collecting if terminator => {
                if self.buffer.is_empty() {
                    // Second half of CRLF, or a blank line
                    return Ok(None);
                }
                let bytes = core::mem::take(&mut self.buffer);
                let line = String::from_utf8(bytes).map_err(|_| LineError::InvalidUtf8)?;
                Ok(Some(line))
            }
            AssemblyState::Collecting => {
                if self.buffer.push(byte).is_err() {
                    self.buffer.clear();
                    self.state = AssemblyState::Discarding;
                }
                Ok(None)
            }
        }
    }

    /// Feed multiple bytes
    ///
    /// Returns the first complete line found, if any.
    /// Remaining bytes after a complete line are not consumed.
    pub fn feed_bytes(
        &mut self,
        bytes: &[u8],
    ) -> Result<Option<String<MAX_LINE_LEN>>, LineError> {
        for &byte in bytes {
            if let Some(line) = self.feed(byte)? {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }
}
