//! Command routing
//!
//! A [`Router`] maps command names to handler functions. It is built
//! explicitly at startup and passed to whoever reads the console, so
//! several independent routers can coexist (e.g. in tests).

use core::fmt;

use heapless::{String, Vec};

use crate::args::Args;

/// Maximum reply size in bytes
pub const MAX_REPLY_LEN: usize = 96;

/// Text reply produced by a handler
///
/// Writes past [`MAX_REPLY_LEN`] are truncated rather than failing, so
/// handlers can `write!` without checking every result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    text: String<MAX_REPLY_LEN>,
    truncated: bool,
}

impl Reply {
    /// Create an empty reply
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply text so far
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// True if nothing was written
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True if some output was dropped for lack of space
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Discard the reply contents
    pub fn clear(&mut self) {
        self.text.clear();
        self.truncated = false;
    }

    /// Append a line, separating it from earlier output with `\n`
    pub fn line(&mut self, text: &str) {
        if !self.text.is_empty() {
            self.push('\n');
        }
        self.push_str_lossy(text);
    }

    /// Append a formatted line, separating it from earlier output with `\n`
    pub fn line_fmt(&mut self, args: fmt::Arguments<'_>) {
        if !self.text.is_empty() {
            self.push('\n');
        }
        let _ = fmt::Write::write_fmt(self, args);
    }

    fn push(&mut self, c: char) {
        if self.text.push(c).is_err() {
            self.truncated = true;
        }
    }

    fn push_str_lossy(&mut self, s: &str) {
        for c in s.chars() {
            if self.text.push(c).is_err() {
                self.truncated = true;
                return;
            }
        }
    }
}

impl fmt::Write for Reply {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str_lossy(s);
        Ok(())
    }
}

/// Handler entry point
///
/// Receives the routing context, the remaining argument tokens, and the
/// reply to write into.
pub type Handler<Ctx> = fn(&mut Ctx, &mut Args<'_>, &mut Reply);

/// Errors while building a router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RouterError {
    /// Route table is full
    Full,
    /// A route with the same name already exists
    Duplicate,
}

/// Outcome of dispatching one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    /// A handler ran
    Handled,
    /// No route matched; the reply holds the rejection message
    Unrecognized,
    /// Line held no command
    Empty,
}

struct Route<Ctx> {
    name: &'static str,
    handler: Handler<Ctx>,
}

/// Command name → handler table
pub struct Router<Ctx, const N: usize> {
    routes: Vec<Route<Ctx>, N>,
}

impl<Ctx, const N: usize> Default for Router<Ctx, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ctx, const N: usize> Router<Ctx, N> {
    /// Create an empty router
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Register a handler for `name`
    pub fn add(&mut self, name: &'static str, handler: Handler<Ctx>) -> Result<(), RouterError> {
        if self.routes.iter().any(|r| r.name == name) {
            return Err(RouterError::Duplicate);
        }
        self.routes
            .push(Route { name, handler })
            .map_err(|_| RouterError::Full)
    }

    /// Number of registered routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True if no routes are registered
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Route one line to its handler
    ///
    /// The first whitespace-separated token selects the handler; the
    /// rest of the line is handed over as [`Args`].
    pub fn dispatch(&self, ctx: &mut Ctx, line: &str, reply: &mut Reply) -> Dispatch {
        let line = line.trim_start();
        let (name, rest) = match line.split_once(|c: char| c.is_ascii_whitespace()) {
            Some((name, rest)) => (name, rest),
            None => (line.trim_end(), ""),
        };

        if name.is_empty() {
            return Dispatch::Empty;
        }

        match self.routes.iter().find(|r| r.name == name) {
            Some(route) => {
                let mut args = Args::new(rest);
                (route.handler)(ctx, &mut args, reply);
                Dispatch::Handled
            }
            None => {
                unrecognized(name, reply);
                Dispatch::Unrecognized
            }
        }
    }
}

/// Default reply for unknown commands
fn unrecognized(name: &str, reply: &mut Reply) {
    reply.line("I didn't understand");
    reply.line(name);
}
