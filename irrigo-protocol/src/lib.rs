//! Serial Console Protocol
//!
//! This crate defines the line-based text protocol spoken on the Irrigo
//! debug/configuration UART. The protocol is designed for a human at a
//! terminal as much as for scripts.
//!
//! # Protocol Overview
//!
//! Every request is one line of ASCII text:
//! ```text
//! ┌──────────┬───────┬─────────┬───────┬──────────────┐
//! │ COMMAND  │ SPACE │ ARG     │ SPACE │ ... │ CR/LF  │
//! │ 1-16B    │ ≥1B   │ integer │ ≥1B   │     │ 1-2B   │
//! └──────────┴───────┴─────────┴───────┴──────────────┘
//! ```
//!
//! The first token selects a handler in a [`Router`]. Handlers pull the
//! remaining whitespace-separated tokens on demand through [`Args`], so a
//! command can act as a getter when called bare and as a setter when
//! given arguments. Replies are plain text lines written into a [`Reply`].

#![no_std]
#![deny(unsafe_code)]

pub mod args;
pub mod line;
pub mod router;

pub use args::{ArgError, Args};
pub use line::{LineBuffer, LineError, MAX_LINE_LEN};
pub use router::{Dispatch, Handler, Reply, Router, RouterError, MAX_REPLY_LEN};
