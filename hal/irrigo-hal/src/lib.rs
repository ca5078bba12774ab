//! Irrigo Hardware Abstraction Layer
//!
//! This crate defines the storage and serial traits the drivers and the
//! firmware are written against, so chip-specific HALs only have to
//! supply the low-level operations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (irrigo-firmware)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  irrigo-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ irrigo-hal-   │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`eeprom::Eeprom`] - Byte-addressed settings memory
//! - [`uart::UartTx`], [`uart::UartRx`] - Serial console
//! - [`flash::FlashStorage`] - Persistent key-value records

#![no_std]
#![deny(unsafe_code)]

pub mod eeprom;
pub mod flash;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use eeprom::Eeprom;
pub use flash::{FlashError, FlashStorage, StorageKey};
pub use uart::{UartRx, UartTx};
