//! Parameter storage
//!
//! - [`EepromImage`] - RAM copy of a settings EEPROM, persisted as a whole
//! - [`EepromParameters`] - fixed-offset parameter layout over any EEPROM

mod image;
mod parameters;

pub use image::EepromImage;
pub use parameters::EepromParameters;
