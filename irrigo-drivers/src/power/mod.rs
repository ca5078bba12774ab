//! Power supply drivers
//!
//! Available drivers:
//! - [`SwitchedSupply`] - enable pin plus ADC-sensed rails

mod switched;

pub use switched::{RailAdc, SwitchedSupply};
