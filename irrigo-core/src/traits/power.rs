//! Power supply trait

use crate::power::Rail;

/// Switched supply for the pump and servo rails, with voltage sensing
pub trait PowerSupply {
    /// Switch the supply rails on or off
    fn set_enabled(&mut self, on: bool);

    /// Check if the supply rails are switched on
    fn is_enabled(&self) -> bool;

    /// Take one raw sample of a rail's sense input
    ///
    /// Samples are scaled to 10 bits (0-1023) regardless of the ADC's
    /// native resolution. Returns `None` if the conversion failed.
    fn sample(&mut self, rail: Rail) -> Option<u16>;
}
