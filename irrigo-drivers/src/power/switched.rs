//! Switched supply rails
//!
//! One digital output enables the pump and servo supplies together; each
//! rail is sensed on its own ADC channel through a divider.

use embedded_hal::digital::OutputPin;
use irrigo_core::power::Rail;
use irrigo_core::traits::PowerSupply;

/// Resolution of the samples handed to the core
const SAMPLE_BITS: u32 = 10;

/// ADC reading trait for platform abstraction
pub trait RailAdc {
    /// Native resolution of [`RailAdc::read`] in bits
    const RESOLUTION_BITS: u32;

    /// Read the sense channel of a rail
    fn read(&mut self, rail: Rail) -> Option<u16>;
}

/// Rescale a native sample to 10 bits
pub(crate) fn to_sample_bits(raw: u16, native_bits: u32) -> u16 {
    if native_bits >= SAMPLE_BITS {
        raw >> (native_bits - SAMPLE_BITS)
    } else {
        raw << (SAMPLE_BITS - native_bits)
    }
}

/// Supply rails behind an enable pin
///
/// The enable pin is driven low on construction, so the rails start off.
pub struct SwitchedSupply<EN, A> {
    enable: EN,
    adc: A,
    enabled: bool,
}

impl<EN: OutputPin, A: RailAdc> SwitchedSupply<EN, A> {
    /// Create a supply with the rails switched off
    pub fn new(enable: EN, adc: A) -> Self {
        let mut supply = Self {
            enable,
            adc,
            enabled: false,
        };
        supply.set_enabled(false);
        supply
    }
}

impl<EN: OutputPin, A: RailAdc> PowerSupply for SwitchedSupply<EN, A> {
    fn set_enabled(&mut self, on: bool) {
        self.enabled = on;
        // Pin errors are not recoverable here; state tracks the request
        let _ = if on {
            self.enable.set_high()
        } else {
            self.enable.set_low()
        };
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn sample(&mut self, rail: Rail) -> Option<u16> {
        self.adc
            .read(rail)
            .map(|raw| to_sample_bits(raw, A::RESOLUTION_BITS))
    }
}
