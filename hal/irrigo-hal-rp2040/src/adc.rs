//! ADC supply sensing
//!
//! RP2040 has a single 12-bit ADC; each rail's divider tap goes to one
//! of its GPIO26..=GPIO29 inputs.

use embassy_rp::adc::{Adc, Blocking, Channel};
use irrigo_core::power::Rail;
use irrigo_drivers::power::RailAdc;

/// Supply rail sense inputs
pub struct RailSensor<'d> {
    adc: Adc<'d, Blocking>,
    pump: Channel<'d>,
    servo: Channel<'d>,
}

impl<'d> RailSensor<'d> {
    /// Create a sensor from the ADC and the two sense channels
    pub fn new(adc: Adc<'d, Blocking>, pump: Channel<'d>, servo: Channel<'d>) -> Self {
        Self { adc, pump, servo }
    }
}

impl<'d> RailAdc for RailSensor<'d> {
    const RESOLUTION_BITS: u32 = 12;

    fn read(&mut self, rail: Rail) -> Option<u16> {
        let channel = match rail {
            Rail::Pump => &mut self.pump,
            Rail::Servo => &mut self.servo,
        };
        self.adc.blocking_read(channel).ok()
    }
}
