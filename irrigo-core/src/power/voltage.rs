//! Rail sample to voltage conversion
//!
//! Each rail is sensed through a divider that maps its nominal full scale
//! onto the ADC input range, so conversion is a single multiplication.

use crate::traits::PowerSupply;

/// Largest raw sample value (10-bit)
pub const MAX_SAMPLE: u16 = 1023;

/// Sensed supply rail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rail {
    /// Pump supply, 12 V nominal
    Pump,
    /// Servo supply, 5 V nominal
    Servo,
}

impl Rail {
    /// Voltage that reads as [`MAX_SAMPLE`]
    pub const fn full_scale_volts(self) -> f32 {
        match self {
            Rail::Pump => 12.0,
            Rail::Servo => 5.0,
        }
    }

    /// Short name for console output
    pub const fn as_str(self) -> &'static str {
        match self {
            Rail::Pump => "pump",
            Rail::Servo => "servo",
        }
    }
}

/// Convert a raw sample to volts
pub fn to_volts(rail: Rail, raw: u16) -> f32 {
    raw as f32 * rail.full_scale_volts() / MAX_SAMPLE as f32
}

/// Voltages of both rails; `None` where sampling failed
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SupplyReading {
    pub pump: Option<f32>,
    pub servo: Option<f32>,
}

/// Sample and convert both rails
pub fn read_supplies<P: PowerSupply>(supply: &mut P) -> SupplyReading {
    SupplyReading {
        pump: supply.sample(Rail::Pump).map(|raw| to_volts(Rail::Pump, raw)),
        servo: supply.sample(Rail::Servo).map(|raw| to_volts(Rail::Servo, raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close_to(actual: f32, expected: f32) -> bool {
        let diff = actual - expected;
        diff < 1e-4 && diff > -1e-4
    }

    #[test]
    fn test_full_scale() {
        assert!(close_to(to_volts(Rail::Pump, MAX_SAMPLE), 12.0));
        assert!(close_to(to_volts(Rail::Servo, MAX_SAMPLE), 5.0));
        // Exact at full scale
        assert_eq!(to_volts(Rail::Pump, MAX_SAMPLE), 12.0);
    }

    #[test]
    fn test_zero() {
        assert_eq!(to_volts(Rail::Pump, 0), 0.0);
        assert_eq!(to_volts(Rail::Servo, 0), 0.0);
    }

    #[test]
    fn test_rails_scale_independently() {
        let raw = 512;
        let pump = to_volts(Rail::Pump, raw);
        let servo = to_volts(Rail::Servo, raw);
        assert!(close_to(pump, 512.0 * 12.0 / 1023.0));
        assert!(close_to(servo, 512.0 * 5.0 / 1023.0));
        assert!(close_to(pump / servo, 12.0 / 5.0));
    }

    struct FixedSupply {
        pump: Option<u16>,
        servo: Option<u16>,
    }

    impl PowerSupply for FixedSupply {
        fn set_enabled(&mut self, _on: bool) {}

        fn is_enabled(&self) -> bool {
            true
        }

        fn sample(&mut self, rail: Rail) -> Option<u16> {
            match rail {
                Rail::Pump => self.pump,
                Rail::Servo => self.servo,
            }
        }
    }

    #[test]
    fn test_read_supplies() {
        let mut supply = FixedSupply {
            pump: Some(1023),
            servo: None,
        };
        let reading = read_supplies(&mut supply);
        assert!(close_to(reading.pump.unwrap(), 12.0));
        assert_eq!(reading.servo, None);
    }
}
