//! Fixed-offset parameter store
//!
//! Byte fields live at their offset; 16-bit fields are little-endian.
//! See [`irrigo_core::config::layout`] for the offsets.

use irrigo_core::config::{Param, ParameterStore};
use irrigo_hal::Eeprom;

/// [`ParameterStore`] over a byte-addressed EEPROM
pub struct EepromParameters<E> {
    eeprom: E,
}

impl<E: Eeprom> EepromParameters<E> {
    /// Wrap an EEPROM
    pub fn new(eeprom: E) -> Self {
        Self { eeprom }
    }

    /// Get the underlying EEPROM
    pub fn eeprom(&self) -> &E {
        &self.eeprom
    }

    /// Get the underlying EEPROM mutably
    pub fn eeprom_mut(&mut self) -> &mut E {
        &mut self.eeprom
    }
}

impl<E: Eeprom> ParameterStore for EepromParameters<E> {
    fn get(&self, param: Param) -> u16 {
        if param.width() == 2 {
            self.eeprom.read_u16(param.offset())
        } else {
            self.eeprom.read(param.offset()) as u16
        }
    }

    fn set(&mut self, param: Param, value: u16) {
        if param.width() == 2 {
            self.eeprom.update_u16(param.offset(), value);
        } else {
            self.eeprom.update(param.offset(), value as u8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::EepromImage;
    use irrigo_core::config::{ParamError, Parameters, PARAMS_SIZE};
    use irrigo_core::time::WallTime;
    use proptest::prelude::*;

    type Image = EepromImage<PARAMS_SIZE>;

    #[test]
    fn test_erased_image_is_implausible() {
        let store = EepromParameters::new(Image::erased());
        assert_eq!(
            store.load(),
            Err(ParamError::Implausible(Param::TapOpenPosition))
        );
        assert_eq!(store.get(Param::WateringTime), 0xFFFF);
    }

    #[test]
    fn test_byte_layout() {
        let mut store = EepromParameters::new(Image::erased());
        let params = Parameters {
            tap_open_position: 5,
            tap_close_position: 175,
            alarm: WallTime { hours: 6, minutes: 15 },
            filling_time: 0x0102,
            emptying_time: 30,
            watering_time: 1200,
        };
        store.store(&params).unwrap();

        assert_eq!(
            store.eeprom().as_bytes(),
            &[5, 175, 6, 15, 0x02, 0x01, 30, 0, 0xB0, 0x04]
        );
        assert_eq!(store.load(), Ok(params));
    }

    #[test]
    fn test_unchanged_set_stays_clean() {
        let mut store = EepromParameters::new(Image::erased());
        store.store(&Parameters::default()).unwrap();
        store.eeprom_mut().mark_clean();

        store.set(Param::FillingTime, 60);
        store.store(&Parameters::default()).unwrap();
        assert!(!store.eeprom().is_dirty());

        store.set(Param::FillingTime, 61);
        assert!(store.eeprom().is_dirty());
    }

    #[test]
    fn test_load_existing_image() {
        let bytes = [0, 180, 7, 0, 60, 0, 60, 0, 0x58, 0x02];
        let store = EepromParameters::new(Image::from_bytes(bytes));
        assert_eq!(store.load(), Ok(Parameters::default()));
    }

    #[test]
    fn test_short_record_keeps_calibration() {
        // Record holding only positions and alarm; durations read erased
        let image = Image::load(&[20, 150, 6, 30]);
        let mut store = EepromParameters::new(image);
        assert_eq!(
            store.load(),
            Err(ParamError::Implausible(Param::FillingTime))
        );

        assert_eq!(store.restore_implausible(&Parameters::default()), 3);
        let params = store.load().unwrap();
        assert_eq!(params.tap_open_position, 20);
        assert_eq!(params.tap_close_position, 150);
        assert_eq!(params.alarm, WallTime { hours: 6, minutes: 30 });
        assert_eq!(params.filling_time, 60);
        assert_eq!(params.watering_time, 600);
        assert!(store.eeprom().is_dirty());
    }

    proptest! {
        #[test]
        fn durations_survive_storage(fill in 0u16..0xFFFF, water in 0u16..0xFFFF) {
            let mut store = EepromParameters::new(Image::erased());
            store.set_checked(Param::FillingTime, fill).unwrap();
            store.set_checked(Param::WateringTime, water).unwrap();
            prop_assert_eq!(store.checked(Param::FillingTime), Ok(fill));
            prop_assert_eq!(store.checked(Param::WateringTime), Ok(water));
            // Neighbouring field untouched
            prop_assert_eq!(store.get(Param::EmptyingTime), 0xFFFF);
        }
    }
}
