//! Parameter snapshot

use super::layout::Param;
use super::store::{ParamError, ParameterStore};
use crate::tap::{DEFAULT_CLOSE_POSITION, DEFAULT_OPEN_POSITION};
use crate::time::WallTime;

/// Complete set of persisted parameters
///
/// Also serves as an in-memory [`ParameterStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Parameters {
    /// Servo position that opens the tap (0-180)
    pub tap_open_position: u8,
    /// Servo position that closes the tap (0-180)
    pub tap_close_position: u8,
    /// Daily cycle start
    pub alarm: WallTime,
    /// Filling phase duration (s)
    pub filling_time: u16,
    /// Emptying phase duration (s)
    pub emptying_time: u16,
    /// Watering phase duration (s)
    pub watering_time: u16,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            tap_open_position: DEFAULT_OPEN_POSITION,
            tap_close_position: DEFAULT_CLOSE_POSITION,
            alarm: WallTime {
                hours: 7,
                minutes: 0,
            },
            filling_time: 60,
            emptying_time: 60,
            watering_time: 600,
        }
    }
}

impl Parameters {
    /// Check every field is plausible
    pub fn validate(&self) -> Result<(), ParamError> {
        for param in Param::ALL {
            if !param.is_plausible(ParameterStore::get(self, param)) {
                return Err(ParamError::Implausible(param));
            }
        }
        Ok(())
    }
}

impl ParameterStore for Parameters {
    fn get(&self, param: Param) -> u16 {
        match param {
            Param::TapOpenPosition => self.tap_open_position as u16,
            Param::TapClosePosition => self.tap_close_position as u16,
            Param::AlarmHours => self.alarm.hours as u16,
            Param::AlarmMinutes => self.alarm.minutes as u16,
            Param::FillingTime => self.filling_time,
            Param::EmptyingTime => self.emptying_time,
            Param::WateringTime => self.watering_time,
        }
    }

    fn set(&mut self, param: Param, value: u16) {
        let byte = value as u8;
        match param {
            Param::TapOpenPosition => self.tap_open_position = byte,
            Param::TapClosePosition => self.tap_close_position = byte,
            Param::AlarmHours => self.alarm.hours = byte,
            Param::AlarmMinutes => self.alarm.minutes = byte,
            Param::FillingTime => self.filling_time = value,
            Param::EmptyingTime => self.emptying_time = value,
            Param::WateringTime => self.watering_time = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_plausible() {
        let params = Parameters::default();
        assert_eq!(params.validate(), Ok(()));
        assert_eq!(params.tap_open_position, 0);
        assert_eq!(params.tap_close_position, 180);
        assert_eq!(params.alarm_time(), Ok(WallTime { hours: 7, minutes: 0 }));
    }

    #[test]
    fn test_load_round_trips_defaults() {
        let params = Parameters::default();
        assert_eq!(params.load(), Ok(params));
    }

    #[test]
    fn test_validate_reports_first_bad_field() {
        let params = Parameters {
            tap_close_position: 200,
            watering_time: 0xFFFF,
            ..Parameters::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParamError::Implausible(Param::TapClosePosition))
        );
    }

    #[test]
    fn test_checked_getters() {
        let mut params = Parameters::default();
        params.alarm.minutes = 0xFF;
        assert_eq!(
            params.alarm_time(),
            Err(ParamError::Implausible(Param::AlarmMinutes))
        );

        params.filling_time = 0xFFFF;
        assert_eq!(
            params.checked(Param::FillingTime),
            Err(ParamError::Implausible(Param::FillingTime))
        );
        assert_eq!(params.checked(Param::WateringTime), Ok(600));
    }

    #[test]
    fn test_set_checked_rejects_without_writing() {
        let mut params = Parameters::default();
        assert_eq!(
            params.set_checked(Param::TapOpenPosition, 181),
            Err(ParamError::Implausible(Param::TapOpenPosition))
        );
        assert_eq!(params.tap_open_position, 0);

        params.set_checked(Param::TapOpenPosition, 45).unwrap();
        assert_eq!(params.tap_open_position(), Ok(45));
    }

    #[test]
    fn test_set_alarm_time_is_all_or_nothing() {
        let mut params = Parameters::default();
        let bad = WallTime { hours: 6, minutes: 75 };
        assert!(params.set_alarm_time(bad).is_err());
        assert_eq!(params.alarm, WallTime { hours: 7, minutes: 0 });

        params.set_alarm_time(WallTime { hours: 21, minutes: 30 }).unwrap();
        assert_eq!(params.get(Param::AlarmHours), 21);
        assert_eq!(params.get(Param::AlarmMinutes), 30);
    }

    #[test]
    fn test_store_copies_snapshot() {
        let source = Parameters {
            tap_open_position: 12,
            filling_time: 5,
            ..Parameters::default()
        };
        let mut target = Parameters::default();
        target.store(&source).unwrap();
        assert_eq!(target, source);

        let bad = Parameters {
            emptying_time: 0xFFFF,
            ..source
        };
        assert!(target.store(&bad).is_err());
        assert_eq!(target, source);
    }

    #[test]
    fn test_restore_keeps_plausible_fields() {
        let mut params = Parameters {
            tap_open_position: 25,
            tap_close_position: 160,
            watering_time: 0xFFFF,
            ..Parameters::default()
        };
        assert_eq!(params.restore_implausible(&Parameters::default()), 1);
        assert_eq!(params.tap_open_position, 25);
        assert_eq!(params.tap_close_position, 160);
        assert_eq!(params.watering_time, 600);
        assert_eq!(params.validate(), Ok(()));

        // Nothing left to restore
        assert_eq!(params.restore_implausible(&Parameters::default()), 0);
    }

    #[test]
    fn test_restore_alarm_as_pair() {
        let mut params = Parameters {
            alarm: WallTime { hours: 5, minutes: 0xFF },
            ..Parameters::default()
        };
        assert_eq!(params.restore_implausible(&Parameters::default()), 2);
        assert_eq!(params.alarm, WallTime { hours: 7, minutes: 0 });
    }
}
