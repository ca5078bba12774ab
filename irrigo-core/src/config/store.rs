//! Parameter store trait

use super::layout::Param;
use super::params::Parameters;
use crate::time::WallTime;

/// Parameter errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParamError {
    /// Stored or requested value is outside the field's range
    Implausible(Param),
}

/// Typed access to the persisted parameters
///
/// Implementors provide raw field access; the provided methods add the
/// plausibility checks. Byte fields carry their value in the low byte.
pub trait ParameterStore {
    /// Read a raw field value
    fn get(&self, param: Param) -> u16;

    /// Write a raw field value
    ///
    /// Implementations should skip the write when the stored value
    /// already matches.
    fn set(&mut self, param: Param, value: u16);

    /// Read a field, rejecting implausible contents
    fn checked(&self, param: Param) -> Result<u16, ParamError> {
        let value = self.get(param);
        if param.is_plausible(value) {
            Ok(value)
        } else {
            Err(ParamError::Implausible(param))
        }
    }

    /// Write a field after checking it is plausible
    fn set_checked(&mut self, param: Param, value: u16) -> Result<(), ParamError> {
        if !param.is_plausible(value) {
            return Err(ParamError::Implausible(param));
        }
        self.set(param, value);
        Ok(())
    }

    /// Tap open position
    fn tap_open_position(&self) -> Result<u8, ParamError> {
        Ok(self.checked(Param::TapOpenPosition)? as u8)
    }

    /// Tap close position
    fn tap_close_position(&self) -> Result<u8, ParamError> {
        Ok(self.checked(Param::TapClosePosition)? as u8)
    }

    /// Daily alarm time
    fn alarm_time(&self) -> Result<WallTime, ParamError> {
        let hours = self.checked(Param::AlarmHours)? as u8;
        let minutes = self.checked(Param::AlarmMinutes)? as u8;
        Ok(WallTime { hours, minutes })
    }

    /// Set hours and minutes of the daily alarm together
    fn set_alarm_time(&mut self, time: WallTime) -> Result<(), ParamError> {
        if !Param::AlarmHours.is_plausible(time.hours as u16) {
            return Err(ParamError::Implausible(Param::AlarmHours));
        }
        if !Param::AlarmMinutes.is_plausible(time.minutes as u16) {
            return Err(ParamError::Implausible(Param::AlarmMinutes));
        }
        self.set(Param::AlarmHours, time.hours as u16);
        self.set(Param::AlarmMinutes, time.minutes as u16);
        Ok(())
    }

    /// Load every field into a snapshot
    fn load(&self) -> Result<Parameters, ParamError> {
        Ok(Parameters {
            tap_open_position: self.tap_open_position()?,
            tap_close_position: self.tap_close_position()?,
            alarm: self.alarm_time()?,
            filling_time: self.checked(Param::FillingTime)?,
            emptying_time: self.checked(Param::EmptyingTime)?,
            watering_time: self.checked(Param::WateringTime)?,
        })
    }

    /// Write every field from a snapshot
    ///
    /// Nothing is written unless the whole snapshot is plausible.
    fn store(&mut self, params: &Parameters) -> Result<(), ParamError> {
        params.validate()?;
        for param in Param::ALL {
            self.set(param, params.get(param));
        }
        Ok(())
    }

    /// Replace each implausible field with its value from `defaults`
    ///
    /// Plausible fields are left alone, except that the alarm hours and
    /// minutes are restored as a pair. Returns the number of fields
    /// rewritten.
    fn restore_implausible(&mut self, defaults: &Parameters) -> usize {
        let alarm_bad = self.alarm_time().is_err();
        let mut restored = 0;
        for param in Param::ALL {
            let alarm_field = matches!(param, Param::AlarmHours | Param::AlarmMinutes);
            if self.checked(param).is_err() || (alarm_field && alarm_bad) {
                self.set(param, defaults.get(param));
                restored += 1;
            }
        }
        restored
    }
}
