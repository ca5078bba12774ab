//! Parameter image layout
//!
//! | Offset | Width | Field |
//! |---|---|---|
//! | 0 | 1 | tap open position |
//! | 1 | 1 | tap close position |
//! | 2 | 1 | alarm hours |
//! | 3 | 1 | alarm minutes |
//! | 4 | 2 | filling time (s, LE) |
//! | 6 | 2 | emptying time (s, LE) |
//! | 8 | 2 | watering time (s, LE) |

use crate::tap::MAX_POSITION;

/// Size of the parameter image in bytes
pub const PARAMS_SIZE: usize = 10;

/// Value a never-written 16-bit field reads back as
pub const ERASED_WORD: u16 = 0xFFFF;

/// Persisted parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Param {
    TapOpenPosition,
    TapClosePosition,
    AlarmHours,
    AlarmMinutes,
    FillingTime,
    EmptyingTime,
    WateringTime,
}

impl Param {
    /// Every parameter, in image order
    pub const ALL: [Param; 7] = [
        Param::TapOpenPosition,
        Param::TapClosePosition,
        Param::AlarmHours,
        Param::AlarmMinutes,
        Param::FillingTime,
        Param::EmptyingTime,
        Param::WateringTime,
    ];

    /// Byte offset in the image
    pub const fn offset(self) -> usize {
        match self {
            Param::TapOpenPosition => 0,
            Param::TapClosePosition => 1,
            Param::AlarmHours => 2,
            Param::AlarmMinutes => 3,
            Param::FillingTime => 4,
            Param::EmptyingTime => 6,
            Param::WateringTime => 8,
        }
    }

    /// Field width in bytes (1 or 2)
    pub const fn width(self) -> usize {
        if self.is_duration() {
            2
        } else {
            1
        }
    }

    /// True for the 16-bit phase durations
    pub const fn is_duration(self) -> bool {
        matches!(
            self,
            Param::FillingTime | Param::EmptyingTime | Param::WateringTime
        )
    }

    /// Short name for console output
    pub const fn name(self) -> &'static str {
        match self {
            Param::TapOpenPosition => "open_pos",
            Param::TapClosePosition => "close_pos",
            Param::AlarmHours => "alarm_hours",
            Param::AlarmMinutes => "alarm_minutes",
            Param::FillingTime => "fill_time",
            Param::EmptyingTime => "empty_time",
            Param::WateringTime => "water_time",
        }
    }

    /// Largest value the field can hold
    pub const fn max_value(self) -> u16 {
        match self {
            Param::TapOpenPosition | Param::TapClosePosition => MAX_POSITION as u16,
            Param::AlarmHours => 23,
            Param::AlarmMinutes => 59,
            // All-ones is reserved for erased storage
            Param::FillingTime | Param::EmptyingTime | Param::WateringTime => ERASED_WORD - 1,
        }
    }

    /// Check a raw value against the field's plausible range
    pub const fn is_plausible(self, value: u16) -> bool {
        value <= self.max_value()
    }
}
