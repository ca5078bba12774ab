//! Time values
//!
//! [`Instant`] is a millisecond reading of a free-running 32-bit counter
//! that wraps roughly every 49.7 days. It deliberately has no ordering:
//! two readings can only be compared with [`Instant::has_reached`], which
//! stays correct across the rollover as long as the two readings are less
//! than half the counter range (~24.8 days) apart.
//!
//! [`WallTime`] is the hour/minute of day used for the daily alarm.

use core::fmt;

/// Monotonic millisecond timestamp (wrapping)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant(u32);

impl Instant {
    /// Create from a raw millisecond counter value
    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    /// Raw millisecond counter value
    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Instant `ms` milliseconds later, wrapping at `u32::MAX`
    pub const fn add_millis(self, ms: u32) -> Self {
        Self(self.0.wrapping_add(ms))
    }

    /// Instant `secs` seconds later, wrapping at `u32::MAX`
    pub const fn add_secs(self, secs: u16) -> Self {
        // 65_535 s * 1000 fits comfortably in u32
        self.add_millis(secs as u32 * 1000)
    }

    /// True once `self` is at or past `deadline`
    ///
    /// Computed as the signed difference `self - deadline >= 0`.
    pub const fn has_reached(self, deadline: Instant) -> bool {
        (self.0.wrapping_sub(deadline.0) as i32) >= 0
    }

    /// Milliseconds left until `deadline`, or 0 if already reached
    pub const fn millis_until(self, deadline: Instant) -> u32 {
        if self.has_reached(deadline) {
            0
        } else {
            deadline.0.wrapping_sub(self.0)
        }
    }
}

/// Hours and minutes since midnight
///
/// Displays as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallTime {
    /// Hour of day (0-23)
    pub hours: u8,
    /// Minute of hour (0-59)
    pub minutes: u8,
}

impl WallTime {
    /// Create a wall time, rejecting out-of-range values
    pub const fn new(hours: u8, minutes: u8) -> Option<Self> {
        let time = Self { hours, minutes };
        if time.is_valid() {
            Some(time)
        } else {
            None
        }
    }

    /// Check the hour and minute are in range
    pub const fn is_valid(&self) -> bool {
        self.hours <= 23 && self.minutes <= 59
    }

    /// True if both times fall in the same minute of the day
    pub fn same_minute(&self, other: &WallTime) -> bool {
        self.hours == other.hours && self.minutes == other.minutes
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}
