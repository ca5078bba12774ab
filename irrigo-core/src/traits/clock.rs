//! Wall clock trait

use crate::time::WallTime;

/// Real-time clock providing the time of day
pub trait WallClock {
    /// Current time of day, or `None` if the clock has not been set
    fn now(&mut self) -> Option<WallTime>;

    /// Set the time of day
    ///
    /// Returns `false` if the clock rejected the new time.
    fn set(&mut self, time: WallTime) -> bool;
}
