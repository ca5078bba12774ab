//! Daily alarm edge detection
//!
//! The wall clock only has minute resolution while the loop polls many
//! times a second, so a plain equality check would fire on every poll
//! inside the matching minute. [`AlarmTrigger`] fires once on entering
//! the minute and re-arms only after the clock has left it.

use crate::time::WallTime;

/// Once-per-minute alarm latch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmTrigger {
    armed: bool,
}

impl Default for AlarmTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl AlarmTrigger {
    /// Create an armed trigger
    pub const fn new() -> Self {
        Self { armed: true }
    }

    /// Poll with the current time of day and the configured alarm
    ///
    /// Returns `true` exactly once per matching minute. A missing clock
    /// reading or alarm never fires and leaves the latch untouched.
    pub fn poll(&mut self, now: Option<WallTime>, alarm: Option<WallTime>) -> bool {
        let (Some(now), Some(alarm)) = (now, alarm) else {
            return false;
        };

        if now.same_minute(&alarm) {
            let fire = self.armed;
            self.armed = false;
            fire
        } else {
            self.armed = true;
            false
        }
    }
}
