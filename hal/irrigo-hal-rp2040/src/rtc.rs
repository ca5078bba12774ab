//! RTC-backed time of day
//!
//! The RP2040 RTC loses its time on reset, so the clock reads as unset
//! until the time is set over the console.

use embassy_rp::rtc::{DateTime, DayOfWeek, Rtc};
use irrigo_core::time::WallTime;
use irrigo_core::traits::WallClock;

/// Wall clock on the on-chip RTC
pub struct RtcClock<'d> {
    rtc: Rtc<'d, embassy_rp::peripherals::RTC>,
}

impl<'d> RtcClock<'d> {
    /// Wrap an RTC driver
    pub fn new(rtc: Rtc<'d, embassy_rp::peripherals::RTC>) -> Self {
        Self { rtc }
    }
}

/// Date stamped on the RTC when only the time of day is known
fn epoch(time: WallTime) -> DateTime {
    DateTime {
        year: 2000,
        month: 1,
        day: 1,
        day_of_week: DayOfWeek::Saturday,
        hour: time.hours,
        minute: time.minutes,
        second: 0,
    }
}

impl<'d> WallClock for RtcClock<'d> {
    fn now(&mut self) -> Option<WallTime> {
        if !self.rtc.is_running() {
            return None;
        }
        let now = self.rtc.now().ok()?;
        WallTime::new(now.hour, now.minute)
    }

    fn set(&mut self, time: WallTime) -> bool {
        if !time.is_valid() {
            return false;
        }
        let date = match self.rtc.now() {
            Ok(now) if self.rtc.is_running() => DateTime {
                hour: time.hours,
                minute: time.minutes,
                second: 0,
                ..now
            },
            _ => epoch(time),
        };
        self.rtc.set_datetime(date).is_ok()
    }
}
