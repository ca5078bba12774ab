//! Tap actuator state machine
//!
//! The servo has no position feedback, so a motion is considered complete
//! once a fixed hold time has passed since it was commanded. After that
//! the servo is detached so it stops drawing holding current and stops
//! jittering against the valve.
//!
//! # Usage
//!
//! ```ignore
//! let mut tap = Tap::new(servo);
//! tap.open(now);
//!
//! // Every loop iteration:
//! tap.tick(now);
//! ```

use crate::time::Instant;
use crate::traits::{Servo, Valve};

/// Time a commanded motion is assumed to take (ms)
pub const HOLD_TIME_MS: u32 = 1000;

/// Largest accepted servo position
pub const MAX_POSITION: u8 = 180;

/// Open position before calibration is loaded
pub const DEFAULT_OPEN_POSITION: u8 = 0;

/// Close position before calibration is loaded
pub const DEFAULT_CLOSE_POSITION: u8 = 180;

/// Tap motion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapState {
    /// Servo detached, tap at rest
    #[default]
    Stationary,
    /// Servo driving toward the open position
    Opening,
    /// Servo driving toward the close position
    Closing,
}

impl TapState {
    /// Short name for console output
    pub const fn as_str(self) -> &'static str {
        match self {
            TapState::Stationary => "stationary",
            TapState::Opening => "opening",
            TapState::Closing => "closing",
        }
    }
}

/// Servo-driven tap
pub struct Tap<S> {
    servo: S,
    state: TapState,
    open_position: u8,
    close_position: u8,
    /// When the current motion is considered complete
    end_time: Instant,
    hold_ms: u32,
}

impl<S: Servo> Tap<S> {
    /// Create a tap with the standard hold time
    pub fn new(servo: S) -> Self {
        Self::with_hold_time(servo, HOLD_TIME_MS)
    }

    /// Create a tap with a custom hold time
    pub fn with_hold_time(servo: S, hold_ms: u32) -> Self {
        Self {
            servo,
            state: TapState::Stationary,
            open_position: DEFAULT_OPEN_POSITION,
            close_position: DEFAULT_CLOSE_POSITION,
            end_time: Instant::default(),
            hold_ms,
        }
    }

    /// Current motion state
    pub fn state(&self) -> TapState {
        self.state
    }

    /// Calibrated open position
    pub fn open_position(&self) -> u8 {
        self.open_position
    }

    /// Calibrated close position
    pub fn close_position(&self) -> u8 {
        self.close_position
    }

    /// Set the open position; takes effect on the next [`Tap::open`]
    pub fn set_open_position(&mut self, position: u8) {
        self.open_position = position;
    }

    /// Set the close position; takes effect on the next [`Tap::close`]
    pub fn set_close_position(&mut self, position: u8) {
        self.close_position = position;
    }

    /// Get the underlying servo
    pub fn servo(&self) -> &S {
        &self.servo
    }

    /// Drive toward the open position
    ///
    /// Restarts the hold timer if a motion is already in progress.
    pub fn open(&mut self, now: Instant) {
        self.start_motion(now, self.open_position, TapState::Opening);
    }

    /// Drive toward the close position
    ///
    /// Restarts the hold timer if a motion is already in progress.
    pub fn close(&mut self, now: Instant) {
        self.start_motion(now, self.close_position, TapState::Closing);
    }

    fn start_motion(&mut self, now: Instant, position: u8, state: TapState) {
        self.end_time = now.add_millis(self.hold_ms);
        self.servo.attach();
        self.servo.write(position);
        self.state = state;
    }

    /// Check if the hold timer has elapsed
    pub fn finished(&self, now: Instant) -> bool {
        self.state == TapState::Stationary || now.has_reached(self.end_time)
    }

    /// Milliseconds left on the hold timer
    pub fn remaining_ms(&self, now: Instant) -> u32 {
        if self.state == TapState::Stationary {
            0
        } else {
            now.millis_until(self.end_time)
        }
    }

    /// Advance the motion state
    ///
    /// Call every loop iteration. Returns `true` on the tick a motion
    /// completes and the servo is released.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.state {
            TapState::Stationary => false,
            TapState::Opening | TapState::Closing => {
                if now.has_reached(self.end_time) {
                    self.servo.detach();
                    self.state = TapState::Stationary;
                    true
                } else {
                    false
                }
            }
        }
    }
}

impl<S: Servo> Valve for Tap<S> {
    fn open(&mut self, now: Instant) {
        Tap::open(self, now);
    }

    fn close(&mut self, now: Instant) {
        Tap::close(self, now);
    }

    fn finished(&self, now: Instant) -> bool {
        Tap::finished(self, now)
    }
}
