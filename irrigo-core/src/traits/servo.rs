//! Servo and valve traits
//!
//! A [`Servo`] is the raw output: it can be attached (driven), told to
//! hold an angle, and detached (released). A [`Valve`] is the timed
//! open/close contract the irrigation scheduler drives; the tap actuator
//! implements it on top of a servo.

use crate::time::Instant;

/// Hobby servo output without position feedback
///
/// Implementations drive the PWM pin. Nothing is ever read back from
/// the servo, so none of these operations can fail.
pub trait Servo {
    /// Start driving the control signal
    fn attach(&mut self);

    /// Command an angular position (0-180, device-specific units)
    fn write(&mut self, angle: u8);

    /// Stop driving the control signal, releasing holding torque
    fn detach(&mut self);

    /// Check if the control signal is currently driven
    fn is_attached(&self) -> bool;
}

/// Timed valve the cycle scheduler can command
pub trait Valve {
    /// Start opening the valve at `now`
    fn open(&mut self, now: Instant);

    /// Start closing the valve at `now`
    fn close(&mut self, now: Instant);

    /// Check if the last commanded motion has had time to complete
    fn finished(&self, now: Instant) -> bool;
}
