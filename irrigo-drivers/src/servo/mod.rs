//! Servo drivers
//!
//! Available drivers:
//! - [`PwmServo`] - hobby servo on a 50 Hz PWM channel

mod pwm;

pub use pwm::{PwmServo, ServoConfig};
