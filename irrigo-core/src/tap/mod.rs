//! Tap actuator
//!
//! Servo-driven water tap with open-loop motion timing.

pub mod actuator;

pub use actuator::{
    Tap, TapState, DEFAULT_CLOSE_POSITION, DEFAULT_OPEN_POSITION, HOLD_TIME_MS, MAX_POSITION,
};
