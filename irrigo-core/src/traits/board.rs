//! Board bundle
//!
//! Groups the concrete peripheral types a board provides so the
//! controller and its command table take a single type parameter.

use super::{PowerSupply, Servo, WallClock};
use crate::config::ParameterStore;

/// Set of peripheral types making up one controller board
pub trait Board {
    /// Tap servo output
    type Servo: Servo;
    /// Persistent parameter storage
    type Store: ParameterStore;
    /// Switched, sensed supply rails
    type Power: PowerSupply;
    /// Time-of-day source for the alarm
    type Clock: WallClock;
}
