//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod board;
pub mod clock;
pub mod power;
pub mod servo;

pub use board::Board;
pub use clock::WallClock;
pub use power::PowerSupply;
pub use servo::{Servo, Valve};
