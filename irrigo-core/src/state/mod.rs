//! Irrigation cycle state machine
//!
//! Defines the phases a watering cycle moves through and the events
//! that move it. The machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::CyclePhase;
