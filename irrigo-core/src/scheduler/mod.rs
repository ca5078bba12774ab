//! Irrigation cycle scheduler
//!
//! Watches the wall clock for the daily alarm and walks the cycle
//! through its timed phases, opening and closing the tap at phase
//! entries.

pub mod alarm;
pub mod cycle;

pub use alarm::AlarmTrigger;
pub use cycle::CycleScheduler;
