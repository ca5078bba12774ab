//! Supply voltage monitoring
//!
//! Converts raw rail samples to volts.

pub mod voltage;

pub use voltage::{read_supplies, to_volts, Rail, SupplyReading, MAX_SAMPLE};
