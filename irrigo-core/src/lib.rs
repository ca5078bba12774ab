//! Board-agnostic core logic for the irrigation controller firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (servo, valve, power supply, wall clock)
//! - Wraparound-safe monotonic time math
//! - Tap actuator with open-loop hold timing
//! - Cycle phase machine and the daily irrigation scheduler
//! - Persistent parameter layout and plausibility rules
//! - Supply voltage conversion
//! - Controller and console command table

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod power;
pub mod scheduler;
pub mod state;
pub mod tap;
pub mod time;
pub mod traits;
