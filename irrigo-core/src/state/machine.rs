//! Cycle phase definition
//!
//! All tap behavior during a cycle is a function of the current phase
//! and an event.

use super::events::Event;

/// Irrigation cycle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CyclePhase {
    /// No cycle running, waiting for the alarm
    #[default]
    Idle,
    /// Tap opened, reservoir filling
    Filling,
    /// Water delivered to the beds
    Watering,
    /// Tap closed, reservoir draining
    Emptying,
}

impl CyclePhase {
    /// Short name for console output
    pub const fn as_str(self) -> &'static str {
        match self {
            CyclePhase::Idle => "idle",
            CyclePhase::Filling => "filling",
            CyclePhase::Watering => "watering",
            CyclePhase::Emptying => "emptying",
        }
    }

    /// Check if a cycle is in progress
    pub fn is_active(&self) -> bool {
        !matches!(self, CyclePhase::Idle)
    }

    /// Check if this phase waits for the tap to settle before leaving
    pub fn waits_for_tap(&self) -> bool {
        matches!(self, CyclePhase::Filling | CyclePhase::Emptying)
    }

    /// Process an event and return the next phase
    ///
    /// This is the core transition logic. Phases only move forward;
    /// aborts drop straight back to idle.
    pub fn transition(self, event: Event) -> Self {
        use CyclePhase::*;
        use Event::*;

        match (self, event) {
            // Idle transitions
            (Idle, AlarmTriggered) => Filling,
            (Idle, StartRequested) => Filling,

            // Forward progress
            (Filling, FillComplete) => Watering,
            (Watering, WaterComplete) => Emptying,
            (Emptying, EmptyComplete) => Idle,

            // Abort from any phase
            (_, Abort) => Idle,
            (_, ParameterRejected(_)) => Idle,

            // Default: stay in current phase
            _ => self,
        }
    }
}
