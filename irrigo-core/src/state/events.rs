//! Events that trigger phase transitions

use crate::config::Param;

/// Events that can trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Trigger events
    /// Wall clock reached the configured alarm minute
    AlarmTriggered,
    /// Cycle started from the console
    StartRequested,

    // Scheduler events
    /// Filling time elapsed and the tap finished opening
    FillComplete,
    /// Watering time elapsed
    WaterComplete,
    /// Emptying time elapsed and the tap finished closing
    EmptyComplete,

    // Abort events
    /// Cycle stopped from the console
    Abort,
    /// A parameter read back implausible; cycle abandoned
    ParameterRejected(Param),
}

impl Event {
    /// Check if this event ends a cycle early
    pub fn is_abort(&self) -> bool {
        matches!(self, Event::Abort | Event::ParameterRejected(_))
    }
}
