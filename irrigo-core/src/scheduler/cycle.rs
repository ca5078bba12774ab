//! Cycle phase sequencing
//!
//! Each phase records its absolute end time on entry and is left once
//! that time has been reached, compared with the same wraparound-safe
//! check the tap uses. Filling and Emptying also wait for the tap to
//! report its motion finished. Durations are read from the parameter
//! store at the entry of the phase they govern.

use super::alarm::AlarmTrigger;
use crate::config::{Param, ParameterStore};
use crate::state::{CyclePhase, Event};
use crate::time::{Instant, WallTime};
use crate::traits::Valve;

/// Daily irrigation cycle scheduler
#[derive(Debug, Clone)]
pub struct CycleScheduler {
    phase: CyclePhase,
    /// When the current phase may end
    phase_end: Instant,
    alarm: AlarmTrigger,
}

impl Default for CycleScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleScheduler {
    /// Create an idle scheduler with the alarm armed
    pub fn new() -> Self {
        Self {
            phase: CyclePhase::Idle,
            phase_end: Instant::default(),
            alarm: AlarmTrigger::new(),
        }
    }

    /// Get current phase
    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    /// Milliseconds until the current phase's duration has elapsed
    pub fn remaining_ms(&self, now: Instant) -> u32 {
        if self.phase.is_active() {
            now.millis_until(self.phase_end)
        } else {
            0
        }
    }

    /// Advance the cycle
    ///
    /// Call every loop iteration. At most one phase transition happens
    /// per call; the event describing it is returned.
    ///
    /// The alarm is polled on every call, so a matching minute that
    /// passes while a cycle is running is consumed rather than deferred.
    pub fn tick<V, P>(
        &mut self,
        now: Instant,
        wall: Option<WallTime>,
        valve: &mut V,
        params: &P,
    ) -> Option<Event>
    where
        V: Valve,
        P: ParameterStore,
    {
        let alarm_fired = self.alarm.poll(wall, params.alarm_time().ok());

        let event = match self.phase {
            CyclePhase::Idle if alarm_fired => Event::AlarmTriggered,
            CyclePhase::Idle => return None,
            CyclePhase::Filling => Event::FillComplete,
            CyclePhase::Watering => Event::WaterComplete,
            CyclePhase::Emptying => Event::EmptyComplete,
        };

        if self.phase.is_active() {
            let settled = !self.phase.waits_for_tap() || valve.finished(now);
            if !(now.has_reached(self.phase_end) && settled) {
                return None;
            }
        }

        Some(self.advance(now, event, valve, params))
    }

    /// Start a cycle immediately
    ///
    /// Returns `None` without side effects if a cycle is already running.
    pub fn start<V, P>(&mut self, now: Instant, valve: &mut V, params: &P) -> Option<Event>
    where
        V: Valve,
        P: ParameterStore,
    {
        if self.phase.is_active() {
            return None;
        }
        Some(self.advance(now, Event::StartRequested, valve, params))
    }

    /// Stop the cycle and close the tap
    ///
    /// The tap is closed even when idle. Returns [`Event::Abort`] only
    /// if a cycle was running.
    pub fn abort<V: Valve>(&mut self, now: Instant, valve: &mut V) -> Option<Event> {
        valve.close(now);
        if self.phase.is_active() {
            self.phase = self.phase.transition(Event::Abort);
            Some(Event::Abort)
        } else {
            None
        }
    }

    /// Apply `event` and enter the resulting phase
    fn advance<V, P>(&mut self, now: Instant, event: Event, valve: &mut V, params: &P) -> Event
    where
        V: Valve,
        P: ParameterStore,
    {
        let next = self.phase.transition(event);

        let duration = match next {
            CyclePhase::Idle => {
                self.phase = next;
                return event;
            }
            CyclePhase::Filling => Param::FillingTime,
            CyclePhase::Watering => Param::WateringTime,
            CyclePhase::Emptying => Param::EmptyingTime,
        };

        let secs = match params.checked(duration) {
            Ok(secs) => secs,
            Err(_) => return self.reject(now, duration, valve),
        };

        match next {
            CyclePhase::Filling => valve.open(now),
            CyclePhase::Emptying => valve.close(now),
            _ => {}
        }

        self.phase = next;
        self.phase_end = now.add_secs(secs);
        event
    }

    /// Abandon the cycle after an implausible duration read
    fn reject<V: Valve>(&mut self, now: Instant, param: Param, valve: &mut V) -> Event {
        let event = Event::ParameterRejected(param);
        valve.close(now);
        self.phase = self.phase.transition(event);
        event
    }
}
