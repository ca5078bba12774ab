//! Irrigation controller
//!
//! Owns the tap, the cycle scheduler, and the board peripherals, and
//! exposes the operations the console and the main loop need. The main
//! loop calls [`Controller::poll`] once per iteration; console handlers
//! act on the time of the most recent poll.

pub mod console;

pub use console::{router, ConsoleRouter, COMMAND_COUNT};

use crate::config::{Param, ParamError, ParameterStore};
use crate::power::{read_supplies, SupplyReading};
use crate::scheduler::CycleScheduler;
use crate::state::{CyclePhase, Event};
use crate::tap::{Tap, DEFAULT_CLOSE_POSITION, DEFAULT_OPEN_POSITION};
use crate::time::{Instant, WallTime};
use crate::traits::{Board, PowerSupply, WallClock};

/// Irrigation controller for one board
pub struct Controller<B: Board> {
    tap: Tap<B::Servo>,
    scheduler: CycleScheduler,
    store: B::Store,
    power: B::Power,
    clock: B::Clock,
    /// Time of the last poll
    now: Instant,
}

impl<B: Board> Controller<B> {
    /// Create a controller with the standard tap hold time
    pub fn new(servo: B::Servo, store: B::Store, power: B::Power, clock: B::Clock) -> Self {
        Self::with_tap(Tap::new(servo), store, power, clock)
    }

    /// Create a controller around an existing tap
    ///
    /// Loads the tap calibration from the store, keeping the tap's
    /// defaults for any implausible position, and switches the supply
    /// rails off.
    pub fn with_tap(
        mut tap: Tap<B::Servo>,
        store: B::Store,
        mut power: B::Power,
        clock: B::Clock,
    ) -> Self {
        tap.set_open_position(store.tap_open_position().unwrap_or(DEFAULT_OPEN_POSITION));
        tap.set_close_position(store.tap_close_position().unwrap_or(DEFAULT_CLOSE_POSITION));
        power.set_enabled(false);

        Self {
            tap,
            scheduler: CycleScheduler::new(),
            store,
            power,
            clock,
            now: Instant::default(),
        }
    }

    /// Advance the tap and the cycle to `now`
    ///
    /// Returns the cycle event that occurred, if any.
    pub fn poll(&mut self, now: Instant) -> Option<Event> {
        self.now = now;
        self.tap.tick(now);
        let wall = self.clock.now();
        self.scheduler.tick(now, wall, &mut self.tap, &self.store)
    }

    /// Time of the last poll
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Get the tap
    pub fn tap(&self) -> &Tap<B::Servo> {
        &self.tap
    }

    /// Get the cycle scheduler
    pub fn scheduler(&self) -> &CycleScheduler {
        &self.scheduler
    }

    /// Current cycle phase
    pub fn phase(&self) -> CyclePhase {
        self.scheduler.phase()
    }

    /// Whole seconds left in the current phase, rounded up
    pub fn remaining_secs(&self) -> u32 {
        self.scheduler.remaining_ms(self.now).div_ceil(1000)
    }

    /// Get the parameter store
    pub fn store(&self) -> &B::Store {
        &self.store
    }

    /// Get the parameter store mutably
    pub fn store_mut(&mut self) -> &mut B::Store {
        &mut self.store
    }

    /// Get the power supply
    pub fn power(&self) -> &B::Power {
        &self.power
    }

    /// Get the power supply mutably
    pub fn power_mut(&mut self) -> &mut B::Power {
        &mut self.power
    }

    /// Open the tap manually
    pub fn open_tap(&mut self) {
        self.tap.open(self.now);
    }

    /// Close the tap manually
    pub fn close_tap(&mut self) {
        self.tap.close(self.now);
    }

    /// Start a cycle now, unless one is running
    pub fn start_cycle(&mut self) -> Option<Event> {
        self.scheduler.start(self.now, &mut self.tap, &self.store)
    }

    /// Stop any running cycle and close the tap
    pub fn stop_cycle(&mut self) -> Option<Event> {
        self.scheduler.abort(self.now, &mut self.tap)
    }

    /// Persist a new open position and apply it to the tap
    pub fn set_open_position(&mut self, position: u8) -> Result<(), ParamError> {
        self.store.set_checked(Param::TapOpenPosition, position as u16)?;
        self.tap.set_open_position(position);
        Ok(())
    }

    /// Persist a new close position and apply it to the tap
    pub fn set_close_position(&mut self, position: u8) -> Result<(), ParamError> {
        self.store.set_checked(Param::TapClosePosition, position as u16)?;
        self.tap.set_close_position(position);
        Ok(())
    }

    /// Persist a new alarm time
    pub fn set_alarm(&mut self, time: WallTime) -> Result<(), ParamError> {
        self.store.set_alarm_time(time)
    }

    /// Persist a phase duration
    pub fn set_phase_seconds(&mut self, param: Param, secs: u16) -> Result<(), ParamError> {
        self.store.set_checked(param, secs)
    }

    /// Switch the supply rails
    pub fn set_power(&mut self, on: bool) {
        self.power.set_enabled(on);
    }

    /// Check if the supply rails are on
    pub fn power_enabled(&self) -> bool {
        self.power.is_enabled()
    }

    /// Sample both supply rails
    pub fn supplies(&mut self) -> SupplyReading {
        read_supplies(&mut self.power)
    }

    /// Current time of day
    pub fn wall_time(&mut self) -> Option<WallTime> {
        self.clock.now()
    }

    /// Set the time of day
    pub fn set_wall_time(&mut self, time: WallTime) -> bool {
        self.clock.set(time)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::Parameters;
    use crate::power::Rail;
    use crate::tap::actuator::tests::RecordingServo;
    use crate::tap::TapState;
    use crate::traits::Servo;

    /// Supply mock with fixed samples
    #[derive(Debug, Default)]
    pub struct MockPower {
        pub enabled: bool,
        pub pump: Option<u16>,
        pub servo: Option<u16>,
    }

    impl PowerSupply for MockPower {
        fn set_enabled(&mut self, on: bool) {
            self.enabled = on;
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn sample(&mut self, rail: Rail) -> Option<u16> {
            match rail {
                Rail::Pump => self.pump,
                Rail::Servo => self.servo,
            }
        }
    }

    /// Settable clock mock
    #[derive(Debug, Default)]
    pub struct MockClock {
        pub time: Option<WallTime>,
    }

    impl WallClock for MockClock {
        fn now(&mut self) -> Option<WallTime> {
            self.time
        }

        fn set(&mut self, time: WallTime) -> bool {
            self.time = Some(time);
            true
        }
    }

    pub struct TestBoard;

    impl Board for TestBoard {
        type Servo = RecordingServo;
        type Store = Parameters;
        type Power = MockPower;
        type Clock = MockClock;
    }

    pub fn controller(params: Parameters) -> Controller<TestBoard> {
        Controller::new(
            RecordingServo::default(),
            params,
            MockPower {
                enabled: true,
                ..MockPower::default()
            },
            MockClock::default(),
        )
    }

    fn at(secs: u32) -> Instant {
        Instant::from_millis(secs * 1000)
    }

    #[test]
    fn test_loads_calibration_and_powers_down() {
        let params = Parameters {
            tap_open_position: 20,
            tap_close_position: 150,
            ..Parameters::default()
        };
        let ctrl = controller(params);
        assert_eq!(ctrl.tap().open_position(), 20);
        assert_eq!(ctrl.tap().close_position(), 150);
        assert!(!ctrl.power_enabled());
        assert!(ctrl.tap().servo().ops.is_empty());
    }

    #[test]
    fn test_implausible_calibration_keeps_defaults() {
        let params = Parameters {
            tap_open_position: 0xFF,
            tap_close_position: 0xFF,
            ..Parameters::default()
        };
        let ctrl = controller(params);
        assert_eq!(ctrl.tap().open_position(), DEFAULT_OPEN_POSITION);
        assert_eq!(ctrl.tap().close_position(), DEFAULT_CLOSE_POSITION);
    }

    #[test]
    fn test_alarm_cycle_drives_servo() {
        let params = Parameters {
            tap_open_position: 10,
            tap_close_position: 170,
            alarm: WallTime { hours: 6, minutes: 30 },
            filling_time: 2,
            watering_time: 3,
            emptying_time: 2,
        };
        let mut ctrl = controller(params);
        ctrl.set_wall_time(WallTime { hours: 6, minutes: 30 });

        assert_eq!(ctrl.poll(at(0)), Some(Event::AlarmTriggered));
        assert_eq!(ctrl.tap().state(), TapState::Opening);
        assert_eq!(ctrl.tap().servo().last_write(), Some(10));

        // Hold elapses, servo released mid-fill
        assert_eq!(ctrl.poll(at(1)), None);
        assert_eq!(ctrl.tap().state(), TapState::Stationary);
        assert!(!ctrl.tap().servo().is_attached());

        assert_eq!(ctrl.poll(at(2)), Some(Event::FillComplete));
        assert_eq!(ctrl.poll(at(5)), Some(Event::WaterComplete));
        assert_eq!(ctrl.tap().servo().last_write(), Some(170));
        assert_eq!(ctrl.poll(at(7)), Some(Event::EmptyComplete));
        assert_eq!(ctrl.phase(), CyclePhase::Idle);
        assert_eq!(ctrl.tap().servo().writes(), 2);
    }

    #[test]
    fn test_position_update_reaches_tap_and_store() {
        let mut ctrl = controller(Parameters::default());
        ctrl.set_open_position(33).unwrap();
        assert_eq!(ctrl.store().tap_open_position, 33);
        ctrl.open_tap();
        assert_eq!(ctrl.tap().servo().last_write(), Some(33));

        assert_eq!(
            ctrl.set_close_position(200),
            Err(ParamError::Implausible(Param::TapClosePosition))
        );
        assert_eq!(ctrl.tap().close_position(), DEFAULT_CLOSE_POSITION);
    }

    #[test]
    fn test_stop_then_poll_in_same_tick() {
        let params = Parameters {
            filling_time: 1,
            ..Parameters::default()
        };
        let mut ctrl = controller(params);
        ctrl.poll(at(0));
        ctrl.start_cycle();

        // Fill time is up at 1 s, but the stop arrives first
        assert_eq!(ctrl.stop_cycle(), Some(Event::Abort));
        assert_eq!(ctrl.poll(at(1)), None);
        assert_eq!(ctrl.phase(), CyclePhase::Idle);
        assert_eq!(ctrl.tap().servo().last_write(), Some(DEFAULT_CLOSE_POSITION));
    }

    #[test]
    fn test_remaining_secs_rounds_up() {
        let params = Parameters {
            filling_time: 5,
            ..Parameters::default()
        };
        let mut ctrl = controller(params);
        ctrl.poll(Instant::from_millis(0));
        ctrl.start_cycle();
        ctrl.poll(Instant::from_millis(1_200));
        assert_eq!(ctrl.remaining_secs(), 4);
    }
}
