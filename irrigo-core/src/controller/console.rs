//! Console command table
//!
//! | Command | Args | Effect |
//! |---|---|---|
//! | `open` / `close` | | manual tap motion |
//! | `open_pos` / `close_pos` | `[0..=180]` | get/set calibration |
//! | `alarm` | `[h m]` | get/set alarm time |
//! | `fill_time` / `water_time` / `empty_time` | `[secs]` | get/set phase duration |
//! | `start` / `stop` | | manual cycle start / abort |
//! | `status` | | phase, tap state, remaining seconds |
//! | `volts` | | supply rail voltages |
//! | `power` | `[on\|off]` | get/set supply rails |
//! | `clock` | `[h m]` | get/set time of day |
//!
//! Getters are the same command without arguments. Setters echo the
//! new value.

use irrigo_protocol::{Args, Reply, Router, RouterError};

use super::Controller;
use crate::config::{Param, ParamError, ParameterStore};
use crate::power::Rail;
use crate::state::Event;
use crate::tap::MAX_POSITION;
use crate::time::WallTime;
use crate::traits::Board;

/// Number of console commands
pub const COMMAND_COUNT: usize = 14;

/// Router over a board's controller
pub type ConsoleRouter<B> = Router<Controller<B>, COMMAND_COUNT>;

/// Build the console command table
pub fn router<B: Board>() -> Result<ConsoleRouter<B>, RouterError> {
    let mut router = Router::new();
    router.add("open", cmd_open::<B>)?;
    router.add("close", cmd_close::<B>)?;
    router.add("open_pos", cmd_open_pos::<B>)?;
    router.add("close_pos", cmd_close_pos::<B>)?;
    router.add("alarm", cmd_alarm::<B>)?;
    router.add("fill_time", cmd_fill_time::<B>)?;
    router.add("water_time", cmd_water_time::<B>)?;
    router.add("empty_time", cmd_empty_time::<B>)?;
    router.add("start", cmd_start::<B>)?;
    router.add("stop", cmd_stop::<B>)?;
    router.add("status", cmd_status::<B>)?;
    router.add("volts", cmd_volts::<B>)?;
    router.add("power", cmd_power::<B>)?;
    router.add("clock", cmd_clock::<B>)?;
    Ok(router)
}

fn param_error(reply: &mut Reply, e: ParamError) {
    match e {
        ParamError::Implausible(param) => {
            reply.line_fmt(format_args!("implausible {}", param.name()))
        }
    }
}

/// Pull an `h m` pair
fn wall_time_arg(args: &mut Args<'_>, reply: &mut Reply) -> Option<WallTime> {
    let hours = args.next_at_most(23u8);
    let minutes = args.next_at_most(59u8);
    match (hours, minutes) {
        (Ok(hours), Ok(minutes)) => Some(WallTime { hours, minutes }),
        (Err(e), _) | (_, Err(e)) => {
            reply.line(e.as_str());
            None
        }
    }
}

fn cmd_open<B: Board>(ctrl: &mut Controller<B>, _args: &mut Args<'_>, reply: &mut Reply) {
    ctrl.open_tap();
    reply.line("opening");
}

fn cmd_close<B: Board>(ctrl: &mut Controller<B>, _args: &mut Args<'_>, reply: &mut Reply) {
    ctrl.close_tap();
    reply.line("closing");
}

fn position_command<B: Board>(
    ctrl: &mut Controller<B>,
    args: &mut Args<'_>,
    reply: &mut Reply,
    param: Param,
) {
    if !args.is_empty() {
        let position = match args.next_at_most(MAX_POSITION) {
            Ok(position) => position,
            Err(e) => return reply.line(e.as_str()),
        };
        let result = match param {
            Param::TapOpenPosition => ctrl.set_open_position(position),
            _ => ctrl.set_close_position(position),
        };
        if let Err(e) = result {
            return param_error(reply, e);
        }
    }

    let position = match param {
        Param::TapOpenPosition => ctrl.tap().open_position(),
        _ => ctrl.tap().close_position(),
    };
    reply.line_fmt(format_args!("{} {}", param.name(), position));
}

fn cmd_open_pos<B: Board>(ctrl: &mut Controller<B>, args: &mut Args<'_>, reply: &mut Reply) {
    position_command(ctrl, args, reply, Param::TapOpenPosition);
}

fn cmd_close_pos<B: Board>(ctrl: &mut Controller<B>, args: &mut Args<'_>, reply: &mut Reply) {
    position_command(ctrl, args, reply, Param::TapClosePosition);
}

fn cmd_alarm<B: Board>(ctrl: &mut Controller<B>, args: &mut Args<'_>, reply: &mut Reply) {
    if !args.is_empty() {
        let Some(time) = wall_time_arg(args, reply) else {
            return;
        };
        if let Err(e) = ctrl.set_alarm(time) {
            return param_error(reply, e);
        }
    }

    match ctrl.store().alarm_time() {
        Ok(time) => reply.line_fmt(format_args!("alarm {}", time)),
        Err(e) => param_error(reply, e),
    }
}

fn duration_command<B: Board>(
    ctrl: &mut Controller<B>,
    args: &mut Args<'_>,
    reply: &mut Reply,
    param: Param,
) {
    match args.optional_int::<u16>() {
        Ok(None) => {}
        Ok(Some(secs)) => {
            if let Err(e) = ctrl.set_phase_seconds(param, secs) {
                return param_error(reply, e);
            }
        }
        Err(e) => return reply.line(e.as_str()),
    }

    match ctrl.store().checked(param) {
        Ok(secs) => reply.line_fmt(format_args!("{} {}", param.name(), secs)),
        Err(e) => param_error(reply, e),
    }
}

fn cmd_fill_time<B: Board>(ctrl: &mut Controller<B>, args: &mut Args<'_>, reply: &mut Reply) {
    duration_command(ctrl, args, reply, Param::FillingTime);
}

fn cmd_water_time<B: Board>(ctrl: &mut Controller<B>, args: &mut Args<'_>, reply: &mut Reply) {
    duration_command(ctrl, args, reply, Param::WateringTime);
}

fn cmd_empty_time<B: Board>(ctrl: &mut Controller<B>, args: &mut Args<'_>, reply: &mut Reply) {
    duration_command(ctrl, args, reply, Param::EmptyingTime);
}

fn cmd_start<B: Board>(ctrl: &mut Controller<B>, _args: &mut Args<'_>, reply: &mut Reply) {
    match ctrl.start_cycle() {
        Some(Event::ParameterRejected(param)) => param_error(reply, ParamError::Implausible(param)),
        Some(_) => reply.line("cycle started"),
        None => reply.line("busy"),
    }
}

fn cmd_stop<B: Board>(ctrl: &mut Controller<B>, _args: &mut Args<'_>, reply: &mut Reply) {
    match ctrl.stop_cycle() {
        Some(_) => reply.line("cycle stopped"),
        None => reply.line("closing"),
    }
}

fn cmd_status<B: Board>(ctrl: &mut Controller<B>, _args: &mut Args<'_>, reply: &mut Reply) {
    reply.line_fmt(format_args!("phase {}", ctrl.phase().as_str()));
    reply.line_fmt(format_args!("tap {}", ctrl.tap().state().as_str()));
    if ctrl.phase().is_active() {
        reply.line_fmt(format_args!("remaining {} s", ctrl.remaining_secs()));
    }
}

fn cmd_volts<B: Board>(ctrl: &mut Controller<B>, _args: &mut Args<'_>, reply: &mut Reply) {
    let reading = ctrl.supplies();
    for (rail, volts) in [(Rail::Pump, reading.pump), (Rail::Servo, reading.servo)] {
        match volts {
            Some(v) => reply.line_fmt(format_args!("{} {:.2} V", rail.as_str(), v)),
            None => reply.line_fmt(format_args!("{} unavailable", rail.as_str())),
        }
    }
}

fn cmd_power<B: Board>(ctrl: &mut Controller<B>, args: &mut Args<'_>, reply: &mut Reply) {
    match args.next_token() {
        None => {}
        Some("on") => ctrl.set_power(true),
        Some("off") => ctrl.set_power(false),
        Some(_) => return reply.line("expected on or off"),
    }

    reply.line(if ctrl.power_enabled() {
        "power on"
    } else {
        "power off"
    });
}

fn cmd_clock<B: Board>(ctrl: &mut Controller<B>, args: &mut Args<'_>, reply: &mut Reply) {
    if !args.is_empty() {
        let Some(time) = wall_time_arg(args, reply) else {
            return;
        };
        if !ctrl.set_wall_time(time) {
            return reply.line("clock rejected");
        }
    }

    match ctrl.wall_time() {
        Some(time) => reply.line_fmt(format_args!("clock {}", time)),
        None => reply.line("clock not set"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Parameters;
    use crate::controller::tests::{controller, TestBoard};
    use crate::state::CyclePhase;
    use crate::tap::TapState;
    use crate::time::Instant;
    use irrigo_protocol::Dispatch;

    struct Console {
        router: ConsoleRouter<TestBoard>,
        ctrl: Controller<TestBoard>,
        reply: Reply,
    }

    impl Console {
        fn new(params: Parameters) -> Self {
            Self {
                router: router().unwrap(),
                ctrl: controller(params),
                reply: Reply::new(),
            }
        }

        fn run(&mut self, line: &str) -> &str {
            self.reply.clear();
            self.router.dispatch(&mut self.ctrl, line, &mut self.reply);
            self.reply.as_str()
        }
    }

    #[test]
    fn test_every_command_registered() {
        let router = router::<TestBoard>().unwrap();
        assert_eq!(router.len(), COMMAND_COUNT);
    }

    #[test]
    fn test_manual_tap() {
        let mut console = Console::new(Parameters::default());
        assert_eq!(console.run("open"), "opening");
        assert_eq!(console.ctrl.tap().state(), TapState::Opening);
        assert_eq!(console.run("close"), "closing");
        assert_eq!(console.ctrl.tap().state(), TapState::Closing);
    }

    #[test]
    fn test_position_get_set() {
        let mut console = Console::new(Parameters::default());
        assert_eq!(console.run("open_pos"), "open_pos 0");
        assert_eq!(console.run("open_pos 35"), "open_pos 35");
        assert_eq!(console.ctrl.store().tap_open_position, 35);
        assert_eq!(console.ctrl.tap().open_position(), 35);

        assert_eq!(console.run("close_pos 181"), "out of range");
        assert_eq!(console.run("close_pos x"), "not a number");
        assert_eq!(console.run("close_pos"), "close_pos 180");
    }

    #[test]
    fn test_alarm_get_set() {
        let mut console = Console::new(Parameters::default());
        assert_eq!(console.run("alarm"), "alarm 07:00");
        assert_eq!(console.run("alarm 18 45"), "alarm 18:45");
        assert_eq!(console.ctrl.store().alarm, WallTime { hours: 18, minutes: 45 });

        assert_eq!(console.run("alarm 24 0"), "out of range");
        assert_eq!(console.run("alarm 6"), "missing argument");
        assert_eq!(console.run("alarm"), "alarm 18:45");
    }

    #[test]
    fn test_duration_get_set() {
        let mut console = Console::new(Parameters::default());
        assert_eq!(console.run("water_time"), "water_time 600");
        assert_eq!(console.run("fill_time 90"), "fill_time 90");
        assert_eq!(console.run("empty_time 0"), "empty_time 0");
        assert_eq!(console.ctrl.store().filling_time, 90);
        assert_eq!(console.ctrl.store().emptying_time, 0);

        assert_eq!(console.run("fill_time 65535"), "implausible fill_time");
        assert_eq!(console.run("fill_time 70000"), "out of range");
        assert_eq!(console.ctrl.store().filling_time, 90);
    }

    #[test]
    fn test_erased_duration_reported() {
        let params = Parameters {
            watering_time: 0xFFFF,
            ..Parameters::default()
        };
        let mut console = Console::new(params);
        assert_eq!(console.run("water_time"), "implausible water_time");
        assert_eq!(console.run("start"), "cycle started");
    }

    #[test]
    fn test_start_stop() {
        let mut console = Console::new(Parameters::default());
        assert_eq!(console.run("start"), "cycle started");
        assert_eq!(console.ctrl.phase(), CyclePhase::Filling);
        assert_eq!(console.run("start"), "busy");
        assert_eq!(console.run("stop"), "cycle stopped");
        assert_eq!(console.ctrl.phase(), CyclePhase::Idle);
        assert_eq!(console.ctrl.tap().state(), TapState::Closing);
        assert_eq!(console.run("stop"), "closing");
    }

    #[test]
    fn test_start_with_implausible_fill_time() {
        let params = Parameters {
            filling_time: 0xFFFF,
            ..Parameters::default()
        };
        let mut console = Console::new(params);
        assert_eq!(console.run("start"), "implausible fill_time");
        assert_eq!(console.ctrl.phase(), CyclePhase::Idle);
    }

    #[test]
    fn test_status() {
        let mut console = Console::new(Parameters::default());
        assert_eq!(console.run("status"), "phase idle\ntap stationary");

        console.run("start");
        console.ctrl.poll(Instant::from_millis(500));
        assert_eq!(
            console.run("status"),
            "phase filling\ntap opening\nremaining 60 s"
        );
    }

    #[test]
    fn test_volts() {
        let mut console = Console::new(Parameters::default());
        console.ctrl.power_mut().pump = Some(1023);
        assert_eq!(console.run("volts"), "pump 12.00 V\nservo unavailable");
    }

    #[test]
    fn test_power() {
        let mut console = Console::new(Parameters::default());
        assert_eq!(console.run("power"), "power off");
        assert_eq!(console.run("power on"), "power on");
        assert!(console.ctrl.power_enabled());
        assert_eq!(console.run("power maybe"), "expected on or off");
        assert_eq!(console.run("power off"), "power off");
    }

    #[test]
    fn test_clock() {
        let mut console = Console::new(Parameters::default());
        assert_eq!(console.run("clock"), "clock not set");
        assert_eq!(console.run("clock 6 5"), "clock 06:05");
        assert_eq!(console.run("clock 6 60"), "out of range");
        assert_eq!(console.run("clock"), "clock 06:05");
    }

    #[test]
    fn test_unrecognized_leaves_state_alone() {
        let mut console = Console::new(Parameters::default());
        console.reply.clear();
        let outcome = console
            .router
            .dispatch(&mut console.ctrl, "flood 5", &mut console.reply);
        assert_eq!(outcome, Dispatch::Unrecognized);
        assert_eq!(console.reply.as_str(), "I didn't understand\nflood");
        assert_eq!(console.ctrl.phase(), CyclePhase::Idle);
        assert!(console.ctrl.tap().servo().ops.is_empty());
    }
}
