//! Servo PWM slice configuration

use embassy_rp::pwm::Config;
use fixed::traits::ToFixed;

/// System clock feeding the PWM slices (Hz)
pub const SYS_CLOCK_HZ: u32 = 125_000_000;

/// Clock divider giving one counter tick per microsecond
pub const SERVO_DIVIDER: u8 = (SYS_CLOCK_HZ / 1_000_000) as u8;

/// Counter wrap value for a 20 ms frame
pub const SERVO_TOP: u16 = 19_999;

/// PWM configuration for a 50 Hz hobby servo
///
/// The counter runs at 1 MHz, so one duty step is one microsecond of
/// pulse width. The output starts low.
pub fn servo_pwm_config() -> Config {
    let mut config = Config::default();
    config.divider = SERVO_DIVIDER.to_fixed();
    config.top = SERVO_TOP;
    config.compare_a = 0;
    config.compare_b = 0;
    config
}
