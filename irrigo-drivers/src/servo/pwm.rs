//! PWM hobby servo
//!
//! A hobby servo reads the width of a pulse repeated every 20 ms: the
//! shortest pulse is 0°, the longest 180°. Detaching holds the line low,
//! which most servos treat as "no command" and stop driving the horn.
//!
//! The channel must already run at the servo frame rate (50 Hz); this
//! driver only sets the duty cycle.

use embedded_hal::pwm::SetDutyCycle;
use irrigo_core::tap::MAX_POSITION;
use irrigo_core::traits::Servo;

/// Servo pulse timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServoConfig {
    /// Pulse width at 0° (µs)
    pub min_pulse_us: u16,
    /// Pulse width at 180° (µs)
    pub max_pulse_us: u16,
    /// PWM period (µs)
    pub period_us: u16,
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self {
            min_pulse_us: 544,
            max_pulse_us: 2400,
            period_us: 20_000,
        }
    }
}

impl ServoConfig {
    /// Pulse width for an angle, clamped to 0-180
    pub fn pulse_us(&self, angle: u8) -> u32 {
        let angle = angle.min(MAX_POSITION) as u32;
        let min = self.min_pulse_us as u32;
        let span = (self.max_pulse_us as u32).saturating_sub(min);
        min + angle * span / MAX_POSITION as u32
    }

    /// Duty value for an angle on a channel with `max_duty` steps per period
    pub fn duty(&self, angle: u8, max_duty: u16) -> u16 {
        let duty = self.pulse_us(angle) * max_duty as u32 / self.period_us.max(1) as u32;
        duty.min(max_duty as u32) as u16
    }
}

/// Servo on an embedded-hal PWM channel
pub struct PwmServo<P> {
    pwm: P,
    config: ServoConfig,
    angle: u8,
    attached: bool,
}

impl<P: SetDutyCycle> PwmServo<P> {
    /// Create a detached servo with default pulse timing
    pub fn new(pwm: P) -> Self {
        Self::with_config(pwm, ServoConfig::default())
    }

    /// Create a detached servo with custom pulse timing
    pub fn with_config(mut pwm: P, config: ServoConfig) -> Self {
        // Hold the line low until attached
        let _ = pwm.set_duty_cycle_fully_off();
        Self {
            pwm,
            config,
            angle: 0,
            attached: false,
        }
    }

    /// Last commanded angle
    pub fn angle(&self) -> u8 {
        self.angle
    }

    /// Get the PWM channel
    pub fn pwm(&self) -> &P {
        &self.pwm
    }

    fn apply(&mut self) {
        let duty = self.config.duty(self.angle, self.pwm.max_duty_cycle());
        // The servo has no failure path; a rejected duty leaves the old pulse
        let _ = self.pwm.set_duty_cycle(duty);
    }
}

impl<P: SetDutyCycle> Servo for PwmServo<P> {
    fn attach(&mut self) {
        self.attached = true;
        self.apply();
    }

    fn write(&mut self, angle: u8) {
        self.angle = angle.min(MAX_POSITION);
        if self.attached {
            self.apply();
        }
    }

    fn detach(&mut self) {
        self.attached = false;
        let _ = self.pwm.set_duty_cycle_fully_off();
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}
