//! Board definition
//!
//! Pin assignments for a Raspberry Pi Pico carrier:
//!
//! | Function | Pin |
//! |---|---|
//! | Console TX / RX | GPIO0 / GPIO1 (UART0) |
//! | Supply enable | GPIO15 |
//! | Tap servo | GPIO16 (PWM slice 0, channel A) |
//! | Pump rail sense | GPIO26 (ADC0) |
//! | Servo rail sense | GPIO27 (ADC1) |

use embassy_rp::gpio::Output;
use embassy_rp::pwm::PwmOutput;

use irrigo_core::config::PARAMS_SIZE;
use irrigo_core::traits::Board;
use irrigo_drivers::power::SwitchedSupply;
use irrigo_drivers::servo::PwmServo;
use irrigo_drivers::storage::{EepromImage, EepromParameters};
use irrigo_hal_rp2040::adc::RailSensor;
use irrigo_hal_rp2040::rtc::RtcClock;

/// Console baud rate
pub const CONSOLE_BAUD: u32 = 115_200;

/// Console receive and transmit buffer size
pub const CONSOLE_BUFFER_SIZE: usize = 256;

/// RAM copy of the settings image
pub type ParameterImage = EepromImage<PARAMS_SIZE>;

/// The controller board
pub struct IrrigoBoard;

impl Board for IrrigoBoard {
    type Servo = PwmServo<PwmOutput<'static>>;
    type Store = EepromParameters<ParameterImage>;
    type Power = SwitchedSupply<Output<'static>, RailSensor<'static>>;
    type Clock = RtcClock<'static>;
}
