//! Irrigo - Irrigation Controller Firmware
//!
//! Main firmware binary for an RP2040-based irrigation controller. A
//! servo tap fills a reservoir once a day at the alarm time, lets it
//! water the beds, then closes while the reservoir drains. Parameters
//! are set over a serial console and kept in flash.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::Pwm;
use embassy_rp::rtc::Rtc;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use irrigo_core::config::{ParameterStore, Parameters};
use irrigo_core::controller::{router, Controller};
use irrigo_drivers::power::SwitchedSupply;
use irrigo_drivers::servo::PwmServo;
use irrigo_drivers::storage::EepromParameters;
use irrigo_hal_rp2040::adc::RailSensor;
use irrigo_hal_rp2040::flash::FlashStorage;
use irrigo_hal_rp2040::pwm::servo_pwm_config;
use irrigo_hal_rp2040::rtc::RtcClock;
use irrigo_hal_rp2040::uart::SerialConsole;

use crate::board::{IrrigoBoard, CONSOLE_BAUD, CONSOLE_BUFFER_SIZE};
use crate::console::ConsoleSession;
use crate::persist::ParameterPersistence;

mod board;
mod console;
mod persist;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; CONSOLE_BUFFER_SIZE]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; CONSOLE_BUFFER_SIZE]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Irrigo firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Load parameters from flash, restoring defaults field by field
    let mut persistence = ParameterPersistence::new(FlashStorage::new(p.FLASH, p.DMA_CH0));
    let mut store = EepromParameters::new(persistence.load_or_erased().await);
    let restored = store.restore_implausible(&Parameters::default());
    if restored > 0 {
        warn!("Restored {} implausible parameters to defaults", restored);
    }
    let params = unwrap!(store.load());
    debug!(
        "Alarm {}:{}, fill {} s, water {} s, empty {} s",
        params.alarm.hours,
        params.alarm.minutes,
        params.filling_time,
        params.watering_time,
        params.emptying_time
    );

    // Setup UART for the serial console
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = CONSOLE_BAUD;

    let tx_buf = TX_BUF.init([0u8; CONSOLE_BUFFER_SIZE]);
    let rx_buf = RX_BUF.init([0u8; CONSOLE_BUFFER_SIZE]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    let console = ConsoleSession::new(SerialConsole::new(rx, tx));

    info!("UART initialized for console");

    // Setup servo PWM (GPIO16, slice 0 channel A)
    let pwm = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, servo_pwm_config());
    let (servo_out, _) = pwm.split();
    let servo = PwmServo::new(unwrap!(servo_out));

    // Setup supply enable (GPIO15) and rail sensing (GPIO26, GPIO27)
    let enable = Output::new(p.PIN_15, Level::Low);
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let sensor = RailSensor::new(
        adc,
        Channel::new_pin(p.PIN_26, Pull::None),
        Channel::new_pin(p.PIN_27, Pull::None),
    );
    let power = SwitchedSupply::new(enable, sensor);

    let clock = RtcClock::new(Rtc::new(p.RTC));

    info!("Servo, supply and RTC initialized");

    let controller = Controller::<IrrigoBoard>::new(servo, store, power, clock);
    let router = unwrap!(router::<IrrigoBoard>());

    spawner
        .spawn(tasks::controller_task(controller, router, console, persistence))
        .unwrap();

    info!("All tasks spawned, firmware running");
}
