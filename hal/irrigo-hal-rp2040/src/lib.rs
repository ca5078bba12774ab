//! RP2040-specific HAL for the irrigation controller firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `irrigo-hal` traits and the core's board traits:
//!
//! - ADC channel map and supply rail sensing
//! - Servo PWM slice configuration
//! - RTC-backed time of day
//! - Buffered UART console
//! - Flash storage driver (implements `irrigo_hal::FlashStorage`)

#![no_std]

pub mod adc;
pub mod flash;
pub mod pwm;
pub mod rtc;
pub mod uart;

// Re-export shared traits from irrigo-hal for convenience
pub use irrigo_hal::{FlashStorage as FlashStorageTrait, StorageKey, UartRx, UartTx};
