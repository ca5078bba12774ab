//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in irrigo-core for the controller's hardware:
//!
//! - Servo output on a PWM channel
//! - Switched, ADC-sensed supply rails
//! - EEPROM image and fixed-offset parameter store

#![no_std]
#![deny(unsafe_code)]

pub mod power;
pub mod servo;
pub mod storage;
