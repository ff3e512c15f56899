//! Reflex Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the trainer depends
//! on. The only hardware the game drives through a trait is digital GPIO
//! output: the four LED channels and the six lines of the LCD bus. Button
//! inputs are edge-interrupt driven and stay with the platform HAL in the
//! firmware crate. Keeping the output trait here lets the driver and core
//! crates stay board-agnostic and host-testable with mock pins.
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
