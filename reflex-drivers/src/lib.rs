//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the collaborator traits
//! defined in reflex-core:
//!
//! - HD44780-style character LCD over a 4-bit parallel bus
//! - LED bank over plain GPIO outputs
//!
//! All drivers are generic over the reflex-hal pin traits (plus the
//! embedded-hal delay trait for the LCD), so they run unmodified against
//! mock pins in host tests.

#![no_std]
#![deny(unsafe_code)]

// Host tests use std collections for recording bus activity
#[cfg(test)]
extern crate std;

pub mod lcd;
pub mod led;

pub use lcd::Hd44780;
pub use led::LedBank;
