//! Board-agnostic core logic for the Reflex trainer firmware
//!
//! This crate contains all game logic that does not depend on specific
//! hardware implementations:
//!
//! - Target/channel mapping (which LED pairs with which button)
//! - The per-round outcome latch
//! - The trainer state machine (scoring rules, round lifecycle)
//! - Score-to-glyph rendering for the character display
//! - Collaborator traits (character display, random target source)

#![no_std]
#![deny(unsafe_code)]

// Host tests (proptest, mock recorders) run with std available
#[cfg(test)]
extern crate std;

pub mod latch;
pub mod render;
pub mod target;
pub mod trainer;
pub mod traits;

pub use latch::{Observation, RoundLatch};
pub use target::{Button, Target};
pub use trainer::{Trainer, Verdict};
pub use traits::{CharacterDisplay, DisplayExt, TargetSource};
