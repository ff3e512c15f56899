//! Collaborator traits
//!
//! These traits define the interface between the game logic and the
//! hardware-specific implementations.

pub mod display;
pub mod random;

pub use display::{CharacterDisplay, DisplayExt};
pub use random::{FixedTargets, TargetSource};
