//! Timing configuration
//!
//! The two windows of a round. The original device busy-waited roughly a
//! second for each; here they are named constants so the pace of the game
//! is a one-line change.

use embassy_time::Duration;

/// How long the target LED stays lit (the answer window)
pub const LIT_WINDOW: Duration = Duration::from_millis(1_000);

/// Dark gap between rounds
pub const REST_WINDOW: Duration = Duration::from_millis(1_000);
