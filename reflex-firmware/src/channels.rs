//! Inter-task communication channels
//!
//! The button tasks forward rising edges here; the round task drains them.
//! Routing every press through one channel into the round task is what
//! serializes all access to the trainer state - there is no other shared
//! mutable state in the firmware.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use reflex_core::target::Button;

/// Channel capacity for button press events
const PRESS_CHANNEL_SIZE: usize = 8;

/// Button presses, one entry per rising edge
pub static PRESS_CHANNEL: Channel<CriticalSectionRawMutex, Button, PRESS_CHANNEL_SIZE> =
    Channel::new();
