//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod buttons;
pub mod round;

pub use buttons::button_task;
pub use round::round_task;
