//! Character LCD drivers

mod hd44780;

pub use hd44780::{Hd44780, CMD_SETTLE_US, DATA_SETTLE_US};
