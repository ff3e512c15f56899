//! Button edge tasks
//!
//! One task per input line. Each waits on the line's rising-edge
//! interrupt (embassy-rp arms and clears the pending-edge flag per await)
//! and forwards the press to the round task. No debouncing here: the
//! trainer's first-press latch already makes repeat edges inert.

use defmt::*;
use embassy_rp::gpio::Input;

use reflex_core::target::Button;

use crate::channels::PRESS_CHANNEL;

/// Button task - forwards rising edges on one line
#[embassy_executor::task(pool_size = 4)]
pub async fn button_task(mut pin: Input<'static>, button: Button) {
    info!("Button task started: {}", button);

    loop {
        pin.wait_for_rising_edge().await;
        trace!("Edge on {}", button);
        PRESS_CHANNEL.send(button).await;
    }
}
