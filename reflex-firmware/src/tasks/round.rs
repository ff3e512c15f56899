//! Round scheduler task
//!
//! The main loop of the trainer. Each iteration: draw a target, clear the
//! latch, light the LED, run the lit window, darken, settle the score,
//! run the dark gap, reset for the next round. Presses arriving through
//! the press channel are applied to the trainer the moment they land,
//! including mid-window, which keeps edge-time scoring exact.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Delay, Duration, Instant, Timer};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use reflex_core::traits::{DisplayExt, TargetSource};
use reflex_core::{Target, Trainer, Verdict};
use reflex_drivers::{Hd44780, LedBank};

use crate::channels::PRESS_CHANNEL;
use crate::config::{LIT_WINDOW, REST_WINDOW};
use crate::gpio::BoardPin;

/// LED bank over board pins
pub type BoardLeds = LedBank<BoardPin>;

/// LCD driver over board pins
pub type BoardLcd = Hd44780<BoardPin, Delay>;

/// Uniform target draws from a small PRNG
struct RandomTargets {
    rng: SmallRng,
}

impl RandomTargets {
    fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl TargetSource for RandomTargets {
    fn next_target(&mut self) -> Target {
        // Four divides 2^32 evenly, so masking keeps the draw uniform
        let index = (self.rng.next_u32() & 0x3) as usize;
        Target::from_index(index).unwrap_or(Target::L1)
    }
}

/// Round task - the trainer's non-terminating main loop
#[embassy_executor::task]
pub async fn round_task(mut leds: BoardLeds, mut lcd: BoardLcd) {
    info!("Round task started");

    lcd.initialize();

    let mut trainer = Trainer::new();
    let mut targets = RandomTargets::new(Instant::now().as_ticks());

    loop {
        let target = targets.next_target();
        debug!("Round target: {}", target);

        // Latch clear happens-before the LED goes on, so no press from the
        // previous round can be attributed to this one
        trainer.begin_round(target);
        leds.light(target);

        lcd.show_score(trainer.score());
        run_window(&mut trainer, LIT_WINDOW).await;
        // Refresh in case a press raced the render above
        lcd.show_score(trainer.score());
        leds.darken(target);

        let observation = trainer.close_window();
        debug!("Window closed: {}, score {}", observation, trainer.score());

        lcd.show_score(trainer.score());
        run_window(&mut trainer, REST_WINDOW).await;

        trainer.end_round();
    }
}

/// Block for one window while feeding presses to the trainer as they land
async fn run_window(trainer: &mut Trainer, window: Duration) {
    let deadline = Instant::now() + window;
    loop {
        match select(Timer::at(deadline), PRESS_CHANNEL.receive()).await {
            Either::First(()) => break,
            Either::Second(button) => match trainer.report_press(button) {
                Verdict::Rewarded => debug!("Correct press: {}", button),
                Verdict::Penalized => debug!("Penalized press: {}", button),
                Verdict::Ignored => trace!("Ignored press: {}", button),
            },
        }
    }
}
