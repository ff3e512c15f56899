//! Trainer state machine
//!
//! Owns the score and the per-round outcome latch and exposes the round
//! lifecycle to whoever drives the hardware. The scoring rules:
//!
//! - correct button while the target is lit: +3, applied at press time
//! - wrong button, or any button while nothing is lit: -1, at press time
//! - no press at all during the lit window: -1, applied when the window
//!   closes
//!
//! The press-time adjustments and the close-time penalty are mutually
//! exclusive: a counted press suppresses the no-press check, and the
//! counted marker suppresses further presses until the round ends.
//!
//! The edge context must never touch the score or latch directly; it
//! reports through [`Trainer::report_press`], the single guarded mutation
//! entry point.

use crate::latch::{Observation, RoundLatch};
use crate::target::{Button, Target};

/// Points awarded for pressing the correct button while lit
pub const CORRECT_PRESS_REWARD: i8 = 3;

/// Points deducted for a wrong, late, or off-window press
pub const PENALTY: i8 = 1;

/// Immediate result of reporting a press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verdict {
    /// Correct button while the target was lit: score went up
    Rewarded,
    /// Wrong button, or a press while nothing was lit: score went down
    Penalized,
    /// A press was already counted this round: no effect
    Ignored,
}

/// Trainer state: score, latch, and the currently armed target
///
/// The score starts at 0 at power-on and lives only in volatile memory.
/// Arithmetic wraps; scores beyond the two-digit display range are out of
/// scope and left undefined.
#[derive(Debug)]
pub struct Trainer {
    score: i8,
    latch: RoundLatch,
    /// Target currently lit, if any
    armed: Option<Target>,
}

impl Trainer {
    /// Create a trainer in the power-on state
    pub const fn new() -> Self {
        Self {
            score: 0,
            latch: RoundLatch::new(),
            armed: None,
        }
    }

    /// Current score
    pub fn score(&self) -> i8 {
        self.score
    }

    /// Target currently lit, if any
    pub fn armed(&self) -> Option<Target> {
        self.armed
    }

    /// What the latch holds for the current round
    pub fn observation(&self) -> Observation {
        self.latch.observation()
    }

    /// Begin a round: clear the observation, then arm the target
    ///
    /// Clearing must happen before the caller drives the LED high, so a
    /// press racing the round boundary cannot be attributed to the new
    /// round. The counted marker is deliberately left alone; it clears
    /// only in [`end_round`](Self::end_round).
    pub fn begin_round(&mut self, target: Target) {
        self.latch.clear_observation();
        self.armed = Some(target);
    }

    /// Report a rising edge on a button
    ///
    /// First qualifying press per round wins; everything after it is a
    /// no-op. Scoring happens here, at press time, for both the reward and
    /// the wrong/off-window penalty.
    pub fn report_press(&mut self, button: Button) -> Verdict {
        if self.latch.is_counted() {
            return Verdict::Ignored;
        }

        let correct = self
            .armed
            .is_some_and(|target| target.expected_button() == button);
        self.latch.observe(correct);

        if correct {
            self.score = self.score.wrapping_add(CORRECT_PRESS_REWARD);
            Verdict::Rewarded
        } else {
            self.score = self.score.wrapping_sub(PENALTY);
            Verdict::Penalized
        }
    }

    /// Close the illumination window: disarm and settle the round
    ///
    /// Called after the caller drives the LED low. If nothing was observed
    /// during the window, the no-press penalty is applied here; otherwise
    /// the press already scored itself and this only reads the latch.
    pub fn close_window(&mut self) -> Observation {
        self.armed = None;
        let observation = self.latch.observation();
        if !observation.any_press() {
            self.score = self.score.wrapping_sub(PENALTY);
        }
        observation
    }

    /// End the round: allow the next press to count
    pub fn end_round(&mut self) {
        self.latch.reset_counted();
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Drive one full round: begin, presses during the lit window, close,
    /// presses during the dark gap, end. Returns the window observation.
    fn play_round(
        trainer: &mut Trainer,
        target: Target,
        lit_presses: &[Button],
        dark_presses: &[Button],
    ) -> Observation {
        trainer.begin_round(target);
        for &b in lit_presses {
            trainer.report_press(b);
        }
        let observation = trainer.close_window();
        for &b in dark_presses {
            trainer.report_press(b);
        }
        trainer.end_round();
        observation
    }

    #[test]
    fn test_correct_press_rewards_at_edge_time() {
        let mut trainer = Trainer::new();
        trainer.begin_round(Target::L2);

        assert_eq!(trainer.report_press(Button::B2), Verdict::Rewarded);
        assert_eq!(trainer.score(), 3);
        assert_eq!(trainer.observation(), Observation::Observed { correct: true });

        // Scheduler must not additionally penalize
        let observation = trainer.close_window();
        assert_eq!(observation, Observation::Observed { correct: true });
        assert_eq!(trainer.score(), 3);
    }

    #[test]
    fn test_wrong_button_penalizes_at_edge_time() {
        let mut trainer = Trainer::new();
        trainer.begin_round(Target::L3);

        assert_eq!(trainer.report_press(Button::B1), Verdict::Penalized);
        assert_eq!(trainer.score(), -1);

        // End-of-window check sees a press and applies nothing further
        trainer.close_window();
        assert_eq!(trainer.score(), -1);
    }

    #[test]
    fn test_no_press_penalized_at_window_close() {
        let mut trainer = Trainer::new();
        trainer.begin_round(Target::L4);
        assert_eq!(trainer.armed(), Some(Target::L4));

        // Score untouched until the window closes
        assert_eq!(trainer.score(), 0);
        let observation = trainer.close_window();
        assert_eq!(observation, Observation::Idle);
        assert_eq!(trainer.score(), -1);

        // Closing the window disarms the target
        assert_eq!(trainer.armed(), None);
    }

    #[test]
    fn test_press_while_dark_penalizes() {
        let mut trainer = Trainer::new();
        // No round armed: any press is a press-while-off
        assert_eq!(trainer.report_press(Button::B1), Verdict::Penalized);
        assert_eq!(trainer.score(), -1);
    }

    #[test]
    fn test_extra_presses_ignored() {
        let mut trainer = Trainer::new();
        trainer.begin_round(Target::L1);

        assert_eq!(trainer.report_press(Button::B1), Verdict::Rewarded);
        // Bounces and mashing on any line change nothing
        assert_eq!(trainer.report_press(Button::B1), Verdict::Ignored);
        assert_eq!(trainer.report_press(Button::B3), Verdict::Ignored);
        assert_eq!(trainer.score(), 3);

        trainer.close_window();
        // Still counted until end_round: dark-gap presses are swallowed too
        assert_eq!(trainer.report_press(Button::B2), Verdict::Ignored);
        assert_eq!(trainer.score(), 3);
    }

    #[test]
    fn test_round_isolation() {
        let mut trainer = Trainer::new();
        play_round(&mut trainer, Target::L1, &[Button::B1], &[]);

        // Next round starts with a clean observation regardless of outcome
        trainer.begin_round(Target::L2);
        assert_eq!(trainer.observation(), Observation::Idle);
    }

    #[test]
    fn test_dark_gap_press_spills_into_next_round() {
        let mut trainer = Trainer::new();
        trainer.end_round();

        // Press after end_round but before the next begin_round
        assert_eq!(trainer.report_press(Button::B2), Verdict::Penalized);
        assert_eq!(trainer.score(), -1);

        // That press already consumed the counted marker, so the following
        // round cannot score and collects the no-press penalty
        trainer.begin_round(Target::L2);
        assert_eq!(trainer.observation(), Observation::Idle);
        assert_eq!(trainer.report_press(Button::B2), Verdict::Ignored);
        trainer.close_window();
        assert_eq!(trainer.score(), -2);
    }

    #[test]
    fn test_score_accumulates_across_rounds() {
        let mut trainer = Trainer::new();
        play_round(&mut trainer, Target::L1, &[Button::B1], &[]); // +3
        play_round(&mut trainer, Target::L2, &[Button::B2], &[]); // +3
        play_round(&mut trainer, Target::L3, &[], &[]); // -1 (miss)
        play_round(&mut trainer, Target::L4, &[Button::B1], &[]); // -1 (wrong)
        assert_eq!(trainer.score(), 4);
    }

    fn arb_button() -> impl Strategy<Value = Button> {
        prop_oneof![
            Just(Button::B1),
            Just(Button::B2),
            Just(Button::B3),
            Just(Button::B4),
        ]
    }

    fn arb_target() -> impl Strategy<Value = Target> {
        prop_oneof![
            Just(Target::L1),
            Just(Target::L2),
            Just(Target::L3),
            Just(Target::L4),
        ]
    }

    proptest! {
        /// Whatever the press sequence, the window itself yields exactly
        /// one adjustment: +3 for a correct first press, -1 otherwise
        /// (wrong press or the no-press penalty). A press landing in the
        /// dark gap after a pressless window adds its own -1.
        #[test]
        fn prop_one_adjustment_per_window(
            target in arb_target(),
            lit in proptest::collection::vec(arb_button(), 0..8),
            dark in proptest::collection::vec(arb_button(), 0..8),
        ) {
            let mut trainer = Trainer::new();
            let before = trainer.score();
            play_round(&mut trainer, target, &lit, &dark);
            let delta = trainer.score().wrapping_sub(before);

            let expected = match lit.first() {
                Some(&b) if b == target.expected_button() => CORRECT_PRESS_REWARD,
                Some(_) => -PENALTY,
                // No-press penalty at close; first dark press still counts
                // as a press-while-off on top of it
                None if dark.is_empty() => -PENALTY,
                None => -PENALTY - PENALTY,
            };
            prop_assert_eq!(delta, expected);
        }

        /// Presses after the first qualifying one never change the score.
        #[test]
        fn prop_extra_presses_are_inert(
            target in arb_target(),
            first in arb_button(),
            extras in proptest::collection::vec(arb_button(), 1..16),
        ) {
            let mut trainer = Trainer::new();
            trainer.begin_round(target);
            trainer.report_press(first);
            let settled = trainer.score();
            for b in extras {
                prop_assert_eq!(trainer.report_press(b), Verdict::Ignored);
            }
            prop_assert_eq!(trainer.score(), settled);
        }
    }
}
