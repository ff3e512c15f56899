//! Per-round outcome latch
//!
//! Records whether a press was observed during the current round and
//! whether it matched the target. The first qualifying press wins; every
//! edge after it is ignored until the round ends, which is the only defense
//! against bouncing or repeated presses.
//!
//! The latch carries two independently cleared pieces of state:
//!
//! - the observation, cleared at round *start* (before the LED goes on, so
//!   nothing from the previous round can leak in), and
//! - the counted marker, cleared only at round *end*.
//!
//! A press in the dark gap between rounds therefore sets the counted marker
//! and suppresses scoring for the round that follows.

/// What the latch observed this round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Observation {
    /// No press seen since the observation was last cleared
    Idle,
    /// A press was seen; `correct` is whether it matched the armed target
    Observed { correct: bool },
}

impl Observation {
    /// Check whether any press was observed
    pub fn any_press(&self) -> bool {
        matches!(self, Observation::Observed { .. })
    }
}

/// Round outcome latch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RoundLatch {
    observation: Observation,
    /// First press already counted this round
    counted: bool,
}

impl RoundLatch {
    /// Create a latch in the power-on state
    pub const fn new() -> Self {
        Self {
            observation: Observation::Idle,
            counted: false,
        }
    }

    /// Current observation
    pub fn observation(&self) -> Observation {
        self.observation
    }

    /// Check whether the first press of this round has been counted
    pub fn is_counted(&self) -> bool {
        self.counted
    }

    /// Clear the observation (round start, before the LED goes on)
    pub fn clear_observation(&mut self) {
        self.observation = Observation::Idle;
    }

    /// Record the first qualifying press
    ///
    /// Sets both the observation and the counted marker. Callers must check
    /// [`is_counted`](Self::is_counted) first; the contract is first-writer-wins.
    pub fn observe(&mut self, correct: bool) {
        self.observation = Observation::Observed { correct };
        self.counted = true;
    }

    /// Reset the counted marker (round end)
    pub fn reset_counted(&mut self) {
        self.counted = false;
    }
}

impl Default for RoundLatch {
    fn default() -> Self {
        Self::new()
    }
}
