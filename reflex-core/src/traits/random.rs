//! Random target source trait

use crate::target::Target;

/// Source of the per-round target choice
///
/// Implementations should draw uniformly over the four targets. How the
/// generator is seeded is out of scope; the trainer only asks for the next
/// draw at the top of each round.
pub trait TargetSource {
    /// Draw the next target
    fn next_target(&mut self) -> Target;
}

/// Fixed sequence of targets, for tests and demos
pub struct FixedTargets<'a> {
    sequence: &'a [Target],
    position: usize,
}

impl<'a> FixedTargets<'a> {
    /// Create a source that cycles through `sequence`
    ///
    /// # Panics
    ///
    /// Panics if `sequence` is empty; a target source must always have a
    /// next draw.
    pub const fn new(sequence: &'a [Target]) -> Self {
        assert!(!sequence.is_empty());
        Self {
            sequence,
            position: 0,
        }
    }
}

impl TargetSource for FixedTargets<'_> {
    fn next_target(&mut self) -> Target {
        let target = self.sequence[self.position % self.sequence.len()];
        self.position += 1;
        target
    }
}
