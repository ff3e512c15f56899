//! Character display trait
//!
//! Abstracts the score readout. The trainer only ever writes a short glyph
//! sequence to a freshly cleared screen, so the surface is small: raw
//! commands, raw data bytes, clear, and one-time initialization.
//!
//! All operations are fire-and-forget. The bus has no acknowledgment
//! channel; correctness rests on the driver honoring the display's settle
//! delays, which is the implementation's job and never the caller's.

use crate::render::score_glyphs;

/// Trait for the character display
pub trait CharacterDisplay {
    /// Send an instruction byte to the display controller
    fn send_command(&mut self, code: u8);

    /// Send a character byte to display memory
    fn send_data(&mut self, byte: u8);

    /// Reposition to the start address and erase the screen
    fn clear(&mut self);

    /// One-time power-on configuration sequence
    fn initialize(&mut self);
}

/// Helper trait for the trainer's one screen
pub trait DisplayExt: CharacterDisplay {
    /// Render the current score: clear, then sign and digit glyphs
    fn show_score(&mut self, score: i8) {
        self.clear();
        for glyph in score_glyphs(score) {
            self.send_data(glyph);
        }
    }
}

// Blanket implementation for all CharacterDisplay types
impl<T: CharacterDisplay> DisplayExt for T {}
