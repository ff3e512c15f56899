//! Score-to-glyph rendering
//!
//! Converts the signed score into the exact byte sequence the display
//! shows: an optional minus sign followed by one or two ASCII digits.
//! Defined for scores in [-99, 99]; anything wider than two digits is out
//! of the display's range and not rendered meaningfully.

use heapless::Vec;

/// ASCII offset for digit conversion
const ASCII_ZERO: u8 = b'0';

/// Longest glyph sequence: sign plus two digits
pub const MAX_GLYPHS: usize = 3;

/// Render a score as display glyphs
///
/// The absolute value is taken before the divmod split. Doing the divmod
/// on the signed value would reintroduce the sign into the digit
/// arithmetic, so the ordering here is load-bearing.
pub fn score_glyphs(score: i8) -> Vec<u8, MAX_GLYPHS> {
    let mut glyphs = Vec::new();

    if score < 0 {
        let _ = glyphs.push(b'-');
    }

    let magnitude = score.unsigned_abs();
    if magnitude < 10 {
        let _ = glyphs.push(ASCII_ZERO + magnitude);
    } else {
        let _ = glyphs.push(ASCII_ZERO + magnitude / 10);
        let _ = glyphs.push(ASCII_ZERO + magnitude % 10);
    }

    glyphs
}
