//! HD44780 Character LCD Driver
//!
//! Drives an HD44780-compatible character display in 4-bit mode over six
//! GPIO lines: D4-D7, register select, and enable. Each byte goes out as
//! two nibble phases, high nibble first, with an enable strobe per nibble
//! and a settle delay after the full byte. The controller offers no
//! readback; honoring the settle delays is the whole protocol.

use embedded_hal::delay::DelayNs;
use reflex_core::traits::CharacterDisplay;
use reflex_hal::OutputPin;

/// Settle delay after an instruction byte, in microseconds
///
/// Instructions (clear in particular) take the controller far longer to
/// digest than character writes, so commands get the longer wait.
pub const CMD_SETTLE_US: u32 = 2_000;

/// Settle delay after a character byte, in microseconds
pub const DATA_SETTLE_US: u32 = 50;

/// HD44780 instruction set (the subset this driver issues)
mod cmd {
    /// 4-bit interface, two lines, 5x7 font
    pub const FUNCTION_SET_4BIT_5X7: u8 = 0x28;
    /// Display on, no cursor, no blink
    pub const DISPLAY_ON_NO_CURSOR: u8 = 0x0C;
    /// Auto-increment address, no display shift
    pub const ENTRY_AUTO_INCREMENT: u8 = 0x06;
    /// Address DDRAM at offset 0
    pub const SET_DDRAM_ORIGIN: u8 = 0x80;
    /// Erase the screen
    pub const CLEAR_SCREEN: u8 = 0x01;
}

/// HD44780 driver over six output pins
///
/// `data` holds D4-D7 in order, so `data[i]` carries bit `i` of the
/// current nibble.
pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    data: [P; 4],
    delay: D,
}

impl<P, D> Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Create a driver over the given pins
    ///
    /// Call [`CharacterDisplay::initialize`] before anything else; the
    /// controller powers up in 8-bit mode and ignores data until the
    /// function-set sequence runs.
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        Self { rs, en, data, delay }
    }

    /// Put one nibble on the bus and strobe it in
    fn write_nibble(&mut self, nibble: u8, rs_high: bool) {
        self.rs.set_state(rs_high);
        for (bit, pin) in self.data.iter_mut().enumerate() {
            pin.set_state(nibble & (1 << bit) != 0);
        }
        // Falling edge of EN latches the nibble
        self.en.set_high();
        self.en.set_low();
    }

    /// Two-phase byte transfer: high nibble, low nibble, settle
    fn write_byte(&mut self, byte: u8, rs_high: bool, settle_us: u32) {
        self.write_nibble(byte >> 4, rs_high);
        self.write_nibble(byte & 0x0F, rs_high);
        self.delay.delay_us(settle_us);
    }
}

impl<P, D> CharacterDisplay for Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    fn send_command(&mut self, code: u8) {
        self.write_byte(code, false, CMD_SETTLE_US);
    }

    fn send_data(&mut self, byte: u8) {
        self.write_byte(byte, true, DATA_SETTLE_US);
    }

    fn clear(&mut self) {
        self.send_command(cmd::SET_DDRAM_ORIGIN);
        self.send_command(cmd::CLEAR_SCREEN);
    }

    fn initialize(&mut self) {
        self.send_command(cmd::FUNCTION_SET_4BIT_5X7);
        self.send_command(cmd::DISPLAY_ON_NO_CURSOR);
        self.send_command(cmd::ENTRY_AUTO_INCREMENT);
        self.clear();
    }
}
