//! LED bank output
//!
//! Four independent indicator LEDs behind plain GPIO pins, addressed by
//! the channel indices in the core channel map.

use reflex_core::target::Target;
use reflex_hal::OutputPin;

/// Bank of four target LEDs
pub struct LedBank<P> {
    channels: [P; 4],
}

impl<P: OutputPin> LedBank<P> {
    /// Create a bank; all channels start dark
    pub fn new(channels: [P; 4]) -> Self {
        let mut bank = Self { channels };
        bank.all_off();
        bank
    }

    /// Drive one channel high
    pub fn set_high(&mut self, channel: u8) {
        if let Some(pin) = self.channels.get_mut(channel as usize) {
            pin.set_high();
        }
    }

    /// Drive one channel low
    pub fn set_low(&mut self, channel: u8) {
        if let Some(pin) = self.channels.get_mut(channel as usize) {
            pin.set_low();
        }
    }

    /// Illuminate the LED paired with a target
    pub fn light(&mut self, target: Target) {
        self.set_high(target.led_channel());
    }

    /// Darken the LED paired with a target
    pub fn darken(&mut self, target: Target) {
        self.set_low(target.led_channel());
    }

    /// Darken every channel
    pub fn all_off(&mut self) {
        for pin in self.channels.iter_mut() {
            pin.set_low();
        }
    }

    /// Check whether a channel is currently lit
    pub fn is_lit(&self, channel: u8) -> bool {
        self.channels
            .get(channel as usize)
            .is_some_and(|pin| pin.is_set_high())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: true } // starts high to prove new() clears it
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn make_bank() -> LedBank<MockPin> {
        LedBank::new([MockPin::new(), MockPin::new(), MockPin::new(), MockPin::new()])
    }

    #[test]
    fn test_bank_starts_dark() {
        let bank = make_bank();
        for channel in 0..4 {
            assert!(!bank.is_lit(channel));
        }
    }

    #[test]
    fn test_light_and_darken_target() {
        let mut bank = make_bank();

        bank.light(Target::L3);
        assert!(bank.is_lit(Target::L3.led_channel()));
        assert!(!bank.is_lit(Target::L1.led_channel()));

        bank.darken(Target::L3);
        assert!(!bank.is_lit(Target::L3.led_channel()));
    }

    #[test]
    fn test_out_of_range_channel_is_ignored() {
        let mut bank = make_bank();
        bank.set_high(7);
        assert!(!bank.is_lit(7));
        for channel in 0..4 {
            assert!(!bank.is_lit(channel));
        }
    }
}
