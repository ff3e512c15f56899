//! Board pin adapter
//!
//! Wraps an embassy-rp output so the drivers, which are generic over the
//! reflex-hal pin traits, can drive real board pins.

use embassy_rp::gpio::Output;
use reflex_hal::OutputPin;

/// An RP2040 output pin behind the reflex-hal trait
pub struct BoardPin(Output<'static>);

impl BoardPin {
    pub fn new(pin: Output<'static>) -> Self {
        Self(pin)
    }
}

impl OutputPin for BoardPin {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}
