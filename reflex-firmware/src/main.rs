//! Reflex - Reaction Trainer Firmware
//!
//! Main firmware binary for RP2040-based reflex trainers. One of four LEDs
//! lights at a random position; pressing the matching button while it is
//! lit scores +3, a wrong press, a press in the dark, or no press at all
//! scores -1. The running score shows on an HD44780 character LCD.
//!
//! All game logic lives in reflex-core; this binary only wires pins and
//! spawns tasks.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use reflex_core::target::Button;
use reflex_drivers::{Hd44780, LedBank};

mod channels;
mod config;
mod gpio;
mod tasks;

use crate::gpio::BoardPin;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Reflex trainer starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Target LEDs on GPIO2-5, channel order matching the core channel map
    let leds = LedBank::new([
        BoardPin::new(Output::new(p.PIN_2, Level::Low)),
        BoardPin::new(Output::new(p.PIN_3, Level::Low)),
        BoardPin::new(Output::new(p.PIN_4, Level::Low)),
        BoardPin::new(Output::new(p.PIN_5, Level::Low)),
    ]);

    // LCD in 4-bit mode: RS=GPIO10, EN=GPIO11, D4-D7=GPIO12-15
    let lcd = Hd44780::new(
        BoardPin::new(Output::new(p.PIN_10, Level::Low)),
        BoardPin::new(Output::new(p.PIN_11, Level::Low)),
        [
            BoardPin::new(Output::new(p.PIN_12, Level::Low)),
            BoardPin::new(Output::new(p.PIN_13, Level::Low)),
            BoardPin::new(Output::new(p.PIN_14, Level::Low)),
            BoardPin::new(Output::new(p.PIN_15, Level::Low)),
        ],
        Delay,
    );

    info!("LED bank and LCD pins configured");

    // Buttons on GPIO6-9, rising edge against pull-downs, one task per line
    spawner
        .spawn(tasks::button_task(
            Input::new(p.PIN_6, Pull::Down),
            Button::B1,
        ))
        .unwrap();
    spawner
        .spawn(tasks::button_task(
            Input::new(p.PIN_7, Pull::Down),
            Button::B2,
        ))
        .unwrap();
    spawner
        .spawn(tasks::button_task(
            Input::new(p.PIN_8, Pull::Down),
            Button::B3,
        ))
        .unwrap();
    spawner
        .spawn(tasks::button_task(
            Input::new(p.PIN_9, Pull::Down),
            Button::B4,
        ))
        .unwrap();

    spawner.spawn(tasks::round_task(leds, lcd)).unwrap();

    info!("All tasks spawned, trainer running");
}
