//! Target identifiers and channel mapping
//!
//! Each round illuminates exactly one of four targets. A target pairs an
//! LED output channel with the button that counts as the correct answer.
//! The pairing is a lookup table rather than control flow, so adding a
//! fifth channel would be a data change.

/// One of the four illuminable targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Target {
    L1,
    L2,
    L3,
    L4,
}

/// One of the four input buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    B1,
    B2,
    B3,
    B4,
}

/// Output/input channel pair for a target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelMap {
    /// LED bank channel index (0-3)
    pub led: u8,
    /// Button that scores for this target
    pub button: Button,
}

/// Target -> (LED channel, expected button), indexed by `Target::index`
pub const CHANNEL_MAP: [ChannelMap; 4] = [
    ChannelMap { led: 0, button: Button::B1 },
    ChannelMap { led: 1, button: Button::B2 },
    ChannelMap { led: 2, button: Button::B3 },
    ChannelMap { led: 3, button: Button::B4 },
];

impl Target {
    /// All targets, in channel order
    pub const ALL: [Target; 4] = [Target::L1, Target::L2, Target::L3, Target::L4];

    /// Zero-based channel index
    pub const fn index(self) -> usize {
        match self {
            Target::L1 => 0,
            Target::L2 => 1,
            Target::L3 => 2,
            Target::L4 => 3,
        }
    }

    /// Look up a target by channel index
    ///
    /// Returns `None` for indices outside 0-3.
    pub const fn from_index(index: usize) -> Option<Target> {
        match index {
            0 => Some(Target::L1),
            1 => Some(Target::L2),
            2 => Some(Target::L3),
            3 => Some(Target::L4),
            _ => None,
        }
    }

    /// Channel pairing for this target
    pub const fn channels(self) -> ChannelMap {
        CHANNEL_MAP[self.index()]
    }

    /// LED bank channel this target illuminates
    pub const fn led_channel(self) -> u8 {
        self.channels().led
    }

    /// Button that counts as the correct answer
    pub const fn expected_button(self) -> Button {
        self.channels().button
    }
}

impl Button {
    /// Zero-based channel index
    pub const fn index(self) -> usize {
        match self {
            Button::B1 => 0,
            Button::B2 => 1,
            Button::B3 => 2,
            Button::B4 => 3,
        }
    }
}
