//! Channel selection and intensity state.
//!
//! Provides [`MixerState`], the single value record behind the whole mixer:
//! which channel is selected for editing (if any) and the three 8-bit
//! intensity values. Its two operations, [`MixerState::advance`] and
//! [`MixerState::adjust`], are total - every call from every state is
//! defined and neither can fail.

use crate::encoder::Direction;
use palette::Srgb;

/// The channel currently selected for editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MixerChannel {
    /// No channel selected; encoder input has no effect.
    #[default]
    Standby,
    /// Red channel selected.
    Red,
    /// Green channel selected.
    Green,
    /// Blue channel selected.
    Blue,
}

impl MixerChannel {
    /// Cyclic successor: Standby → Red → Green → Blue → Standby.
    pub fn next(self) -> Self {
        match self {
            MixerChannel::Standby => MixerChannel::Red,
            MixerChannel::Red => MixerChannel::Green,
            MixerChannel::Green => MixerChannel::Blue,
            MixerChannel::Blue => MixerChannel::Standby,
        }
    }
}

/// The mixer's complete state: selected channel plus the three intensities.
///
/// Created once at startup via [`MixerState::new`] (standby, all channels at
/// zero) and then mutated exclusively through [`advance`](MixerState::advance)
/// and [`adjust`](MixerState::adjust). Only the channel equal to the current
/// selection is ever written; the other two hold their values until the
/// selection comes back around to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MixerState {
    channel: MixerChannel,
    red: u8,
    green: u8,
    blue: u8,
}

impl MixerState {
    /// Creates the initial state: standby with all channels at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the channel currently selected for editing.
    pub fn active_channel(&self) -> MixerChannel {
        self.channel
    }

    /// Returns the red channel's intensity.
    pub fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green channel's intensity.
    pub fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue channel's intensity.
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the mixed color as an 8-bit sRGB value.
    pub fn color(&self) -> Srgb<u8> {
        Srgb::new(self.red, self.green, self.blue)
    }

    /// Moves the selection to the next channel in the cycle and returns it.
    ///
    /// Standby → Red → Green → Blue → Standby. Intensity values are never
    /// touched by this operation, so they persist through standby.
    pub fn advance(&mut self) -> MixerChannel {
        self.channel = self.channel.next();
        self.channel
    }

    /// Applies one encoder step to the selected channel.
    ///
    /// `Clockwise` steps the channel up by one and `CounterClockwise` steps
    /// it down by one, saturating silently at the 255 and 0 bounds.
    /// `Direction::None` leaves everything unchanged, as does any call made
    /// while in standby.
    ///
    /// Returns the (possibly unchanged) intensity of the selected channel,
    /// or 0 in standby.
    pub fn adjust(&mut self, direction: Direction) -> u8 {
        let level = match self.channel {
            MixerChannel::Standby => return 0,
            MixerChannel::Red => &mut self.red,
            MixerChannel::Green => &mut self.green,
            MixerChannel::Blue => &mut self.blue,
        };

        match direction {
            Direction::Clockwise => *level = level.saturating_add(1),
            Direction::CounterClockwise => *level = level.saturating_sub(1),
            Direction::None => {}
        }

        *level
    }
}
