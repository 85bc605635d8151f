//! Polling controller tying the mixer state to the hardware pins.
//!
//! Provides [`RgbMixer`] which owns the [`MixerState`] and the five hardware
//! collaborators (button, two encoder lines, status LEDs, PWM channels) plus
//! a delay source for debounce. One call to [`RgbMixer::poll`] performs one
//! iteration of the firmware main loop.

use crate::COLOR_OFF;
use crate::encoder::Direction;
use crate::hal::{DelaySource, DigitalInput, IndicatorLeds, RgbPwm};
use crate::mixer::{MixerChannel, MixerState};

/// Default debounce delay after a detected button press.
pub const DEFAULT_DEBOUNCE_MS: u32 = 250;

/// Timing configuration for the mixer.
///
/// Pin mapping lives with the trait implementations, so the only knob here
/// is the debounce duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MixerConfig {
    /// Blocking delay inserted after each detected button press, to absorb
    /// mechanical switch bounce.
    pub debounce_ms: u32,
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// What happened during one polling iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollOutcome {
    /// A button press advanced the selection to this channel.
    ChannelChanged(MixerChannel),

    /// An encoder step was applied; the selected channel now holds this
    /// level. Reported even when the step saturated at a bound.
    LevelAdjusted {
        /// The channel that was adjusted.
        channel: MixerChannel,
        /// The channel's (possibly clamped) intensity after the step.
        level: u8,
    },

    /// No press and no rotation this iteration.
    Idle,
}

/// Mixes a three-channel RGB LED from a rotary encoder and a push-button.
///
/// The controller owns its pins and runs entirely on the caller's thread:
/// call [`poll`](RgbMixer::poll) in a tight loop (or use
/// [`run`](RgbMixer::run)). Each iteration handles at most one button press
/// or one encoder sample, so the polling rate bounds the fastest rotation
/// the mixer can follow.
///
/// # Type Parameters
/// * `B` - Button input
/// * `EA` - Encoder line A input
/// * `EB` - Encoder line B input
/// * `I` - Status LED implementation
/// * `P` - PWM implementation
/// * `D` - Delay source
pub struct RgbMixer<B, EA, EB, I, P, D>
where
    B: DigitalInput,
    EA: DigitalInput,
    EB: DigitalInput,
    I: IndicatorLeds,
    P: RgbPwm,
    D: DelaySource,
{
    state: MixerState,
    config: MixerConfig,
    button: B,
    line_a: EA,
    line_b: EB,
    indicators: I,
    pwm: P,
    delay: D,
}

impl<B, EA, EB, I, P, D> RgbMixer<B, EA, EB, I, P, D>
where
    B: DigitalInput,
    EA: DigitalInput,
    EB: DigitalInput,
    I: IndicatorLeds,
    P: RgbPwm,
    D: DelaySource,
{
    /// Creates a new mixer in standby, driving all outputs to their idle
    /// pattern: status LEDs off and PWM at zero on every channel.
    pub fn new(
        button: B,
        line_a: EA,
        line_b: EB,
        mut indicators: I,
        mut pwm: P,
        delay: D,
        config: MixerConfig,
    ) -> Self {
        indicators.set_levels(false, false, false);
        pwm.set_color(COLOR_OFF);

        Self {
            state: MixerState::new(),
            config,
            button,
            line_a,
            line_b,
            indicators,
            pwm,
            delay,
        }
    }

    /// Performs one iteration of the control loop.
    ///
    /// If the button reads pressed, blocks for the configured debounce
    /// delay, advances the channel selection and mirrors it to the status
    /// LEDs. Otherwise, while a channel is selected, samples the encoder
    /// once, applies the classified step to the selected channel and
    /// re-asserts all three PWM levels. The PWM re-assert happens on every
    /// such iteration, including when no rotation was detected, so the LED
    /// always reflects the current state. In standby the encoder is not
    /// sampled at all.
    pub fn poll(&mut self) -> PollOutcome {
        if self.button.read() {
            self.delay.delay_ms(self.config.debounce_ms);

            let channel = self.state.advance();
            self.mirror_selection(channel);
            return PollOutcome::ChannelChanged(channel);
        }

        let channel = self.state.active_channel();
        if channel == MixerChannel::Standby {
            return PollOutcome::Idle;
        }

        let direction = Direction::from_lines(self.line_a.read(), self.line_b.read());
        let level = self.state.adjust(direction);
        self.pwm.set_color(self.state.color());

        match direction {
            Direction::None => PollOutcome::Idle,
            _ => PollOutcome::LevelAdjusted { channel, level },
        }
    }

    /// Runs the control loop forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.poll();
        }
    }

    /// Returns the current mixer state.
    pub fn state(&self) -> MixerState {
        self.state
    }

    /// Returns the channel currently selected for editing.
    pub fn active_channel(&self) -> MixerChannel {
        self.state.active_channel()
    }

    /// Returns the currently mixed color.
    pub fn color(&self) -> palette::Srgb<u8> {
        self.state.color()
    }

    /// Returns the timing configuration.
    pub fn config(&self) -> MixerConfig {
        self.config
    }

    // Exactly one LED high per selected channel, none in standby.
    fn mirror_selection(&mut self, channel: MixerChannel) {
        let (red, green, blue) = match channel {
            MixerChannel::Standby => (false, false, false),
            MixerChannel::Red => (true, false, false),
            MixerChannel::Green => (false, true, false),
            MixerChannel::Blue => (false, false, true),
        };
        self.indicators.set_levels(red, green, blue);
    }
}
