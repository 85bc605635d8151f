#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`MixerState`**: The selected channel plus the three 8-bit intensities
//! - **`MixerChannel`**: Which channel is being edited (`Standby` when none)
//! - **`Direction`**: One-sample classification of the encoder's two lines
//! - **`RgbMixer`**: Polling controller that owns the state and the pins
//! - **`PollOutcome`**: What one polling iteration did
//! - **`DigitalInput` / `IndicatorLeds` / `RgbPwm` / `DelaySource`**: Traits
//!   to implement for your hardware
//!
//! Intensities are plain `u8` values (0-255) mapped one-to-one onto PWM duty
//! cycles; the mixed color is exposed as `palette::Srgb<u8>` for convenience.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod controller;
pub mod encoder;
pub mod hal;
pub mod mixer;

pub use controller::{DEFAULT_DEBOUNCE_MS, MixerConfig, PollOutcome, RgbMixer};
pub use encoder::Direction;
pub use hal::{DelaySource, DigitalInput, IndicatorLeds, RgbPwm};
pub use mixer::{MixerChannel, MixerState};

/// All three channels at zero intensity.
pub const COLOR_OFF: Srgb<u8> = Srgb::new(0, 0, 0);
