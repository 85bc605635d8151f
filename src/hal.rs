//! Hardware abstraction traits for platform-agnostic pin access.
//!
//! Implement these for your platform's GPIO, PWM and timer peripherals to
//! let [`RgbMixer`](crate::RgbMixer) drive them. All methods are infallible
//! by design: handle any hardware errors internally.

use palette::Srgb;

/// Trait for abstracting a digital input line (button or encoder phase).
pub trait DigitalInput {
    /// Returns the instantaneous logical level of the line.
    ///
    /// `true` means asserted: a pressed button or a closed encoder switch.
    /// Implementations own the electrical details, so an active-low input
    /// should invert the raw pin level here.
    fn read(&mut self) -> bool;
}

/// Trait for abstracting the three discrete channel-status LEDs.
pub trait IndicatorLeds {
    /// Drives the three status LEDs to the given levels.
    ///
    /// The mixer calls this with at most one level high: the LED matching
    /// the selected channel, or all low in standby.
    fn set_levels(&mut self, red: bool, green: bool, blue: bool);
}

/// Trait for abstracting the RGB LED's three PWM channels.
pub trait RgbPwm {
    /// Drives the three PWM channels to the given 8-bit intensities.
    ///
    /// Implementations should map each component directly to the duty cycle
    /// of the matching channel. Handle any hardware errors internally - this
    /// method cannot fail.
    fn set_color(&mut self, color: Srgb<u8>);
}

/// Trait for abstracting a blocking delay, used only for button debounce.
pub trait DelaySource {
    /// Blocks the calling thread for at least `millis` milliseconds.
    fn delay_ms(&mut self, millis: u32);
}
