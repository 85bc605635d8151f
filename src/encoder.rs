//! Rotary encoder direction classification.
//!
//! The encoder exposes two switch lines that open and close out of phase as
//! the shaft turns. Sampling both lines at the same instant is enough to tell
//! which way the shaft is moving at that moment, so the classifier here is a
//! pure function of one sample with no phase history.

/// Rotation sense inferred from one sample of the encoder's two lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Shaft turning clockwise; the active channel should step up.
    Clockwise,

    /// Shaft turning counter-clockwise; the active channel should step down.
    CounterClockwise,

    /// No rotation detected in this sample.
    None,
}

impl Direction {
    /// Classifies one instantaneous sample of the encoder's two switch lines.
    ///
    /// Only the two out-of-phase combinations indicate movement; when both
    /// lines read the same level the shaft is resting on a notch (or mid
    /// transition) and `Direction::None` is returned.
    ///
    /// Every input combination maps to a defined output, so callers never
    /// need to handle an error case. Poll repeatedly to track sustained
    /// rotation. Very fast or off-notch rotation can misread by one step;
    /// that is an accepted tradeoff of single-sample classification, not
    /// something callers should try to correct for.
    pub fn from_lines(line_a: bool, line_b: bool) -> Self {
        match (line_a, line_b) {
            (false, true) => Direction::Clockwise,
            (true, false) => Direction::CounterClockwise,
            _ => Direction::None,
        }
    }
}
