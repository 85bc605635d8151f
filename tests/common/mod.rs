//! Shared test infrastructure for rgb-knob-mixer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use palette::Srgb;
use rgb_knob_mixer::{DelaySource, DigitalInput, IndicatorLeds, MixerConfig, RgbMixer, RgbPwm};

// ============================================================================
// Mock Inputs
// ============================================================================

/// Digital input backed by a shared level.
///
/// The mixer owns one clone, the test keeps another and flips the level
/// between polls.
#[derive(Clone, Default)]
pub struct TestPin {
    level: Rc<Cell<bool>>,
}

impl TestPin {
    pub fn new(level: bool) -> Self {
        Self {
            level: Rc::new(Cell::new(level)),
        }
    }

    pub fn set(&self, level: bool) {
        self.level.set(level);
    }
}

impl DigitalInput for TestPin {
    fn read(&mut self) -> bool {
        self.level.get()
    }
}

// ============================================================================
// Mock Outputs
// ============================================================================

/// Status LED mock recording every update.
#[derive(Clone, Default)]
pub struct TestIndicators {
    history: Rc<RefCell<heapless::Vec<(bool, bool, bool), 32>>>,
}

impl TestIndicators {
    pub fn last(&self) -> Option<(bool, bool, bool)> {
        self.history.borrow().last().copied()
    }

    pub fn update_count(&self) -> usize {
        self.history.borrow().len()
    }
}

impl IndicatorLeds for TestIndicators {
    fn set_levels(&mut self, red: bool, green: bool, blue: bool) {
        let _ = self.history.borrow_mut().push((red, green, blue));
    }
}

/// PWM mock recording every color write.
#[derive(Clone, Default)]
pub struct TestPwm {
    history: Rc<RefCell<heapless::Vec<Srgb<u8>, 64>>>,
}

impl TestPwm {
    pub fn last(&self) -> Option<Srgb<u8>> {
        self.history.borrow().last().copied()
    }

    pub fn write_count(&self) -> usize {
        self.history.borrow().len()
    }
}

impl RgbPwm for TestPwm {
    fn set_color(&mut self, color: Srgb<u8>) {
        let _ = self.history.borrow_mut().push(color);
    }
}

/// Delay mock that records requested durations instead of blocking.
#[derive(Clone, Default)]
pub struct TestDelay {
    calls: Rc<RefCell<heapless::Vec<u32, 32>>>,
}

impl TestDelay {
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn last_ms(&self) -> Option<u32> {
        self.calls.borrow().last().copied()
    }
}

impl DelaySource for TestDelay {
    fn delay_ms(&mut self, millis: u32) {
        let _ = self.calls.borrow_mut().push(millis);
    }
}

// ============================================================================
// Fixture
// ============================================================================

pub type TestMixer = RgbMixer<TestPin, TestPin, TestPin, TestIndicators, TestPwm, TestDelay>;

/// Test-side handles to everything the mixer owns.
pub struct Harness {
    pub button: TestPin,
    pub line_a: TestPin,
    pub line_b: TestPin,
    pub indicators: TestIndicators,
    pub pwm: TestPwm,
    pub delay: TestDelay,
}

impl Harness {
    /// Sets both encoder lines at once.
    pub fn set_lines(&self, line_a: bool, line_b: bool) {
        self.line_a.set(line_a);
        self.line_b.set(line_b);
    }

    /// Simulates one debounced button press: press, poll once, release.
    pub fn press(&self, mixer: &mut TestMixer) -> rgb_knob_mixer::PollOutcome {
        self.button.set(true);
        let outcome = mixer.poll();
        self.button.set(false);
        outcome
    }
}

/// Builds a mixer wired to fresh mocks, all inputs released.
pub fn mixer_with_harness(config: MixerConfig) -> (TestMixer, Harness) {
    let harness = Harness {
        button: TestPin::new(false),
        line_a: TestPin::new(false),
        line_b: TestPin::new(false),
        indicators: TestIndicators::default(),
        pwm: TestPwm::default(),
        delay: TestDelay::default(),
    };

    let mixer = RgbMixer::new(
        harness.button.clone(),
        harness.line_a.clone(),
        harness.line_b.clone(),
        harness.indicators.clone(),
        harness.pwm.clone(),
        harness.delay.clone(),
        config,
    );

    (mixer, harness)
}
