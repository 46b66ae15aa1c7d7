//! Scriptable audio output for tests.

use std::cell::{Cell, RefCell};

use crate::playback::output::AudioOutput;

/// Records what the controller asked for; tests flip `paused`, `ended` and
/// `duration` to stand in for the browser.
pub struct FakeOutput {
    pub source: RefCell<Option<String>>,
    pub paused: Cell<bool>,
    pub ended: Cell<bool>,
    pub position: Cell<f64>,
    pub duration: Cell<f64>,
    pub volume: Cell<f64>,
}

impl FakeOutput {
    pub fn new() -> Self {
        Self {
            source: RefCell::new(None),
            paused: Cell::new(true),
            ended: Cell::new(false),
            position: Cell::new(0.0),
            duration: Cell::new(f64::NAN),
            volume: Cell::new(1.0),
        }
    }

    /// What an `<audio>` element reports once it plays to the end.
    pub fn finish(&self) {
        self.ended.set(true);
        self.paused.set(true);
    }
}

impl AudioOutput for FakeOutput {
    fn set_source(&self, url: &str) {
        *self.source.borrow_mut() = Some(url.to_string());
        self.position.set(0.0);
        self.ended.set(false);
    }
    fn play(&self) {
        self.paused.set(false);
    }
    fn pause(&self) {
        self.paused.set(true);
    }
    fn is_paused(&self) -> bool {
        self.paused.get()
    }
    fn has_ended(&self) -> bool {
        self.ended.get()
    }
    fn position(&self) -> f64 {
        self.position.get()
    }
    fn set_position(&self, seconds: f64) {
        self.position.set(seconds);
    }
    fn duration(&self) -> f64 {
        self.duration.get()
    }
    fn set_volume(&self, level: f64) {
        self.volume.set(level);
    }
}
