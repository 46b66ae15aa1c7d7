use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::api::{Album, Track};
use crate::db::{save_settings, PlayerSettings};
use crate::error::Result;
use crate::playback::{read_output, PlatformOutput, PlaybackController, PlaybackState, PollMemory};

pub type Controller = PlaybackController<PlatformOutput>;

/// Live position/duration read from the output by the poll loop.
#[derive(Clone, Copy)]
pub struct AudioState {
    pub current_time: Signal<f64>,
    pub duration: Signal<f64>,
}

impl AudioState {
    fn publish(self, position: f64, duration: f64) {
        let mut current_time = self.current_time;
        let mut duration_signal = self.duration;
        if *current_time.peek() != position {
            current_time.set(position);
        }
        let known = *duration_signal.peek();
        let unchanged = known == duration || (known.is_nan() && duration.is_nan());
        if !unchanged {
            duration_signal.set(duration);
        }
    }
}

/// Cheap copyable access to the controller for event handlers.
#[derive(Clone, Copy)]
pub struct PlayerHandle {
    controller: Signal<Controller>,
    settings: Signal<PlayerSettings>,
}

impl PlayerHandle {
    pub fn new(controller: Signal<Controller>, settings: Signal<PlayerSettings>) -> Self {
        Self {
            controller,
            settings,
        }
    }

    /// Snapshot of the state; subscribes the calling component.
    pub fn state(&self) -> PlaybackState {
        self.controller.read().state().clone()
    }

    pub fn open_album(&self, album: Album, tracks: Vec<Track>, autoplay: bool) {
        let mut controller = self.controller;
        controller.write().open_album(album, tracks, autoplay);
    }

    pub fn play_index(&self, index: usize, autoplay: bool) {
        let mut controller = self.controller;
        if controller.write().load_index(index, autoplay).is_none() {
            debug!(index, "no track at index");
        }
    }

    pub fn toggle_play_pause(&self) {
        let mut controller = self.controller;
        controller.write().toggle_play_pause();
    }

    pub fn next(&self) {
        let mut controller = self.controller;
        controller.write().next();
    }

    pub fn previous(&self) {
        let mut controller = self.controller;
        controller.write().previous();
    }

    pub fn seek(&self, fraction: f64) -> Result<f64> {
        let mut controller = self.controller;
        let result = controller.write().seek(fraction);
        result
    }

    pub fn set_volume(&self, level: f64) {
        let mut controller = self.controller;
        let applied = controller.write().set_volume(level);
        self.persist_volume(applied);
    }

    pub fn toggle_mute(&self) {
        let mut controller = self.controller;
        let level = {
            let mut controller = controller.write();
            controller.toggle_mute();
            controller.state().volume
        };
        self.persist_volume(level);
    }

    fn persist_volume(&self, level: f64) {
        let mut settings = self.settings;
        let snapshot = {
            let mut settings = settings.write();
            settings.volume = level;
            settings.clone()
        };
        if let Err(err) = save_settings(&snapshot) {
            warn!(%err, "could not save settings");
        }
    }

    /// One tick of the output poll: publish the clock, then let the
    /// controller react to a finished track or an outside pause/play.
    pub fn poll_output(&self, clock: AudioState, memory: &mut PollMemory) {
        let mut controller = self.controller;
        let reading = {
            let current = controller.peek();
            read_output(&*current, memory)
        };

        clock.publish(reading.position, reading.duration);

        if !reading.action.is_nothing() {
            reading.action.apply(&mut *controller.write());
        }
    }
}
