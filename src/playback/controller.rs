use tracing::{debug, info, warn};

use crate::api::{Album, Track};
use crate::error::{PlayerError, Result};
use crate::playback::clock::clamp_unit;
use crate::playback::output::AudioOutput;

/// Level restored when unmuting from silence.
pub const DEFAULT_VOLUME: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    /// Nothing loaded into the output yet.
    #[default]
    Idle,
    Paused,
    Playing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub album: Option<Album>,
    pub tracks: Vec<Track>,
    pub loaded: Option<Track>,
    pub status: PlaybackStatus,
    pub volume: f64,
    volume_before_mute: Option<f64>,
}

impl PlaybackState {
    fn new(volume: f64) -> Self {
        Self {
            album: None,
            tracks: Vec::new(),
            loaded: None,
            status: PlaybackStatus::Idle,
            volume,
            volume_before_mute: None,
        }
    }

    /// Position of the loaded track in the current list. `None` when nothing is
    /// loaded or the list was replaced by one that does not contain it.
    pub fn current_index(&self) -> Option<usize> {
        let loaded = self.loaded.as_ref()?;
        self.tracks
            .iter()
            .position(|t| t.stream_url == loaded.stream_url)
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    pub fn is_muted(&self) -> bool {
        self.volume <= 0.0
    }
}

/// Target of `next` with wraparound; an unlocated track restarts at 0.
pub fn next_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match current {
        Some(index) if index + 1 < len => index + 1,
        _ => 0,
    })
}

/// Target of `previous` with wraparound; an unlocated track jumps to the end.
pub fn previous_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match current {
        Some(index) if index > 0 && index < len => index - 1,
        _ => len - 1,
    })
}

/// Owns the playback state and drives an [`AudioOutput`].
pub struct PlaybackController<A> {
    output: A,
    state: PlaybackState,
    auto_advance: bool,
}

impl<A: AudioOutput> PlaybackController<A> {
    pub fn new(output: A, volume: f64) -> Self {
        let volume = clamp_unit(volume);
        output.set_volume(volume);
        Self {
            output,
            state: PlaybackState::new(volume),
            auto_advance: true,
        }
    }

    pub fn with_auto_advance(mut self, enabled: bool) -> Self {
        self.auto_advance = enabled;
        self
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn output(&self) -> &A {
        &self.output
    }

    pub fn status(&self) -> PlaybackStatus {
        self.state.status
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index()
    }

    /// Swap in the track list of another album. The loaded track keeps playing.
    pub fn replace_playlist(&mut self, album: Album, tracks: Vec<Track>) {
        debug!(folder = %album.folder, count = tracks.len(), "replacing playlist");
        self.state.album = Some(album);
        self.state.tracks = tracks;
    }

    /// Make `tracks` the playlist and load its first track. An empty album
    /// only replaces the list.
    pub fn open_album(&mut self, album: Album, tracks: Vec<Track>, autoplay: bool) -> Option<usize> {
        self.replace_playlist(album, tracks);
        self.load_index(0, autoplay)
    }

    pub fn load(&mut self, track: Track, autoplay: bool) {
        info!(track = %track.name, autoplay, "loading track");
        self.output.set_source(&track.stream_url);
        if autoplay {
            self.output.play();
            self.state.status = PlaybackStatus::Playing;
        } else {
            self.output.pause();
            self.state.status = PlaybackStatus::Paused;
        }
        self.state.loaded = Some(track);
    }

    /// Load the track at `index` of the current list; out of range is a no-op.
    pub fn load_index(&mut self, index: usize, autoplay: bool) -> Option<usize> {
        let track = self.state.tracks.get(index)?.clone();
        self.load(track, autoplay);
        Some(index)
    }

    pub fn toggle_play_pause(&mut self) -> PlaybackStatus {
        match self.state.status {
            PlaybackStatus::Idle => {}
            PlaybackStatus::Playing => {
                self.output.pause();
                self.state.status = PlaybackStatus::Paused;
            }
            PlaybackStatus::Paused => {
                self.output.play();
                self.state.status = PlaybackStatus::Playing;
            }
        }
        self.state.status
    }

    pub fn next(&mut self) -> Option<usize> {
        let current = self.current_index();
        let Some(target) = next_index(current, self.state.tracks.len()) else {
            warn!("no tracks loaded to go next");
            return None;
        };
        self.load_index(target, true)
    }

    pub fn previous(&mut self) -> Option<usize> {
        let current = self.current_index();
        let Some(target) = previous_index(current, self.state.tracks.len()) else {
            warn!("no tracks loaded to go previous");
            return None;
        };
        self.load_index(target, true)
    }

    /// Jump to `fraction` of the track. Returns the new position in seconds.
    pub fn seek(&mut self, fraction: f64) -> Result<f64> {
        if self.state.status == PlaybackStatus::Idle {
            return Err(PlayerError::PlaybackNotReady("no track loaded"));
        }
        let duration = self.output.duration();
        if !duration.is_finite() || duration <= 0.0 {
            return Err(PlayerError::PlaybackNotReady("duration unknown"));
        }
        let position = clamp_unit(fraction) * duration;
        self.output.set_position(position);
        Ok(position)
    }

    pub fn set_volume(&mut self, level: f64) -> f64 {
        let level = clamp_unit(level);
        self.output.set_volume(level);
        self.state.volume = level;
        if level > 0.0 {
            self.state.volume_before_mute = None;
        }
        level
    }

    /// Mute, or restore the level from before muting. Returns the muted flag.
    pub fn toggle_mute(&mut self) -> bool {
        if self.state.is_muted() {
            let restored = self
                .state
                .volume_before_mute
                .take()
                .unwrap_or(DEFAULT_VOLUME);
            self.set_volume(restored);
        } else {
            let previous = self.state.volume;
            self.set_volume(0.0);
            self.state.volume_before_mute = Some(previous);
        }
        self.state.is_muted()
    }

    /// The output finished the loaded track.
    pub fn on_track_ended(&mut self) -> Option<usize> {
        if self.state.status == PlaybackStatus::Idle {
            return None;
        }
        if self.auto_advance {
            if let Some(index) = self.next() {
                return Some(index);
            }
        }
        self.state.status = PlaybackStatus::Paused;
        None
    }

    /// Follow pause/play changes made outside the UI (media keys, autoplay
    /// blocking). Returns whether the status changed.
    pub fn sync_with_output(&mut self) -> bool {
        if self.state.status == PlaybackStatus::Idle {
            return false;
        }
        let observed = if self.output.is_paused() {
            PlaybackStatus::Paused
        } else {
            PlaybackStatus::Playing
        };
        if observed == self.state.status {
            return false;
        }
        debug!(?observed, "playback status changed outside the player");
        self.state.status = observed;
        true
    }
}
