//! One tick of the output poll, kept apart from the signals that carry its
//! results so it can run against any [`AudioOutput`].

use crate::playback::controller::{PlaybackController, PlaybackStatus};
use crate::playback::output::AudioOutput;

/// What the poll remembers between ticks.
#[derive(Debug, Default)]
pub struct PollMemory {
    ended_for: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollAction {
    Nothing,
    /// The loaded track reached its end and has not been handled yet.
    TrackEnded,
    /// Paused/playing changed outside the player.
    Resync,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollReading {
    pub position: f64,
    pub duration: f64,
    pub action: PollAction,
}

/// Read the output without touching the controller. An ended track is
/// reported once per loaded track.
pub fn read_output<A: AudioOutput>(
    controller: &PlaybackController<A>,
    memory: &mut PollMemory,
) -> PollReading {
    let output = controller.output();
    let position = output.position();
    let duration = output.duration();

    let action = if output.has_ended() {
        let loaded = controller
            .state()
            .loaded
            .as_ref()
            .map(|track| track.stream_url.clone());
        if memory.ended_for != loaded {
            memory.ended_for = loaded;
            PollAction::TrackEnded
        } else {
            PollAction::Nothing
        }
    } else {
        memory.ended_for = None;
        let status = controller.status();
        let out_of_sync =
            status != PlaybackStatus::Idle && output.is_paused() == (status == PlaybackStatus::Playing);
        if out_of_sync {
            PollAction::Resync
        } else {
            PollAction::Nothing
        }
    };

    PollReading {
        position,
        duration,
        action,
    }
}

impl PollAction {
    pub fn is_nothing(self) -> bool {
        self == PollAction::Nothing
    }

    pub fn apply<A: AudioOutput>(self, controller: &mut PlaybackController<A>) {
        match self {
            PollAction::Nothing => {}
            PollAction::TrackEnded => {
                controller.on_track_ended();
            }
            PollAction::Resync => {
                controller.sync_with_output();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Album, Track};
    use crate::playback::testing::FakeOutput;

    fn controller_with(len: usize) -> PlaybackController<FakeOutput> {
        let mut controller = PlaybackController::new(FakeOutput::new(), 0.5);
        let tracks = (0..len)
            .map(|i| Track::new("songs", "mix", format!("Track {i}.mp3")))
            .collect();
        controller.replace_playlist(Album::new("songs", "mix", None, None), tracks);
        controller
    }

    fn tick(controller: &mut PlaybackController<FakeOutput>, memory: &mut PollMemory) -> PollAction {
        let action = read_output(controller, memory).action;
        action.apply(controller);
        action
    }

    #[test]
    fn idle_controller_only_reports_the_clock() {
        let controller = controller_with(2);
        controller.output().position.set(12.5);
        controller.output().duration.set(200.0);
        let reading = read_output(&controller, &mut PollMemory::default());
        assert_eq!(reading.position, 12.5);
        assert_eq!(reading.duration, 200.0);
        assert!(reading.action.is_nothing());
    }

    #[test]
    fn ended_track_advances_to_the_next_one() {
        let mut controller = controller_with(3);
        let mut memory = PollMemory::default();
        controller.load_index(1, true);
        assert_eq!(tick(&mut controller, &mut memory), PollAction::Nothing);

        controller.output().finish();
        assert_eq!(tick(&mut controller, &mut memory), PollAction::TrackEnded);
        assert_eq!(controller.current_index(), Some(2));
        assert!(controller.state().is_playing());
        assert_eq!(tick(&mut controller, &mut memory), PollAction::Nothing);
    }

    #[test]
    fn ended_track_is_handled_once() {
        let mut controller = controller_with(2).with_auto_advance(false);
        let mut memory = PollMemory::default();
        controller.load_index(0, true);

        controller.output().finish();
        assert_eq!(tick(&mut controller, &mut memory), PollAction::TrackEnded);
        assert_eq!(controller.status(), PlaybackStatus::Paused);
        assert_eq!(controller.current_index(), Some(0));
        assert_eq!(tick(&mut controller, &mut memory), PollAction::Nothing);
        assert_eq!(tick(&mut controller, &mut memory), PollAction::Nothing);
    }

    #[test]
    fn replayed_single_track_can_end_again() {
        let mut controller = controller_with(1);
        let mut memory = PollMemory::default();
        controller.load_index(0, true);

        controller.output().finish();
        assert_eq!(tick(&mut controller, &mut memory), PollAction::TrackEnded);
        assert!(controller.state().is_playing());
        assert_eq!(tick(&mut controller, &mut memory), PollAction::Nothing);

        controller.output().finish();
        assert_eq!(tick(&mut controller, &mut memory), PollAction::TrackEnded);
        assert!(controller.state().is_playing());
    }

    #[test]
    fn outside_pause_and_resume_are_picked_up() {
        let mut controller = controller_with(1);
        let mut memory = PollMemory::default();
        controller.load_index(0, true);

        controller.output().paused.set(true);
        assert_eq!(tick(&mut controller, &mut memory), PollAction::Resync);
        assert_eq!(controller.status(), PlaybackStatus::Paused);
        assert_eq!(tick(&mut controller, &mut memory), PollAction::Nothing);

        controller.output().paused.set(false);
        assert_eq!(tick(&mut controller, &mut memory), PollAction::Resync);
        assert!(controller.state().is_playing());
    }
}
