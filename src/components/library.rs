use dioxus::prelude::*;
use tracing::warn;

use crate::api::{Album, CatalogLoader, HttpSource, TextSource, Track};
use crate::components::PlayerHandle;
use crate::error::PlayerError;

/// Progress of the active album's track list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracksStatus {
    NotLoaded,
    Loading,
    Ready,
    Unavailable,
}

impl TracksStatus {
    /// Text shown in place of the track rows, if any.
    pub fn message(self, has_tracks: bool) -> Option<&'static str> {
        match self {
            TracksStatus::NotLoaded => Some("Pick an album to see its songs."),
            TracksStatus::Loading => None,
            TracksStatus::Unavailable => Some("Could not load songs for this album."),
            TracksStatus::Ready if !has_tracks => Some("No songs found in this album."),
            TracksStatus::Ready => None,
        }
    }
}

/// Album list fetched once at startup.
#[derive(Clone, Copy)]
pub struct AlbumsResource(pub Resource<Result<Vec<Album>, PlayerError>>);

/// Fetch one album's tracks. A failed fetch degrades to an empty list.
pub async fn fetch_album_tracks<S: TextSource>(
    loader: &CatalogLoader<S>,
    folder: &str,
) -> (Vec<Track>, TracksStatus) {
    match loader.list_tracks(folder).await {
        Ok(tracks) => (tracks, TracksStatus::Ready),
        Err(err) => {
            warn!(%err, folder, "track list unavailable");
            (Vec::new(), TracksStatus::Unavailable)
        }
    }
}

#[derive(Clone)]
pub struct Library {
    loader: CatalogLoader<HttpSource>,
    player: PlayerHandle,
    tracks_status: Signal<TracksStatus>,
}

impl Library {
    pub fn new(
        loader: CatalogLoader<HttpSource>,
        player: PlayerHandle,
        tracks_status: Signal<TracksStatus>,
    ) -> Self {
        Self {
            loader,
            player,
            tracks_status,
        }
    }

    pub fn loader(&self) -> &CatalogLoader<HttpSource> {
        &self.loader
    }

    pub fn tracks_status(&self) -> TracksStatus {
        (self.tracks_status)()
    }

    /// Fetch the album's tracks, make them the playlist and load the first one.
    /// Overlapping calls are not cancelled; whichever resolves last wins.
    pub fn open_album(&self, album: Album, autoplay: bool) {
        let loader = self.loader.clone();
        let player = self.player;
        let mut tracks_status = self.tracks_status;
        tracks_status.set(TracksStatus::Loading);

        spawn(async move {
            let (tracks, status) = fetch_album_tracks(&loader, &album.folder).await;
            player.open_album(album, tracks, autoplay);
            tracks_status.set(status);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::StaticSource;
    use crate::api::CatalogStrategy;
    use crate::playback::testing::FakeOutput;
    use crate::playback::{PlaybackController, PlaybackStatus};

    fn loader(source: StaticSource) -> CatalogLoader<StaticSource> {
        CatalogLoader::new(source, CatalogStrategy::Manifest, "songs")
    }

    #[tokio::test]
    async fn empty_album_is_ready_but_stays_idle() {
        let loader = loader(StaticSource::default().with("songs/quiet/info.json", "[]"));
        let (tracks, status) = fetch_album_tracks(&loader, "quiet").await;
        assert!(tracks.is_empty());
        assert_eq!(status, TracksStatus::Ready);

        let mut controller = PlaybackController::new(FakeOutput::new(), 0.5);
        let album = Album::new("songs", "quiet", None, None);
        assert_eq!(controller.open_album(album, tracks, true), None);
        assert_eq!(controller.status(), PlaybackStatus::Idle);
        assert_eq!(
            status.message(!controller.state().tracks.is_empty()),
            Some("No songs found in this album.")
        );
    }

    #[tokio::test]
    async fn failed_fetch_is_unavailable_with_no_tracks() {
        let (tracks, status) = fetch_album_tracks(&loader(StaticSource::default()), "gone").await;
        assert!(tracks.is_empty());
        assert_eq!(status, TracksStatus::Unavailable);
        assert_eq!(status.message(false), Some("Could not load songs for this album."));
    }

    #[tokio::test]
    async fn loaded_album_starts_at_its_first_track() {
        let loader = loader(
            StaticSource::default().with("songs/mix/info.json", r#"["A.mp3", "B.mp3"]"#),
        );
        let (tracks, status) = fetch_album_tracks(&loader, "mix").await;
        assert_eq!(status, TracksStatus::Ready);
        assert_eq!(status.message(!tracks.is_empty()), None);

        let mut controller = PlaybackController::new(FakeOutput::new(), 0.5);
        let album = Album::new("songs", "mix", None, None);
        assert_eq!(controller.open_album(album, tracks, false), Some(0));
        assert_eq!(controller.status(), PlaybackStatus::Paused);
        assert_eq!(
            controller.state().loaded.as_ref().map(|t| t.name.as_str()),
            Some("A.mp3")
        );
    }

    #[test]
    fn loading_shows_no_message() {
        assert_eq!(TracksStatus::Loading.message(false), None);
        assert!(TracksStatus::NotLoaded.message(false).is_some());
    }
}
