use serde::Deserialize;

use crate::utils::{encode_segment, join_path, title_from_folder};

pub const COVER_FILE_NAME: &str = "cover.jpg";
pub const DEFAULT_ALBUM_DESCRIPTION: &str = "Click to view songs";

/// Raw entry of the top-level album manifest.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct AlbumEntry {
    #[serde(default)]
    pub folder: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Album {
    pub folder: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub cover_url: String,
}

impl Album {
    pub fn new(
        songs_root: &str,
        folder: impl Into<String>,
        title: Option<String>,
        description: Option<String>,
    ) -> Self {
        let folder = folder.into();
        let cover_url = join_path(&[songs_root, &encode_segment(&folder), COVER_FILE_NAME]);
        Self {
            folder,
            title: title.filter(|t| !t.trim().is_empty()),
            description: description.filter(|d| !d.trim().is_empty()),
            cover_url,
        }
    }

    pub fn display_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| title_from_folder(&self.folder))
    }

    pub fn display_description(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| DEFAULT_ALBUM_DESCRIPTION.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Track {
    /// Decoded file name, shown as-is in the UI.
    pub name: String,
    pub stream_url: String,
}

impl Track {
    pub fn new(songs_root: &str, folder: &str, name: impl Into<String>) -> Self {
        let name = name.into();
        let stream_url = join_path(&[songs_root, &encode_segment(folder), &encode_segment(&name)]);
        Self { name, stream_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_url_encodes_folder_and_file_name() {
        let track = Track::new("songs", "road trip", "Don't Stop #1.mp3");
        assert_eq!(track.name, "Don't Stop #1.mp3");
        assert_eq!(track.stream_url, "songs/road%20trip/Don%27t%20Stop%20%231.mp3");
    }

    #[test]
    fn reserved_characters_in_folder_stay_in_the_path() {
        let album = Album::new("songs", "Rock#Roll?", None, None);
        assert_eq!(album.folder, "Rock#Roll?");
        assert_eq!(album.display_title(), "Rock#Roll?");
        assert_eq!(album.cover_url, "songs/Rock%23Roll%3F/cover.jpg");
    }

    #[test]
    fn album_fallbacks() {
        let album = Album::new("songs", "late_night-jazz", None, Some("  ".into()));
        assert_eq!(album.display_title(), "late night jazz");
        assert_eq!(album.display_description(), DEFAULT_ALBUM_DESCRIPTION);
        assert_eq!(album.cover_url, "songs/late_night-jazz/cover.jpg");

        let titled = Album::new("", "mix", Some("Mixtape".into()), Some("Side A".into()));
        assert_eq!(titled.display_title(), "Mixtape");
        assert_eq!(titled.display_description(), "Side A");
        assert_eq!(titled.cover_url, "mix/cover.jpg");
    }
}
