//! Static JSON manifests: `<root>/info.json` lists albums and
//! `<root>/<folder>/info.json` lists the track file names of one album.

use tracing::warn;

use crate::api::models::{Album, AlbumEntry, Track};
use crate::error::{PlayerError, Result};
use crate::utils::decode_name;

pub const MANIFEST_FILE_NAME: &str = "info.json";

pub fn parse_albums(songs_root: &str, url: &str, body: &str) -> Result<Vec<Album>> {
    let entries: Vec<AlbumEntry> =
        serde_json::from_str(body).map_err(|e| PlayerError::catalog(url, e))?;

    let mut albums = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(folder) = entry.folder.filter(|f| !f.trim().is_empty()) else {
            warn!(url, "skipping album entry without a folder");
            continue;
        };
        albums.push(Album::new(songs_root, folder, entry.title, entry.description));
    }
    Ok(albums)
}

pub fn parse_tracks(songs_root: &str, folder: &str, url: &str, body: &str) -> Result<Vec<Track>> {
    let names: Vec<String> =
        serde_json::from_str(body).map_err(|e| PlayerError::catalog(url, e))?;

    Ok(names
        .into_iter()
        .map(decode_name)
        .filter(|name| !name.trim().is_empty())
        .map(|name| Track::new(songs_root, folder, name))
        .collect())
}
