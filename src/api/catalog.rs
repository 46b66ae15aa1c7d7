use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::api::fetch::TextSource;
use crate::api::models::{Album, Track};
use crate::api::{listing, manifest};
use crate::error::Result;
use crate::utils::{encode_segment, join_path};

/// Where album and track lists come from. One is active per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CatalogStrategy {
    /// `info.json` manifests at the root and in every album folder.
    #[default]
    Manifest,
    /// HTML directory listings served by the web server.
    DirectoryListing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogLoader<S> {
    source: S,
    strategy: CatalogStrategy,
    songs_root: String,
}

impl<S: TextSource> CatalogLoader<S> {
    pub fn new(source: S, strategy: CatalogStrategy, songs_root: impl Into<String>) -> Self {
        Self {
            source,
            strategy,
            songs_root: songs_root.into(),
        }
    }

    fn directory_path(&self, folder: Option<&str>) -> String {
        let folder = folder.map(encode_segment).unwrap_or_default();
        let dir = join_path(&[&self.songs_root, &folder]);
        if dir.is_empty() {
            "./".to_string()
        } else {
            format!("{dir}/")
        }
    }

    pub async fn list_albums(&self) -> Result<Vec<Album>> {
        let albums = match self.strategy {
            CatalogStrategy::Manifest => {
                let path = join_path(&[&self.songs_root, manifest::MANIFEST_FILE_NAME]);
                let body = self.source.fetch_text(&path).await?;
                manifest::parse_albums(&self.songs_root, &path, &body)?
            }
            CatalogStrategy::DirectoryListing => {
                let path = self.directory_path(None);
                let listing_url = self.source.locate(&path)?;
                let body = self.source.fetch_text(&path).await?;
                listing::parse_albums(&self.songs_root, &listing_url, &body)
            }
        };

        if albums.is_empty() {
            warn!(strategy = ?self.strategy, "catalog lists no albums");
        } else {
            info!(count = albums.len(), "loaded album list");
        }
        Ok(albums)
    }

    pub async fn list_tracks(&self, folder: &str) -> Result<Vec<Track>> {
        let tracks = match self.strategy {
            CatalogStrategy::Manifest => {
                let path = join_path(&[
                    &self.songs_root,
                    &encode_segment(folder),
                    manifest::MANIFEST_FILE_NAME,
                ]);
                let body = self.source.fetch_text(&path).await?;
                manifest::parse_tracks(&self.songs_root, folder, &path, &body)?
            }
            CatalogStrategy::DirectoryListing => {
                let path = self.directory_path(Some(folder));
                let listing_url = self.source.locate(&path)?;
                let body = self.source.fetch_text(&path).await?;
                listing::parse_tracks(&self.songs_root, folder, &listing_url, &body)
            }
        };

        if tracks.is_empty() {
            warn!(folder, "album has no tracks");
        } else {
            info!(folder, count = tracks.len(), "loaded track list");
        }
        Ok(tracks)
    }
}
