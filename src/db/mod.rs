//! Player settings, kept in browser local storage on the web and in an
//! optional JSON file (`ALBUMDECK_SETTINGS`) natively.

use crate::api::CatalogStrategy;
use crate::playback::{clamp_unit, DEFAULT_VOLUME};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "albumdeck.settings";
#[cfg(not(target_arch = "wasm32"))]
const SETTINGS_PATH_VAR: &str = "ALBUMDECK_SETTINGS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings storage failed: {0}")]
    Storage(String),
    #[error("settings file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Player settings stored between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSettings {
    #[serde(default = "default_volume")]
    pub volume: f64,
    #[serde(default)]
    pub catalog_strategy: CatalogStrategy,
    /// Folder holding one sub-folder per album.
    #[serde(default = "default_songs_root")]
    pub songs_root: String,
    /// Base the songs root is resolved against; the page location when unset.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Album opened (paused) at startup; the first listed album when unset.
    #[serde(default)]
    pub startup_album: Option<String>,
    #[serde(default = "default_auto_advance")]
    pub auto_advance: bool,
}

fn default_volume() -> f64 {
    DEFAULT_VOLUME
}

fn default_songs_root() -> String {
    "songs".to_string()
}

fn default_auto_advance() -> bool {
    true
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            catalog_strategy: CatalogStrategy::default(),
            songs_root: default_songs_root(),
            base_url: None,
            startup_album: None,
            auto_advance: default_auto_advance(),
        }
    }
}

impl PlayerSettings {
    /// Bring stored values back into range.
    pub fn normalized(mut self) -> Self {
        self.volume = clamp_unit(self.volume);
        self.songs_root = self.songs_root.trim().trim_matches('/').to_string();
        self.startup_album = self
            .startup_album
            .map(|album| album.trim().to_string())
            .filter(|album| !album.is_empty());
        self
    }
}

#[cfg(target_arch = "wasm32")]
pub fn load_settings() -> Result<PlayerSettings, SettingsError> {
    match LocalStorage::get::<PlayerSettings>(SETTINGS_KEY) {
        Ok(settings) => Ok(settings.normalized()),
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(PlayerSettings::default()),
        Err(err) => Err(SettingsError::Storage(err.to_string())),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn save_settings(settings: &PlayerSettings) -> Result<(), SettingsError> {
    LocalStorage::set(SETTINGS_KEY, settings).map_err(|e| SettingsError::Storage(e.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_settings() -> Result<PlayerSettings, SettingsError> {
    let Some(path) = std::env::var_os(SETTINGS_PATH_VAR) else {
        return Ok(PlayerSettings::default());
    };
    match std::fs::read_to_string(&path) {
        Ok(raw) => parse_settings(&raw),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(PlayerSettings::default()),
        Err(err) => Err(err.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_settings(settings: &PlayerSettings) -> Result<(), SettingsError> {
    let Some(path) = std::env::var_os(SETTINGS_PATH_VAR) else {
        return Ok(());
    };
    let raw = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, raw)?;
    Ok(())
}

pub fn parse_settings(raw: &str) -> Result<PlayerSettings, SettingsError> {
    let settings: PlayerSettings = serde_json::from_str(raw)?;
    Ok(settings.normalized())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let settings = parse_settings("{}").unwrap();
        assert_eq!(settings, PlayerSettings::default());
        assert_eq!(settings.songs_root, "songs");
        assert!(settings.auto_advance);
    }

    #[test]
    fn stored_values_are_normalized() {
        let settings = parse_settings(
            r#"{"volume": 1.8, "catalog_strategy": "DirectoryListing",
                "songs_root": "/media/songs/", "startup_album": "  "}"#,
        )
        .unwrap();
        assert_eq!(settings.volume, 1.0);
        assert_eq!(settings.catalog_strategy, CatalogStrategy::DirectoryListing);
        assert_eq!(settings.songs_root, "media/songs");
        assert_eq!(settings.startup_album, None);
    }

    #[test]
    fn stored_volume_is_clamped() {
        assert_eq!(parse_settings(r#"{"volume": -3}"#).unwrap().volume, 0.0);
        assert_eq!(parse_settings(r#"{"volume": 0.4}"#).unwrap().volume, 0.4);
        assert_eq!(parse_settings(r#"{"volume": 50}"#).unwrap().volume, 1.0);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(parse_settings("volume=1"), Err(SettingsError::Json(_))));
    }
}
