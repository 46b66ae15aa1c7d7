//! Error types shared by the catalog and playback layers.

use thiserror::Error;

/// Player errors. Neither variant is fatal: catalog failures degrade to an
/// empty-state message and playback failures are ignored by the view.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlayerError {
    /// Manifest or directory listing is missing or malformed.
    #[error("catalog unavailable at {url}: {reason}")]
    CatalogUnavailable { url: String, reason: String },

    /// Seek issued before the primitive knows the track duration.
    #[error("playback not ready: {0}")]
    PlaybackNotReady(&'static str),
}

impl PlayerError {
    pub fn catalog(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::CatalogUnavailable {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlayerError>;
