use once_cell::sync::Lazy;
use reqwest::Url;
use tracing::debug;

use crate::error::{PlayerError, Result};

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Anything that can hand back the body behind a catalog path.
#[allow(async_fn_in_trait)]
pub trait TextSource {
    /// Absolute URL a catalog path is fetched from. Links inside a fetched
    /// document are resolved against it.
    fn locate(&self, path: &str) -> Result<Url>;

    async fn fetch_text(&self, path: &str) -> Result<String>;
}

/// Fetches catalog documents over HTTP, relative to `base_url` or, in the
/// browser, to the page location.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpSource {
    base_url: Option<String>,
}

impl HttpSource {
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .map(|url| {
                if url.ends_with('/') {
                    url
                } else {
                    format!("{url}/")
                }
            });
        Self { base_url }
    }

    pub fn resolve(&self, path: &str) -> Result<Url> {
        let base = match self.base_url.clone().or_else(page_location) {
            Some(base) => base,
            None => return Err(PlayerError::catalog(path, "no base URL to resolve against")),
        };
        Url::parse(&base)
            .and_then(|base| base.join(path))
            .map_err(|e| PlayerError::catalog(path, e))
    }
}

#[cfg(target_arch = "wasm32")]
fn page_location() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_location() -> Option<String> {
    None
}

impl TextSource for HttpSource {
    fn locate(&self, path: &str) -> Result<Url> {
        self.resolve(path)
    }

    async fn fetch_text(&self, path: &str) -> Result<String> {
        let url = self.resolve(path)?;
        debug!(%url, "fetching catalog document");
        let response = HTTP_CLIENT
            .get(url.clone())
            .send()
            .await
            .map_err(|e| PlayerError::catalog(url.as_str(), e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(PlayerError::catalog(url.as_str(), format!("HTTP {status}")));
        }
        response
            .text()
            .await
            .map_err(|e| PlayerError::catalog(url.as_str(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_to_base() {
        let source = HttpSource::new(Some("https://music.example.com/player".into()));
        let url = source.resolve("songs/mix/info.json").unwrap();
        assert_eq!(url.as_str(), "https://music.example.com/player/songs/mix/info.json");
    }

    #[test]
    fn blank_base_without_page_is_unavailable() {
        let source = HttpSource::new(Some("   ".into()));
        let err = source.resolve("songs/info.json").unwrap_err();
        assert!(matches!(err, PlayerError::CatalogUnavailable { .. }));
    }
}
