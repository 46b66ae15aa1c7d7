//! In-memory catalog source for tests.

use std::collections::HashMap;

use reqwest::Url;

use crate::api::fetch::TextSource;
use crate::error::{PlayerError, Result};

const TEST_ORIGIN: &str = "http://catalog.test/";

/// Serves fixed documents keyed by catalog path; anything else is a 404.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    documents: HashMap<String, String>,
}

impl StaticSource {
    pub fn with(mut self, path: &str, body: &str) -> Self {
        self.documents.insert(path.to_string(), body.to_string());
        self
    }
}

impl TextSource for StaticSource {
    fn locate(&self, path: &str) -> Result<Url> {
        Url::parse(TEST_ORIGIN)
            .and_then(|base| base.join(path))
            .map_err(|e| PlayerError::catalog(path, e))
    }

    async fn fetch_text(&self, path: &str) -> Result<String> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| PlayerError::catalog(path, "HTTP 404 Not Found"))
    }
}
