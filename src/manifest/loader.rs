//! Manifest loading
//!
//! Fetches the manifest over HTTP with cache-busting, parses the body, and
//! normalizes it. Every failure, whether transport, decode, or shape, comes back
//! through the one `Result`; callers never need to catch anything else.

use std::env;

use chrono::Utc;
use log::error;
use reqwest::header::CACHE_CONTROL;
use serde_json::Value;

use crate::error::{Result, SoundbankError};
use crate::manifest::normalize::{normalize_manifest, Manifest};

/// Compiled-in fallback manifest URL.
pub const DEFAULT_MANIFEST_URL: &str = "https://almabuzz.app/sounds/manifest.json";

/// Environment variable overriding the default manifest URL.
pub const MANIFEST_URL_ENV: &str = "SOUNDBANK_MANIFEST_URL";

/// Resolve the default manifest URL from the environment, falling back to
/// the compiled-in constant.
pub fn default_url() -> String {
    env::var(MANIFEST_URL_ENV).unwrap_or_else(|_| DEFAULT_MANIFEST_URL.to_string())
}

/// Loads and normalizes a manifest from a configured URL.
///
/// The URL is explicit configuration, not ambient state. Each [`load`] call
/// performs a single fetch with its own cache-busting token; there is no
/// caching across calls and no retry.
///
/// [`load`]: ManifestLoader::load
#[derive(Debug, Clone)]
pub struct ManifestLoader {
    url: String,
}

impl ManifestLoader {
    /// Create a loader for the given manifest URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The configured manifest URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch, parse, and normalize the manifest.
    ///
    /// Never panics; non-success status, an unparseable body, and shape
    /// failures all surface as `Err`. A diagnostic is logged on failure.
    pub fn load(&self) -> Result<Manifest> {
        match self.try_load() {
            Ok(manifest) => Ok(manifest),
            Err(e) => {
                error!("manifest: failed to load: {}", e);
                Err(e)
            }
        }
    }

    fn try_load(&self) -> Result<Manifest> {
        let client = reqwest::blocking::Client::builder().build()?;

        let url = cache_busted(&self.url, Utc::now().timestamp_millis());
        let response = client.get(&url).header(CACHE_CONTROL, "no-cache").send()?;

        if !response.status().is_success() {
            return Err(SoundbankError::RequestFailed {
                status: response.status().as_u16(),
            });
        }

        let raw: Value = response.json()?;
        normalize_manifest(&raw)
    }
}

/// Append a time-based cache-busting query parameter.
fn cache_busted(url: &str, token: i64) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}_={}", url, separator, token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_busted_without_query() {
        assert_eq!(
            cache_busted("https://example.com/manifest.json", 1700000000000),
            "https://example.com/manifest.json?_=1700000000000"
        );
    }

    #[test]
    fn test_cache_busted_with_existing_query() {
        assert_eq!(
            cache_busted("https://example.com/manifest.json?v=2", 42),
            "https://example.com/manifest.json?v=2&_=42"
        );
    }

    #[test]
    fn test_loader_keeps_configured_url() {
        let loader = ManifestLoader::new("https://example.com/m.json");
        assert_eq!(loader.url(), "https://example.com/m.json");
    }
}
