//! Blocking HTTP access to the government data endpoints.

use std::fs;
use std::path::Path;

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Result;

/// Base URL for swisstopo open data downloads.
pub const GEO_ADMIN_BASE: &str = "https://data.geo.admin.ch";

/// STAC API root on data.geo.admin.ch.
pub const STAC_API: &str = "https://data.geo.admin.ch/api/stac/v0.9";

/// BFS communes API, serving municipality snapshots.
pub const BFS_COMMUNES_API: &str = "https://www.agvchapp.bfs.admin.ch/api/communes";

const USER_AGENT: &str = "openmun-geodata/0.1 (Swiss open data client)";

/// Thin wrapper around a blocking reqwest client with the settings all
/// downloads share.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Issue a GET and fail on non-success status.
    pub fn get(&self, url: &str) -> Result<Response> {
        debug!("GET {}", url);
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response)
    }

    /// Download a text document, stripping a UTF-8 BOM if present.
    pub fn download_text(&self, url: &str) -> Result<String> {
        let text = self.get(url)?.text()?;
        Ok(super::strip_bom(text))
    }

    /// Download a text document and keep a copy in the cache file.
    pub fn download_text_cached(&self, url: &str, cache_path: &Path) -> Result<String> {
        let content = self.download_text(url)?;
        if let Some(parent) = cache_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(cache_path, &content)?;
        debug!("cached {} bytes to {}", content.len(), cache_path.display());
        Ok(content)
    }

    /// Fetch and deserialize a JSON document.
    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let value = self.get(url)?.json()?;
        Ok(value)
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// URL of the BFS communes snapshot for a reference date (DD-MM-YYYY).
pub fn snapshot_url(reference_date: &str) -> Result<Url> {
    let url = Url::parse_with_params(
        &format!("{BFS_COMMUNES_API}/snapshot"),
        &[("date", reference_date), ("format", "csv")],
    )?;
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_url() {
        let url = snapshot_url("01-01-2020").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.agvchapp.bfs.admin.ch/api/communes/snapshot?date=01-01-2020&format=csv"
        );
    }
}
