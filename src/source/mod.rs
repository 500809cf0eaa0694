//! Data source plumbing: remote fetch, on-disk cache and fallback policy.
//!
//! Every directory constructor funnels through [`fetch_or_fallback`]: try
//! the live source once, and on failure either read the cached snapshot
//! (when `fallback_allowed` is set) or fail with `SourceUnavailable`.

pub mod fetch;
pub mod stac;

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::{GeoError, Result};

pub use fetch::HttpFetcher;

/// Where source files live and whether cached data may stand in for the
/// live source.
#[derive(Debug, Clone)]
pub struct SourceOptions {
    /// Directory holding downloaded/bundled source CSVs
    pub sources_dir: PathBuf,
    /// Fall back to the cached snapshot when the remote fetch fails
    pub fallback_allowed: bool,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            sources_dir: PathBuf::from("sources/swisstopo"),
            fallback_allowed: false,
        }
    }
}

impl SourceOptions {
    pub fn new<P: Into<PathBuf>>(sources_dir: P) -> Self {
        Self {
            sources_dir: sources_dir.into(),
            fallback_allowed: false,
        }
    }

    pub fn fallback_allowed(mut self, allowed: bool) -> Self {
        self.fallback_allowed = allowed;
        self
    }
}

/// Try the remote source once; on failure apply the two-branch fallback
/// policy. No retry, no backoff.
pub fn fetch_or_fallback<F, G>(
    options: &SourceOptions,
    context: &'static str,
    fetch: F,
    fallback: G,
) -> Result<String>
where
    F: FnOnce() -> Result<String>,
    G: FnOnce() -> Result<String>,
{
    match fetch() {
        Ok(content) => Ok(content),
        Err(fetch_err) => {
            if !options.fallback_allowed {
                return Err(GeoError::SourceUnavailable {
                    context,
                    detail: format!("{fetch_err} (fallback not allowed)"),
                });
            }
            warn!("remote fetch for {} failed, using cached data: {}", context, fetch_err);
            fallback().map_err(|fallback_err| GeoError::SourceUnavailable {
                context,
                detail: format!("remote: {fetch_err}; fallback: {fallback_err}"),
            })
        }
    }
}

/// Read a cached CSV from the sources directory, stripping a UTF-8 BOM.
pub fn read_cached_csv(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(GeoError::SourceUnavailable {
            context: "cached csv",
            detail: format!("file not found: {}", path.display()),
        });
    }
    let content = fs::read_to_string(path)?;
    Ok(strip_bom(content))
}

/// Deserialize all rows of a CSV document into typed records.
pub fn parse_csv<T: DeserializeOwned>(content: &str, delimiter: u8) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

pub(crate) fn strip_bom(content: String) -> String {
    match content.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn options(fallback: bool) -> SourceOptions {
        SourceOptions::default().fallback_allowed(fallback)
    }

    #[test]
    fn test_fetch_success_skips_fallback() {
        let result = fetch_or_fallback(
            &options(false),
            "test data",
            || Ok("remote".to_string()),
            || panic!("fallback must not run"),
        );
        assert_eq!(result.unwrap(), "remote");
    }

    #[test]
    fn test_fetch_failure_without_fallback() {
        let result = fetch_or_fallback(
            &options(false),
            "test data",
            || Err(GeoError::Validation("boom".to_string())),
            || Ok("cached".to_string()),
        );
        assert!(matches!(result, Err(GeoError::SourceUnavailable { .. })));
    }

    #[test]
    fn test_fetch_failure_with_fallback() {
        let result = fetch_or_fallback(
            &options(true),
            "test data",
            || Err(GeoError::Validation("boom".to_string())),
            || Ok("cached".to_string()),
        );
        assert_eq!(result.unwrap(), "cached");
    }

    #[test]
    fn test_fetch_and_fallback_both_fail() {
        let result = fetch_or_fallback(
            &options(true),
            "test data",
            || Err(GeoError::Validation("remote down".to_string())),
            || Err(GeoError::Validation("no cache".to_string())),
        );
        match result {
            Err(GeoError::SourceUnavailable { detail, .. }) => {
                assert!(detail.contains("remote down"));
                assert!(detail.contains("no cache"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_read_cached_csv_strips_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all("\u{feff}a;b\n1;2\n".as_bytes()).unwrap();

        let content = read_cached_csv(&path).unwrap();
        assert!(content.starts_with("a;b"));
    }

    #[test]
    fn test_read_cached_csv_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_cached_csv(&dir.path().join("nope.csv"));
        assert!(matches!(result, Err(GeoError::SourceUnavailable { .. })));
    }
}
