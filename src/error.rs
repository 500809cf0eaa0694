//! Error taxonomy shared by all dataset APIs.

use thiserror::Error;

/// Errors surfaced by the geodata directories and the source layer.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Malformed or internally inconsistent source data. Fatal at
    /// construction; no partially built directory is ever exposed.
    #[error("data integrity error: {0}")]
    DataIntegrity(String),

    /// A single-record lookup found no match at the reference date.
    #[error("no {kind} found for code '{code}'")]
    NotFound { kind: &'static str, code: String },

    /// Invalid constructor argument (bad date format, unknown version).
    #[error("validation error: {0}")]
    Validation(String),

    /// The remote source failed and fallback data was disallowed or missing.
    #[error("source unavailable for {context}: {detail}")]
    SourceUnavailable {
        context: &'static str,
        detail: String,
    },

    /// Remote fetch failure, raised before the fallback decision is taken.
    #[error("remote fetch failed: {0}")]
    RemoteFetch(#[from] reqwest::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, GeoError>;
