//! Error types.
//!
//! Ranking itself never fails. Errors only come from loading data and
//! from acquiring the observer position.

use thiserror::Error;

/// Failure to load a catalog or a configuration.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons a geolocation request can fail. The ranker does not tell
/// them apart: all of them mean "no observer".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("geolocation is not supported on this platform")]
    Unsupported,

    #[error("timed out waiting for a position")]
    Timeout,

    #[error("position unavailable: {0}")]
    Unavailable(String),
}
