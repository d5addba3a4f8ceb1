//! Error types for the collection tool.

use std::path::PathBuf;

use thiserror::Error;

/// Alias for `Result<T, FetchError>`.
pub type FetchResult<T> = Result<T, FetchError>;

/// Why one team (or the final write) failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure or undecodable body.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("{url} returned {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The depth chart lists no quarterback.
    #[error("no quarterback in depth chart for {0}")]
    NoQuarterback(String),

    /// The athlete record carries neither display nor full name.
    #[error("athlete {0} has no name")]
    MissingName(String),

    /// Writing the snapshot failed.
    #[error("failed to write {path}: {source}")]
    Io {
        /// Destination file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Serializing the snapshot failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
