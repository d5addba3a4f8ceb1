//! Error types for the core tables.

use std::path::PathBuf;

use thiserror::Error;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while parsing keys or loading the quarterback snapshot.
///
/// Lookup misses are not errors; they return `None`.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A division key could not be parsed.
    #[error("unknown division: \"{0}\"")]
    UnknownDivision(String),

    /// The snapshot file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not valid JSON or has the wrong shape.
    #[error("invalid quarterback snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// Two quarterbacks in the snapshot share a name.
    #[error("duplicate quarterback in snapshot: \"{0}\"")]
    DuplicateQuarterback(String),
}
