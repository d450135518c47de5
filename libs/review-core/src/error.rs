//! Error types for review-core.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using EngineError.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors surfaced by the persistent stores and validation boundaries.
///
/// Storage failures are recoverable by policy: callers that want the
/// "degrade to defaults" behavior use the `*_or_default` methods, which log
/// the error and continue.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("malformed document {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to encode document {path}: {source}")]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("daily target must be at least 1 (got {0})")]
    InvalidDailyTarget(i64),
}
