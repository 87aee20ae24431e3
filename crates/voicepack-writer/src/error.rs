//! Writer error types.

use std::path::PathBuf;

/// Errors raised while emitting artifacts.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The document could not be persisted.
    #[error("failed to write `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be serialized.
    #[error("failed to serialize `{path}`: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The logical path is absolute or escapes the output root.
    #[error("invalid artifact path `{path}`: {reason}")]
    InvalidPath { path: PathBuf, reason: String },

    /// Two artifacts of one set target the same path.
    #[error("duplicate artifact path `{path}`")]
    DuplicatePath { path: PathBuf },

    /// The writer refused the document.
    #[error("write rejected for `{path}`: {reason}")]
    Rejected { path: PathBuf, reason: String },
}

/// Convenience alias used throughout the writer crate.
pub type Result<T> = std::result::Result<T, WriteError>;
