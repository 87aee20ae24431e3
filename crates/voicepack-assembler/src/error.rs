//! Build error types.
//!
//! Configuration and assembly errors are raised before any write is issued.
//! A [`BuildError::Write`] means some documents may already be on disk.

/// Unified error type for the build pipeline.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The build configuration is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] voicepack_model::ConfigError),

    /// The utterance compiler could not be set up.
    #[error("compiler error: {0}")]
    Compile(#[from] voicepack_compiler::CompileError),

    /// An invocation names an environment that cannot be a directory.
    #[error("invalid environment `{environment}`: {reason}")]
    InvalidEnvironment { environment: String, reason: String },

    /// A document could not be converted to JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Assembling or writing an artifact failed.
    #[error("write error: {0}")]
    Write(#[from] voicepack_writer::WriteError),
}

/// Convenience alias used throughout the assembler crate.
pub type Result<T> = std::result::Result<T, BuildError>;
