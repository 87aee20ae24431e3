//! Compiler error types.

/// Errors raised while setting up the compiler.
///
/// Template text itself never produces an error.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// The placeholder pattern failed to compile.
    #[error("invalid placeholder pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Convenience alias used throughout the compiler crate.
pub type Result<T> = std::result::Result<T, CompileError>;
