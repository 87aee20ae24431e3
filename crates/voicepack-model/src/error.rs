//! Configuration error types.
//!
//! Every variant is raised before any artifact is assembled or written, so a
//! caller that sees a [`ConfigError`] knows nothing reached the disk.

/// Errors raised while validating a build configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No locale was supplied by the definition or the caller.
    #[error("no locale defined; set one of {}", crate::Locale::ALL_TAGS.join(", "))]
    MissingLocale,

    /// The supplied locale is not one of the supported tags.
    #[error("invalid locale `{value}`; it should be one of {}", crate::Locale::ALL_TAGS.join(", "))]
    InvalidLocale { value: String },

    /// The skill id is empty or contains whitespace.
    #[error("invalid skill id `{value}`")]
    InvalidSkillId { value: String },

    /// The target platform tag is empty.
    #[error("platform tag must not be empty")]
    InvalidPlatform,

    /// The minimum utterance count must be at least one.
    #[error("least utterances must be at least 1, got {value}")]
    InvalidLeastUtterances { value: usize },
}

/// Convenience alias used throughout the model crate.
pub type Result<T> = std::result::Result<T, ConfigError>;
