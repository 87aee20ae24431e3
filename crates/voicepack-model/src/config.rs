//! Build configuration.
//!
//! [`BuildConfig`] is validated once, through [`BuildConfigBuilder::build`],
//! and is immutable afterwards.  Every build operation takes it by reference,
//! so an invalid locale or skill id is reported before any artifact is
//! assembled.

use crate::error::{ConfigError, Result};
use crate::locale::Locale;
use crate::types::SkillDefinition;

/// Platform tag used for slot and intent filtering when none is given.
pub const DEFAULT_PLATFORM: &str = "dialogFlow";

/// Minimum sample utterances per intent when none is given.
pub const DEFAULT_LEAST_UTTERANCES: usize = 5;

/// Validated settings shared by every build operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    locale: Locale,
    skill_id: Option<String>,
    platform: String,
    flatten_locale: bool,
    warn_unresolved: bool,
    least_utterances: usize,
}

impl BuildConfig {
    /// Start an empty builder.
    pub fn builder() -> BuildConfigBuilder {
        BuildConfigBuilder::default()
    }

    /// Validate the locale, skill id and utterance minimum carried by a
    /// definition, with every other field at its default.
    pub fn from_definition(definition: &SkillDefinition) -> Result<Self> {
        BuildConfigBuilder::from_definition(definition).build()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn skill_id(&self) -> Option<&str> {
        self.skill_id.as_deref()
    }

    /// Tag that slot and intent platform filters are matched against.
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// When set, artifacts are written without the locale directory.
    pub fn flatten_locale(&self) -> bool {
        self.flatten_locale
    }

    /// When set, unresolved `{placeholder}` names are logged at `warn`.
    pub fn warn_unresolved(&self) -> bool {
        self.warn_unresolved
    }

    pub fn least_utterances(&self) -> usize {
        self.least_utterances
    }
}

/// Collects unvalidated settings for a [`BuildConfig`].
#[derive(Debug, Clone, Default)]
pub struct BuildConfigBuilder {
    locale: Option<String>,
    skill_id: Option<String>,
    platform: Option<String>,
    flatten_locale: bool,
    warn_unresolved: bool,
    least_utterances: Option<usize>,
}

impl BuildConfigBuilder {
    /// Seed a builder from the fields a skill definition carries.
    pub fn from_definition(definition: &SkillDefinition) -> Self {
        Self {
            locale: definition.locale.clone(),
            skill_id: definition.skill_id.clone(),
            least_utterances: definition.least_utterances,
            ..Self::default()
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_skill_id(mut self, skill_id: impl Into<String>) -> Self {
        self.skill_id = Some(skill_id.into());
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_flatten_locale(mut self, flatten: bool) -> Self {
        self.flatten_locale = flatten;
        self
    }

    pub fn with_warn_unresolved(mut self, warn: bool) -> Self {
        self.warn_unresolved = warn;
        self
    }

    pub fn with_least_utterances(mut self, least: usize) -> Self {
        self.least_utterances = Some(least);
        self
    }

    /// Validate every field and produce the immutable configuration.
    pub fn build(self) -> Result<BuildConfig> {
        let locale: Locale = self
            .locale
            .as_deref()
            .filter(|l| !l.is_empty())
            .ok_or(ConfigError::MissingLocale)?
            .parse()?;

        if let Some(ref id) = self.skill_id
            && (id.is_empty() || id.chars().any(char::is_whitespace))
        {
            return Err(ConfigError::InvalidSkillId { value: id.clone() });
        }

        let platform = self.platform.unwrap_or_else(|| DEFAULT_PLATFORM.to_owned());
        if platform.trim().is_empty() {
            return Err(ConfigError::InvalidPlatform);
        }

        let least_utterances = self.least_utterances.unwrap_or(DEFAULT_LEAST_UTTERANCES);
        if least_utterances == 0 {
            return Err(ConfigError::InvalidLeastUtterances {
                value: least_utterances,
            });
        }

        tracing::debug!(
            locale = %locale,
            platform = %platform,
            flatten_locale = self.flatten_locale,
            "build configuration validated"
        );

        Ok(BuildConfig {
            locale,
            skill_id: self.skill_id,
            platform,
            flatten_locale: self.flatten_locale,
            warn_unresolved: self.warn_unresolved,
            least_utterances,
        })
    }
}
