//! Layered build configuration.
//!
//! Values are taken from the skill definition, then the `[build]` table of
//! the config file, then command-line flags; later layers win.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use voicepack_model::{BuildConfig, BuildConfigBuilder, SkillDefinition};

/// Config file consulted when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "voicepack.toml";

/// Parsed config file.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub build: BuildSection,
}

/// The `[build]` table.
#[derive(Debug, Default, Deserialize)]
pub struct BuildSection {
    pub locale: Option<String>,
    pub skill_id: Option<String>,
    pub platform: Option<String>,
    pub flatten_locale: Option<bool>,
    pub warn_unresolved: Option<bool>,
    pub least_utterances: Option<usize>,
}

/// Overrides taken from the command line.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub locale: Option<String>,
    pub platform: Option<String>,
    pub flatten_locale: bool,
    pub warn_unresolved: bool,
}

/// Load the config file.
///
/// An explicit path must exist.  The default path is optional and falls back
/// to an empty config.
pub fn load_file_config(explicit: Option<&Path>) -> Result<FileConfig> {
    let path = explicit.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if explicit.is_none() && e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(FileConfig::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read config `{}`", path.display()));
        }
    };

    let config: FileConfig = toml::from_str(&content)
        .with_context(|| format!("invalid config file `{}`", path.display()))?;
    tracing::debug!(path = %path.display(), "config file loaded");
    Ok(config)
}

/// Merge the three layers and validate the result.
pub fn resolve_config(
    definition: &SkillDefinition,
    file: &FileConfig,
    cli: &CliOverrides,
) -> Result<BuildConfig> {
    let mut builder = BuildConfigBuilder::from_definition(definition);
    let section = &file.build;

    if let Some(ref locale) = section.locale {
        builder = builder.with_locale(locale);
    }
    if let Some(ref skill_id) = section.skill_id {
        builder = builder.with_skill_id(skill_id);
    }
    if let Some(ref platform) = section.platform {
        builder = builder.with_platform(platform);
    }
    if let Some(least) = section.least_utterances {
        builder = builder.with_least_utterances(least);
    }

    if let Some(ref locale) = cli.locale {
        builder = builder.with_locale(locale);
    }
    if let Some(ref platform) = cli.platform {
        builder = builder.with_platform(platform);
    }
    builder = builder
        .with_flatten_locale(cli.flatten_locale || section.flatten_locale.unwrap_or(false))
        .with_warn_unresolved(cli.warn_unresolved || section.warn_unresolved.unwrap_or(false));

    builder.build().context("invalid build configuration")
}

/// Read and parse a skill definition file.
pub fn load_definition(path: &Path) -> Result<SkillDefinition> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read definition `{}`", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid skill definition `{}`", path.display()))
}
