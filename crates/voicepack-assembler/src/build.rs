//! Build operations.
//!
//! Each operation assembles its artifact set in memory and only then hands
//! it to the writer, so configuration and assembly errors never leave
//! partial output behind.  Write failures may.

use std::path::PathBuf;

use voicepack_model::{BuildConfig, SkillDefinition};
use voicepack_writer::{ArtifactSet, ArtifactWriter, write_all};

use crate::assembler::SchemaAssembler;
use crate::content::assemble_content;
use crate::error::Result;
use crate::synonyms::assemble_synonyms;

/// What a build operation wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub written: usize,
    pub paths: Vec<PathBuf>,
}

/// Build the full artifact set of every invocation.
pub async fn build<W>(
    definition: &SkillDefinition,
    config: &BuildConfig,
    writer: &W,
) -> Result<BuildSummary>
where
    W: ArtifactWriter + ?Sized,
{
    tracing::info!(
        locale = %config.locale(),
        platform = %config.platform(),
        invocations = definition.invocations.len(),
        "building skill schema"
    );
    let artifacts = SchemaAssembler::new(config)?.assemble(definition)?;
    emit(writer, artifacts).await
}

/// Build using only the locale, skill id and minimum carried by the
/// definition.  Fails with a configuration error when the locale is missing
/// or invalid.
pub async fn build_from_definition<W>(
    definition: &SkillDefinition,
    writer: &W,
) -> Result<BuildSummary>
where
    W: ArtifactWriter + ?Sized,
{
    let config = BuildConfig::from_definition(definition)?;
    build(definition, &config, writer).await
}

/// Write one synonym file per slot collection that has synonyms.
pub async fn build_synonyms<W>(
    definition: &SkillDefinition,
    config: &BuildConfig,
    writer: &W,
) -> Result<BuildSummary>
where
    W: ArtifactWriter + ?Sized,
{
    let artifacts = assemble_synonyms(definition, config)?;
    emit(writer, artifacts).await
}

/// Write one content file per free-form entry.
pub async fn build_content<W>(
    definition: &SkillDefinition,
    config: &BuildConfig,
    writer: &W,
) -> Result<BuildSummary>
where
    W: ArtifactWriter + ?Sized,
{
    let artifacts = assemble_content(definition, config)?;
    emit(writer, artifacts).await
}

async fn emit<W>(writer: &W, artifacts: ArtifactSet) -> Result<BuildSummary>
where
    W: ArtifactWriter + ?Sized,
{
    let paths = artifacts.paths().map(|p| p.to_path_buf()).collect();
    let written = write_all(writer, artifacts.as_slice()).await?;
    Ok(BuildSummary { written, paths })
}
