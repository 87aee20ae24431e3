//! CLI entry point for voicepack.
//!
//! This binary provides the `voicepack` command with subcommands for
//! building the platform artifact set, synonym files and content files, and
//! for linting utterance coverage.

mod cli;
mod config;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use voicepack_assembler::{BuildSummary, build, build_content, build_synonyms, lint};
use voicepack_model::{BuildConfig, SkillDefinition};
use voicepack_writer::{ArtifactWriter, FsArtifactWriter, MemoryArtifactWriter};

use crate::cli::{Cli, Commands, OutputArgs};
use crate::config::{CliOverrides, load_definition, load_file_config, resolve_config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(if cli.verbose { "debug" } else { "info" });

    let file = load_file_config(cli.config.as_deref())?;
    let mut overrides = CliOverrides {
        locale: cli.locale.clone(),
        platform: cli.platform.clone(),
        ..CliOverrides::default()
    };

    match cli.command {
        Commands::Build {
            output,
            flatten_locale,
            warn_unresolved,
        } => {
            overrides.flatten_locale = flatten_locale;
            overrides.warn_unresolved = warn_unresolved;
            let (definition, config) = prepare(&output.definition, &file, &overrides)?;
            report_coverage(&definition, &config);
            run(&output, Operation::Schema, &definition, &config).await
        }
        Commands::Synonyms { output } => {
            let (definition, config) = prepare(&output.definition, &file, &overrides)?;
            run(&output, Operation::Synonyms, &definition, &config).await
        }
        Commands::Content { output } => {
            let (definition, config) = prepare(&output.definition, &file, &overrides)?;
            run(&output, Operation::Content, &definition, &config).await
        }
        Commands::Lint { definition } => {
            let (definition, config) = prepare(&definition, &file, &overrides)?;
            let warnings = report_coverage(&definition, &config);
            if warnings == 0 {
                println!(
                    "all intents meet the minimum of {} utterances",
                    config.least_utterances()
                );
            }
            Ok(())
        }
    }
}

/// Load the definition and validate the layered configuration before any
/// artifact is assembled.
fn prepare(
    path: &Path,
    file: &config::FileConfig,
    overrides: &CliOverrides,
) -> Result<(SkillDefinition, BuildConfig)> {
    let definition = load_definition(path)?;
    let config = resolve_config(&definition, file, overrides)?;
    info!(
        definition = %path.display(),
        locale = %config.locale(),
        platform = %config.platform(),
        "skill definition loaded"
    );
    Ok((definition, config))
}

/// The artifact set a command produces.
#[derive(Debug, Clone, Copy)]
enum Operation {
    Schema,
    Synonyms,
    Content,
}

async fn execute(
    operation: Operation,
    definition: &SkillDefinition,
    config: &BuildConfig,
    writer: &dyn ArtifactWriter,
) -> voicepack_assembler::Result<BuildSummary> {
    match operation {
        Operation::Schema => build(definition, config, writer).await,
        Operation::Synonyms => build_synonyms(definition, config, writer).await,
        Operation::Content => build_content(definition, config, writer).await,
    }
}

/// Run an operation against the filesystem, or in memory for a dry run.
async fn run(
    output: &OutputArgs,
    operation: Operation,
    definition: &SkillDefinition,
    config: &BuildConfig,
) -> Result<()> {
    let summary = if output.dry_run {
        let writer = MemoryArtifactWriter::new();
        execute(operation, definition, config, &writer).await
    } else {
        let writer = FsArtifactWriter::new(&output.out);
        execute(operation, definition, config, &writer).await
    }
    .with_context(|| format!("{operation:?} build failed"))?;

    if output.dry_run {
        for path in &summary.paths {
            println!("{}", output.out.join(path).display());
        }
        info!(files = summary.paths.len(), "dry run complete, nothing written");
    } else {
        info!(
            files = summary.written,
            out = %output.out.display(),
            "artifacts written"
        );
    }
    Ok(())
}

fn report_coverage(definition: &SkillDefinition, config: &BuildConfig) -> usize {
    let warnings = lint(definition, config);
    for w in &warnings {
        warn!(
            intent = %w.intent,
            templates = w.templates,
            least = w.least,
            "{w}"
        );
    }
    warnings.len()
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
