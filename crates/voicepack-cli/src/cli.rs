//! CLI argument definitions for voicepack.
//!
//! All `clap` structures live here so that `main.rs` stays focused on
//! dispatching subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// voicepack -- compile voice-skill definitions into platform import files.
#[derive(Parser)]
#[command(
    name = "voicepack",
    version,
    about = "voicepack -- voice-skill schema compiler",
    long_about = "Compiles a platform-agnostic voice-skill definition (intents, slots, \
                  sample utterances) into the JSON artifact set of a conversational \
                  platform import."
)]
pub struct Cli {
    /// Path to a TOML config file with a `[build]` table.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the locale (en-US, en-GB, de-DE).
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Override the platform tag used for slot and intent filtering.
    #[arg(long, global = true)]
    pub platform: Option<String>,

    /// Enable debug logging.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build entities, intents, user-says files and manifests.
    Build {
        #[command(flatten)]
        output: OutputArgs,

        /// Write directly under the output directory, without a locale folder.
        #[arg(long)]
        flatten_locale: bool,

        /// Log placeholders that match no slot at warn level.
        #[arg(long)]
        warn_unresolved: bool,
    },

    /// Build one synonym file per slot type that has synonyms.
    Synonyms {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Build one file per free-form content entry.
    Content {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Report intents with fewer sample utterances than required.
    Lint {
        /// Skill definition (JSON).
        definition: PathBuf,
    },
}

/// Arguments shared by every command that writes files.
#[derive(Args)]
pub struct OutputArgs {
    /// Skill definition (JSON).
    pub definition: PathBuf,

    /// Output directory.
    #[arg(long, short, default_value = "speech-assets")]
    pub out: PathBuf,

    /// Assemble and list the files without writing them.
    #[arg(long)]
    pub dry_run: bool,
}
