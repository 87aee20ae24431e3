//! Schema assembler for voicepack.
//!
//! This crate provides:
//!
//! - **Schema assembly**: turns a [`SkillDefinition`] into the full
//!   conversational-platform import set (entities, intents, user-says files,
//!   agent manifest, package stamp) via [`SchemaAssembler`].
//! - **Synonym and content builders**: [`assemble_synonyms`] and
//!   [`assemble_content`].
//! - **Build operations**: [`build`], [`build_synonyms`] and
//!   [`build_content`] assemble in memory, then write every document
//!   concurrently through an [`voicepack_writer::ArtifactWriter`].
//! - **Coverage lint**: [`lint`] flags intents with too few samples.
//!
//! # Example
//!
//! ```rust,no_run
//! use voicepack_assembler::build;
//! use voicepack_model::{BuildConfig, SkillDefinition};
//! use voicepack_writer::FsArtifactWriter;
//!
//! # async fn run(definition: SkillDefinition) -> voicepack_assembler::Result<()> {
//! let config = BuildConfig::builder().with_locale("en-US").build()?;
//! let writer = FsArtifactWriter::new("speech-assets");
//! let summary = build(&definition, &config, &writer).await?;
//! println!("wrote {} files", summary.written);
//! # Ok(())
//! # }
//! ```
//!
//! [`SkillDefinition`]: voicepack_model::SkillDefinition

pub mod assembler;
pub mod build;
pub mod content;
pub mod defaults;
pub mod documents;
pub mod error;
pub mod layout;
pub mod lint;
pub mod synonyms;

pub use assembler::{SchemaAssembler, applicable_intents};
pub use build::{BuildSummary, build, build_content, build_from_definition, build_synonyms};
pub use content::assemble_content;
pub use error::{BuildError, Result};
pub use layout::OutputLayout;
pub use lint::{CoverageWarning, lint};
pub use synonyms::assemble_synonyms;
