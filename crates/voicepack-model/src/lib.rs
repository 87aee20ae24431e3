//! Skill definition model for voicepack.
//!
//! This crate provides:
//!
//! - **Skill definition types**: the platform-agnostic description of a voice
//!   skill (intents, slots, sample utterances, invocations) via
//!   [`SkillDefinition`].
//! - **Build configuration**: an immutable, validated [`BuildConfig`] that is
//!   constructed once at the boundary and passed by reference into every
//!   build step.
//! - **Applicability filter**: the single tag predicate shared by slot, intent
//!   and environment filtering ([`applies_to`]).

pub mod config;
pub mod error;
pub mod filter;
pub mod locale;
pub mod slots;
pub mod types;

pub use config::{BuildConfig, BuildConfigBuilder, DEFAULT_LEAST_UTTERANCES, DEFAULT_PLATFORM};
pub use error::{ConfigError, Result};
pub use filter::applies_to;
pub use locale::Locale;
pub use slots::{SlotValue, SlotValues};
pub use types::{IntentDeclaration, Invocation, SkillDefinition, SlotDeclaration};
