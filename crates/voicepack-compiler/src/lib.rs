//! Utterance-template compiler for voicepack.
//!
//! Turns human-authored sample utterances such as `"fly to {city}"` into the
//! annotated-token form the conversational platform imports:
//!
//! - **Token scanner** ([`TokenScanner`]) splits a template into literal runs
//!   and `{placeholder}` segments.
//! - **Slot resolver** ([`SlotResolver`]) filters an intent's slots by
//!   platform and maps a placeholder name to its declaration.
//! - **Utterance compiler** ([`UtteranceCompiler`]) merges built-in templates,
//!   deduplicates, and emits [`CompiledUtterance`] values.
//!
//! Compilation never fails on template text.  Malformed braces and unknown
//! placeholder names degrade to literal tokens.
//!
//! # Example
//!
//! ```rust
//! use voicepack_compiler::UtteranceCompiler;
//! use voicepack_model::{BuildConfig, IntentDeclaration, SlotDeclaration};
//!
//! let config = BuildConfig::builder().with_locale("en-US").build().unwrap();
//! let compiler = UtteranceCompiler::new(&config).unwrap();
//! let intent = IntentDeclaration::new("BookFlight")
//!     .with_slot(SlotDeclaration::new("city", "City"));
//!
//! let compiled = compiler.compile(&intent, "fly to {city}");
//! assert_eq!(compiled.tokens.len(), 2);
//! assert_eq!(compiled.tokens[1].alias(), Some("city"));
//! ```

pub mod builtin;
pub mod compiler;
pub mod error;
pub mod kebab;
pub mod resolver;
pub mod scanner;
pub mod token;

pub use builtin::builtin_utterances;
pub use compiler::{UtteranceCompiler, merge_templates};
pub use error::{CompileError, Result};
pub use kebab::{entity_reference, kebab_case};
pub use resolver::{SlotResolver, resolve_slot};
pub use scanner::{PLACEHOLDER_PATTERN, TokenScanner};
pub use token::{CompiledToken, CompiledUtterance};
