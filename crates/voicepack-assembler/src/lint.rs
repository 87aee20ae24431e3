//! Utterance coverage lint.
//!
//! Reports intents whose merged template count falls below the configured
//! minimum.  Advisory only; a build never consults it.

use std::fmt;

use voicepack_compiler::merge_templates;
use voicepack_model::{BuildConfig, SkillDefinition};

use crate::assembler::applicable_intents;

/// An intent with too few sample utterances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageWarning {
    pub intent: String,
    pub templates: usize,
    pub least: usize,
}

impl fmt::Display for CoverageWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "intent `{}` has {} sample utterance(s), expected at least {}",
            self.intent, self.templates, self.least
        )
    }
}

/// Check every platform-applicable intent against `least_utterances`.
pub fn lint(definition: &SkillDefinition, config: &BuildConfig) -> Vec<CoverageWarning> {
    let least = config.least_utterances();

    applicable_intents(definition, config.platform(), None)
        .into_iter()
        .filter_map(|intent| {
            let templates = definition
                .utterances
                .get(&intent.intent)
                .map(Vec::as_slice)
                .unwrap_or_default();
            let count = merge_templates(&intent.intent, templates).len();
            (count < least).then(|| CoverageWarning {
                intent: intent.intent.clone(),
                templates: count,
                least,
            })
        })
        .collect()
}
