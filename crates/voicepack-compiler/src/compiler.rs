//! Utterance compiler.
//!
//! For every template of an intent the compiler:
//!
//! 1. scans the template into raw segments,
//! 2. treats a segment containing both `{` and `}` as a template segment and
//!    strips the first `{` and the first `}` to get the placeholder name,
//! 3. resolves the name against the intent's platform-visible slots,
//! 4. emits a slot reference when a template segment resolved, and a literal
//!    otherwise (marked `userDefined` when it looked like a placeholder).
//!
//! Token order always mirrors the source text.

use std::collections::HashSet;

use voicepack_model::{BuildConfig, IntentDeclaration};

use crate::builtin::builtin_utterances;
use crate::error::Result;
use crate::kebab::entity_reference;
use crate::resolver::SlotResolver;
use crate::scanner::TokenScanner;
use crate::token::{CompiledToken, CompiledUtterance};

/// Merge author templates with the built-in set for `intent`.
///
/// Author templates come first.  Duplicates keep their first position and
/// empty strings are dropped.
pub fn merge_templates<S: AsRef<str>>(intent: &str, templates: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    templates
        .iter()
        .map(|t| t.as_ref())
        .chain(builtin_utterances(intent).iter().copied())
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(*t))
        .map(str::to_owned)
        .collect()
}

/// Compiles sample utterances for one build.
#[derive(Debug, Clone)]
pub struct UtteranceCompiler<'c> {
    config: &'c BuildConfig,
    scanner: TokenScanner,
}

impl<'c> UtteranceCompiler<'c> {
    pub fn new(config: &'c BuildConfig) -> Result<Self> {
        Ok(Self {
            config,
            scanner: TokenScanner::new()?,
        })
    }

    /// Compile a single template for `intent`.
    pub fn compile(&self, intent: &IntentDeclaration, template: &str) -> CompiledUtterance {
        let resolver = SlotResolver::new(intent, self.config.platform());
        self.compile_with(&resolver, intent, template)
    }

    /// Compile every template of `intent`, merged with its built-in set.
    pub fn compile_intent<S: AsRef<str>>(
        &self,
        intent: &IntentDeclaration,
        templates: &[S],
    ) -> Vec<CompiledUtterance> {
        let resolver = SlotResolver::new(intent, self.config.platform());
        let merged = merge_templates(&intent.intent, templates);

        tracing::debug!(
            intent = %intent.intent,
            templates = merged.len(),
            "compiling utterances"
        );

        merged
            .iter()
            .map(|template| self.compile_with(&resolver, intent, template))
            .collect()
    }

    fn compile_with(
        &self,
        resolver: &SlotResolver<'_>,
        intent: &IntentDeclaration,
        template: &str,
    ) -> CompiledUtterance {
        let tokens = self
            .scanner
            .scan(template)
            .into_iter()
            .filter_map(|segment| self.compile_segment(resolver, intent, segment))
            .collect();

        CompiledUtterance::new(tokens)
    }

    fn compile_segment(
        &self,
        resolver: &SlotResolver<'_>,
        intent: &IntentDeclaration,
        segment: &str,
    ) -> Option<CompiledToken> {
        if segment.is_empty() {
            return None;
        }

        let is_template = segment.contains('{') && segment.contains('}');
        if !is_template {
            return Some(CompiledToken::literal(segment, false));
        }

        let name = segment.replacen('{', "", 1).replacen('}', "", 1);
        match resolver.resolve(&name) {
            Some(slot) => Some(CompiledToken::slot_ref(
                segment,
                entity_reference(&slot.slot_type),
                &slot.name,
            )),
            None => {
                if self.config.warn_unresolved() {
                    tracing::warn!(
                        intent = %intent.intent,
                        placeholder = %name,
                        "placeholder has no matching slot"
                    );
                } else {
                    tracing::debug!(
                        intent = %intent.intent,
                        placeholder = %name,
                        "placeholder has no matching slot"
                    );
                }
                Some(CompiledToken::literal(segment, true))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voicepack_model::SlotDeclaration;

    fn config() -> BuildConfig {
        BuildConfig::builder().with_locale("en-US").build().unwrap()
    }

    fn flight() -> IntentDeclaration {
        IntentDeclaration::new("BookFlight")
            .with_slot(SlotDeclaration::new("city", "City"))
            .with_slot(SlotDeclaration::new("seat", "SeatClass").with_platforms(["alexa"]))
    }

    #[test]
    fn plain_template_is_one_literal() {
        let cfg = config();
        let compiler = UtteranceCompiler::new(&cfg).unwrap();
        let compiled = compiler.compile(&flight(), "show me flights");
        assert_eq!(compiled.tokens.len(), 1);
        assert_eq!(compiled.tokens[0].text(), "show me flights");
        assert!(!compiled.tokens[0].user_defined());
        assert_eq!(compiled.slot_refs().count(), 0);
    }

    #[test]
    fn repeated_slot_keeps_order() {
        let cfg = config();
        let compiler = UtteranceCompiler::new(&cfg).unwrap();
        let compiled = compiler.compile(&flight(), "book {city} to {city}");

        let texts: Vec<&str> = compiled.tokens.iter().map(CompiledToken::text).collect();
        assert_eq!(texts, vec!["book ", "{city}", " to ", "{city}"]);

        let refs: Vec<&CompiledToken> = compiled.slot_refs().collect();
        assert_eq!(refs.len(), 2);
        for r in refs {
            assert_eq!(r.alias(), Some("city"));
            assert_eq!(r.entity_type(), Some("@city"));
            assert!(r.user_defined());
        }
        assert_ne!(compiled.tokens[1].id(), compiled.tokens[3].id());
    }

    #[test]
    fn unknown_placeholder_degrades_to_marked_literal() {
        let cfg = config();
        let compiler = UtteranceCompiler::new(&cfg).unwrap();
        let compiled = compiler.compile(&flight(), "go to {unknown}");
        let last = compiled.tokens.last().unwrap();
        assert!(!last.is_slot_ref());
        assert_eq!(last.text(), "{unknown}");
        assert!(last.user_defined());
        assert!(last.entity_type().is_none());
    }

    #[test]
    fn slot_filtered_by_platform_is_literal() {
        let cfg = config();
        let compiler = UtteranceCompiler::new(&cfg).unwrap();
        let compiled = compiler.compile(&flight(), "in {seat} class");
        assert_eq!(compiled.slot_refs().count(), 0);
        assert!(compiled.tokens[1].user_defined());

        let alexa = BuildConfig::builder()
            .with_locale("en-US")
            .with_platform("alexa")
            .build()
            .unwrap();
        let compiler = UtteranceCompiler::new(&alexa).unwrap();
        let compiled = compiler.compile(&flight(), "in {seat} class");
        assert_eq!(compiled.tokens[1].entity_type(), Some("@seat-class"));
    }

    #[test]
    fn malformed_braces_never_fail() {
        let cfg = config();
        let compiler = UtteranceCompiler::new(&cfg).unwrap();
        for template in ["{", "}", "{}", "}{", "go {city", "a } b {", "{{city}}"] {
            let compiled = compiler.compile(&flight(), template);
            assert_eq!(compiled.source_text(), template);
        }
    }

    #[test]
    fn literal_with_both_braces_is_marked() {
        let cfg = config();
        let compiler = UtteranceCompiler::new(&cfg).unwrap();
        let compiled = compiler.compile(&flight(), "a } b {");
        assert_eq!(compiled.tokens.len(), 1);
        assert!(compiled.tokens[0].user_defined());
    }

    #[test]
    fn nested_braces_resolve_inner_placeholder() {
        let cfg = config();
        let compiler = UtteranceCompiler::new(&cfg).unwrap();
        let compiled = compiler.compile(&flight(), "{{city}}");
        assert_eq!(compiled.tokens.len(), 3);
        assert_eq!(compiled.tokens[1].alias(), Some("city"));
    }

    #[test]
    fn empty_template_has_no_tokens() {
        let cfg = config();
        let compiler = UtteranceCompiler::new(&cfg).unwrap();
        assert!(compiler.compile(&flight(), "").tokens.is_empty());
    }

    #[test]
    fn merge_dedups_and_appends_builtins() {
        let merged = merge_templates("HelpIntent", &["help", "", "assist me", "assist me"]);
        assert_eq!(merged[0], "help");
        assert_eq!(merged[1], "assist me");
        assert_eq!(merged.iter().filter(|t| *t == "help").count(), 1);
        assert!(merged.iter().all(|t| !t.is_empty()));
        assert_eq!(merged.len(), 2 + builtin_utterances("HelpIntent").len() - 1);
    }

    #[test]
    fn parsed_templates_merge_flat_and_compact() {
        let def: voicepack_model::SkillDefinition = serde_json::from_str(
            r#"{"utterances": {"BookFlight": ["fly away", null, "", ["go", "fly away"]]}}"#,
        )
        .unwrap();
        let merged = merge_templates("BookFlight", def.utterances["BookFlight"].as_slice());
        assert_eq!(merged, vec!["fly away", "go"]);
    }

    #[test]
    fn compile_intent_uses_merged_templates() {
        let cfg = config();
        let compiler = UtteranceCompiler::new(&cfg).unwrap();
        let compiled = compiler.compile_intent(&flight(), &["fly to {city}", "fly to {city}"]);
        assert_eq!(compiled.len(), 1);
        assert_eq!(compiled[0].tokens[0].text(), "fly to ");
        assert_eq!(compiled[0].tokens[1].alias(), Some("city"));
    }
}
