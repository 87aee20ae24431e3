//! Schema assembler.
//!
//! Walks a skill definition once per invocation and produces every
//! `(path, document)` pair of the import format.  Assembly is pure: nothing
//! is written here.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::Serialize;
use voicepack_compiler::{UtteranceCompiler, kebab_case};
use voicepack_model::{BuildConfig, IntentDeclaration, Invocation, SkillDefinition};
use voicepack_writer::{Artifact, ArtifactSet};

use crate::defaults::{agent_manifest, package_manifest};
use crate::documents::{EntityDefinition, IntentDefinition, entity_entries};
use crate::error::Result;
use crate::layout::OutputLayout;

/// Intents built for `platform` and, when given, `environment`.
///
/// When two declarations share a name, the first applicable one wins so that
/// each intent maps to exactly one file.
pub fn applicable_intents<'a>(
    definition: &'a SkillDefinition,
    platform: &str,
    environment: Option<&str>,
) -> Vec<&'a IntentDeclaration> {
    let mut seen = HashSet::new();
    definition
        .intents
        .iter()
        .filter(|intent| intent.applies_to_platform(platform))
        .filter(|intent| environment.is_none_or(|env| intent.applies_to_environment(env)))
        .filter(|intent| {
            let first = seen.insert(intent.intent.as_str());
            if !first {
                tracing::debug!(intent = %intent.intent, "duplicate intent declaration skipped");
            }
            first
        })
        .collect()
}

/// Builds the artifact set of a skill definition.
#[derive(Debug)]
pub struct SchemaAssembler<'c> {
    config: &'c BuildConfig,
    layout: OutputLayout,
    compiler: UtteranceCompiler<'c>,
}

impl<'c> SchemaAssembler<'c> {
    pub fn new(config: &'c BuildConfig) -> Result<Self> {
        Ok(Self {
            config,
            layout: OutputLayout::new(config),
            compiler: UtteranceCompiler::new(config)?,
        })
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// Assemble the artifacts of every invocation.
    pub fn assemble(&self, definition: &SkillDefinition) -> Result<ArtifactSet> {
        let mut artifacts = ArtifactSet::new();
        for invocation in &definition.invocations {
            artifacts.extend(self.assemble_invocation(definition, invocation)?)?;
        }

        tracing::info!(
            invocations = definition.invocations.len(),
            artifacts = artifacts.len(),
            "schema assembled"
        );
        Ok(artifacts)
    }

    /// Assemble the artifacts of one invocation.
    pub fn assemble_invocation(
        &self,
        definition: &SkillDefinition,
        invocation: &Invocation,
    ) -> Result<ArtifactSet> {
        let environment = invocation.environment.as_str();
        let mut artifacts = ArtifactSet::new();

        self.push_entities(&mut artifacts, definition, environment)?;
        self.push_intents(&mut artifacts, definition, environment)?;

        artifacts.push(Artifact::new(self.layout.agent(environment)?, agent_manifest()))?;
        artifacts.push(Artifact::new(
            self.layout.package(environment)?,
            package_manifest(),
        ))?;

        tracing::debug!(
            environment = %environment,
            artifacts = artifacts.len(),
            "invocation assembled"
        );
        Ok(artifacts)
    }

    fn push_entities(
        &self,
        artifacts: &mut ArtifactSet,
        definition: &SkillDefinition,
        environment: &str,
    ) -> Result<()> {
        for (slot_key, values) in &definition.slots {
            if kebab_case(slot_key).is_empty() {
                tracing::warn!(slot = %slot_key, "slot key has no usable characters, skipping");
                continue;
            }
            push_document(
                artifacts,
                self.layout.entity_definition(environment, slot_key)?,
                &EntityDefinition::new(slot_key),
            )?;
            push_document(
                artifacts,
                self.layout.entity_entries(environment, slot_key)?,
                &entity_entries(values),
            )?;
        }
        Ok(())
    }

    fn push_intents(
        &self,
        artifacts: &mut ArtifactSet,
        definition: &SkillDefinition,
        environment: &str,
    ) -> Result<()> {
        let platform = self.config.platform();

        for intent in applicable_intents(definition, platform, Some(environment)) {
            push_document(
                artifacts,
                self.layout.intent_definition(environment, &intent.intent)?,
                &IntentDefinition::new(intent, platform),
            )?;

            let templates = definition
                .utterances
                .get(&intent.intent)
                .map(Vec::as_slice)
                .unwrap_or_default();
            let compiled = self.compiler.compile_intent(intent, templates);
            if compiled.is_empty() {
                tracing::debug!(intent = %intent.intent, "no sample utterances");
                continue;
            }

            push_document(
                artifacts,
                self.layout.intent_usersays(environment, &intent.intent)?,
                &compiled,
            )?;
        }
        Ok(())
    }
}

fn push_document<T: Serialize + ?Sized>(
    artifacts: &mut ArtifactSet,
    path: PathBuf,
    document: &T,
) -> Result<()> {
    artifacts.push(Artifact::new(path, serde_json::to_value(document)?))?;
    Ok(())
}
