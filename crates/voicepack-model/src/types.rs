//! Skill definition types.
//!
//! A [`SkillDefinition`] is the platform-agnostic description of a voice
//! skill.  It is owned by the caller and only ever read by the build
//! pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::filter::applies_to;
use crate::slots::SlotValues;

/// A complete, platform-agnostic voice skill.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDefinition {
    /// Locale tag (e.g. `en-US`).  Validated by [`crate::BuildConfig`].
    #[serde(default)]
    pub locale: Option<String>,

    /// Identifier of the published skill, if known.
    #[serde(default)]
    pub skill_id: Option<String>,

    /// Minimum number of sample utterances expected per intent.
    #[serde(default)]
    pub least_utterances: Option<usize>,

    /// Build targets; one artifact set is produced per invocation.
    #[serde(default)]
    pub invocations: Vec<Invocation>,

    #[serde(default)]
    pub intents: Vec<IntentDeclaration>,

    /// Slot-type key to enumerated values.
    #[serde(default)]
    pub slots: BTreeMap<String, SlotValues>,

    /// Intent name to raw sample-utterance templates.  Nested lists are
    /// flattened and `null` entries dropped on input.
    #[serde(default, deserialize_with = "deserialize_utterances")]
    pub utterances: BTreeMap<String, Vec<String>>,

    /// Free-form content entries, emitted verbatim by the content builder.
    #[serde(default)]
    pub others: BTreeMap<String, serde_json::Value>,
}

/// A named build target (e.g. `staging`, `production`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    pub environment: String,
}

impl Invocation {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
        }
    }
}

/// An intent and the slots it binds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentDeclaration {
    /// Intent name, unique within one environment.
    pub intent: String,

    /// Platforms the intent is built for; empty means all.
    #[serde(default)]
    pub platform_intent: Vec<String>,

    /// Environments the intent is built for; empty means all.
    #[serde(default)]
    pub environment: Vec<String>,

    #[serde(default)]
    pub slots: Vec<SlotDeclaration>,
}

impl IntentDeclaration {
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            ..Self::default()
        }
    }

    pub fn with_slot(mut self, slot: SlotDeclaration) -> Self {
        self.slots.push(slot);
        self
    }

    pub fn with_platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platform_intent = platforms.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_environments<I, S>(mut self, environments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.environment = environments.into_iter().map(Into::into).collect();
        self
    }

    pub fn applies_to_platform(&self, platform: &str) -> bool {
        applies_to(&self.platform_intent, platform)
    }

    pub fn applies_to_environment(&self, environment: &str) -> bool {
        applies_to(&self.environment, environment)
    }

    /// The slots visible on `platform`, in declaration order.
    pub fn slots_for_platform<'a>(
        &'a self,
        platform: &str,
    ) -> impl Iterator<Item = &'a SlotDeclaration> {
        self.slots.iter().filter(move |s| s.applies_to_platform(platform))
    }
}

/// A typed, named variable of an intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDeclaration {
    pub name: String,

    /// Entity type reference (a key of [`SkillDefinition::slots`] or a
    /// platform type).
    #[serde(rename = "type")]
    pub slot_type: String,

    /// Platforms the slot applies to; empty means all.
    #[serde(default)]
    pub platform: Vec<String>,
}

impl SlotDeclaration {
    pub fn new(name: impl Into<String>, slot_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slot_type: slot_type.into(),
            platform: Vec::new(),
        }
    }

    pub fn with_platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platform = platforms.into_iter().map(Into::into).collect();
        self
    }

    pub fn applies_to_platform(&self, platform: &str) -> bool {
        applies_to(&self.platform, platform)
    }
}

/// A template list as written: strings, `null`s, and arbitrarily nested lists.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTemplates {
    Text(String),
    Nested(Vec<RawTemplates>),
    Missing(()),
}

impl RawTemplates {
    fn flatten_into(self, out: &mut Vec<String>) {
        match self {
            Self::Text(text) => out.push(text),
            Self::Nested(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
            Self::Missing(()) => {}
        }
    }
}

fn deserialize_utterances<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, RawTemplates>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(intent, templates)| {
            let mut flat = Vec::new();
            templates.flatten_into(&mut flat);
            (intent, flat)
        })
        .collect())
}
