//! Typed documents of the import format.

use serde::Serialize;
use uuid::Uuid;
use voicepack_compiler::{entity_reference, kebab_case};
use voicepack_model::{IntentDeclaration, SlotValues};

use crate::defaults::{INTENT_PRIORITY, LAUNCH_INTENT, WELCOME_EVENTS};

/// `entities/<slot-key>.json`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDefinition {
    pub id: Uuid,
    pub name: String,
    pub is_overridable: bool,
    pub is_enum: bool,
    pub automated_expansion: bool,
}

impl EntityDefinition {
    pub fn new(slot_key: &str) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: kebab_case(slot_key),
            is_overridable: true,
            is_enum: true,
            automated_expansion: false,
        }
    }
}

/// One row of `entities/<slot-key>_entries_en.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityEntry {
    pub value: String,
    pub synonyms: Vec<String>,
}

/// Entity rows: every value is its own sole synonym.
pub fn entity_entries(values: &SlotValues) -> Vec<EntityEntry> {
    values
        .iter()
        .map(|v| EntityEntry {
            value: v.value.clone(),
            synonyms: vec![v.value.clone()],
        })
        .collect()
}

/// `intents/<Intent>.json`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentDefinition {
    pub id: Uuid,
    pub name: String,
    pub auto: bool,
    pub contexts: Vec<String>,
    pub responses: Vec<IntentResponse>,
    pub priority: u32,
    pub webhook_used: bool,
    pub webhook_for_slot_filling: bool,
    pub fallback_intent: bool,
    pub events: Vec<IntentEvent>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentResponse {
    pub reset_contexts: bool,
    pub action: String,
    pub affected_contexts: Vec<String>,
    pub parameters: Vec<IntentParameter>,
    pub messages: Vec<serde_json::Value>,
    pub default_response_platforms: serde_json::Map<String, serde_json::Value>,
    pub speech: Vec<String>,
}

/// A slot bound as an intent parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentParameter {
    pub data_type: String,
    pub name: String,
    pub value: String,
    pub is_list: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentEvent {
    pub name: String,
}

impl IntentDefinition {
    /// Build the definition of `intent` with its `platform`-visible slots as
    /// parameters.
    pub fn new(intent: &IntentDeclaration, platform: &str) -> Self {
        let parameters = intent
            .slots_for_platform(platform)
            .map(|slot| IntentParameter {
                data_type: entity_reference(&slot.slot_type),
                name: slot.name.clone(),
                value: format!("${}", slot.name),
                is_list: false,
            })
            .collect();

        let events = if intent.intent == LAUNCH_INTENT {
            WELCOME_EVENTS
                .iter()
                .map(|name| IntentEvent {
                    name: (*name).to_owned(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            id: Uuid::now_v7(),
            name: intent.intent.clone(),
            auto: true,
            contexts: Vec::new(),
            responses: vec![IntentResponse {
                reset_contexts: false,
                action: intent.intent.clone(),
                affected_contexts: Vec::new(),
                parameters,
                messages: Vec::new(),
                default_response_platforms: serde_json::Map::new(),
                speech: Vec::new(),
            }],
            priority: INTENT_PRIORITY,
            webhook_used: true,
            webhook_for_slot_filling: false,
            fallback_intent: false,
            events,
        }
    }
}
