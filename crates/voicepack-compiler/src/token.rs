//! Compiled utterance tokens.
//!
//! Serialized in the platform's user-says shape:
//!
//! ```json
//! {
//!   "data": [
//!     { "text": "fly to ", "id": "…", "userDefined": false },
//!     { "meta": "@city", "alias": "city", "text": "{city}", "id": "…", "userDefined": true }
//!   ],
//!   "isTemplate": false,
//!   "count": 0,
//!   "updated": 0
//! }
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One annotated piece of a compiled utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompiledToken {
    /// A `{placeholder}` bound to a declared slot.
    SlotRef {
        /// Entity reference, e.g. `@city`.
        #[serde(rename = "meta")]
        entity_type: String,
        /// The slot name.
        alias: String,
        /// The original placeholder text, braces included.
        text: String,
        id: Uuid,
        #[serde(rename = "userDefined")]
        user_defined: bool,
    },

    /// Plain text, or a placeholder that did not resolve.
    Literal {
        text: String,
        id: Uuid,
        /// `true` when the text looked like a placeholder but no slot
        /// matched, so the platform can flag the unresolved binding.
        #[serde(rename = "userDefined")]
        user_defined: bool,
    },
}

impl CompiledToken {
    pub fn literal(text: impl Into<String>, user_defined: bool) -> Self {
        Self::Literal {
            text: text.into(),
            id: Uuid::now_v7(),
            user_defined,
        }
    }

    pub fn slot_ref(
        text: impl Into<String>,
        entity_type: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        Self::SlotRef {
            entity_type: entity_type.into(),
            alias: alias.into(),
            text: text.into(),
            id: Uuid::now_v7(),
            user_defined: true,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::SlotRef { text, .. } | Self::Literal { text, .. } => text,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Self::SlotRef { id, .. } | Self::Literal { id, .. } => *id,
        }
    }

    pub fn user_defined(&self) -> bool {
        match self {
            Self::SlotRef { user_defined, .. } | Self::Literal { user_defined, .. } => {
                *user_defined
            }
        }
    }

    pub fn is_slot_ref(&self) -> bool {
        matches!(self, Self::SlotRef { .. })
    }

    /// The slot name for a slot reference.
    pub fn alias(&self) -> Option<&str> {
        match self {
            Self::SlotRef { alias, .. } => Some(alias),
            Self::Literal { .. } => None,
        }
    }

    /// The entity reference for a slot reference.
    pub fn entity_type(&self) -> Option<&str> {
        match self {
            Self::SlotRef { entity_type, .. } => Some(entity_type),
            Self::Literal { .. } => None,
        }
    }
}

/// One compiled sample utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledUtterance {
    /// Tokens in source order.
    #[serde(rename = "data")]
    pub tokens: Vec<CompiledToken>,
    pub is_template: bool,
    pub count: u32,
    pub updated: u64,
}

impl CompiledUtterance {
    pub fn new(tokens: Vec<CompiledToken>) -> Self {
        Self {
            tokens,
            is_template: false,
            count: 0,
            updated: 0,
        }
    }

    pub fn slot_refs(&self) -> impl Iterator<Item = &CompiledToken> {
        self.tokens.iter().filter(|t| t.is_slot_ref())
    }

    /// The tokens' text concatenated, which reproduces the source template.
    pub fn source_text(&self) -> String {
        self.tokens.iter().map(CompiledToken::text).collect()
    }
}
