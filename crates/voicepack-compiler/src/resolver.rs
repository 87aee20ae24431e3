//! Slot resolver.
//!
//! Maps a placeholder name to the slot declared on an intent, looking only at
//! slots that apply to the target platform.  A miss is not an error: the
//! caller treats the placeholder as literal text.

use voicepack_model::{IntentDeclaration, SlotDeclaration};

/// Resolve `name` against the platform-visible slots of `intent`.
///
/// The first matching declaration wins when a name is declared twice.
pub fn resolve_slot<'a>(
    intent: &'a IntentDeclaration,
    platform: &str,
    name: &str,
) -> Option<&'a SlotDeclaration> {
    intent
        .slots_for_platform(platform)
        .find(|slot| slot.name == name)
}

/// Slot lookup for one intent on one platform.
///
/// Filters the intent's slots once so that every template of the intent can
/// be resolved without re-filtering.
#[derive(Debug, Clone)]
pub struct SlotResolver<'a> {
    slots: Vec<&'a SlotDeclaration>,
}

impl<'a> SlotResolver<'a> {
    pub fn new(intent: &'a IntentDeclaration, platform: &str) -> Self {
        Self {
            slots: intent.slots_for_platform(platform).collect(),
        }
    }

    /// The declaration named `name`, if visible on this platform.
    pub fn resolve(&self, name: &str) -> Option<&'a SlotDeclaration> {
        self.slots.iter().copied().find(|slot| slot.name == name)
    }
}
