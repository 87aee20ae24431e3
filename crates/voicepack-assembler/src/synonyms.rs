//! Synonym files.
//!
//! One `<locale>/<SlotKey>.json` per slot collection that carries at least
//! one non-empty synonym.  The document is the value-to-synonyms mapping as
//! supplied.

use voicepack_model::{BuildConfig, SkillDefinition};
use voicepack_writer::{Artifact, ArtifactSet};

use crate::error::Result;
use crate::layout::OutputLayout;

pub fn assemble_synonyms(definition: &SkillDefinition, config: &BuildConfig) -> Result<ArtifactSet> {
    let layout = OutputLayout::new(config);
    let mut artifacts = ArtifactSet::new();

    for (slot_key, values) in &definition.slots {
        if !values.has_synonyms() {
            tracing::trace!(slot = %slot_key, "no synonyms, skipping");
            continue;
        }
        artifacts.push(Artifact::new(
            layout.synonym(slot_key),
            serde_json::Value::Object(values.synonym_map()),
        ))?;
    }

    tracing::info!(files = artifacts.len(), "synonyms assembled");
    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voicepack_model::{SlotValue, SlotValues};

    fn config() -> BuildConfig {
        BuildConfig::builder().with_locale("en-GB").build().unwrap()
    }

    #[test]
    fn slot_without_synonyms_emits_nothing() {
        let mut def = SkillDefinition::default();
        def.slots.insert(
            "City".into(),
            vec![SlotValue::new("paris"), SlotValue::with_synonyms("rome", [""])]
                .into_iter()
                .collect::<SlotValues>(),
        );
        assert!(assemble_synonyms(&def, &config()).unwrap().is_empty());
    }

    #[test]
    fn slot_with_synonyms_emits_exact_mapping() {
        let mut def = SkillDefinition::default();
        def.slots.insert(
            "City".into(),
            vec![
                SlotValue::with_synonyms("paris", ["city of light"]),
                SlotValue::new("london"),
            ]
            .into_iter()
            .collect::<SlotValues>(),
        );
        let artifacts = assemble_synonyms(&def, &config()).unwrap();
        assert_eq!(artifacts.len(), 1);
        let artifact = artifacts.get("en-GB/City.json").unwrap();
        assert_eq!(
            artifact.document,
            serde_json::json!({"paris": ["city of light"], "london": []})
        );
    }
}
