//! Free-form content files: one kebab-cased `<locale>/<key>.json` per entry.

use voicepack_compiler::kebab_case;
use voicepack_model::{BuildConfig, SkillDefinition};
use voicepack_writer::{Artifact, ArtifactSet};

use crate::error::Result;
use crate::layout::OutputLayout;

pub fn assemble_content(definition: &SkillDefinition, config: &BuildConfig) -> Result<ArtifactSet> {
    let layout = OutputLayout::new(config);
    let mut artifacts = ArtifactSet::new();

    for (key, value) in &definition.others {
        if kebab_case(key).is_empty() {
            tracing::warn!(key = %key, "content key has no usable characters, skipping");
            continue;
        }
        artifacts.push(Artifact::new(layout.content(key), value.clone()))?;
    }

    tracing::info!(files = artifacts.len(), "content assembled");
    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> BuildConfig {
        BuildConfig::builder().with_locale("de-DE").build().unwrap()
    }

    #[test]
    fn entries_are_kebab_cased() {
        let mut def = SkillDefinition::default();
        def.others.insert("welcomeMessage".into(), json!({"text": "Hallo"}));
        def.others.insert("HelpText".into(), json!(["a", "b"]));

        let artifacts = assemble_content(&def, &config()).unwrap();
        assert_eq!(artifacts.len(), 2);
        assert_eq!(
            artifacts.get("de-DE/welcome-message.json").unwrap().document,
            json!({"text": "Hallo"})
        );
        assert!(artifacts.contains("de-DE/help-text.json"));
    }

    #[test]
    fn colliding_keys_are_rejected() {
        let mut def = SkillDefinition::default();
        def.others.insert("helpText".into(), json!(1));
        def.others.insert("help_text".into(), json!(2));
        assert!(assemble_content(&def, &config()).is_err());
    }

    #[test]
    fn unusable_key_is_skipped() {
        let mut def = SkillDefinition::default();
        def.others.insert("!!".into(), json!(1));
        assert!(assemble_content(&def, &config()).unwrap().is_empty());
    }
}
