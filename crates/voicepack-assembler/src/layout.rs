//! Logical artifact paths.
//!
//! ```text
//! [<locale>/]dialog-flow/<environment>/agent.json
//! [<locale>/]dialog-flow/<environment>/package.json
//! [<locale>/]dialog-flow/<environment>/entities/<slot-key>.json
//! [<locale>/]dialog-flow/<environment>/entities/<slot-key>_entries_en.json
//! [<locale>/]dialog-flow/<environment>/intents/<Intent>.json
//! [<locale>/]dialog-flow/<environment>/intents/<Intent>_usersays_en.json
//! <locale>/<SlotKey>.json              (synonyms)
//! <locale>/<content-key>.json          (content)
//! ```
//!
//! Paths are relative; the writer decides where the root is.

use std::path::{Component, Path, PathBuf};

use voicepack_compiler::kebab_case;
use voicepack_model::BuildConfig;

use crate::defaults::{LANGUAGE, PLATFORM_DIR};
use crate::error::{BuildError, Result};

const ENTITIES_DIR: &str = "entities";
const INTENTS_DIR: &str = "intents";

/// Derives every artifact path for one configuration.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    locale: String,
    flatten_locale: bool,
}

impl OutputLayout {
    pub fn new(config: &BuildConfig) -> Self {
        Self {
            locale: config.locale().as_str().to_owned(),
            flatten_locale: config.flatten_locale(),
        }
    }

    /// Root of one invocation's artifact set.
    pub fn environment_dir(&self, environment: &str) -> Result<PathBuf> {
        validate_environment(environment)?;
        let mut path = PathBuf::new();
        if !self.flatten_locale {
            path.push(&self.locale);
        }
        path.push(PLATFORM_DIR);
        path.push(environment);
        Ok(path)
    }

    pub fn agent(&self, environment: &str) -> Result<PathBuf> {
        Ok(self.environment_dir(environment)?.join("agent.json"))
    }

    pub fn package(&self, environment: &str) -> Result<PathBuf> {
        Ok(self.environment_dir(environment)?.join("package.json"))
    }

    pub fn entity_definition(&self, environment: &str, slot_key: &str) -> Result<PathBuf> {
        Ok(self
            .environment_dir(environment)?
            .join(ENTITIES_DIR)
            .join(format!("{}.json", kebab_case(slot_key))))
    }

    pub fn entity_entries(&self, environment: &str, slot_key: &str) -> Result<PathBuf> {
        Ok(self
            .environment_dir(environment)?
            .join(ENTITIES_DIR)
            .join(format!("{}_entries_{LANGUAGE}.json", kebab_case(slot_key))))
    }

    pub fn intent_definition(&self, environment: &str, intent: &str) -> Result<PathBuf> {
        Ok(self
            .environment_dir(environment)?
            .join(INTENTS_DIR)
            .join(format!("{intent}.json")))
    }

    pub fn intent_usersays(&self, environment: &str, intent: &str) -> Result<PathBuf> {
        Ok(self
            .environment_dir(environment)?
            .join(INTENTS_DIR)
            .join(format!("{intent}_usersays_{LANGUAGE}.json")))
    }

    /// Synonym file of a slot collection; the key is used verbatim.
    pub fn synonym(&self, slot_key: &str) -> PathBuf {
        Path::new(&self.locale).join(format!("{slot_key}.json"))
    }

    /// Content file of a free-form entry; the key is kebab-cased.
    pub fn content(&self, key: &str) -> PathBuf {
        Path::new(&self.locale).join(format!("{}.json", kebab_case(key)))
    }
}

/// An environment must be exactly one plain directory name.
fn validate_environment(environment: &str) -> Result<()> {
    let mut components = Path::new(environment).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(BuildError::InvalidEnvironment {
            environment: environment.to_owned(),
            reason: "must be a single directory name".into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(flatten: bool) -> OutputLayout {
        let config = BuildConfig::builder()
            .with_locale("en-US")
            .with_flatten_locale(flatten)
            .build()
            .unwrap();
        OutputLayout::new(&config)
    }

    #[test]
    fn locale_directory_by_default() {
        let path = layout(false).entity_definition("alpha", "City").unwrap();
        assert_eq!(path, Path::new("en-US/dialog-flow/alpha/entities/city.json"));
    }

    #[test]
    fn flattened_layout_drops_locale() {
        let path = layout(true).agent("alpha").unwrap();
        assert_eq!(path, Path::new("dialog-flow/alpha/agent.json"));
    }

    #[test]
    fn entity_and_intent_file_names() {
        let l = layout(false);
        assert_eq!(
            l.entity_entries("beta", "FlightClass").unwrap(),
            Path::new("en-US/dialog-flow/beta/entities/flight-class_entries_en.json")
        );
        assert_eq!(
            l.intent_definition("beta", "BookFlight").unwrap(),
            Path::new("en-US/dialog-flow/beta/intents/BookFlight.json")
        );
        assert_eq!(
            l.intent_usersays("beta", "BookFlight").unwrap(),
            Path::new("en-US/dialog-flow/beta/intents/BookFlight_usersays_en.json")
        );
        assert_eq!(
            l.package("beta").unwrap(),
            Path::new("en-US/dialog-flow/beta/package.json")
        );
    }

    #[test]
    fn synonym_and_content_paths() {
        let l = layout(true);
        assert_eq!(l.synonym("City"), Path::new("en-US/City.json"));
        assert_eq!(l.content("welcomeMessage"), Path::new("en-US/welcome-message.json"));
    }

    #[test]
    fn bad_environments_rejected() {
        let l = layout(false);
        for env in ["", "..", "a/b", "/abs", "."] {
            assert!(
                matches!(l.agent(env), Err(BuildError::InvalidEnvironment { .. })),
                "{env}"
            );
        }
    }
}
