//! Fixed default values of the import format.
//!
//! None of these are derived from the skill definition.

use serde_json::{Value, json};

/// Directory holding every artifact for the conversational platform.
pub const PLATFORM_DIR: &str = "dialog-flow";

/// Language suffix of entry and user-says files.
pub const LANGUAGE: &str = "en";

/// Intent that receives the platform welcome events.
pub const LAUNCH_INTENT: &str = "LaunchIntent";

/// Events attached to [`LAUNCH_INTENT`].
pub const WELCOME_EVENTS: [&str; 2] = ["WELCOME", "GOOGLE_ASSISTANT_WELCOME"];

/// Priority assigned to every intent.
pub const INTENT_PRIORITY: u32 = 500_000;

/// Version stamped into every `package.json`.
pub const PACKAGE_VERSION: &str = "1.0.0";

pub const DEFAULT_TIMEZONE: &str = "America/New_York";

/// The agent manifest, identical for every invocation.
pub fn agent_manifest() -> Value {
    json!({
        "description": "",
        "language": LANGUAGE,
        "activeAssistantAgents": [],
        "googleAssistant": {
            "googleAssistantCompatible": false,
            "project": "somename",
            "welcomeIntentSignInRequired": false,
            "startIntents": [],
            "systemIntents": [],
            "endIntentIds": [],
            "oAuthLinking": {
                "required": false,
                "grantType": "AUTH_CODE_GRANT"
            },
            "voiceType": "MALE_1",
            "capabilities": [],
            "protocolVersion": "V1"
        },
        "defaultTimezone": DEFAULT_TIMEZONE,
        "webhook": {
            "url": "",
            "headers": {},
            "available": true,
            "useForDomains": true,
            "cloudFunctionsEnabled": false,
            "cloudFunctionsInitialized": false
        },
        "isPrivate": true,
        "customClassifierMode": "use.after",
        "mlMinConfidence": 0.2,
        "supportedLanguages": []
    })
}

/// The package version stamp.
pub fn package_manifest() -> Value {
    json!({ "version": PACKAGE_VERSION })
}
