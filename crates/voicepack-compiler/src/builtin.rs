//! Built-in intent utterances.
//!
//! Platform built-in intents ship with a default set of sample utterances
//! that is merged into whatever the skill author supplied.

const LAUNCH: &[&str] = &["hi", "hello", "hey there", "good morning"];

const HELP: &[&str] = &[
    "help",
    "help me",
    "what can I do",
    "what can you do",
    "how does this work",
];

const STOP: &[&str] = &["stop", "quit", "exit", "goodbye", "that's all"];

const CANCEL: &[&str] = &["cancel", "never mind", "forget it", "cancel that"];

const YES: &[&str] = &["yes", "yeah", "sure", "yes please", "correct"];

const NO: &[&str] = &["no", "nope", "no thanks", "not really"];

const TABLE: &[(&str, &[&str])] = &[
    ("LaunchIntent", LAUNCH),
    ("HelpIntent", HELP),
    ("StopIntent", STOP),
    ("CancelIntent", CANCEL),
    ("YesIntent", YES),
    ("NoIntent", NO),
];

/// Default templates for a built-in intent; empty for any other intent.
pub fn builtin_utterances(intent: &str) -> &'static [&'static str] {
    TABLE
        .iter()
        .find(|(name, _)| *name == intent)
        .map(|(_, templates)| *templates)
        .unwrap_or(&[])
}
