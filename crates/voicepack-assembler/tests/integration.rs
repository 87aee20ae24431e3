//! Integration tests for the voicepack-assembler crate.
//!
//! These tests run whole build operations against the in-memory and
//! filesystem writers.

use serde_json::{Value, json};
use voicepack_assembler::{BuildError, build, build_content, build_from_definition, build_synonyms};
use voicepack_model::{
    BuildConfig, ConfigError, IntentDeclaration, Invocation, SkillDefinition, SlotDeclaration,
};
use voicepack_writer::{FsArtifactWriter, MemoryArtifactWriter};

fn flight_definition() -> SkillDefinition {
    serde_json::from_value(json!({
        "locale": "en-US",
        "invocations": [{"environment": "alpha"}],
        "intents": [{"intent": "BookFlight", "slots": [{"name": "city", "type": "City"}]}],
        "utterances": {"BookFlight": ["fly to {city}"]},
        "slots": {"City": ["paris", "london"]}
    }))
    .unwrap()
}

fn config() -> BuildConfig {
    BuildConfig::builder().with_locale("en-US").build().unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
//  End-to-end build
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn end_to_end_flight_skill() {
    let writer = MemoryArtifactWriter::new();
    let summary = build(&flight_definition(), &config(), &writer).await.unwrap();
    assert_eq!(summary.written, 6);
    assert_eq!(writer.len(), 6);

    let base = "en-US/dialog-flow/alpha";

    let entity = writer.get(format!("{base}/entities/city.json")).unwrap();
    assert_eq!(entity["name"], "city");
    assert_eq!(entity["isEnum"], true);

    let entries = writer
        .get(format!("{base}/entities/city_entries_en.json"))
        .unwrap();
    assert_eq!(
        entries,
        json!([
            {"value": "paris", "synonyms": ["paris"]},
            {"value": "london", "synonyms": ["london"]}
        ])
    );

    let intent = writer.get(format!("{base}/intents/BookFlight.json")).unwrap();
    let params = intent["responses"][0]["parameters"].as_array().unwrap();
    assert_eq!(params.len(), 1);
    assert_eq!(params[0]["dataType"], "@city");
    assert_eq!(params[0]["name"], "city");
    assert_eq!(params[0]["value"], "$city");

    let usersays = writer
        .get(format!("{base}/intents/BookFlight_usersays_en.json"))
        .unwrap();
    let samples = usersays.as_array().unwrap();
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0]["isTemplate"], false);
    let data = samples[0]["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["text"], "fly to ");
    assert!(data[0].get("meta").is_none());
    assert_eq!(data[1]["alias"], "city");
    assert_eq!(data[1]["meta"], "@city");
    assert_eq!(data[1]["userDefined"], true);

    let agent = writer.get(format!("{base}/agent.json")).unwrap();
    assert_eq!(agent["defaultTimezone"], "America/New_York");
    let package = writer.get(format!("{base}/package.json")).unwrap();
    assert_eq!(package, json!({"version": "1.0.0"}));
}

#[tokio::test]
async fn end_to_end_on_disk() {
    let tmp = tempfile::tempdir().unwrap();
    let writer = FsArtifactWriter::new(tmp.path());
    build(&flight_definition(), &config(), &writer).await.unwrap();

    let raw = std::fs::read_to_string(
        tmp.path()
            .join("en-US/dialog-flow/alpha/entities/city_entries_en.json"),
    )
    .unwrap();
    let entries: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 2);
    assert!(raw.starts_with("[\n  {"));
}

#[tokio::test]
async fn flattened_layout_omits_locale() {
    let config = BuildConfig::builder()
        .with_locale("en-US")
        .with_flatten_locale(true)
        .build()
        .unwrap();
    let writer = MemoryArtifactWriter::new();
    build(&flight_definition(), &config, &writer).await.unwrap();
    assert!(writer.get("dialog-flow/alpha/agent.json").is_some());
    assert!(writer.get("en-US/dialog-flow/alpha/agent.json").is_none());
}

// ═══════════════════════════════════════════════════════════════════════
//  Environment filtering
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn same_intent_name_per_environment() {
    let mut def = flight_definition();
    def.invocations = vec![Invocation::new("alpha"), Invocation::new("beta")];
    def.intents = vec![
        IntentDeclaration::new("BookFlight")
            .with_environments(["alpha"])
            .with_slot(SlotDeclaration::new("city", "City")),
        IntentDeclaration::new("BookFlight")
            .with_environments(["beta"])
            .with_slot(SlotDeclaration::new("airport", "Airport")),
    ];

    let writer = MemoryArtifactWriter::new();
    build(&def, &config(), &writer).await.unwrap();

    let alpha = writer
        .get("en-US/dialog-flow/alpha/intents/BookFlight.json")
        .unwrap();
    let beta = writer
        .get("en-US/dialog-flow/beta/intents/BookFlight.json")
        .unwrap();
    assert_eq!(alpha["responses"][0]["parameters"][0]["dataType"], "@city");
    assert_eq!(beta["responses"][0]["parameters"][0]["dataType"], "@airport");
    assert_eq!(beta["responses"][0]["parameters"].as_array().unwrap().len(), 1);

    // `{city}` only binds in the environment that declares it.
    let alpha_says = writer
        .get("en-US/dialog-flow/alpha/intents/BookFlight_usersays_en.json")
        .unwrap();
    let beta_says = writer
        .get("en-US/dialog-flow/beta/intents/BookFlight_usersays_en.json")
        .unwrap();
    assert_eq!(alpha_says[0]["data"][1]["meta"], "@city");
    assert!(beta_says[0]["data"][1].get("meta").is_none());
    assert_eq!(beta_says[0]["data"][1]["userDefined"], true);
}

#[tokio::test]
async fn intent_outside_environment_is_not_built() {
    let mut def = flight_definition();
    def.intents[0].environment = vec!["production".into()];

    let writer = MemoryArtifactWriter::new();
    build(&def, &config(), &writer).await.unwrap();
    assert!(
        writer
            .get("en-US/dialog-flow/alpha/intents/BookFlight.json")
            .is_none()
    );
    assert!(
        writer
            .get("en-US/dialog-flow/alpha/intents/BookFlight_usersays_en.json")
            .is_none()
    );
}

// ═══════════════════════════════════════════════════════════════════════
//  Errors
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn missing_locale_writes_nothing() {
    let mut def = flight_definition();
    def.locale = None;

    let writer = MemoryArtifactWriter::new();
    let err = build_from_definition(&def, &writer).await.unwrap_err();
    assert!(matches!(err, BuildError::Config(ConfigError::MissingLocale)));
    assert!(writer.is_empty());
}

#[tokio::test]
async fn invalid_locale_writes_nothing() {
    let mut def = flight_definition();
    def.locale = Some("xx-YY".into());

    let writer = MemoryArtifactWriter::new();
    let err = build_from_definition(&def, &writer).await.unwrap_err();
    assert!(matches!(err, BuildError::Config(ConfigError::InvalidLocale { .. })));
    assert!(writer.is_empty());
}

#[tokio::test]
async fn invalid_environment_writes_nothing() {
    let mut def = flight_definition();
    def.invocations.push(Invocation::new("../escape"));

    let writer = MemoryArtifactWriter::new();
    let err = build(&def, &config(), &writer).await.unwrap_err();
    assert!(matches!(err, BuildError::InvalidEnvironment { .. }));
    assert!(writer.is_empty());
}

#[tokio::test]
async fn write_failure_rejects_build() {
    let writer = MemoryArtifactWriter::new().failing_on("en-US/dialog-flow/alpha/agent.json");
    let err = build(&flight_definition(), &config(), &writer).await.unwrap_err();
    assert!(matches!(err, BuildError::Write(_)));
}

// ═══════════════════════════════════════════════════════════════════════
//  Synonyms and content
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn synonym_files_only_for_slots_with_synonyms() {
    let def: SkillDefinition = serde_json::from_value(json!({
        "locale": "en-US",
        "slots": {
            "City": {"paris": ["city of light"], "london": []},
            "Color": {"red": [], "blue": []}
        }
    }))
    .unwrap();

    let writer = MemoryArtifactWriter::new();
    let summary = build_synonyms(&def, &config(), &writer).await.unwrap();
    assert_eq!(summary.written, 1);
    assert_eq!(
        writer.get("en-US/City.json").unwrap(),
        json!({"paris": ["city of light"], "london": []})
    );
    assert!(writer.get("en-US/Color.json").is_none());
}

#[tokio::test]
async fn content_files_are_kebab_cased() {
    let def: SkillDefinition = serde_json::from_value(json!({
        "locale": "en-US",
        "others": {"welcomeMessage": {"speech": "Welcome!"}}
    }))
    .unwrap();

    let tmp = tempfile::tempdir().unwrap();
    let writer = FsArtifactWriter::new(tmp.path());
    let summary = build_content(&def, &config(), &writer).await.unwrap();
    assert_eq!(summary.paths.len(), 1);

    let raw = std::fs::read_to_string(tmp.path().join("en-US/welcome-message.json")).unwrap();
    let doc: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["speech"], "Welcome!");
}
