//! Config Validation Tests
//!
//! Typo detection and range validation, exercised through the public
//! config API.

use buds_assist::config::validation::{
    known_config_keys, suggest_correction, validate_ranges, validate_unknown_keys,
};
use buds_assist::config::{ChatConfig, ConfigError};

// ============================================================================
// Typo Detection
// ============================================================================

#[test]
fn typo_in_assistant_section_warns_with_suggestion() {
    let toml_str = r#"
[assistant]
max_source = 4
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1, "Expected exactly 1 warning");
    assert!(warnings[0].field.contains("max_source"));
    assert_eq!(
        warnings[0].suggestion.as_deref(),
        Some("assistant.max_sources")
    );
}

#[test]
fn typo_in_section_name_warns() {
    let warnings = validate_unknown_keys("[genration]\nmodel = \"m\"\n");
    assert!(warnings.iter().any(|w| w.field == "genration"
        && w.suggestion.as_deref() == Some("generation")));
}

#[test]
fn every_known_key_is_its_own_suggestion() {
    let known = known_config_keys();
    for key in &known {
        assert_eq!(suggest_correction(key, &known).as_deref(), Some(*key));
    }
}

#[test]
fn full_example_config_is_clean() {
    let toml_str = r#"
[server]
addr = "127.0.0.1:3000"
max_body_bytes = 8192

[assistant]
school_name = "Buds School System"
max_sources = 3
suggested_questions = ["What is the fee structure?"]

[generation]
base_url = "https://api.together.xyz/v1"
model = "meta-llama/Llama-3-8b-chat-hf"
temperature = 0.2
max_tokens = 512
timeout_secs = 10
"#;
    assert!(validate_unknown_keys(toml_str).is_empty());
    let config = ChatConfig::from_toml_str(toml_str).unwrap();
    assert_eq!(config.server.max_body_bytes, 8192);
    assert_eq!(config.generation.timeout_secs, 10);
}

// ============================================================================
// Range Validation
// ============================================================================

#[test]
fn out_of_range_values_fail_loading() {
    let toml_str = r#"
[generation]
temperature = 5.0
max_tokens = 0
"#;
    match ChatConfig::from_toml_str(toml_str) {
        Err(ConfigError::Validation(errors)) => {
            assert_eq!(errors.len(), 2, "{errors:?}");
            assert!(errors.iter().any(|e| e.contains("temperature")));
            assert!(errors.iter().any(|e| e.contains("max_tokens")));
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn large_max_sources_only_warns() {
    let mut config = ChatConfig::default();
    config.assistant.max_sources = 25;
    let (errors, warnings) = validate_ranges(&config);
    assert!(errors.is_empty());
    assert_eq!(warnings.len(), 1);
    assert!(config.validate().is_ok());
}

#[test]
fn serialized_default_round_trips_through_loader() {
    let toml = ChatConfig::default().to_toml().unwrap();
    let parsed = ChatConfig::from_toml_str(&toml).unwrap();
    assert_eq!(parsed.assistant.suggested_questions.len(), 8);
    assert!(parsed.knowledge.path.is_none());
}
