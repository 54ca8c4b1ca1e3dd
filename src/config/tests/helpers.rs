//! Shared fixtures and helper functions for config tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::assistant::AssistantConfig;
use crate::config::{LogLevel, PersistedConfig};
use ortho_config::MergeComposer;
use rstest::fixture;

/// Fixture providing a `PersistedConfig` parsed from a full TOML example.
#[fixture]
pub fn config_from_full_toml() -> PersistedConfig {
    let toml = r#"
        default_assistant = "writer"
        markdown = false
        log_file = "/tmp/gptcli.log"
        log_level = "WARNING"
        api_key = "sk-test"

        [assistants.writer]
        model = "m1"
        temperature = 0.5
        messages = [{ role = "system", content = "You are a concise editor." }]

        [assistants.dev]
        model = "local-coder"
    "#;

    toml::from_str(toml).expect("TOML parsing should succeed")
}

/// Fixture providing a `PersistedConfig` parsed from a minimal TOML example.
#[fixture]
pub fn config_from_partial_toml() -> PersistedConfig {
    let toml = r#"
        api_key = "sk-test"
    "#;

    toml::from_str(toml).expect("TOML parsing should succeed")
}

/// Fixture providing a `PersistedConfig` with one custom `writer` assistant.
#[fixture]
pub fn config_with_writer() -> PersistedConfig {
    PersistedConfig {
        assistants: BTreeMap::from([(
            String::from("writer"),
            AssistantConfig {
                model: String::from("m1"),
                temperature: Some(0.5),
                ..AssistantConfig::default()
            },
        )]),
        ..PersistedConfig::default()
    }
}

/// Helper: Creates a `MergeComposer` with defaults layer already pushed.
pub fn create_composer_with_defaults() -> Result<MergeComposer, serde_json::Error> {
    let mut composer = MergeComposer::new();
    let defaults = ortho_config::serde_json::to_value(PersistedConfig::default())?;
    composer.push_defaults(defaults);
    Ok(composer)
}

/// Helper: Merges layers from a composer into `PersistedConfig`.
pub fn merge_config(
    composer: MergeComposer,
) -> Result<PersistedConfig, Arc<ortho_config::OrthoError>> {
    PersistedConfig::merge_from_layers(composer.layers())
}

/// Helper: Asserts that a config has all default values.
pub fn assert_config_has_defaults(config: &PersistedConfig) {
    assert_eq!(
        config.default_assistant, "general",
        "default_assistant should be general"
    );
    assert!(config.markdown, "markdown should be enabled");
    assert!(config.log_file.is_none(), "log_file should be None");
    assert_eq!(config.log_level, LogLevel::Info, "log_level should be INFO");
    assert!(config.api_key.is_none(), "api_key should be None");
    assert!(config.assistants.is_empty(), "assistants should be empty");
}
