//! Built-in assistants and the merge with user-defined ones.

use std::collections::BTreeMap;

use super::{AssistantConfig, DEFAULT_MODEL, Message};

/// Name of the general-purpose built-in assistant.
pub const GENERAL_ASSISTANT: &str = "general";

/// Name of the software-development built-in assistant.
pub const DEV_ASSISTANT: &str = "dev";

/// Names of every built-in assistant.
pub const BUILTIN_ASSISTANT_NAMES: [&str; 2] = [DEV_ASSISTANT, GENERAL_ASSISTANT];

const GENERAL_PROMPT: &str = "You are a helpful assistant.";

const DEV_PROMPT: &str = "You are a helpful assistant who is an expert in software development. \
You are helping a user who is a software developer. Your responses are short and concise. \
You include code snippets when appropriate. Code snippets are formatted using Markdown \
with a correct language tag. User's `inputs` are formatted using Markdown.";

const BUILTIN_TEMPERATURE: f64 = 0.7;
const BUILTIN_TOP_P: f64 = 1.0;

fn builtin(prompt: &str) -> AssistantConfig {
    AssistantConfig {
        messages: vec![Message::system(prompt)],
        model: String::from(DEFAULT_MODEL),
        temperature: Some(BUILTIN_TEMPERATURE),
        top_p: Some(BUILTIN_TOP_P),
    }
}

/// Returns the built-in assistant registry.
#[must_use]
pub fn builtin_assistants() -> BTreeMap<String, AssistantConfig> {
    BTreeMap::from([
        (String::from(DEV_ASSISTANT), builtin(DEV_PROMPT)),
        (String::from(GENERAL_ASSISTANT), builtin(GENERAL_PROMPT)),
    ])
}

/// Merges the built-in and custom registries into a new lookup table.
///
/// Every key appears once. Where both registries define a name the custom
/// entry is taken whole; fields are never combined across registries.
#[must_use]
pub fn merge_registries(
    builtin: &BTreeMap<String, AssistantConfig>,
    custom: &BTreeMap<String, AssistantConfig>,
) -> BTreeMap<String, AssistantConfig> {
    builtin
        .iter()
        .filter(|(name, _)| !custom.contains_key(*name))
        .chain(custom.iter())
        .map(|(name, config)| (name.clone(), config.clone()))
        .collect()
}

/// Returns the sorted, de-duplicated assistant names accepted on the command
/// line: the built-in names plus every key of `custom`.
#[must_use]
pub fn assistant_names(custom: &BTreeMap<String, AssistantConfig>) -> Vec<String> {
    let mut names: Vec<String> = BUILTIN_ASSISTANT_NAMES
        .iter()
        .map(|name| String::from(*name))
        .chain(custom.keys().cloned())
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}
