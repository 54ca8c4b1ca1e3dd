//! Assistant definitions, registry merging and override application.
//!
//! An assistant is a named set of model parameters plus the messages that open
//! every conversation. Two assistants (`general` and `dev`) are built in; users
//! may define more, or replace the built-in ones, in the `[assistants]` table of
//! the configuration file.
//!
//! Resolution never edits a registry entry. [`init_assistant`] looks the base
//! entry up in a freshly merged registry and derives a new
//! [`AssistantConfig`] from it with [`AssistantConfig::with_overrides`].

mod registry;


use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

use crate::error::{AssistantError, Result};

pub use registry::{
    BUILTIN_ASSISTANT_NAMES, DEV_ASSISTANT, GENERAL_ASSISTANT, assistant_names,
    builtin_assistants, merge_registries,
};

/// Model used when an assistant definition does not name one.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// The author of a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions that shape the assistant's behaviour.
    System,
    /// A message written by the user.
    User,
    /// A reply produced by the model.
    Assistant,
}

/// A single message in an assistant's opening conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who authored the message.
    pub role: Role,
    /// The message text.
    pub content: String,
}

impl Message {
    /// Creates a system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

/// Model parameters and opening messages for one assistant.
///
/// `temperature` and `top_p` are optional; `None` leaves the choice to the
/// model's own default.
#[derive(Debug, Clone, PartialEq, SmartDefault, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Messages sent at the start of every conversation.
    pub messages: Vec<Message>,

    /// Model identifier.
    #[default(String::from(DEFAULT_MODEL))]
    pub model: String,

    /// Sampling temperature.
    pub temperature: Option<f64>,

    /// Nucleus-sampling probability mass.
    pub top_p: Option<f64>,
}

impl AssistantConfig {
    /// Returns a copy of this configuration with the requested overrides
    /// applied.
    ///
    /// Each field is replaced independently, and only when its override is
    /// present. An explicit `Some(0.0)` temperature is an override like any
    /// other value.
    #[must_use]
    pub fn with_overrides(&self, overrides: &AssistantOverrides) -> Self {
        Self {
            messages: self.messages.clone(),
            model: overrides
                .model
                .clone()
                .unwrap_or_else(|| self.model.clone()),
            temperature: overrides.temperature.or(self.temperature),
            top_p: overrides.top_p.or(self.top_p),
        }
    }
}

/// Per-invocation replacements for assistant fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssistantOverrides {
    /// Replacement model identifier.
    pub model: Option<String>,
    /// Replacement sampling temperature.
    pub temperature: Option<f64>,
    /// Replacement nucleus-sampling parameter.
    pub top_p: Option<f64>,
}

impl AssistantOverrides {
    /// Returns whether no override was requested.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.model.is_none() && self.temperature.is_none() && self.top_p.is_none()
    }
}

/// A fully resolved assistant, ready to drive a chat session.
#[derive(Debug, Clone, PartialEq)]
pub struct Assistant {
    name: String,
    config: AssistantConfig,
}

impl Assistant {
    /// Creates an assistant from a resolved configuration.
    #[must_use]
    pub const fn new(name: String, config: AssistantConfig) -> Self {
        Self { name, config }
    }

    /// The registry name this assistant was resolved from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved model parameters.
    #[must_use]
    pub const fn config(&self) -> &AssistantConfig {
        &self.config
    }

    /// Messages that open every conversation with this assistant.
    #[must_use]
    pub fn init_messages(&self) -> &[Message] {
        &self.config.messages
    }
}

/// Builds the assistant named `name`, applying any overrides.
///
/// The base entry comes from the built-in registry overlaid with `custom`;
/// a custom entry replaces a built-in one of the same name entirely.
///
/// # Errors
///
/// Returns `AssistantError::UnknownAssistant` if `name` is in neither
/// registry.
pub fn init_assistant(
    name: &str,
    overrides: &AssistantOverrides,
    custom: &BTreeMap<String, AssistantConfig>,
) -> Result<Assistant> {
    let registry = merge_registries(&builtin_assistants(), custom);
    let Some(base) = registry.get(name) else {
        let known = registry.keys().map(String::as_str).collect::<Vec<_>>();
        return Err(AssistantError::UnknownAssistant {
            name: name.to_owned(),
            known: known.join(", "),
        }
        .into());
    };
    Ok(Assistant::new(name.to_owned(), base.with_overrides(overrides)))
}
