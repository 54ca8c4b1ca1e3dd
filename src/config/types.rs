//! Configuration data types for gptcli.

use std::collections::BTreeMap;

use camino::Utf8PathBuf;
use clap::ValueEnum;
use ortho_config::{OrthoConfig, OrthoResult, PostMergeContext, PostMergeHook};
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

use crate::assistant::{AssistantConfig, GENERAL_ASSISTANT};

/// Severity threshold for the optional log file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Everything, including diagnostic detail.
    #[value(name = "DEBUG")]
    Debug,
    /// Informational records and above.
    #[default]
    #[value(name = "INFO")]
    Info,
    /// Warnings and above.
    #[value(name = "WARNING")]
    Warning,
    /// Errors only.
    #[value(name = "ERROR")]
    Error,
    /// Critical failures only.
    #[value(name = "CRITICAL")]
    Critical,
}

impl LogLevel {
    /// Returns the spelling used on the command line and in the config file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
}

/// The user's saved preferences, read from `~/.gptrc`.
///
/// Every field has a default, so a missing file and an empty file both yield
/// [`PersistedConfig::default()`]. Assistant parameters are not
/// defaulted here; they live in the built-in registry.
#[derive(Debug, Clone, PartialEq, SmartDefault, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(prefix = "GPTCLI", post_merge_hook)]
pub struct PersistedConfig {
    /// Assistant used when none is named on the command line.
    #[default(String::from(GENERAL_ASSISTANT))]
    #[ortho_config(skip_cli)]
    pub default_assistant: String,

    /// Render replies as markdown.
    #[default(true)]
    #[ortho_config(skip_cli)]
    pub markdown: bool,

    /// File that receives log records. Logging is off when absent.
    #[ortho_config(skip_cli)]
    pub log_file: Option<Utf8PathBuf>,

    /// Threshold for records written to `log_file`.
    #[ortho_config(skip_cli)]
    pub log_level: LogLevel,

    /// Credential handed to the chat transport.
    #[ortho_config(skip_cli)]
    pub api_key: Option<String>,

    /// User-defined assistants, keyed by name.
    #[ortho_config(skip_cli)]
    pub assistants: BTreeMap<String, AssistantConfig>,
}

impl PersistedConfig {
    /// Returns the stored credential, if a usable one is present.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

impl PostMergeHook for PersistedConfig {
    fn post_merge(&mut self, _ctx: &PostMergeContext) -> OrthoResult<()> {
        // A blank credential counts as no credential.
        if self.api_key.as_deref().is_some_and(|key| key.trim().is_empty()) {
            self.api_key = None;
        }
        Ok(())
    }
}
