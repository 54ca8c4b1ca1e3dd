//! Configuration system for gptcli.
//!
//! This module provides the persisted configuration record, its loader, and the
//! command-line definitions layered on top of it. Precedence, lowest to
//! highest: built-in defaults, the configuration file, command-line flags.
//!
//! The configuration file is read from `~/.gptrc` and uses TOML.
//!
//! # Example Configuration
//!
//! ```toml
//! default_assistant = "dev"
//! markdown = true
//! api_key = "sk-..."
//! log_file = "/tmp/gptcli.log"
//! log_level = "DEBUG"
//!
//! [assistants.writer]
//! model = "gpt-4"
//! temperature = 0.5
//! messages = [{ role = "system", content = "You are a concise editor." }]
//! ```

mod cli;
mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use cli::{Cli, ResolvedArgs, parse_args};
pub use loader::{CONFIG_FILE_NAME, default_config_path, load_config};
pub use types::{LogLevel, PersistedConfig};
