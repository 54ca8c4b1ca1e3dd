//! Semantic error types for the gptcli application.
//!
//! This module defines the error hierarchy for gptcli, following the principle of
//! using semantic error enums (via `thiserror`) for conditions the caller might
//! inspect or map to an exit status, while reserving opaque errors
//! (`eyre::Report`) for the application boundary.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {message}")]
    ReadFailed {
        /// The path of the configuration file.
        path: Utf8PathBuf,
        /// A description of the I/O failure.
        message: String,
    },

    /// The configuration file could not be parsed.
    #[error("failed to parse configuration file: {message}")]
    ParseError {
        /// A description of the parse error.
        message: String,
    },

    /// The `OrthoConfig` library returned an error while merging layers.
    ///
    /// This wraps type mismatches discovered after the file layer has been
    /// merged over the defaults, such as an unknown `log_level` or a
    /// non-numeric `temperature`.
    #[error("configuration loading failed: {0}")]
    OrthoConfig(Arc<ortho_config::OrthoError>),
}

/// Errors raised while selecting an assistant.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// The requested assistant is in neither the built-in nor the custom
    /// registry.
    ///
    /// Argument parsing restricts the assistant name to the same union, so this
    /// only surfaces if the two name sets diverge.
    #[error("assistant '{name}' is not defined; known assistants: {known}")]
    UnknownAssistant {
        /// The requested assistant name.
        name: String,
        /// Comma-separated list of the names that were available.
        known: String,
    },
}

/// Errors that can occur while installing the log subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file could not be opened for appending.
    #[error("failed to open log file {path}: {message}")]
    OpenFailed {
        /// The requested log file path.
        path: Utf8PathBuf,
        /// A description of the I/O failure.
        message: String,
    },

    /// The log filter directives could not be parsed.
    #[error("invalid log filter: {message}")]
    InvalidFilter {
        /// The message reported by `tracing-subscriber`.
        message: String,
    },
}

/// Errors raised while writing to the user's terminal.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// A message could not be written.
    #[error("failed to write to the terminal: {message}")]
    WriteFailed {
        /// A description of the I/O failure.
        message: String,
    },
}

/// Top-level error type for the gptcli application.
///
/// This enum aggregates all domain-specific errors into a single type that can
/// be used throughout the application. At the application boundary (main.rs),
/// these errors are converted to `eyre::Report` for human-readable error
/// reporting.
#[derive(Debug, Error)]
pub enum GptcliError {
    /// An error occurred during configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An error occurred while selecting the assistant.
    #[error(transparent)]
    Assistant(#[from] AssistantError),

    /// An error occurred while configuring logging.
    #[error(transparent)]
    Logging(#[from] LoggingError),

    /// An error occurred while writing to the terminal.
    #[error(transparent)]
    Terminal(#[from] TerminalError),
}

/// A specialised `Result` type for gptcli operations.
pub type Result<T> = std::result::Result<T, GptcliError>;
