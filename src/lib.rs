//! Bootstrap layer for an interactive chat client.
//!
//! `gptcli` resolves the runtime configuration for a chat session from three
//! sources (the persisted `~/.gptrc` file, built-in defaults and command-line
//! overrides), selects an assistant, validates that an API credential is
//! available and hands control to the interactive session.
//!
//! # Architecture
//!
//! Setup is a single sequential pass. The persisted configuration is loaded
//! first and then acts as the default layer for argument parsing, so the file
//! and the flags form one layered configuration. The assistant is resolved by
//! overlaying non-empty command-line overrides on a registry entry, producing a
//! fresh value rather than editing the registry.
//!
//! # Modules
//!
//! - [`assistant`]: Built-in and custom assistant registry and override merging
//! - [`bootstrap`]: Ordered startup sequence ending in the session
//! - [`config`]: Persisted configuration and command-line resolution
//! - [`error`]: Semantic error types for the application
//! - [`failure`]: Error boundary wrapped around the whole program
//! - [`logging`]: Optional file logging setup
//! - [`session`]: Seam to the interactive chat session

pub mod assistant;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod failure;
pub mod logging;
pub mod session;
