//! Unit tests for gptcli configuration.
//!
//! This module contains tests organised into:
//! - [`helpers`] - Shared fixtures and helper functions
//! - [`types_tests`] - Basic type and serialisation tests
//! - [`cli_tests`] - Argument resolution against a persisted configuration
//! - [`layer_precedence_tests`] - `MergeComposer` layer precedence tests

mod helpers;
