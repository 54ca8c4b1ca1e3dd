//! Behavioural tests for gptcli error handling.
//!
//! These tests validate user-visible error messages using rstest-bdd.

use camino::Utf8PathBuf;
use eyre::Report;
use gptcli::error::{AssistantError, ConfigError, GptcliError, LoggingError, TerminalError};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

#[derive(Clone, Debug)]
enum ErrorSnapshot {
    ParseFailed { message: String },
    UnknownAssistant { name: String },
    LogFileFailed { path: String, message: String },
    TerminalWriteFailed { message: String },
}

impl ErrorSnapshot {
    fn to_error(&self) -> GptcliError {
        match self {
            Self::ParseFailed { message } => GptcliError::from(ConfigError::ParseError {
                message: message.clone(),
            }),
            Self::UnknownAssistant { name } => {
                GptcliError::from(AssistantError::UnknownAssistant {
                    name: name.clone(),
                    known: String::from("dev, general"),
                })
            }
            Self::LogFileFailed { path, message } => GptcliError::from(LoggingError::OpenFailed {
                path: Utf8PathBuf::from(path),
                message: message.clone(),
            }),
            Self::TerminalWriteFailed { message } => {
                GptcliError::from(TerminalError::WriteFailed {
                    message: message.clone(),
                })
            }
        }
    }
}

/// State shared across error handling scenarios.
#[derive(Default, ScenarioState)]
struct ErrorState {
    /// The last error captured during a scenario.
    error: Slot<ErrorSnapshot>,
    /// The formatted error message.
    message: Slot<String>,
    /// Whether the operation succeeded.
    success: Slot<bool>,
}

/// Fixture providing a fresh error state.
#[fixture]
fn error_state() -> ErrorState {
    ErrorState::default()
}

#[given("a successful operation")]
fn successful_operation(error_state: &ErrorState) {
    error_state.success.set(true);
}

#[given("a configuration parse failure with message {message}")]
fn configuration_parse_failure(error_state: &ErrorState, message: String) {
    error_state.error.set(ErrorSnapshot::ParseFailed { message });
    error_state.success.set(false);
}

#[given("an unknown assistant {name}")]
fn unknown_assistant(error_state: &ErrorState, name: String) {
    error_state.error.set(ErrorSnapshot::UnknownAssistant { name });
    error_state.success.set(false);
}

#[given("a log file failure for {path} with message {message}")]
fn log_file_failure(error_state: &ErrorState, path: String, message: String) {
    error_state
        .error
        .set(ErrorSnapshot::LogFileFailed { path, message });
    error_state.success.set(false);
}

#[given("a terminal write failure with message {message}")]
fn terminal_write_failure(error_state: &ErrorState, message: String) {
    error_state
        .error
        .set(ErrorSnapshot::TerminalWriteFailed { message });
    error_state.success.set(false);
}

#[when("the result is inspected")]
fn result_is_inspected(error_state: &ErrorState) {
    let _ = error_state;
}

#[when("the error is formatted")]
#[expect(
    clippy::expect_used,
    reason = "test assertion - panic on missing state is intentional"
)]
fn error_is_formatted(error_state: &ErrorState) {
    let error = error_state.error.get().expect("error should be set");
    error_state.message.set(error.to_error().to_string());
}

#[when("the error is reported")]
#[expect(
    clippy::expect_used,
    reason = "test assertion - panic on missing state is intentional"
)]
fn error_is_reported(error_state: &ErrorState) {
    let error = error_state.error.get().expect("error should be set");
    let report = Report::from(error.to_error());
    error_state.message.set(report.to_string());
}

#[then("the outcome is ok")]
fn outcome_is_ok(error_state: &ErrorState) {
    let Some(success) = error_state.success.get() else {
        panic!("success should be set");
    };
    assert!(success, "expected the operation to succeed");
}

#[expect(
    clippy::expect_used,
    reason = "test assertion - panic on missing state is intentional"
)]
fn assert_message_is(error_state: &ErrorState, expected: &str) {
    let message = error_state.message.get().expect("message should be set");
    assert_eq!(message, expected);
}

#[then("the error message is {expected}")]
fn error_message_is(error_state: &ErrorState, expected: String) {
    assert_message_is(error_state, &expected);
}

#[then("the report message is {expected}")]
fn report_message_is(error_state: &ErrorState, expected: String) {
    assert_message_is(error_state, &expected);
}

#[scenario(
    path = "tests/features/error_handling.feature",
    name = "Successful operations return ok"
)]
fn successful_operations_return_ok(error_state: ErrorState) {
    let _ = error_state;
}

#[scenario(
    path = "tests/features/error_handling.feature",
    name = "Malformed configuration is reported clearly"
)]
fn malformed_configuration_is_reported(error_state: ErrorState) {
    let _ = error_state;
}

#[scenario(
    path = "tests/features/error_handling.feature",
    name = "Unknown assistants list the known names"
)]
fn unknown_assistants_list_known_names(error_state: ErrorState) {
    let _ = error_state;
}

#[scenario(
    path = "tests/features/error_handling.feature",
    name = "Log file failures include the path"
)]
fn log_file_failures_include_path(error_state: ErrorState) {
    let _ = error_state;
}

#[scenario(
    path = "tests/features/error_handling.feature",
    name = "Terminal write failures are reported via eyre"
)]
fn terminal_write_failures_are_reported(error_state: ErrorState) {
    let _ = error_state;
}
