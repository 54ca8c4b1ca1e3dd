//! Ordered startup sequence.
//!
//! [`run`] performs setup in a fixed order, each step feeding the next:
//!
//! 1. Load the persisted configuration.
//! 2. Parse the command line with that configuration as its defaults.
//! 3. Install file logging, if a log file is configured.
//! 4. Resolve the assistant and log the resolved parameters.
//! 5. Check for an API credential in the configuration.
//! 6. Launch the session and wait for it to end.
//!
//! Usage errors and a missing credential are expected outcomes reported through
//! [`BootstrapOutcome`]. Everything else is an error for the caller's failure
//! boundary.

use std::ffi::OsString;
use std::io::Write;

use camino::Utf8Path;

use crate::assistant::init_assistant;
use crate::config::{load_config, parse_args};
use crate::error::{Result, TerminalError};
use crate::logging::init_file_logging;
use crate::session::{ApiKey, SessionLauncher, SessionRequest};

/// Printed when the configuration holds no API credential.
pub const MISSING_API_KEY_MESSAGE: &str = "No API key found. Please set the OPENAI_API_KEY \
environment variable or `api_key = \"<key>\"` value in ~/.gptrc";

/// How a bootstrap run ended.
#[derive(Debug)]
pub enum BootstrapOutcome {
    /// The session ran and has finished.
    SessionEnded,
    /// No credential was configured; the session was not started.
    MissingCredential,
    /// The command line was rejected, or help/version output was requested.
    ///
    /// The caller should hand this to [`clap::Error::exit`].
    Usage(clap::Error),
}

/// Runs the startup sequence and, if it succeeds, the session.
///
/// `tokens` is the full command line including the program name. `out`
/// receives user-facing messages produced by bootstrap itself.
///
/// # Errors
///
/// Returns `GptcliError` if:
/// - the configuration file exists but is malformed
/// - the log file cannot be opened
/// - the assistant cannot be resolved
/// - the missing-credential message cannot be written
/// - the session launcher fails
pub fn run<I, T, L, W>(
    tokens: I,
    config_path: Option<&Utf8Path>,
    launcher: &mut L,
    out: &mut W,
) -> Result<BootstrapOutcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    L: SessionLauncher + ?Sized,
    W: Write + ?Sized,
{
    let config = load_config(config_path)?;

    let args = match parse_args(tokens, &config) {
        Ok(args) => args,
        Err(error) => return Ok(BootstrapOutcome::Usage(error)),
    };

    if let Some(ref log_file) = args.log_file {
        init_file_logging(log_file, args.log_level)?;
    }

    let assistant = init_assistant(&args.assistant_name, &args.overrides, &config.assistants)?;
    tracing::info!(
        assistant = assistant.name(),
        model = %assistant.config().model,
        temperature = ?assistant.config().temperature,
        top_p = ?assistant.config().top_p,
        messages = assistant.init_messages().len(),
        markdown = args.markdown,
        overridden = !args.overrides.is_empty(),
        log_level = args.log_level.as_str(),
        "Starting a new chat session"
    );

    let Some(key) = config.api_key() else {
        writeln!(out, "{MISSING_API_KEY_MESSAGE}").map_err(|e| TerminalError::WriteFailed {
            message: e.to_string(),
        })?;
        return Ok(BootstrapOutcome::MissingCredential);
    };

    launcher.launch(SessionRequest {
        assistant,
        markdown: args.markdown,
        api_key: ApiKey::new(key),
    })?;

    Ok(BootstrapOutcome::SessionEnded)
}
