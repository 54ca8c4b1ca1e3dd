//! `gptcli` application entry point.
//!
//! This binary starts an interactive chat session. It uses `eyre` for opaque
//! error handling at the application boundary, converting domain-specific
//! errors into human-readable reports.
//!
//! Configuration is resolved with layered precedence:
//! 1. Application defaults
//! 2. Configuration file (`~/.gptrc`)
//! 3. Command-line arguments

use std::io;
use std::process::ExitCode;

use eyre::{Report, Result as EyreResult};
use gptcli::bootstrap::{self, BootstrapOutcome};
use gptcli::config::default_config_path;
use gptcli::failure::FailureReporter;
use gptcli::session::TerminalSessionLauncher;
use mockable::DefaultEnv;

/// Application entry point.
///
/// The whole program runs inside the failure boundary, so any error or panic
/// escaping it is logged and announced before the normal exit path.
fn main() -> EyreResult<ExitCode> {
    FailureReporter::new(io::stdout()).guard(run)
}

/// Run bootstrap and map its outcome to a process exit code.
fn run() -> EyreResult<ExitCode> {
    let env = DefaultEnv::new();
    let config_path = default_config_path(&env);
    let mut launcher = TerminalSessionLauncher::new(io::stdout());

    let outcome = bootstrap::run(
        std::env::args_os(),
        config_path.as_deref(),
        &mut launcher,
        &mut io::stdout(),
    )
    .map_err(Report::from)?;

    match outcome {
        BootstrapOutcome::SessionEnded => Ok(ExitCode::SUCCESS),
        BootstrapOutcome::MissingCredential => Ok(ExitCode::FAILURE),
        BootstrapOutcome::Usage(error) => error.exit(),
    }
}
