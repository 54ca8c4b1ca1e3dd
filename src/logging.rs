//! Optional file logging.
//!
//! Logging is off unless a log file is configured. When it is on, records at or
//! above the requested [`LogLevel`] are appended to the file as plain lines
//! carrying a timestamp, the level, the emitting component (the `tracing`
//! target) and the message.
//!
//! The markdown renderer's target is pinned to INFO whatever the requested
//! level, so a DEBUG log is not flooded by its parser traces.

use std::fs::File;
use std::sync::Arc;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs::OpenOptions;
use cap_std::fs_utf8::Dir;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::config::LogLevel;
use crate::error::{LoggingError, Result};

/// `tracing` target of the markdown rendering dependency.
pub const MARKDOWN_LOG_TARGET: &str = "pulldown_cmark";

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warning => Self::WARN,
            LogLevel::Error | LogLevel::Critical => Self::ERROR,
        }
    }
}

/// Returns the filter directives for `level`.
#[must_use]
pub fn filter_directives(level: LogLevel) -> String {
    format!("{},{MARKDOWN_LOG_TARGET}=info", LevelFilter::from(level))
}

/// Opens `path` for appending, creating it if needed.
fn open_log_file(path: &Utf8Path) -> Result<File> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path.file_name().unwrap_or(path.as_str());
    let open_failed = |e: std::io::Error| LoggingError::OpenFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(open_failed)?;
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    let file = dir.open_with(file_name, &options).map_err(open_failed)?;
    Ok(file.into_std())
}

/// Builds a subscriber that appends records to `path`.
///
/// The subscriber is returned rather than installed so callers can scope it
/// with `tracing::subscriber::with_default`.
///
/// # Errors
///
/// Returns `LoggingError::OpenFailed` if the file cannot be opened for
/// appending.
pub fn file_subscriber(
    path: &Utf8Path,
    level: LogLevel,
) -> Result<impl tracing::Subscriber + Send + Sync + 'static> {
    let file = open_log_file(path)?;
    let filter =
        EnvFilter::try_new(filter_directives(level)).map_err(|e| LoggingError::InvalidFilter {
            message: e.to_string(),
        })?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(Arc::new(file))
        .with_target(true)
        .with_ansi(false);

    Ok(tracing_subscriber::registry().with(filter).with(fmt_layer))
}

/// Installs the process-wide file logger.
///
/// If a global subscriber is already installed the existing one is kept and a
/// warning is emitted through it.
///
/// # Errors
///
/// Returns `LoggingError::OpenFailed` if the file cannot be opened for
/// appending.
pub fn init_file_logging(path: &Utf8Path, level: LogLevel) -> Result<()> {
    let subscriber = file_subscriber(path, level)?;
    if let Err(err) = subscriber.try_init() {
        tracing::warn!(error = %err, "tracing already initialized; skipping file logging setup");
    }
    Ok(())
}
