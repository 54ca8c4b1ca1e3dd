//! Error boundary wrapped around the whole program.
//!
//! [`FailureReporter::guard`] runs the program body and intercepts anything that
//! would otherwise end the process unhandled: an `Err` returned from the body or
//! a panic unwinding out of it. Either way it writes one error record to the
//! log, prints one short apology, and then lets the failure continue exactly as
//! it would have: the error is returned, the panic is resumed.
//!
//! Panics are reported from a panic hook chained in front of the previous one,
//! while the panic location and backtrace are still available. The previous
//! hook then prints its usual crash report.

use std::any::Any;
use std::backtrace::Backtrace;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe, PanicHookInfo};
use std::sync::{Arc, Mutex, PoisonError};

/// Message shown to the user after an unhandled failure.
pub const APOLOGY: &str = "An uncaught exception occurred. Please report this issue on GitHub.";

type PanicHook = dyn Fn(&PanicHookInfo<'_>) + Send + Sync + 'static;

/// Logs and announces failures escaping the program body.
pub struct FailureReporter<W> {
    out: Arc<Mutex<W>>,
}

impl<W: Write + Send + 'static> FailureReporter<W> {
    /// Creates a reporter printing its apology to `out`.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out: Arc::new(Mutex::new(out)),
        }
    }

    /// Runs `body`, reporting any error or panic that escapes it.
    ///
    /// The panic hook is replaced for the duration of `body` and restored
    /// before this returns or resumes a panic.
    ///
    /// # Errors
    ///
    /// Returns the body's own error unchanged after it has been reported.
    ///
    /// # Panics
    ///
    /// Resumes the body's panic after it has been reported.
    pub fn guard<T, F>(self, body: F) -> eyre::Result<T>
    where
        F: FnOnce() -> eyre::Result<T>,
    {
        let previous: Arc<PanicHook> = Arc::from(panic::take_hook());
        let chained = Arc::clone(&previous);
        let out = Arc::clone(&self.out);
        panic::set_hook(Box::new(move |info| {
            report_panic(info);
            apologise(&out);
            chained(info);
        }));

        let outcome = panic::catch_unwind(AssertUnwindSafe(body));
        panic::set_hook(Box::new(move |info| previous(info)));

        match outcome {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(report)) => {
                tracing::error!(error = ?report, "Uncaught error");
                apologise(&self.out);
                Err(report)
            }
            Err(payload) => panic::resume_unwind(payload),
        }
    }
}

/// Writes the single error record for a panic.
fn report_panic(info: &PanicHookInfo<'_>) {
    let location = info
        .location()
        .map_or_else(|| String::from("<unknown>"), ToString::to_string);
    tracing::error!(
        panic = panic_message(info.payload()),
        location = %location,
        backtrace = %Backtrace::force_capture(),
        "Uncaught panic"
    );
}

fn apologise<W: Write>(out: &Mutex<W>) {
    let mut writer = out.lock().unwrap_or_else(PoisonError::into_inner);
    if let Err(err) = writeln!(writer, "{APOLOGY}").and_then(|()| writer.flush()) {
        tracing::warn!(error = %err, "failed to print failure notice");
    }
}

/// Extracts the message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}
