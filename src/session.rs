//! Seam to the interactive chat session.
//!
//! The conversation loop (turn-taking, streaming, markdown rendering) and the
//! transport to the chat service live behind [`SessionLauncher`]. Bootstrap
//! hands the launcher one [`SessionRequest`] and blocks until it returns.

use std::fmt;
use std::io::Write;

use crate::assistant::Assistant;
use crate::error::{Result, TerminalError};

/// Credential for the chat service.
///
/// The `Debug` output is redacted so requests can be logged safely.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a credential string.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the credential for handing to the transport.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Everything a session needs to start.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRequest {
    /// The resolved assistant.
    pub assistant: Assistant,
    /// Whether replies are rendered as markdown.
    pub markdown: bool,
    /// Credential read from the configuration file.
    pub api_key: ApiKey,
}

/// Constructs a chat session and runs it to completion.
pub trait SessionLauncher {
    /// Runs a session for `request`, returning when the session ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be started or fails while
    /// running.
    fn launch(&mut self, request: SessionRequest) -> Result<()>;
}

/// Launcher for the terminal front end.
///
/// Announces the session on its writer. The conversation loop itself is
/// supplied by the session backend.
pub struct TerminalSessionLauncher<W: Write> {
    out: W,
}

impl<W: Write> TerminalSessionLauncher<W> {
    /// Creates a launcher writing to `out`.
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the launcher, returning its writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SessionLauncher for TerminalSessionLauncher<W> {
    fn launch(&mut self, request: SessionRequest) -> Result<()> {
        let config = request.assistant.config();
        let markdown = if request.markdown { "on" } else { "off" };
        writeln!(
            self.out,
            "Starting chat with assistant {} (model {}, markdown {markdown})",
            request.assistant.name(),
            config.model
        )
        .and_then(|()| writeln!(self.out, "Interactive chat loop not yet implemented."))
        .map_err(|e| TerminalError::WriteFailed {
            message: e.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::{AssistantConfig, DEFAULT_MODEL};
    use rstest::{fixture, rstest};

    /// Fixture providing a session request for the `general` assistant.
    #[fixture]
    fn request() -> SessionRequest {
        SessionRequest {
            assistant: Assistant::new(String::from("general"), AssistantConfig::default()),
            markdown: true,
            api_key: ApiKey::new("sk-secret"),
        }
    }

    #[rstest]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("sk-secret");
        assert_eq!(format!("{key:?}"), "ApiKey(<redacted>)");
        assert_eq!(key.expose(), "sk-secret");
    }

    #[rstest]
    fn session_request_debug_hides_credential(request: SessionRequest) {
        let rendered = format!("{request:?}");
        assert!(!rendered.contains("sk-secret"), "credential leaked: {rendered}");
    }

    #[rstest]
    fn terminal_launcher_announces_assistant(request: SessionRequest) {
        let mut launcher = TerminalSessionLauncher::new(Vec::new());
        launcher.launch(request).expect("launch should succeed");

        let output = String::from_utf8(launcher.into_inner()).expect("output should be UTF-8");
        assert!(output.contains("assistant general"), "got: {output}");
        assert!(output.contains(DEFAULT_MODEL), "got: {output}");
        assert!(output.contains("markdown on"), "got: {output}");
    }
}
