//! Command-line argument definitions for gptcli.
//!
//! The derive below fixes the shape of the command line. Two things depend on
//! the persisted configuration and are applied at parse time: the accepted
//! assistant names (built-ins plus custom entries) and the defaults for the
//! assistant name, markdown flag and logging options.

use std::ffi::OsString;

use camino::Utf8PathBuf;
use clap::builder::PossibleValuesParser;
use clap::error::ErrorKind;
use clap::{CommandFactory, FromArgMatches, Parser};

use super::{LogLevel, PersistedConfig};
use crate::assistant::{AssistantOverrides, assistant_names};

/// Identifier clap derives for the positional assistant argument.
const ASSISTANT_ARG: &str = "assistant_name";

/// Command-line interface for gptcli.
#[derive(Debug, Parser)]
#[command(name = "gptcli")]
#[command(
    author,
    version,
    about = "Run a chat session with a hosted chat model."
)]
pub struct Cli {
    /// The name of assistant to use. `general` (default) is a generally helpful
    /// assistant, `dev` is a software development assistant with shorter
    /// responses. You can specify your own assistants in the config file
    /// ~/.gptrc.
    #[arg(value_name = "ASSISTANT_NAME")]
    pub assistant_name: Option<String>,

    /// Disable markdown formatting in the chat session.
    #[arg(long = "no_markdown")]
    pub no_markdown: bool,

    /// The model to use for the chat session. Overrides the default model
    /// defined for the assistant.
    #[arg(long)]
    pub model: Option<String>,

    /// The temperature to use for the chat session. Overrides the default
    /// temperature defined for the assistant.
    #[arg(long)]
    pub temperature: Option<f64>,

    /// The `top_p` to use for the chat session. Overrides the default `top_p`
    /// defined for the assistant.
    #[arg(long = "top_p")]
    pub top_p: Option<f64>,

    /// File that receives log records.
    #[arg(long = "log_file", hide = true)]
    pub log_file: Option<Utf8PathBuf>,

    /// Threshold for records written to the log file.
    #[arg(long = "log_level", value_enum, hide = true)]
    pub log_level: Option<LogLevel>,
}

impl Cli {
    /// Fills every unset option from the persisted configuration.
    ///
    /// Assistant overrides stay `None` when not given; the configuration never
    /// supplies them.
    #[must_use]
    pub fn resolve(self, config: &PersistedConfig) -> ResolvedArgs {
        ResolvedArgs {
            assistant_name: self
                .assistant_name
                .unwrap_or_else(|| config.default_assistant.clone()),
            markdown: config.markdown && !self.no_markdown,
            overrides: AssistantOverrides {
                model: self.model,
                temperature: self.temperature,
                top_p: self.top_p,
            },
            log_file: self.log_file.or_else(|| config.log_file.clone()),
            log_level: self.log_level.unwrap_or(config.log_level),
        }
    }
}

/// The parsed invocation with configuration defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedArgs {
    /// Name of the assistant to run.
    pub assistant_name: String,
    /// Whether replies are rendered as markdown.
    pub markdown: bool,
    /// Requested per-field assistant overrides.
    pub overrides: AssistantOverrides,
    /// Log destination, if logging is enabled.
    pub log_file: Option<Utf8PathBuf>,
    /// Log severity threshold.
    pub log_level: LogLevel,
}

/// Parses `tokens` (including the program name) against `config`.
///
/// The assistant name is checked against the built-in names and the keys of
/// `config.assistants`. When the positional is omitted, the configured
/// `default_assistant` is held to the same choices.
///
/// # Errors
///
/// Returns the `clap::Error` for unknown flags, malformed values and
/// unrecognised assistant names, whether typed or taken from the
/// configuration. `--help` and `--version` are also reported as errors of the
/// corresponding display kinds; [`clap::Error::exit`] prints them and exits
/// with status 0.
pub fn parse_args<I, T>(tokens: I, config: &PersistedConfig) -> Result<ResolvedArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let choices = assistant_names(&config.assistants);
    let mut command = Cli::command().mut_arg(ASSISTANT_ARG, |arg| {
        arg.value_parser(PossibleValuesParser::new(choices.clone()))
    });
    let matches = command.try_get_matches_from_mut(tokens)?;
    let cli = Cli::from_arg_matches(&matches)?;

    if cli.assistant_name.is_none() && !choices.contains(&config.default_assistant) {
        return Err(command.error(
            ErrorKind::InvalidValue,
            format!(
                "invalid value '{}' for default_assistant in ~/.gptrc\n  [possible values: {}]",
                config.default_assistant,
                choices.join(", ")
            ),
        ));
    }

    Ok(cli.resolve(config))
}
