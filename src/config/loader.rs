//! Configuration loading with layered precedence.
//!
//! The persisted configuration is composed from two layers (lowest to
//! highest): application defaults and the `~/.gptrc` file. Command-line flags
//! form the third layer, applied later by [`parse_args`](super::parse_args)
//! using the loaded value as its defaults.
//!
//! A missing file is not an error: the defaults layer alone is merged. A file
//! that exists but cannot be read, parsed or merged aborts loading.
//!
//! The file is TOML. A YAML `~/.gptrc` left by other clients of the same name
//! is rejected with `ConfigError::ParseError` and must be converted, for
//! example `api_key: sk-...` becomes `api_key = "sk-..."`.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use ortho_config::serde_json;
use ortho_config::{MergeComposer, toml};

use crate::config::PersistedConfig;
use crate::error::{ConfigError, Result};

/// File name of the persisted configuration, relative to the home directory.
pub const CONFIG_FILE_NAME: &str = ".gptrc";

/// Returns the configuration path under the user's home directory.
///
/// Returns `None` when `HOME` is unset or empty, in which case the caller
/// proceeds with defaults.
#[must_use]
pub fn default_config_path<E: mockable::Env>(env: &E) -> Option<Utf8PathBuf> {
    env.string("HOME")
        .filter(|home| !home.is_empty())
        .map(|home| Utf8PathBuf::from(home).join(CONFIG_FILE_NAME))
}

/// Load a configuration file and push it to the composer.
///
/// Uses `cap_std::fs_utf8` for capability-oriented filesystem access. The
/// function opens the parent directory of the config file and reads from there.
fn load_config_file(path: &Utf8Path, composer: &mut MergeComposer) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path.file_name().unwrap_or(path.as_str());

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|e| {
        ConfigError::ReadFailed {
            path: path.to_path_buf(),
            message: format!("failed to open directory {parent}: {e}"),
        }
    })?;

    let content = dir
        .read_to_string(file_name)
        .map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let value =
        toml::from_str::<serde_json::Value>(&content).map_err(|e| ConfigError::ParseError {
            message: format!("failed to parse {path}: {e}"),
        })?;

    composer.push_file(value, Some(path.to_path_buf()));
    Ok(())
}

/// Load the persisted configuration.
///
/// When `path` is `None` or does not name an existing file, the result is
/// [`PersistedConfig::default()`]. Otherwise the file is layered over the
/// defaults, so keys it omits keep their default values.
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but:
/// - cannot be read
/// - is not valid TOML
/// - holds values of the wrong type (for example an unknown `log_level`)
pub fn load_config(path: Option<&Utf8Path>) -> Result<PersistedConfig> {
    let mut composer = MergeComposer::new();

    // Layer 1: Defaults (serialised from PersistedConfig::default()).
    let defaults =
        serde_json::to_value(PersistedConfig::default()).map_err(|e| ConfigError::ParseError {
            message: format!("failed to serialise defaults: {e}"),
        })?;
    composer.push_defaults(defaults);

    // Layer 2: Configuration file, only if it exists.
    if let Some(file) = path.filter(|candidate| candidate.is_file()) {
        load_config_file(file, &mut composer)?;
    }

    let config =
        PersistedConfig::merge_from_layers(composer.layers()).map_err(ConfigError::OrthoConfig)?;

    Ok(config)
}
