//! User-facing configuration: settings file, CLI-overridable options, and
//! the API credential.
//!
//! Settings live in `<config-dir>/gemmit/config.toml` and every field has a
//! default, so the tool runs with no config file at all. The API key is only
//! ever read from the `GEMINI_API_KEY` environment variable and is never
//! stored in the settings file.

use std::env;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::gemini::GEMINI_API_BASE_URL;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Default Gemini model identifier.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Language of the generated commit message.
///
/// Japanese deliberately reuses the English instruction templates; only the
/// Russian templates are localized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Russian,
    Japanese,
    Custom,
}

/// Requested commit message shape: subject only, or subject plus body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MessageLength {
    #[default]
    Short,
    Long,
}

/// Tool settings, merged from the config file and CLI flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Gemini model identifier used in the request path.
    pub model: String,
    /// Base URL of the generation endpoint. Overridable for custom
    /// endpoints and tests.
    pub api_base_url: String,
    pub language: Language,
    pub message_length: MessageLength,
    /// Restrict the diff and file list to staged changes.
    pub only_staged: bool,
    /// Ask for a reference string (issue numbers etc.) to append.
    pub prompt_for_refs: bool,
    /// Free text substituted into the custom instruction template.
    pub custom_instructions: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            model: DEFAULT_MODEL.to_string(),
            api_base_url: GEMINI_API_BASE_URL.to_string(),
            language: Language::default(),
            message_length: MessageLength::default(),
            only_staged: false,
            prompt_for_refs: false,
            custom_instructions: String::new(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, or from the default location when `path`
    /// is `None`. A missing file yields the defaults; an unreadable or
    /// malformed file is an error.
    pub fn load(path: Option<&Path>) -> Result<Settings, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_config_path() {
                Some(p) => p,
                None => return Ok(Settings::default()),
            },
        };

        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadFailed {
            path: path.clone(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::ParseFailed { path, source })
    }
}

/// Default config file location: `<config-dir>/gemmit/config.toml`.
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gemmit").join("config.toml"))
}

/// Read the API key from the environment.
pub fn api_key() -> Result<String, ConfigError> {
    match env::var(API_KEY_ENV_VAR) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ConfigError::MissingApiKey),
    }
}
