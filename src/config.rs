//! User configuration.
//!
//! Read from `$XDG_CONFIG_HOME/zcalc/config.toml` unless a path is given.
//! Every field is optional; missing fields take their defaults.

use crate::calculator::{
    DEFAULT_HISTORY_LIMIT, DEFAULT_MAX_DIGITS, EMPTY_HISTORY_PLACEHOLDER, THOUSANDS_SEPARATOR,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum characters in a typed operand, not counting `.` or `,`.
    pub max_digits: usize,
    /// Number of entries shown in the history view.
    pub history_limit: usize,
    /// Separator inserted between groups of three integer digits.
    pub thousands_separator: char,
    /// Text shown in the history view when the log is empty.
    pub history_placeholder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_digits: DEFAULT_MAX_DIGITS,
            history_limit: DEFAULT_HISTORY_LIMIT,
            thousands_separator: THOUSANDS_SEPARATOR,
            history_placeholder: EMPTY_HISTORY_PLACEHOLDER.to_string(),
        }
    }
}

impl Config {
    /// Default location of the config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used if
    /// present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_digits == 0 {
            return Err(ConfigError::Invalid(
                "max_digits must be at least 1".to_string(),
            ));
        }
        if self.thousands_separator == '.' || self.thousands_separator.is_ascii_digit() {
            return Err(ConfigError::Invalid(format!(
                "thousands_separator cannot be '{}'",
                self.thousands_separator
            )));
        }
        if self.history_limit == 0 {
            return Err(ConfigError::Invalid(
                "history_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
