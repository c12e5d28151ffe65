//! Application configuration
//!
//! Loaded from a TOML file (by default `<config dir>/msgboard/config.toml`).
//! A missing file is not an error; every field has a default.

use crate::board::SearchScope;
use crate::theme::ThemeName;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root of the REST resource; messages live under `{base_url}/messages`
    pub base_url: String,

    pub request_timeout_secs: u64,

    /// How long a notification stays on screen
    pub notification_ms: u64,

    pub enter_transition_ms: u64,

    pub exit_transition_ms: u64,

    pub search_scope: SearchScope,

    pub theme: ThemeName,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            request_timeout_secs: 10,
            notification_ms: 3000,
            enter_transition_ms: 300,
            exit_transition_ms: 300,
            search_scope: SearchScope::TitleAndBody,
            theme: ThemeName::Dark,
        }
    }
}

impl AppConfig {
    /// `<config dir>/msgboard/config.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("msgboard").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `path` is `None`
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };
        Self::load_from_file(&path)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("base_url must not be empty".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.notification_ms == 0 {
            return Err(ConfigError::Invalid(
                "notification_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    pub fn enter_transition(&self) -> Duration {
        Duration::from_millis(self.enter_transition_ms)
    }

    pub fn exit_transition(&self) -> Duration {
        Duration::from_millis(self.exit_transition_ms)
    }
}
