//! Runtime configuration: data file location and logging.
//!
//! Read from TOML at `$PREP_TRACKER_CONFIG`, or `config.toml` in the
//! platform config directory. A missing file means defaults. Environment
//! overrides are applied last.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logging::LogConfig;

/// Explicit config file path.
pub const CONFIG_ENV_VAR: &str = "PREP_TRACKER_CONFIG";
/// Overrides [`Config::data_file`].
pub const DATA_ENV_VAR: &str = "PREP_TRACKER_DATA";
/// Overrides [`LogConfig::level`].
pub const LOG_ENV_VAR: &str = "PREP_TRACKER_LOG";

/// Default catalog file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "tracker_data.csv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CSV catalog, rewritten after every change.
    pub data_file: PathBuf,
    /// Logging settings.
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Loads from the default location and applies environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .or_else(Self::config_path);
        let mut config = match path {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Reads `path`; a file that does not exist yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `PREP_TRACKER_DATA` / `PREP_TRACKER_LOG` style overrides
    /// from `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(data) = lookup(DATA_ENV_VAR).filter(|v| !v.is_empty()) {
            self.data_file = PathBuf::from(data);
        }
        if let Some(level) = lookup(LOG_ENV_VAR).filter(|v| !v.is_empty()) {
            self.log.level = level;
        }
    }

    /// Platform config file location.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "prep-tracker").map(|d| d.config_dir().join("config.toml"))
    }
}
