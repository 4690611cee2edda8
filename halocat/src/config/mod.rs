//! User configuration file handling.
//!
//! Halocat reads an optional INI file from `~/.halocat/config.ini`:
//!
//! ```ini
//! [cache]
//! directory = /data/halocat
//!
//! [network]
//! timeout_secs = 300
//! ```
//!
//! A missing file or missing keys fall back to defaults; CLI flags override
//! both.

use std::path::{Path, PathBuf};
use std::time::Duration;

use ini::Ini;
use thiserror::Error;

use crate::manager::{CacheLayout, ManagerConfig};

/// Config filename inside the halocat home directory.
pub const CONFIG_FILENAME: &str = "config.ini";

/// Errors raised while reading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be parsed as INI.
    #[error("could not parse {path}: {reason}")]
    ParseFailed {
        /// Path of the offending file.
        path: String,
        /// Parser failure.
        reason: String,
    },

    /// A key holds a value of the wrong type.
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue {
        /// Qualified key name (`section.key`).
        key: String,
        /// The rejected value.
        value: String,
    },
}

/// Loaded configuration values.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Cache root directory.
    pub cache_directory: PathBuf,
    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            cache_directory: CacheLayout::default_location().root().to_path_buf(),
            timeout_secs: 300,
        }
    }
}

impl ConfigFile {
    /// Default path of the config file (`~/.halocat/config.ini`).
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".halocat").join(CONFIG_FILENAME)
    }

    /// Load from the default path, falling back to defaults when the file
    /// is absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_file(path).map_err(|e| ConfigError::ParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut config = Self::default();

        if let Some(section) = ini.section(Some("cache")) {
            if let Some(directory) = section.get("directory") {
                config.cache_directory = PathBuf::from(directory);
            }
        }

        if let Some(section) = ini.section(Some("network")) {
            if let Some(value) = section.get("timeout_secs") {
                config.timeout_secs =
                    value.parse().map_err(|_| ConfigError::InvalidValue {
                        key: "network.timeout_secs".to_string(),
                        value: value.to_string(),
                    })?;
            }
        }

        Ok(config)
    }

    /// Convert into a download manager configuration.
    pub fn manager_config(&self) -> ManagerConfig {
        ManagerConfig::new(CacheLayout::new(self.cache_directory.clone()))
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}
