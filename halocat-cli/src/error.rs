//! Error handling for the CLI.

use std::fmt;

use halocat::config::ConfigError;
use halocat::manager::ManagerError;

/// Errors surfaced to the CLI user.
#[derive(Debug)]
pub enum CliError {
    /// The configuration file could not be read.
    Config(ConfigError),

    /// A catalog operation failed.
    Manager(ManagerError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration error: {}", e),
            Self::Manager(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Manager(e) => Some(e),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ManagerError> for CliError {
    fn from(e: ManagerError) -> Self {
        Self::Manager(e)
    }
}
