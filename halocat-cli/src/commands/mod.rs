//! CLI subcommand implementations.

pub mod closest;
pub mod fetch;
pub mod list;

use std::path::PathBuf;

use tracing::debug;

use halocat::config::ConfigFile;
use halocat::manager::DownloadManager;

use crate::error::CliError;

/// Build a download manager from the config file, with an optional cache
/// directory override from the command line.
fn build_manager(cache_dir: Option<PathBuf>) -> Result<DownloadManager, CliError> {
    let mut config = ConfigFile::load()?;
    if let Some(dir) = cache_dir {
        config.cache_directory = dir;
    }
    debug!(
        cache_dir = %config.cache_directory.display(),
        timeout_secs = config.timeout_secs,
        "resolved configuration"
    );
    Ok(DownloadManager::new(config.manager_config()))
}
