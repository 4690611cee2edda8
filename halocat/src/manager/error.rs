//! Error types for the download manager.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::archive::ArchiveError;
use crate::catalog::CatalogError;

/// Result type for manager operations.
pub type ManagerResult<T> = Result<T, ManagerError>;

/// Errors that can occur during catalog discovery and download operations.
#[derive(Debug, Error)]
pub enum ManagerError {
    /// Unsupported identity/version, or the archive was unreachable.
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    /// A catalog filename could not be interpreted, or no candidate matched.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The download target already exists and overwrite was not requested.
    #[error("refusing to overwrite existing catalog at {}", .path.display())]
    LocalFileExists {
        /// The occupied cache path.
        path: PathBuf,
    },

    /// The file transfer failed.
    #[error("failed to download {url}: {reason}")]
    DownloadFailed {
        /// The URL that failed.
        url: String,
        /// Underlying failure.
        reason: String,
    },

    /// The file transfer timed out.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// The URL that timed out.
        url: String,
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Failed to create a cache directory.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDirFailed {
        /// The directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write a downloaded file.
    #[error("failed to write {}: {source}", .path.display())]
    WriteFailed {
        /// The file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_sim_display_carries_identifiers() {
        let err = ManagerError::Archive(ArchiveError::UnsupportedSim {
            simname: "consuelo".to_string(),
            halo_finder: "bdm".to_string(),
        });
        let message = err.to_string();
        assert!(message.contains("consuelo"));
        assert!(message.contains("bdm"));
    }

    #[test]
    fn test_local_file_exists_display() {
        let err = ManagerError::LocalFileExists {
            path: PathBuf::from("/cache/halo_catalogs/bolshoi/rockstar/hlist_1.00035.hdf5"),
        };
        assert!(err.to_string().contains("refusing to overwrite"));
        assert!(err.to_string().contains("hlist_1.00035.hdf5"));
    }

    #[test]
    fn test_catalog_error_converts() {
        let err: ManagerError = CatalogError::EmptyCandidateSet.into();
        assert!(matches!(
            err,
            ManagerError::Catalog(CatalogError::EmptyCandidateSet)
        ));
    }
}
