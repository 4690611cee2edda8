//! Catalog download orchestration.
//!
//! `DownloadManager` composes the archive resolver, the availability
//! lister, and the HTTP fetcher to answer "what is available for download"
//! and "what is the closest available catalog to redshift z", and to
//! retrieve catalogs into the local cache tree.
//!
//! All listing and resolution operations are read-only and idempotent; only
//! the download operations touch local storage. Every operation is
//! synchronous and completes (or fails) before returning.
//!
//! # Example
//!
//! ```ignore
//! use halocat::archive::{CatalogType, HaloFinder, SimName, DEFAULT_VERSION_NAME};
//! use halocat::manager::{DownloadManager, ManagerConfig};
//!
//! let manager = DownloadManager::new(ManagerConfig::default());
//! let record = manager.closest_catalog_on_web(
//!     SimName::Bolshoi,
//!     HaloFinder::Rockstar,
//!     0.5,
//!     CatalogType::Halos,
//!     DEFAULT_VERSION_NAME,
//! )?;
//! println!("closest catalog: {} (z = {:.2})", record.filename, record.redshift);
//! ```

mod cache;
mod download;
mod error;

pub use cache::{
    CacheLayout, HALO_TABLES_DIRNAME, PTCL_TABLES_DIRNAME, RAW_HALO_TABLES_DIRNAME,
};
pub use download::{CatalogFetcher, HttpDownloader, ProgressCallback};
pub use error::{ManagerError, ManagerResult};

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};

use crate::archive::{
    list_available, resolve, CatalogType, HaloFinder, HttpLister, RemoteLister, SimName,
    DEFAULT_VERSION_NAME,
};
use crate::catalog::{closest_catalog, CatalogRecord};

/// Default timeout applied to both listing and download requests.
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Configuration for the download manager.
///
/// Passed in explicitly at construction; the manager holds no ambient
/// global state.
#[derive(Debug, Clone)]
pub struct ManagerConfig {
    /// Local cache tree for downloaded catalogs.
    pub cache: CacheLayout,
    /// HTTP timeout for listing and download requests.
    pub timeout: Duration,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            cache: CacheLayout::default_location(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ManagerConfig {
    /// Create a configuration using the given cache layout.
    pub fn new(cache: CacheLayout) -> Self {
        Self {
            cache,
            ..Default::default()
        }
    }

    /// Set the HTTP timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Orchestrates discovery, matching, and retrieval of simulation catalogs.
///
/// Generic over its transport so tests can exercise every workflow against
/// in-memory doubles.
pub struct DownloadManager<L = HttpLister, F = HttpDownloader> {
    config: ManagerConfig,
    lister: L,
    fetcher: F,
}

impl DownloadManager {
    /// Create a manager with the real HTTP transport.
    pub fn new(config: ManagerConfig) -> Self {
        let timeout = config.timeout;
        Self {
            config,
            lister: HttpLister::with_timeout(timeout),
            fetcher: HttpDownloader::with_timeout(timeout),
        }
    }
}

impl<L: RemoteLister, F: CatalogFetcher> DownloadManager<L, F> {
    /// Create a manager with an injected transport.
    pub fn with_transport(config: ManagerConfig, lister: L, fetcher: F) -> Self {
        Self {
            config,
            lister,
            fetcher,
        }
    }

    /// Cache layout in use.
    pub fn cache(&self) -> &CacheLayout {
        &self.config.cache
    }

    /// Particle catalogs available on the archive for `simname`.
    pub fn ptcl_tables_available_for_download(
        &self,
        simname: SimName,
        version_name: &str,
    ) -> ManagerResult<Vec<String>> {
        Ok(list_available(
            &self.lister,
            simname,
            simname.default_halo_finder(),
            CatalogType::Particles,
            version_name,
        )?)
    }

    /// Processed halo catalogs available on the archive.
    pub fn processed_halo_tables_available_for_download(
        &self,
        simname: SimName,
        halo_finder: HaloFinder,
        version_name: &str,
    ) -> ManagerResult<Vec<String>> {
        Ok(list_available(
            &self.lister,
            simname,
            halo_finder,
            CatalogType::Halos,
            version_name,
        )?)
    }

    /// Raw halo catalogs available on the original source archives.
    pub fn raw_halo_tables_available_for_download(
        &self,
        simname: SimName,
        halo_finder: HaloFinder,
    ) -> ManagerResult<Vec<String>> {
        Ok(list_available(
            &self.lister,
            simname,
            halo_finder,
            CatalogType::RawHalos,
            DEFAULT_VERSION_NAME,
        )?)
    }

    /// The available catalog closest to `desired_redshift`.
    pub fn closest_catalog_on_web(
        &self,
        simname: SimName,
        halo_finder: HaloFinder,
        desired_redshift: f64,
        catalog_type: CatalogType,
        version_name: &str,
    ) -> ManagerResult<CatalogRecord> {
        let available = list_available(
            &self.lister,
            simname,
            halo_finder,
            catalog_type,
            version_name,
        )?;
        let record = closest_catalog(&available, desired_redshift)?;
        debug!(
            filename = %record.filename,
            redshift = record.redshift,
            desired = desired_redshift,
            "closest catalog resolved"
        );
        Ok(record)
    }

    /// Download the processed halo catalog closest to `desired_redshift`.
    ///
    /// Returns the path of the cached file. Fails with `UnsupportedSim`
    /// before any network access when the identity is not supported, and
    /// with `LocalFileExists` when the cache target exists and `overwrite`
    /// is false.
    pub fn download_processed_halo_table(
        &self,
        simname: SimName,
        halo_finder: HaloFinder,
        desired_redshift: f64,
        version_name: &str,
        overwrite: bool,
    ) -> ManagerResult<PathBuf> {
        self.download_closest_catalog(
            simname,
            halo_finder,
            desired_redshift,
            CatalogType::Halos,
            version_name,
            overwrite,
            None,
        )
        .map(|(path, _)| path)
    }

    /// Download the particle catalog closest to `desired_redshift`.
    pub fn download_ptcl_table(
        &self,
        simname: SimName,
        desired_redshift: f64,
        version_name: &str,
        overwrite: bool,
    ) -> ManagerResult<PathBuf> {
        self.download_closest_catalog(
            simname,
            simname.default_halo_finder(),
            desired_redshift,
            CatalogType::Particles,
            version_name,
            overwrite,
            None,
        )
        .map(|(path, _)| path)
    }

    /// Download the raw halo catalog closest to `desired_redshift` from the
    /// original source archive.
    pub fn download_raw_halo_table(
        &self,
        simname: SimName,
        halo_finder: HaloFinder,
        desired_redshift: f64,
        overwrite: bool,
    ) -> ManagerResult<PathBuf> {
        self.download_closest_catalog(
            simname,
            halo_finder,
            desired_redshift,
            CatalogType::RawHalos,
            DEFAULT_VERSION_NAME,
            overwrite,
            None,
        )
        .map(|(path, _)| path)
    }

    /// Download the catalog of any type closest to `desired_redshift`.
    ///
    /// The general operation behind the typed wrappers; the progress
    /// callback receives (bytes_downloaded, total_bytes) during the
    /// transfer.
    #[allow(clippy::too_many_arguments)]
    pub fn download_closest_catalog(
        &self,
        simname: SimName,
        halo_finder: HaloFinder,
        desired_redshift: f64,
        catalog_type: CatalogType,
        version_name: &str,
        overwrite: bool,
        progress: Option<ProgressCallback>,
    ) -> ManagerResult<(PathBuf, CatalogRecord)> {
        // Validate the identity before touching the network
        let location = resolve(simname, halo_finder, catalog_type, version_name)?;

        let record = self.closest_catalog_on_web(
            simname,
            halo_finder,
            desired_redshift,
            catalog_type,
            version_name,
        )?;

        let dest = self
            .config
            .cache
            .catalog_dir(simname, halo_finder, catalog_type)
            .join(&record.filename);
        if dest.exists() && !overwrite {
            return Err(ManagerError::LocalFileExists { path: dest });
        }

        let url = location.file_url(&record.filename);
        info!(
            %url,
            dest = %dest.display(),
            redshift = record.redshift,
            "downloading catalog"
        );
        self.fetcher.fetch(&url, &dest, progress)?;
        Ok((dest, record))
    }
}
