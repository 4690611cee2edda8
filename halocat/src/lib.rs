//! Halocat - discovery and retrieval of cosmological simulation catalogs
//!
//! This library locates versioned dark-matter halo and particle catalogs on
//! the public simulation archives, selects the catalog whose snapshot is
//! closest to a requested redshift, and downloads it into a local cache
//! tree.
//!
//! # Overview
//!
//! - [`catalog`] — filename conventions, scale-factor parsing, and
//!   closest-redshift selection
//! - [`archive`] — supported simulation identities, the fixed remote
//!   location registry, and directory listing
//! - [`manager`] — the `DownloadManager` orchestrator and local cache
//!   layout
//! - [`config`] — the optional `~/.halocat/config.ini` file
//! - [`logging`] — tracing-subscriber setup shared by the CLI
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
//! println!("{} (z = {:.2})", record.filename, record.redshift);
//! ```

pub mod archive;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod manager;

pub use archive::{ArchiveError, CatalogType, HaloFinder, SimName};
pub use catalog::{CatalogError, CatalogRecord};
pub use manager::{DownloadManager, ManagerConfig, ManagerError};
