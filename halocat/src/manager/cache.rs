//! Local cache tree layout for downloaded catalogs.

use std::path::{Path, PathBuf};

use crate::archive::{CatalogType, HaloFinder, SimName};

/// Subdirectory for processed halo catalogs.
pub const HALO_TABLES_DIRNAME: &str = "halo_catalogs";

/// Subdirectory for particle catalogs.
pub const PTCL_TABLES_DIRNAME: &str = "particle_catalogs";

/// Subdirectory for raw halo catalogs.
pub const RAW_HALO_TABLES_DIRNAME: &str = "raw_halo_catalogs";

/// Layout of the local catalog cache.
///
/// Catalogs are partitioned by type, simulation, and halo finder below a
/// single configurable root:
///
/// ```text
/// <root>/halo_catalogs/<simname>/<halo_finder>/
/// <root>/particle_catalogs/<simname>/
/// <root>/raw_halo_catalogs/<simname>/<halo_finder>/
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheLayout {
    root: PathBuf,
}

impl CacheLayout {
    /// Create a layout rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Default cache location under the user's home directory
    /// (`~/.halocat`).
    pub fn default_location() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            root: home.join(".halocat"),
        }
    }

    /// Root directory of the cache tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding processed halo catalogs for one identity.
    pub fn processed_halo_dir(&self, simname: SimName, halo_finder: HaloFinder) -> PathBuf {
        self.root
            .join(HALO_TABLES_DIRNAME)
            .join(simname.as_str())
            .join(halo_finder.as_str())
    }

    /// Directory holding particle catalogs for one simulation.
    pub fn ptcl_dir(&self, simname: SimName) -> PathBuf {
        self.root.join(PTCL_TABLES_DIRNAME).join(simname.as_str())
    }

    /// Directory holding raw halo catalogs for one identity.
    pub fn raw_halo_dir(&self, simname: SimName, halo_finder: HaloFinder) -> PathBuf {
        self.root
            .join(RAW_HALO_TABLES_DIRNAME)
            .join(simname.as_str())
            .join(halo_finder.as_str())
    }

    /// Destination directory for a catalog of the given type.
    pub fn catalog_dir(
        &self,
        simname: SimName,
        halo_finder: HaloFinder,
        catalog_type: CatalogType,
    ) -> PathBuf {
        match catalog_type {
            CatalogType::Halos => self.processed_halo_dir(simname, halo_finder),
            CatalogType::Particles => self.ptcl_dir(simname),
            CatalogType::RawHalos => self.raw_halo_dir(simname, halo_finder),
        }
    }
}
