//! Fixed remote archive locations.
//!
//! Every supported (simulation, halo finder) pair maps to a hard-coded
//! archive base URL. The base URLs are historical values that have been
//! stable for years; they must match byte-for-byte and are pinned by
//! regression tests. Catalog type and processing version select
//! subdirectories below the base:
//!
//! ```text
//! <base>/                       raw halo catalogs (hlist_<a>.list[.gz])
//! <base>/<version>/             processed halo catalogs
//! <base>/<version>/particles/   particle catalogs
//! ```

use super::sims::{CatalogType, HaloFinder, SimName};
use super::ArchiveError;

/// Version name of the default catalog-processing pipeline.
pub const DEFAULT_VERSION_NAME: &str = "halotools.alpha.version0";

/// Version names with catalogs published on the archive.
pub const KNOWN_VERSION_NAMES: [&str; 2] = [DEFAULT_VERSION_NAME, "halotools_alpha_version1"];

/// A resolved remote directory. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteLocation {
    /// Archive base URL.
    pub base_url: String,
    /// Path below the base, `/`-separated. Empty for raw catalogs.
    pub relative_path: String,
}

impl RemoteLocation {
    /// Full URL of the directory, always ending in `/`.
    pub fn url(&self) -> String {
        let mut url = self.base_url.trim_end_matches('/').to_string();
        if !self.relative_path.is_empty() {
            url.push('/');
            url.push_str(self.relative_path.trim_matches('/'));
        }
        url.push('/');
        url
    }

    /// Full URL of a file inside this directory.
    pub fn file_url(&self, filename: &str) -> String {
        format!("{}{}", self.url(), filename)
    }
}

/// Archive base URL for a simulation's halo catalogs.
///
/// These are the Stanford-hosted locations the catalogs were first
/// published to, and downstream tooling depends on them verbatim.
pub fn halo_table_web_location(
    simname: SimName,
    halo_finder: HaloFinder,
) -> Result<&'static str, ArchiveError> {
    match (simname, halo_finder) {
        (SimName::Bolshoi, HaloFinder::Rockstar) => {
            Ok("http://www.slac.stanford.edu/~behroozi/Bolshoi_Catalogs/")
        }
        (SimName::Bolshoi, HaloFinder::Bdm) => {
            Ok("http://www.slac.stanford.edu/~behroozi/Bolshoi_Catalogs_BDM/")
        }
        (SimName::BolPlanck, HaloFinder::Rockstar) => {
            Ok("http://www.slac.stanford.edu/~behroozi/BPlanck_Hlists/")
        }
        (SimName::MultiDark, HaloFinder::Rockstar) => {
            Ok("http://www.slac.stanford.edu/~behroozi/MultiDark_Hlists_Rockstar/")
        }
        (SimName::Consuelo, HaloFinder::Rockstar) => {
            Ok("http://www.slac.stanford.edu/~behroozi/Consuelo_Catalogs/")
        }
        (simname, halo_finder) => Err(ArchiveError::UnsupportedSim {
            simname: simname.to_string(),
            halo_finder: halo_finder.to_string(),
        }),
    }
}

fn validate_version(version_name: &str) -> Result<(), ArchiveError> {
    if KNOWN_VERSION_NAMES.contains(&version_name) {
        Ok(())
    } else {
        Err(ArchiveError::UnsupportedVersion {
            version_name: version_name.to_string(),
        })
    }
}

/// Resolve the remote directory holding catalogs for the given identity.
///
/// Resolution is a pure lookup and validates eagerly: unsupported
/// (simulation, halo finder) pairs and unknown version names fail here,
/// before any network access. The version name selects the processing
/// pipeline's subdirectory and is ignored for raw catalogs, which sit at
/// the archive root.
pub fn resolve(
    simname: SimName,
    halo_finder: HaloFinder,
    catalog_type: CatalogType,
    version_name: &str,
) -> Result<RemoteLocation, ArchiveError> {
    let base_url = halo_table_web_location(simname, halo_finder)?.to_string();

    let relative_path = match catalog_type {
        CatalogType::RawHalos => String::new(),
        CatalogType::Halos => {
            validate_version(version_name)?;
            version_name.to_string()
        }
        CatalogType::Particles => {
            validate_version(version_name)?;
            format!("{}/particles", version_name)
        }
    };

    Ok(RemoteLocation {
        base_url,
        relative_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The historical archive URLs, byte-for-byte. A failure here means the
    /// hard-coded locations drifted from their published values.
    #[test]
    fn test_web_locations_are_pinned() {
        let cases = [
            (
                SimName::Bolshoi,
                HaloFinder::Rockstar,
                "http://www.slac.stanford.edu/~behroozi/Bolshoi_Catalogs/",
            ),
            (
                SimName::Bolshoi,
                HaloFinder::Bdm,
                "http://www.slac.stanford.edu/~behroozi/Bolshoi_Catalogs_BDM/",
            ),
            (
                SimName::BolPlanck,
                HaloFinder::Rockstar,
                "http://www.slac.stanford.edu/~behroozi/BPlanck_Hlists/",
            ),
            (
                SimName::MultiDark,
                HaloFinder::Rockstar,
                "http://www.slac.stanford.edu/~behroozi/MultiDark_Hlists_Rockstar/",
            ),
            (
                SimName::Consuelo,
                HaloFinder::Rockstar,
                "http://www.slac.stanford.edu/~behroozi/Consuelo_Catalogs/",
            ),
        ];

        for (simname, halo_finder, expected) in cases {
            assert_eq!(
                halo_table_web_location(simname, halo_finder).unwrap(),
                expected
            );
        }
    }

    #[test]
    fn test_resolve_contains_contract_substrings() {
        let bolshoi_bdm = resolve(
            SimName::Bolshoi,
            HaloFinder::Bdm,
            CatalogType::Halos,
            DEFAULT_VERSION_NAME,
        )
        .unwrap();
        assert!(bolshoi_bdm
            .url()
            .contains("www.slac.stanford.edu/~behroozi/Bolshoi_Catalogs_BDM"));

        let multidark = resolve(
            SimName::MultiDark,
            HaloFinder::Rockstar,
            CatalogType::Halos,
            DEFAULT_VERSION_NAME,
        )
        .unwrap();
        assert!(multidark
            .url()
            .contains("c.stanford.edu/~behroozi/MultiDark_Hlists_Rockstar"));
    }

    #[test]
    fn test_unsupported_pairs_fail_with_identifiers() {
        for simname in [SimName::BolPlanck, SimName::MultiDark, SimName::Consuelo] {
            let err = halo_table_web_location(simname, HaloFinder::Bdm).unwrap_err();
            assert_eq!(
                err,
                ArchiveError::UnsupportedSim {
                    simname: simname.to_string(),
                    halo_finder: "bdm".to_string(),
                }
            );
        }
    }

    #[test]
    fn test_resolve_validates_pair_for_every_catalog_type() {
        for catalog_type in [
            CatalogType::Halos,
            CatalogType::Particles,
            CatalogType::RawHalos,
        ] {
            let result = resolve(
                SimName::Consuelo,
                HaloFinder::Bdm,
                catalog_type,
                DEFAULT_VERSION_NAME,
            );
            assert!(matches!(
                result,
                Err(ArchiveError::UnsupportedSim { .. })
            ));
        }
    }

    #[test]
    fn test_resolve_rejects_unknown_version() {
        let err = resolve(
            SimName::Bolshoi,
            HaloFinder::Rockstar,
            CatalogType::Halos,
            "halotools.beta",
        )
        .unwrap_err();
        assert_eq!(
            err,
            ArchiveError::UnsupportedVersion {
                version_name: "halotools.beta".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_ignores_version_for_raw_catalogs() {
        let location = resolve(
            SimName::Bolshoi,
            HaloFinder::Rockstar,
            CatalogType::RawHalos,
            "halotools.beta",
        )
        .unwrap();
        assert_eq!(
            location.url(),
            "http://www.slac.stanford.edu/~behroozi/Bolshoi_Catalogs/"
        );
    }

    #[test]
    fn test_resolve_processed_halos_version_subpath() {
        let location = resolve(
            SimName::Bolshoi,
            HaloFinder::Bdm,
            CatalogType::Halos,
            DEFAULT_VERSION_NAME,
        )
        .unwrap();
        assert_eq!(
            location.url(),
            "http://www.slac.stanford.edu/~behroozi/Bolshoi_Catalogs_BDM/halotools.alpha.version0/"
        );
    }

    #[test]
    fn test_resolve_particles_subpath() {
        let location = resolve(
            SimName::Consuelo,
            HaloFinder::Rockstar,
            CatalogType::Particles,
            DEFAULT_VERSION_NAME,
        )
        .unwrap();
        assert_eq!(
            location.url(),
            "http://www.slac.stanford.edu/~behroozi/Consuelo_Catalogs/halotools.alpha.version0/particles/"
        );
    }

    #[test]
    fn test_file_url() {
        let location = RemoteLocation {
            base_url: "http://example.com/archive".to_string(),
            relative_path: "halotools.alpha.version0".to_string(),
        };
        assert_eq!(
            location.file_url("hlist_1.00035.list.halotools.alpha.version0.hdf5"),
            "http://example.com/archive/halotools.alpha.version0/hlist_1.00035.list.halotools.alpha.version0.hdf5"
        );
    }

    #[test]
    fn test_known_versions_include_default() {
        assert!(KNOWN_VERSION_NAMES.contains(&DEFAULT_VERSION_NAME));
    }
}
