//! Remote directory listing.
//!
//! The archives publish plain HTML directory indexes, so listing a location
//! is a blocking GET plus href extraction. The `RemoteLister` trait is the
//! seam that lets tests substitute an in-memory archive for the network.

use std::time::Duration;

use regex::Regex;
use tracing::debug;

use crate::catalog::{
    parse_scale_factor, processed_halo_pattern, ptcl_pattern, raw_halo_pattern,
};

use super::locations::resolve;
use super::sims::{CatalogType, HaloFinder, SimName};
use super::ArchiveError;

/// Default timeout for listing requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Trait for listing the contents of a remote archive directory.
///
/// This abstraction allows dependency injection: tests exercise the full
/// discovery workflow against an in-memory implementation with no network
/// access.
pub trait RemoteLister {
    /// Return the entry names published at `url`.
    ///
    /// An empty vector means the directory exists but holds no entries;
    /// transport failures are `RemoteUnavailable`.
    fn list_directory(&self, url: &str) -> Result<Vec<String>, ArchiveError>;
}

impl<L: RemoteLister + ?Sized> RemoteLister for &L {
    fn list_directory(&self, url: &str) -> Result<Vec<String>, ArchiveError> {
        (**self).list_directory(url)
    }
}

/// Directory lister backed by a blocking reqwest client.
pub struct HttpLister {
    client: reqwest::blocking::Client,
}

impl HttpLister {
    /// Create a lister with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a lister with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create HTTP client");
        Self { client }
    }
}

impl Default for HttpLister {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteLister for HttpLister {
    fn list_directory(&self, url: &str) -> Result<Vec<String>, ArchiveError> {
        let response =
            self.client
                .get(url)
                .send()
                .map_err(|e| ArchiveError::RemoteUnavailable {
                    url: url.to_string(),
                    reason: e.to_string(),
                })?;

        if !response.status().is_success() {
            return Err(ArchiveError::RemoteUnavailable {
                url: url.to_string(),
                reason: format!("HTTP {}", response.status()),
            });
        }

        let body = response.text().map_err(|e| ArchiveError::RemoteUnavailable {
            url: url.to_string(),
            reason: format!("failed to read response: {}", e),
        })?;

        Ok(parse_index_links(&body))
    }
}

/// Extract entry names from an HTML directory index.
///
/// Keeps simple relative hrefs only; parent links, sort queries, and
/// absolute URLs are listing chrome, not directory entries.
fn parse_index_links(html: &str) -> Vec<String> {
    static PATTERN: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    let pattern =
        PATTERN.get_or_init(|| Regex::new(r#"href="([^"]+)""#).expect("valid href regex"));

    pattern
        .captures_iter(html)
        .map(|captures| captures[1].to_string())
        .filter(|href| {
            !href.starts_with('?')
                && !href.starts_with('/')
                && !href.starts_with('#')
                && !href.contains("://")
                && href != "../"
        })
        .collect()
}

/// List the catalog filenames available for the given identity.
///
/// Resolves the remote location, lists it, and keeps the entries matching
/// the catalog-type and version naming pattern, sorted ascending by scale
/// factor so equal-distance redshift ties resolve deterministically
/// downstream. An empty result means the directory exists but holds no
/// matching catalogs; transport failures surface as `RemoteUnavailable`.
pub fn list_available<L: RemoteLister + ?Sized>(
    lister: &L,
    simname: SimName,
    halo_finder: HaloFinder,
    catalog_type: CatalogType,
    version_name: &str,
) -> Result<Vec<String>, ArchiveError> {
    let location = resolve(simname, halo_finder, catalog_type, version_name)?;
    let url = location.url();
    let entries = lister.list_directory(&url)?;

    let pattern = match catalog_type {
        CatalogType::Halos => processed_halo_pattern(version_name),
        CatalogType::Particles => ptcl_pattern(),
        CatalogType::RawHalos => raw_halo_pattern(),
    };

    let mut catalogs: Vec<String> = entries
        .into_iter()
        .filter(|entry| pattern.is_match(entry))
        .collect();

    catalogs.sort_by(|a, b| {
        let a = parse_scale_factor(a).unwrap_or(f64::MAX);
        let b = parse_scale_factor(b).unwrap_or(f64::MAX);
        a.partial_cmp(&b).unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(
        %url,
        total = catalogs.len(),
        catalog_type = %catalog_type,
        "listed remote catalogs"
    );
    Ok(catalogs)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::archive::DEFAULT_VERSION_NAME;

    use super::*;

    /// In-memory lister mapping URLs to directory entries.
    struct MockLister {
        directories: HashMap<String, Vec<String>>,
    }

    impl MockLister {
        fn with_directory(url: &str, entries: &[&str]) -> Self {
            let mut directories = HashMap::new();
            directories.insert(
                url.to_string(),
                entries.iter().map(|s| s.to_string()).collect(),
            );
            Self { directories }
        }
    }

    impl RemoteLister for MockLister {
        fn list_directory(&self, url: &str) -> Result<Vec<String>, ArchiveError> {
            self.directories
                .get(url)
                .cloned()
                .ok_or_else(|| ArchiveError::RemoteUnavailable {
                    url: url.to_string(),
                    reason: "connection refused".to_string(),
                })
        }
    }

    fn ptcl_url(simname: SimName) -> String {
        resolve(
            simname,
            simname.default_halo_finder(),
            CatalogType::Particles,
            DEFAULT_VERSION_NAME,
        )
        .unwrap()
        .url()
    }

    #[test]
    fn test_parse_index_links_apache_style() {
        let html = concat!(
            r#"<html><head><title>Index of /~behroozi/Bolshoi_Catalogs</title></head>"#,
            r#"<body><a href="?C=N;O=D">Name</a><a href="/~behroozi/">Parent Directory</a>"#,
            r#"<a href="../">..</a>"#,
            r#"<a href="hlist_0.33035.list.gz">hlist_0.33035.list.gz</a>"#,
            r#"<a href="hlist_1.00035.list.gz">hlist_1.00035.list.gz</a>"#,
            r#"<a href="http://example.com/">mirror</a></body></html>"#
        );
        let entries = parse_index_links(html);
        assert_eq!(
            entries,
            vec!["hlist_0.33035.list.gz", "hlist_1.00035.list.gz"]
        );
    }

    #[test]
    fn test_parse_index_links_empty_body() {
        assert!(parse_index_links("<html><body></body></html>").is_empty());
    }

    #[test]
    fn test_list_available_filters_and_sorts() {
        let lister = MockLister::with_directory(
            &ptcl_url(SimName::Consuelo),
            &[
                "hlist_1.00000.particles.hdf5",
                "hlist_0.33324.particles.hdf5",
                "README.html",
                "hlist_0.67540.particles.hdf5",
                "hlist_0.50648.list.halotools.alpha.version0.hdf5",
                "hlist_0.50648.particles.hdf5",
            ],
        );

        let catalogs = list_available(
            &lister,
            SimName::Consuelo,
            HaloFinder::Rockstar,
            CatalogType::Particles,
            DEFAULT_VERSION_NAME,
        )
        .unwrap();

        assert_eq!(
            catalogs,
            vec![
                "hlist_0.33324.particles.hdf5",
                "hlist_0.50648.particles.hdf5",
                "hlist_0.67540.particles.hdf5",
                "hlist_1.00000.particles.hdf5",
            ]
        );
    }

    #[test]
    fn test_list_available_empty_directory_is_ok() {
        let lister = MockLister::with_directory(&ptcl_url(SimName::Bolshoi), &[]);
        let catalogs = list_available(
            &lister,
            SimName::Bolshoi,
            HaloFinder::Rockstar,
            CatalogType::Particles,
            DEFAULT_VERSION_NAME,
        )
        .unwrap();
        assert!(catalogs.is_empty());
    }

    #[test]
    fn test_list_available_no_matches_is_ok_not_error() {
        let lister = MockLister::with_directory(
            &ptcl_url(SimName::Bolshoi),
            &["index.html", "checksums.txt"],
        );
        let catalogs = list_available(
            &lister,
            SimName::Bolshoi,
            HaloFinder::Rockstar,
            CatalogType::Particles,
            DEFAULT_VERSION_NAME,
        )
        .unwrap();
        assert!(catalogs.is_empty());
    }

    #[test]
    fn test_list_available_unreachable_host() {
        let lister = MockLister {
            directories: HashMap::new(),
        };
        let result = list_available(
            &lister,
            SimName::Bolshoi,
            HaloFinder::Rockstar,
            CatalogType::Particles,
            DEFAULT_VERSION_NAME,
        );
        assert!(matches!(
            result,
            Err(ArchiveError::RemoteUnavailable { .. })
        ));
    }

    #[test]
    fn test_list_available_rejects_unsupported_pair_before_listing() {
        let lister = MockLister {
            directories: HashMap::new(),
        };
        let result = list_available(
            &lister,
            SimName::Consuelo,
            HaloFinder::Bdm,
            CatalogType::Halos,
            DEFAULT_VERSION_NAME,
        );
        // UnsupportedSim, not RemoteUnavailable: resolution failed before
        // the lister was consulted
        assert!(matches!(result, Err(ArchiveError::UnsupportedSim { .. })));
    }

    #[test]
    fn test_list_available_version_filter() {
        let url = resolve(
            SimName::Bolshoi,
            HaloFinder::Bdm,
            CatalogType::Halos,
            DEFAULT_VERSION_NAME,
        )
        .unwrap()
        .url();
        let lister = MockLister::with_directory(
            &url,
            &[
                "hlist_1.00030.list.halotools.alpha.version0.hdf5",
                "hlist_1.00030.list.halotools_alpha_version1.hdf5",
            ],
        );

        let catalogs = list_available(
            &lister,
            SimName::Bolshoi,
            HaloFinder::Bdm,
            CatalogType::Halos,
            DEFAULT_VERSION_NAME,
        )
        .unwrap();
        assert_eq!(
            catalogs,
            vec!["hlist_1.00030.list.halotools.alpha.version0.hdf5"]
        );
    }
}
