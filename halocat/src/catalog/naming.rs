//! Centralized catalog filename conventions.
//!
//! Catalog filenames follow the archive's `hlist_` convention:
//!
//! - Processed halo catalogs: `hlist_<a>.list.<version>.hdf5`
//!   (e.g. `hlist_1.00035.list.halotools.alpha.version0.hdf5`)
//! - Particle catalogs: `hlist_<a>.particles.hdf5`
//! - Raw halo catalogs: `hlist_<a>.list` or `hlist_<a>.list.gz`
//!
//! where `<a>` is the snapshot scale factor as a fixed-precision decimal.
//! Scale factors marginally above 1.0 occur in real catalogs
//! (e.g. `hlist_1.00109.list.gz` for MultiDark).

use std::sync::OnceLock;

use regex::Regex;

use super::CatalogError;

/// Literal prefix preceding the scale-factor substring in catalog filenames.
pub const SCALE_FACTOR_PREFIX: &str = "hlist_";

/// Get the scale-factor regex.
///
/// Pattern: `hlist_<whole>.<fraction>` anywhere in the input, so both bare
/// filenames and full archive paths parse.
fn scale_factor_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"hlist_(\d+\.\d+)").expect("valid scale-factor regex"))
}

/// Extract the scale-factor substring from a catalog filename.
///
/// The scale factor is the fixed-precision decimal immediately following the
/// literal `hlist_` prefix.
///
/// # Examples
///
/// ```
/// use halocat::catalog::extract_scale_factor;
///
/// let a = extract_scale_factor("hlist_0.50648.particles.hdf5").unwrap();
/// assert_eq!(a, "0.50648");
/// ```
pub fn extract_scale_factor(filename: &str) -> Result<&str, CatalogError> {
    scale_factor_pattern()
        .captures(filename)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| CatalogError::MalformedFilename {
            filename: filename.to_string(),
        })
}

/// Parse the scale factor encoded in a catalog filename as a float.
pub fn parse_scale_factor(filename: &str) -> Result<f64, CatalogError> {
    let substring = extract_scale_factor(filename)?;
    substring
        .parse::<f64>()
        .map_err(|_| CatalogError::MalformedFilename {
            filename: filename.to_string(),
        })
}

/// Convert a cosmological scale factor to redshift (z = 1/a - 1).
pub fn redshift_of_scale_factor(scale_factor: f64) -> f64 {
    1.0 / scale_factor - 1.0
}

/// Build a processed halo catalog filename from its parts.
///
/// # Examples
///
/// ```
/// use halocat::catalog::processed_halo_filename;
///
/// assert_eq!(
///     processed_halo_filename("1.00035", "halotools.alpha.version0"),
///     "hlist_1.00035.list.halotools.alpha.version0.hdf5"
/// );
/// ```
pub fn processed_halo_filename(scale_factor: &str, version_name: &str) -> String {
    format!(
        "{}{}.list.{}.hdf5",
        SCALE_FACTOR_PREFIX, scale_factor, version_name
    )
}

/// Build a particle catalog filename.
pub fn ptcl_filename(scale_factor: &str) -> String {
    format!("{}{}.particles.hdf5", SCALE_FACTOR_PREFIX, scale_factor)
}

/// Pattern matching processed halo catalogs carrying the given version tag.
pub fn processed_halo_pattern(version_name: &str) -> Regex {
    Regex::new(&format!(
        r"^hlist_\d+\.\d+\.list\.{}\.hdf5$",
        regex::escape(version_name)
    ))
    .expect("valid processed-halo regex")
}

/// Pattern matching particle catalogs.
pub fn ptcl_pattern() -> Regex {
    Regex::new(r"^hlist_\d+\.\d+\.particles\.hdf5$").expect("valid particle regex")
}

/// Pattern matching raw halo catalogs as published by the source archives.
pub fn raw_halo_pattern() -> Regex {
    Regex::new(r"^hlist_\d+\.\d+\.list(\.gz)?$").expect("valid raw-halo regex")
}
