//! Closest-redshift catalog selection.

use super::naming::{parse_scale_factor, redshift_of_scale_factor};
use super::CatalogError;

/// A catalog filename together with the redshift encoded in its name.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRecord {
    /// The catalog filename as listed on the archive.
    pub filename: String,
    /// Redshift resolved from the filename's scale factor (z = 1/a - 1).
    pub redshift: f64,
}

/// Select the catalog whose redshift is closest to `desired_redshift`.
///
/// Selection uses full floating-point precision; any rounding of the
/// returned redshift is the caller's display concern. Equal-distance ties
/// resolve to the earliest-listed filename, so callers that need a
/// deterministic tie-break should hand in a deterministically ordered list.
///
/// # Errors
///
/// `EmptyCandidateSet` when `filenames` is empty; `MalformedFilename` when
/// any candidate lacks a scale-factor substring.
///
/// # Examples
///
/// ```
/// use halocat::catalog::closest_catalog;
///
/// let fnames = [
///     "hlist_0.50648.particles.hdf5",
///     "hlist_0.67540.particles.hdf5",
///     "hlist_0.33324.particles.hdf5",
/// ];
/// let record = closest_catalog(&fnames, 100.0).unwrap();
/// assert_eq!(record.filename, "hlist_0.33324.particles.hdf5");
/// assert!((record.redshift - 2.0).abs() < 0.01);
/// ```
pub fn closest_catalog<S: AsRef<str>>(
    filenames: &[S],
    desired_redshift: f64,
) -> Result<CatalogRecord, CatalogError> {
    let mut best: Option<(f64, CatalogRecord)> = None;

    for filename in filenames {
        let filename = filename.as_ref();
        let redshift = redshift_of_scale_factor(parse_scale_factor(filename)?);
        let distance = (redshift - desired_redshift).abs();

        // Strict inequality keeps the earliest-listed filename on ties
        let improved = match &best {
            None => true,
            Some((best_distance, _)) => distance < *best_distance,
        };
        if improved {
            best = Some((
                distance,
                CatalogRecord {
                    filename: filename.to_string(),
                    redshift,
                },
            ));
        }
    }

    best.map(|(_, record)| record)
        .ok_or(CatalogError::EmptyCandidateSet)
}
