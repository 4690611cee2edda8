//! Catalog filename conventions and closest-redshift selection.
//!
//! Every catalog published on the simulation archives encodes its snapshot
//! scale factor in the filename (e.g. `hlist_0.50648.particles.hdf5`). This
//! module is the single source of truth for interpreting those names:
//!
//! - **Scale-factor extraction**: pull the decimal substring out of an
//!   `hlist_` filename (`naming`)
//! - **Redshift conversion**: z = 1/a - 1 (`naming`)
//! - **Closest-match selection**: pick the catalog nearest a requested
//!   redshift from a listing (`closest`)
//!
//! All other modules should use these functions rather than slicing
//! filenames directly.

mod closest;
mod naming;

pub use closest::{closest_catalog, CatalogRecord};
pub use naming::{
    extract_scale_factor, parse_scale_factor, processed_halo_filename, processed_halo_pattern,
    ptcl_filename, ptcl_pattern, raw_halo_pattern, redshift_of_scale_factor, SCALE_FACTOR_PREFIX,
};

use thiserror::Error;

/// Errors raised while interpreting catalog filenames.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// The filename does not contain a parseable scale-factor substring.
    #[error("could not locate a scale factor substring in filename '{filename}'")]
    MalformedFilename {
        /// The offending filename.
        filename: String,
    },

    /// Closest-match selection was invoked with no candidates.
    #[error("no candidate catalog filenames to select from")]
    EmptyCandidateSet,
}
