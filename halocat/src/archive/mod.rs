//! Remote archive identities, locations, and directory listing.
//!
//! This module answers two questions: *where* are the catalogs for a given
//! simulation archived, and *what* is currently published there.
//!
//! - `sims` — the whitelisted simulation / halo-finder / catalog-type
//!   identities
//! - `locations` — the fixed archive URL registry
//! - `listing` — the `RemoteLister` capability and its HTTP implementation

mod listing;
mod locations;
mod sims;

pub use listing::{list_available, HttpLister, RemoteLister};
pub use locations::{
    halo_table_web_location, resolve, RemoteLocation, DEFAULT_VERSION_NAME, KNOWN_VERSION_NAMES,
};
pub use sims::{CatalogType, HaloFinder, SimName, UnknownNameError};

use thiserror::Error;

/// Errors raised while resolving or listing remote archive locations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArchiveError {
    /// The (simulation, halo finder) pair is not in the supported registry.
    #[error("no web location is available for simname = '{simname}' and halo_finder = '{halo_finder}'")]
    UnsupportedSim {
        /// Requested simulation name.
        simname: String,
        /// Requested halo-finder name.
        halo_finder: String,
    },

    /// The catalog version name is not recognized.
    #[error("unrecognized catalog version name '{version_name}'")]
    UnsupportedVersion {
        /// Requested version name.
        version_name: String,
    },

    /// The remote archive could not be reached or returned a transport
    /// error. Distinct from an empty listing, which is not an error.
    #[error("remote archive unavailable at {url}: {reason}")]
    RemoteUnavailable {
        /// The URL that failed.
        url: String,
        /// Underlying transport failure.
        reason: String,
    },
}
