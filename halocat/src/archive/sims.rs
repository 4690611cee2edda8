//! Simulation, halo-finder, and catalog-type identities.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when parsing an unrecognized identity name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized name '{0}'")]
pub struct UnknownNameError(pub String);

/// Supported N-body simulations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimName {
    /// Bolshoi (250 Mpc/h box, WMAP5 cosmology).
    Bolshoi,
    /// Bolshoi-Planck (250 Mpc/h box, Planck 2013 cosmology).
    BolPlanck,
    /// MultiDark (1 Gpc/h box).
    MultiDark,
    /// Consuelo (LasDamas suite, 420 Mpc/h box).
    Consuelo,
}

impl SimName {
    /// All supported simulations.
    pub const ALL: [SimName; 4] = [
        SimName::Bolshoi,
        SimName::BolPlanck,
        SimName::MultiDark,
        SimName::Consuelo,
    ];

    /// Canonical lowercase name used in URLs, cache paths, and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            SimName::Bolshoi => "bolshoi",
            SimName::BolPlanck => "bolplanck",
            SimName::MultiDark => "multidark",
            SimName::Consuelo => "consuelo",
        }
    }

    /// Halo finders with catalogs published for this simulation.
    pub fn supported_halo_finders(&self) -> &'static [HaloFinder] {
        match self {
            SimName::Bolshoi => &[HaloFinder::Rockstar, HaloFinder::Bdm],
            SimName::BolPlanck | SimName::MultiDark | SimName::Consuelo => {
                &[HaloFinder::Rockstar]
            }
        }
    }

    /// Whether catalogs produced by `halo_finder` exist for this simulation.
    pub fn supports(&self, halo_finder: HaloFinder) -> bool {
        self.supported_halo_finders().contains(&halo_finder)
    }

    /// Halo finder used when none is specified (rockstar for every
    /// simulation).
    pub fn default_halo_finder(&self) -> HaloFinder {
        HaloFinder::Rockstar
    }
}

impl fmt::Display for SimName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimName {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bolshoi" => Ok(SimName::Bolshoi),
            "bolplanck" => Ok(SimName::BolPlanck),
            "multidark" => Ok(SimName::MultiDark),
            "consuelo" => Ok(SimName::Consuelo),
            _ => Err(UnknownNameError(s.to_string())),
        }
    }
}

/// Halo-finding algorithms with published catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HaloFinder {
    /// Rockstar phase-space halo finder.
    Rockstar,
    /// Bound Density Maxima halo finder.
    Bdm,
}

impl HaloFinder {
    /// Canonical lowercase name used in URLs, cache paths, and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            HaloFinder::Rockstar => "rockstar",
            HaloFinder::Bdm => "bdm",
        }
    }
}

impl fmt::Display for HaloFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HaloFinder {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rockstar" => Ok(HaloFinder::Rockstar),
            "bdm" => Ok(HaloFinder::Bdm),
            _ => Err(UnknownNameError(s.to_string())),
        }
    }
}

/// The kinds of catalogs published on the archives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogType {
    /// Halo catalogs processed into the project's HDF5 format.
    Halos,
    /// Particle catalogs (random downsamples of the snapshot).
    Particles,
    /// Original halo catalogs in the source archive's ASCII format.
    RawHalos,
}

impl CatalogType {
    /// Canonical name used in the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogType::Halos => "halos",
            CatalogType::Particles => "particles",
            CatalogType::RawHalos => "raw_halos",
        }
    }
}

impl fmt::Display for CatalogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogType {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "halos" => Ok(CatalogType::Halos),
            "particles" => Ok(CatalogType::Particles),
            "raw_halos" | "raw" => Ok(CatalogType::RawHalos),
            _ => Err(UnknownNameError(s.to_string())),
        }
    }
}
