//! `halocat closest` - show the available catalog closest to a redshift.

use std::path::PathBuf;

use clap::Args;
use console::style;

use halocat::archive::{CatalogType, HaloFinder, SimName, DEFAULT_VERSION_NAME};

use crate::error::CliError;

/// Arguments for the `closest` subcommand.
#[derive(Debug, Args)]
pub struct ClosestArgs {
    /// Simulation name (bolshoi, bolplanck, multidark, consuelo)
    pub simname: SimName,

    /// Desired redshift
    #[arg(long, short = 'z')]
    pub redshift: f64,

    /// Halo finder that produced the catalogs
    #[arg(long, default_value = "rockstar")]
    pub halo_finder: HaloFinder,

    /// Catalog type (halos, particles, raw)
    #[arg(long, default_value = "halos")]
    pub catalog_type: CatalogType,

    /// Catalog processing version
    #[arg(long, default_value = DEFAULT_VERSION_NAME)]
    pub version_name: String,

    /// Cache directory override
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,
}

/// Run the `closest` subcommand.
pub fn run(args: ClosestArgs) -> Result<(), CliError> {
    let manager = super::build_manager(args.cache_dir)?;

    let record = manager.closest_catalog_on_web(
        args.simname,
        args.halo_finder,
        args.redshift,
        args.catalog_type,
        &args.version_name,
    )?;

    println!(
        "Closest {} catalog for {} ({}) to z = {}:",
        args.catalog_type, args.simname, args.halo_finder, args.redshift
    );
    println!(
        "  {}  (z = {:.2})",
        style(&record.filename).green(),
        record.redshift
    );

    Ok(())
}
