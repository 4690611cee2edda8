//! `halocat list` - show catalogs available for download.

use std::path::PathBuf;

use clap::Args;

use halocat::archive::{CatalogType, HaloFinder, SimName, DEFAULT_VERSION_NAME};
use halocat::catalog::{parse_scale_factor, redshift_of_scale_factor};

use crate::error::CliError;

/// Arguments for the `list` subcommand.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Simulation name (bolshoi, bolplanck, multidark, consuelo)
    pub simname: SimName,

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

/// Run the `list` subcommand.
pub fn run(args: ListArgs) -> Result<(), CliError> {
    let manager = super::build_manager(args.cache_dir)?;

    let catalogs = match args.catalog_type {
        CatalogType::Halos => manager.processed_halo_tables_available_for_download(
            args.simname,
            args.halo_finder,
            &args.version_name,
        )?,
        CatalogType::Particles => {
            manager.ptcl_tables_available_for_download(args.simname, &args.version_name)?
        }
        CatalogType::RawHalos => {
            manager.raw_halo_tables_available_for_download(args.simname, args.halo_finder)?
        }
    };

    if catalogs.is_empty() {
        println!(
            "No {} catalogs published for {}",
            args.catalog_type, args.simname
        );
        return Ok(());
    }

    println!(
        "{} catalogs available for {} ({}):",
        args.catalog_type, args.simname, args.halo_finder
    );
    for fname in &catalogs {
        match parse_scale_factor(fname) {
            Ok(a) => println!("  {}  (z = {:.2})", fname, redshift_of_scale_factor(a)),
            Err(_) => println!("  {}", fname),
        }
    }

    Ok(())
}
