//! `halocat fetch` - download the catalog closest to a redshift.

use std::path::PathBuf;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use halocat::archive::{CatalogType, HaloFinder, SimName, DEFAULT_VERSION_NAME};
use halocat::manager::ProgressCallback;

use crate::error::CliError;

/// Arguments for the `fetch` subcommand.
#[derive(Debug, Args)]
pub struct FetchArgs {
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

    /// Replace an already-cached catalog
    #[arg(long)]
    pub overwrite: bool,

    /// Cache directory override
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,
}

/// Run the `fetch` subcommand.
pub fn run(args: FetchArgs) -> Result<(), CliError> {
    let manager = super::build_manager(args.cache_dir)?;

    println!(
        "Fetching {} catalog for {} ({}) closest to z = {}",
        args.catalog_type, args.simname, args.halo_finder, args.redshift
    );

    let bar = ProgressBar::new(0);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {bytes}/{total_bytes} ({bytes_per_sec})")
            .expect("valid progress template"),
    );
    let progress_bar = bar.clone();
    let progress: ProgressCallback = Box::new(move |downloaded, total| {
        if total > 0 && progress_bar.length() != Some(total) {
            progress_bar.set_length(total);
        }
        progress_bar.set_position(downloaded);
    });

    let (path, record) = manager.download_closest_catalog(
        args.simname,
        args.halo_finder,
        args.redshift,
        args.catalog_type,
        &args.version_name,
        args.overwrite,
        Some(progress),
    )?;
    bar.finish_and_clear();

    println!(
        "Saved {}  (z = {:.2})",
        style(&record.filename).green(),
        record.redshift
    );
    println!("  -> {}", path.display());

    Ok(())
}
