//! Halocat CLI - catalog discovery and retrieval.
//!
//! This binary exposes the halocat library over three subcommands:
//! `list`, `closest`, and `fetch`.

mod commands;
mod error;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "halocat",
    version,
    about = "Discover and download dark-matter simulation catalogs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List catalogs available for download
    List(commands::list::ListArgs),
    /// Show the available catalog closest to a redshift
    Closest(commands::closest::ClosestArgs),
    /// Download the catalog closest to a redshift into the local cache
    Fetch(commands::fetch::FetchArgs),
}

fn main() {
    let cli = Cli::parse();
    let _guard = halocat::logging::init();

    let result = match cli.command {
        Command::List(args) => commands::list::run(args),
        Command::Closest(args) => commands::closest::run(args),
        Command::Fetch(args) => commands::fetch::run(args),
    };

    if let Err(e) = result {
        eprintln!("{} {}", console::style("error:").red().bold(), e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_list() {
        let cli = Cli::try_parse_from(["halocat", "list", "bolshoi", "--catalog-type", "particles"])
            .unwrap();
        match cli.command {
            Command::List(args) => {
                assert_eq!(args.simname, halocat::archive::SimName::Bolshoi);
                assert_eq!(args.catalog_type, halocat::archive::CatalogType::Particles);
            }
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_parses_fetch_with_redshift() {
        let cli = Cli::try_parse_from([
            "halocat",
            "fetch",
            "bolshoi",
            "-z",
            "0.5",
            "--halo-finder",
            "bdm",
            "--overwrite",
        ])
        .unwrap();
        match cli.command {
            Command::Fetch(args) => {
                assert_eq!(args.redshift, 0.5);
                assert_eq!(args.halo_finder, halocat::archive::HaloFinder::Bdm);
                assert!(args.overwrite);
            }
            other => panic!("expected fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_simulation() {
        let result = Cli::try_parse_from(["halocat", "list", "millennium"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_version_name_defaults() {
        let cli = Cli::try_parse_from(["halocat", "closest", "multidark", "-z", "0"]).unwrap();
        match cli.command {
            Command::Closest(args) => {
                assert_eq!(
                    args.version_name,
                    halocat::archive::DEFAULT_VERSION_NAME
                );
            }
            other => panic!("expected closest, got {:?}", other),
        }
    }
}
