//! nps-sites CLI
//!
//! Lists National Park Service sites by state and the places around them.
//! Every page and search result is cached in the configured JSON file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nps_sites::{
    AppError, FileStore, NearbyPlace, Result, SiteDirectory, SiteRecord,
    config::{self, Overrides},
    utils::http::HttpFetcher,
};

/// nps-sites - National Park Service site directory
#[derive(Parser, Debug)]
#[command(name = "nps-sites", version, about = "National Park Service site directory")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cache file (overrides cache.path)
    #[arg(long)]
    cache: Option<PathBuf>,

    /// MapQuest API key for nearby searches
    #[arg(long, env = "MAPQUEST_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the states known to nps.gov
    States,

    /// List the sites in a state
    Sites {
        /// State name, e.g. "Michigan"
        state: String,
    },

    /// List places near one site of a state
    Nearby {
        /// State name, e.g. "Michigan"
        state: String,

        /// Site number as shown by `sites`
        number: usize,
    },

    /// Validate configuration
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_header(title: &str) {
    let rule = "-".repeat(title.chars().count());
    println!("{rule}\n{title}\n{rule}");
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Resolve a state's sites, reporting unknown names instead of failing.
fn sites_for(
    directory: &mut SiteDirectory<HttpFetcher, FileStore>,
    state: &str,
) -> Result<Option<Vec<SiteRecord>>> {
    match directory.resolve_region(state) {
        Ok(sites) => Ok(Some(sites)),
        Err(AppError::UnknownRegion(name)) => {
            eprintln!("Unknown state '{name}'. Run `nps-sites states` for the list.");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Main entry point for the CLI application.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let overrides = Overrides {
        cache_path: cli.cache,
        api_key: cli.api_key,
    };
    let config = config::load_all(cli.config.as_deref(), overrides)?;

    match cli.command {
        Command::States => {
            let mut directory = SiteDirectory::open(&config)?;
            let states = directory.states()?;
            print_header(&format!("{} states and territories", states.len()));
            for name in states.keys() {
                println!("{}", title_case(name));
            }
        }

        Command::Sites { state } => {
            let mut directory = SiteDirectory::open(&config)?;
            let Some(sites) = sites_for(&mut directory, &state)? else {
                return Ok(());
            };

            print_header(&format!("List of national sites in {}", title_case(&state)));
            for (i, site) in sites.iter().enumerate() {
                println!("[{}] {}", i + 1, site);
            }
        }

        Command::Nearby { state, number } => {
            let mut directory = SiteDirectory::open(&config)?;
            let Some(sites) = sites_for(&mut directory, &state)? else {
                return Ok(());
            };

            let Some(site) = number.checked_sub(1).and_then(|i| sites.get(i)) else {
                eprintln!("Invalid site number {number}; choose 1 to {}.", sites.len());
                return Ok(());
            };

            match directory.fetch_nearby(site)? {
                Some(result) => {
                    print_header(&format!("Places near {}", title_case(site.name())));
                    for place in NearbyPlace::list_from(&result) {
                        println!("{place}");
                    }
                }
                None => eprintln!("{} does not have location info.", site.name()),
            }
        }

        Command::Validate => {
            log::info!("✓ Config OK (cache: {})", config.cache.path.display());
            if config.places.api_key.is_none() {
                log::warn!("No MapQuest API key configured; `nearby` will fail");
            }
        }
    }

    Ok(())
}
