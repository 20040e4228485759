//! hn-faves command-line entry point
//!
//! Fetches a Hacker News user's favorited stories and/or comments and
//! prints them as JSON, going through the response cache. This is the
//! inbound surface; everything interesting lives in the library.

use clap::Parser;
use hn_faves::cache::SqliteCache;
use hn_faves::config::{load_config_with_hash, Config};
use hn_faves::{ContentMode, FaveService};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// hn-faves: scrape a Hacker News user's favorites
///
/// Walks the paginated favorites listing for USER, tolerating the site's
/// rate limiting, and prints the aggregated result as JSON. Results are
/// cached for a day; use --delete-cache to drop a cached entry.
#[derive(Parser, Debug)]
#[command(name = "hn-faves")]
#[command(version)]
#[command(about = "Scrape a Hacker News user's favorite stories and comments", long_about = None)]
struct Cli {
    /// Hacker News username whose favorites to fetch
    user: String,

    /// Which favorites to fetch: "stories" or "comments" (both when omitted)
    #[arg(value_name = "TYPE")]
    mode: Option<String>,

    /// Path to TOML configuration file (defaults apply without one)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Drop the cached entry for USER/TYPE instead of fetching
    #[arg(long, requires = "mode")]
    delete_cache: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, or fall back to built-in defaults
    let config = match &cli.config {
        Some(path) => {
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!(
                "Loaded configuration from {} (hash: {})",
                path.display(),
                hash
            );
            config
        }
        None => Config::default(),
    };

    let mode = cli.mode.as_deref().map(str::parse::<ContentMode>).transpose()?;

    let cache = SqliteCache::new(Path::new(&config.cache.database_path))?;
    let mut service = FaveService::new(&config, Box::new(cache))?;

    // clap guarantees a TYPE whenever --delete-cache is present
    match (cli.delete_cache, mode) {
        (true, Some(mode)) => handle_delete_cache(&mut service, &cli.user, mode)?,
        (_, mode) => handle_fetch(&mut service, &cli.user, mode).await?,
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("hn_faves=warn"),
            1 => EnvFilter::new("hn_faves=info,warn"),
            2 => EnvFilter::new("hn_faves=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Drops the cached entry for one user/type
fn handle_delete_cache(
    service: &mut FaveService,
    user: &str,
    mode: ContentMode,
) -> anyhow::Result<()> {
    if service.invalidate(user, mode)? {
        println!("Cache deleted");
    } else {
        println!("Cache not found");
    }
    Ok(())
}

/// Fetches one kind of favorites, or both when no type was given
async fn handle_fetch(
    service: &mut FaveService,
    user: &str,
    mode: Option<ContentMode>,
) -> anyhow::Result<()> {
    match mode {
        Some(mode) => {
            let records = service.get_or_compute(user, mode).await?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        None => {
            let stories = service.get_or_compute(user, ContentMode::Story).await?;
            let comments = service.get_or_compute(user, ContentMode::Comment).await?;
            let combined = serde_json::json!({
                "stories": stories,
                "comments": comments,
            });
            println!("{}", serde_json::to_string_pretty(&combined)?);
        }
    }
    Ok(())
}
