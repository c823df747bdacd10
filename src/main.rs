// src/main.rs
// =============================================================================
// Entry point: initialize logging, parse the CLI, dispatch the subcommand.
// Fetch failures in the one-shot subcommands exit with code 1; the
// interactive session reports them inline and keeps running.
// =============================================================================

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use park_scout::cli::{Cli, Commands};
use park_scout::config::Config;
use park_scout::explorer::Explorer;
use park_scout::places;
use park_scout::session::Session;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.api_key, cli.parks_url, cli.places_url);
    let mut explorer = Explorer::new(config)?;

    match cli.command {
        Commands::Explore => {
            let mut session = Session::new(explorer);
            session.run().await
        }
        Commands::Sites { state, json } => {
            let directory = explorer.state_directory().await?;
            let state_url = directory
                .get(&state.to_lowercase())
                .ok_or_else(|| anyhow!("unknown state: {state}"))?;
            let sites = explorer.state_sites(state_url).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&sites)?);
            } else {
                for (index, park) in sites.iter().enumerate() {
                    println!("[{}] {}", index + 1, park.info());
                }
            }
            Ok(())
        }
        Commands::Nearby { site_url, json } => {
            let park = explorer.site(&site_url).await?;
            let payload = explorer.nearby_places(&park).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!("Places near {}", park.name);
                for result in &payload.search_results {
                    println!("{}", places::format_place(result));
                }
            }
            Ok(())
        }
    }
}
