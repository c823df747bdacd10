// src/cli.rs
// =============================================================================
// Command-line interface, built with clap's derive API.
//
// `explore` runs the interactive session; `sites` and `nearby` are one-shot
// variants of the two lookups for scripting, each with a --json mode.
// =============================================================================

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "park-scout",
    version,
    about = "Browse national park sites by state and look up places near them"
)]
pub struct Cli {
    /// MapQuest API key (defaults to the MAPQUEST_API_KEY environment variable)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Override the parks website base URL (defaults to NPS_BASE_URL or nps.gov)
    #[arg(long, global = true)]
    pub parks_url: Option<String>,

    /// Override the places API endpoint (defaults to MAPQUEST_BASE_URL or mapquestapi.com)
    #[arg(long, global = true)]
    pub places_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactively pick a state, then a site, then see nearby places
    Explore,

    /// List the national sites for one state
    ///
    /// Example: park-scout sites michigan
    Sites {
        /// State name, case-insensitive (e.g. Michigan, michigan)
        state: String,

        /// Output the records as JSON instead of a numbered list
        #[arg(long)]
        json: bool,
    },

    /// Look up places near one site page
    ///
    /// Example: park-scout nearby https://www.nps.gov/slbe/index.htm
    Nearby {
        /// Full URL of a site page
        site_url: String,

        /// Output the places payload as JSON instead of formatted lines
        #[arg(long)]
        json: bool,
    },
}
