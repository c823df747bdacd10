// src/config.rs
// =============================================================================
// Endpoint and credential configuration.
//
// Precedence is CLI flag, then environment variable, then default. A .env
// file in the working directory is honored via dotenvy. The MapQuest API key
// is optional here and only required once a places lookup actually happens.
// =============================================================================

use std::env;

pub const DEFAULT_PARKS_BASE_URL: &str = "https://www.nps.gov";
pub const DEFAULT_PLACES_BASE_URL: &str = "http://www.mapquestapi.com/search/v2/radius";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the parks website, without a trailing slash.
    pub parks_base_url: String,
    /// Full URL of the places radius-search endpoint.
    pub places_base_url: String,
    /// MapQuest API key; None until a key is supplied.
    pub api_key: Option<String>,
}

impl Config {
    // Builds the config from optional CLI overrides plus the environment.
    pub fn load(
        api_key: Option<String>,
        parks_base_url: Option<String>,
        places_base_url: Option<String>,
    ) -> Self {
        // missing .env is fine; the plain environment still applies
        dotenvy::dotenv().ok();

        let api_key = api_key.or_else(|| env::var("MAPQUEST_API_KEY").ok());
        let parks_base_url = parks_base_url
            .or_else(|| env::var("NPS_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_PARKS_BASE_URL.to_string());
        let places_base_url = places_base_url
            .or_else(|| env::var("MAPQUEST_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_PLACES_BASE_URL.to_string());

        Self {
            parks_base_url,
            places_base_url,
            api_key,
        }
    }
}
