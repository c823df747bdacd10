// src/explorer.rs
// =============================================================================
// The cached fetch pipeline.
//
// Explorer owns one HTTP client and four memo caches:
// - directory:   index URL -> {state name -> state page URL}
// - sites:       site page URL -> Park
// - state_sites: state page URL -> ordered Vec<Park>
// - places:      zipcode -> places API payload
//
// The site cache is shared between direct lookups and the state lister, so a
// site listed under two states is fetched once. All fetches are sequential;
// there is deliberately no concurrency and no retrying here.
// =============================================================================

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use url::Url;

use crate::cache::Cache;
use crate::config::Config;
use crate::model::Park;
use crate::parks;
use crate::places::SearchResponse;

pub struct Explorer {
    client: Client,
    config: Config,
    parks_base: Url,
    directory: Cache<String, HashMap<String, String>>,
    sites: Cache<String, Park>,
    state_sites: Cache<String, Vec<Park>>,
    places: Cache<String, SearchResponse>,
}

impl Explorer {
    pub fn new(config: Config) -> Result<Self> {
        let parks_base = Url::parse(&config.parks_base_url)
            .with_context(|| format!("invalid parks base URL: {}", config.parks_base_url))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            config,
            parks_base,
            directory: Cache::new(),
            sites: Cache::new(),
            state_sites: Cache::new(),
            places: Cache::new(),
        })
    }

    // The {lowercased state name -> state page URL} map from the index page.
    // Fetched once per process; every later call is a cache hit.
    pub async fn state_directory(&mut self) -> Result<HashMap<String, String>> {
        let index_url = match self.parks_base.join("index.htm") {
            Ok(url) => url.to_string(),
            Err(e) => return Err(anyhow!("cannot build index URL: {e}")),
        };

        let client = &self.client;
        let base = &self.parks_base;
        let fetch_url = index_url.clone();
        self.directory
            .get_or_fetch(index_url, || async move {
                let html = fetch_page(client, &fetch_url).await?;
                let directory = parks::extract_state_directory(&html, base)
                    .context("state directory extraction failed")?;
                Ok(directory)
            })
            .await
    }

    // One Park per site page URL, memoized for the process lifetime.
    pub async fn site(&mut self, site_url: &str) -> Result<Park> {
        let client = &self.client;
        let fetch_url = site_url.to_string();
        self.sites
            .get_or_fetch(site_url.to_string(), || async move {
                let html = fetch_page(client, &fetch_url).await?;
                let park = parks::extract_park(&html)
                    .with_context(|| format!("site extraction failed for {fetch_url}"))?;
                Ok(park)
            })
            .await
    }

    // The ordered Parks listed on one state page. Each entry resolves through
    // the shared site cache, so re-listing a state or listing a neighboring
    // state that shares a site never re-fetches a site page.
    pub async fn state_sites(&mut self, state_url: &str) -> Result<Vec<Park>> {
        if let Some(sites) = self.state_sites.get(state_url) {
            tracing::debug!(state_url, "cache hit");
            return Ok(sites.clone());
        }

        tracing::debug!(state_url, "cache miss, fetching");
        let html = fetch_page(&self.client, state_url).await?;
        let site_urls = parks::extract_site_urls(&html, &self.parks_base)
            .with_context(|| format!("state listing extraction failed for {state_url}"))?;

        let mut sites = Vec::with_capacity(site_urls.len());
        for site_url in site_urls {
            sites.push(self.site(&site_url).await?);
        }

        self.state_sites.insert(state_url.to_string(), sites.clone());
        Ok(sites)
    }

    // Places near the park's zipcode, memoized per zipcode. Returns the
    // payload only; rendering is the caller's concern.
    pub async fn nearby_places(&mut self, park: &Park) -> Result<SearchResponse> {
        let api_key = self
            .config
            .api_key
            .clone()
            .ok_or_else(|| anyhow!("MAPQUEST_API_KEY is not set (environment or .env file)"))?;
        let places_url = self.config.places_base_url.clone();

        let client = &self.client;
        let origin = park.zipcode.clone();
        self.places
            .get_or_fetch(park.zipcode.clone(), || async move {
                let response = client
                    .get(&places_url)
                    .query(&[
                        ("key", api_key.as_str()),
                        ("origin", origin.as_str()),
                        ("radius", "10"),
                        ("maxMatches", "10"),
                        ("ambiguities", "ignore"),
                        ("outFormat", "json"),
                    ])
                    .send()
                    .await
                    .with_context(|| format!("places request for {origin} failed"))?;

                if !response.status().is_success() {
                    return Err(anyhow!(
                        "places API returned HTTP {}",
                        response.status()
                    ));
                }

                let payload = response
                    .json::<SearchResponse>()
                    .await
                    .context("places API returned an unexpected payload")?;
                Ok(payload)
            })
            .await
    }
}

// Fetches a page and returns its HTML; non-2xx statuses are errors.
async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    tracing::debug!(url, "fetching");
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("request to {url} failed"))?;

    if !response.status().is_success() {
        return Err(anyhow!("{url} returned HTTP {}", response.status()));
    }

    let html = response.text().await?;
    Ok(html)
}
