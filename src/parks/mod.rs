// src/parks/mod.rs
// =============================================================================
// HTML extraction for the parks website.
//
// Submodules:
// - directory: the state dropdown on the index page -> state name/URL map
// - site: one site page -> a Park record
// - state: one state page -> the ordered site-page URLs it lists
//
// These are pure functions over fetched HTML so they can be tested against
// fixture pages without a network. Fetching and caching live in `explorer`.
// =============================================================================

mod directory;
mod site;
mod state;

pub use directory::extract_state_directory;
pub use site::extract_park;
pub use state::extract_site_urls;

use thiserror::Error;

/// An expected structural marker was absent from a fetched page.
///
/// The page layouts are an external contract; when they change, lookups fail
/// with this instead of a panic so the session can report and carry on.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("page is missing expected element: {0}")]
    MissingElement(&'static str),
}
