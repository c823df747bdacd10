//! # park-scout
//!
//! Scrapes the National Park Service website to list the national sites in a
//! U.S. state, then queries the MapQuest radius-search API for places near a
//! chosen site's zipcode. Everything network-facing is memoized in-process:
//! the state directory, individual site pages, per-state site lists, and
//! per-zipcode places responses are each fetched at most once per run.
//!
//! The crate is a library plus a thin binary so the fetch pipeline and the
//! interactive session can be exercised from integration tests.

pub mod cache;
pub mod cli;
pub mod config;
pub mod explorer;
pub mod model;
pub mod parks;
pub mod places;
pub mod session;

pub use explorer::Explorer;
pub use model::Park;
