// src/parks/state.rs
// =============================================================================
// Extracts the site-page URLs listed on one state page.
//
// Sites appear as h3 headings inside the #list_parks container, each wrapping
// an anchor whose href is the site's directory (e.g. "/slbe/"). The full page
// URL is that directory plus "index.htm". Output order is page order.
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

use super::ExtractError;

// Parses a state page into the ordered list of absolute site-page URLs.
// An entry without a usable link is logged and skipped rather than failing
// the whole listing.
pub fn extract_site_urls(html: &str, base: &Url) -> Result<Vec<String>, ExtractError> {
    let document = Html::parse_document(html);

    let container_selector = Selector::parse("#list_parks").unwrap();
    let heading_selector = Selector::parse("#list_parks h3").unwrap();
    let anchor_selector = Selector::parse("a[href]").unwrap();

    if document.select(&container_selector).next().is_none() {
        return Err(ExtractError::MissingElement("park listing container"));
    }

    let mut urls = Vec::new();
    for heading in document.select(&heading_selector) {
        let href = heading
            .select(&anchor_selector)
            .next()
            .and_then(|anchor| anchor.value().attr("href"));
        let Some(href) = href else {
            tracing::warn!("park listing entry without a link, skipping");
            continue;
        };
        // "/slbe/" joined against the base, then the index page inside it
        match base.join(href).and_then(|dir| dir.join("index.htm")) {
            Ok(site_url) => urls.push(site_url.to_string()),
            Err(e) => tracing::warn!(href, error = %e, "unresolvable park link, skipping"),
        }
    }

    Ok(urls)
}
