// src/parks/directory.rs
// =============================================================================
// Extracts the state-name -> state-page-URL map from the index page.
//
// The index page carries a search dropdown listing every state as an anchor.
// Name and href are read from the same anchor element, so the two can never
// fall out of step the way separately selected name/link lists could.
// =============================================================================

use std::collections::HashMap;

use scraper::{Html, Selector};
use url::Url;

use super::ExtractError;

// Parses the index page into {lowercased state name -> absolute state URL}.
//
// Example entry: "michigan" -> "https://www.nps.gov/state/mi/index.htm"
pub fn extract_state_directory(
    html: &str,
    base: &Url,
) -> Result<HashMap<String, String>, ExtractError> {
    let document = Html::parse_document(html);

    // constant selector, known valid
    let selector = Selector::parse(r#".SearchBar-keywordSearch[role="menu"] li a[href]"#).unwrap();

    let mut directory = HashMap::new();
    for anchor in document.select(&selector) {
        let name = anchor.text().collect::<String>().trim().to_lowercase();
        if name.is_empty() {
            continue;
        }
        // a[href] guarantees the attribute exists
        let href = anchor.value().attr("href").unwrap_or_default();
        let state_url = match base.join(href) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(state = %name, href, error = %e, "unresolvable state link, skipping");
                continue;
            }
        };
        directory.insert(name, state_url.to_string());
    }

    if directory.is_empty() {
        return Err(ExtractError::MissingElement("state search dropdown"));
    }
    Ok(directory)
}
