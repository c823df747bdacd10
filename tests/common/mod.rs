// tests/common/mod.rs
// =============================================================================
// Fixture builders shared by the integration tests: minimal page bodies that
// carry the structural markers the extractors key on, and a Config pointed
// at a wiremock server.
// =============================================================================

use park_scout::config::Config;

// A Config whose parks site and places API both live on the mock server.
pub fn test_config(server_uri: &str) -> Config {
    Config {
        parks_base_url: server_uri.to_string(),
        places_base_url: format!("{server_uri}/search/v2/radius"),
        api_key: Some("test-key".to_string()),
    }
}

// Index page with a state search dropdown: (display name, href) per state.
pub fn index_page(states: &[(&str, &str)]) -> String {
    let mut items = String::new();
    for (name, href) in states {
        items.push_str(&format!(r#"<li><a href="{href}">{name}</a></li>"#));
    }
    format!(
        r#"<html><body>
        <div class="SearchBar-keywordSearch" role="menu"><ul>{items}</ul></div>
        </body></html>"#
    )
}

// State page listing one h3 entry per site directory href (e.g. "/isro/").
pub fn state_page(hrefs: &[&str]) -> String {
    let mut items = String::new();
    for href in hrefs {
        items.push_str(&format!(r#"<h3><a href="{href}">A site</a></h3>"#));
    }
    format!(r#"<html><body><div id="list_parks">{items}</div></body></html>"#)
}

// Site page carrying all six required markers.
pub fn site_page(name: &str, category: &str, zipcode: &str) -> String {
    format!(
        r#"<html><body>
        <h1 class="Hero-title">{name}</h1>
        <span class="Hero-designation">{category}</span>
        <span itemprop="addressLocality">Houghton</span>
        <span itemprop="addressRegion">MI</span>
        <span itemprop="postalCode">{zipcode}</span>
        <span itemprop="telephone">(906) 482-0984</span>
        </body></html>"#
    )
}

// Places payload with one complete result per name.
pub fn places_body(names: &[&str]) -> serde_json::Value {
    let results: Vec<serde_json::Value> = names
        .iter()
        .map(|name| {
            serde_json::json!({
                "name": name,
                "fields": {
                    "group_sic_code_name": "Grocery Stores",
                    "address": "1035 Ethel Ave",
                    "city": "Hancock"
                }
            })
        })
        .collect();
    serde_json::json!({ "searchResults": results })
}
