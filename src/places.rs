// src/places.rs
// =============================================================================
// Typed payload for the MapQuest radius-search API, plus the line formatter.
//
// Lookup and presentation are kept apart: `explorer` returns the payload,
// and callers render it with `format_place` whether it came from the network
// or the cache. Unknown keys in the payload are ignored on deserialization.
// =============================================================================

use serde::{Deserialize, Serialize};

/// Response body of the radius search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "searchResults", default)]
    pub search_results: Vec<SearchResult>,
}

/// One place in the search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: ResultFields,
}

/// Detail fields of one place. The API leaves any of these out or sends
/// empty strings; both count as missing when formatting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultFields {
    #[serde(rename = "group_sic_code_name", default)]
    pub category: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

// Renders one place as `- {name} ({category}): {address}, {city}`, with
// "no category" / "no address" / "no city" standing in for missing fields.
pub fn format_place(result: &SearchResult) -> String {
    format!(
        "- {} ({}): {}, {}",
        result.name,
        field_or(&result.fields.category, "no category"),
        field_or(&result.fields.address, "no address"),
        field_or(&result.fields.city, "no city"),
    )
}

fn field_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    match value {
        Some(text) if !text.is_empty() => text,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(category: Option<&str>, address: Option<&str>, city: Option<&str>) -> SearchResult {
        SearchResult {
            name: "Keweenaw Co-op".to_string(),
            fields: ResultFields {
                category: category.map(String::from),
                address: address.map(String::from),
                city: city.map(String::from),
            },
        }
    }

    #[test]
    fn test_format_with_all_fields() {
        let line = format_place(&place(
            Some("Grocery Stores"),
            Some("1035 Ethel Ave"),
            Some("Hancock"),
        ));
        assert_eq!(line, "- Keweenaw Co-op (Grocery Stores): 1035 Ethel Ave, Hancock");
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let line = format_place(&place(None, None, None));
        assert_eq!(line, "- Keweenaw Co-op (no category): no address, no city");
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        let line = format_place(&place(Some(""), Some("1035 Ethel Ave"), Some("")));
        assert_eq!(
            line,
            "- Keweenaw Co-op (no category): 1035 Ethel Ave, no city"
        );
    }

    #[test]
    fn test_payload_deserialization() {
        let body = r#"{
            "resultsCount": 1,
            "searchResults": [
                {
                    "name": "Ryan's Bar",
                    "distance": 2.1,
                    "fields": {
                        "group_sic_code_name": "Taverns",
                        "address": "223 Quincy St",
                        "city": "Hancock",
                        "state": "MI"
                    }
                }
            ]
        }"#;
        let payload: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(payload.search_results.len(), 1);
        let result = &payload.search_results[0];
        assert_eq!(result.name, "Ryan's Bar");
        assert_eq!(result.fields.category.as_deref(), Some("Taverns"));
    }

    #[test]
    fn test_payload_without_results_key() {
        let payload: SearchResponse = serde_json::from_str(r#"{"resultsCount": 0}"#).unwrap();
        assert!(payload.search_results.is_empty());
    }
}
