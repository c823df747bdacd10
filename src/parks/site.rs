// src/parks/site.rs
// =============================================================================
// Extracts a Park record from one site page.
//
// The page exposes the name and designation through Hero-* classes and the
// contact block through microdata itemprop attributes. All six markers are
// required; any one missing fails the whole extraction.
// =============================================================================

use scraper::{Html, Selector};

use super::ExtractError;
use crate::model::Park;

// Parses one site page into a Park. Every field is trimmed of surrounding
// whitespace; the address is composed as "City, Region".
pub fn extract_park(html: &str) -> Result<Park, ExtractError> {
    let document = Html::parse_document(html);

    let name = select_text(&document, ".Hero-title", "site title")?;
    let category = select_text(&document, ".Hero-designation", "site designation")?;
    let locality = select_text(
        &document,
        r#"[itemprop="addressLocality"]"#,
        "address locality",
    )?;
    let region = select_text(&document, r#"[itemprop="addressRegion"]"#, "address region")?;
    let zipcode = select_text(&document, r#"[itemprop="postalCode"]"#, "postal code")?;
    let phone = select_text(&document, r#"[itemprop="telephone"]"#, "telephone")?;

    Ok(Park {
        category,
        name,
        address: format!("{locality}, {region}"),
        zipcode,
        phone,
    })
}

// First match of a constant selector, as trimmed text.
fn select_text(
    document: &Html,
    css: &str,
    marker: &'static str,
) -> Result<String, ExtractError> {
    let selector = Selector::parse(css).unwrap();
    let element = document
        .select(&selector)
        .next()
        .ok_or(ExtractError::MissingElement(marker))?;
    Ok(element.text().collect::<String>().trim().to_string())
}
