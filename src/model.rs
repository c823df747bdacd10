// src/model.rs
// =============================================================================
// The record type for one national site, as extracted from its nps.gov page.
//
// Records carry no identity beyond their fields; the session addresses them
// by position in the listed order, so the type deliberately has no equality.
// =============================================================================

use serde::Serialize;

/// One national site scraped from its nps.gov page.
#[derive(Debug, Clone, Serialize)]
pub struct Park {
    /// Designation, e.g. "National Park". Some sites have none.
    pub category: String,
    /// Site name, e.g. "Isle Royale".
    pub name: String,
    /// "City, Region", e.g. "Houghton, MI".
    pub address: String,
    /// Zipcode, possibly with a hyphenated suffix, e.g. "82190-0168".
    pub zipcode: String,
    /// Phone number as printed on the page.
    pub phone: String,
}

impl Park {
    // One-line summary used in numbered listings.
    pub fn info(&self) -> String {
        format!(
            "{} ({}): {} {}",
            self.name, self.category, self.address, self.zipcode
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_line() {
        let park = Park {
            category: "National Park".to_string(),
            name: "Isle Royale".to_string(),
            address: "Houghton, MI".to_string(),
            zipcode: "49931".to_string(),
            phone: "(906) 482-0984".to_string(),
        };
        assert_eq!(park.info(), "Isle Royale (National Park): Houghton, MI 49931");
    }

    #[test]
    fn test_info_line_with_blank_category() {
        let park = Park {
            category: String::new(),
            name: "Rosie the Riveter WWII Home Front".to_string(),
            address: "Richmond, CA".to_string(),
            zipcode: "94804".to_string(),
            phone: "510-232-5050".to_string(),
        };
        assert_eq!(
            park.info(),
            "Rosie the Riveter WWII Home Front (): Richmond, CA 94804"
        );
    }
}
