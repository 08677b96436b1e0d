//! Nominatim search API response types.
//!
//! The `/search?format=json` endpoint returns an array of places. Only the
//! fields the geocoder consumes are modelled here; note that Nominatim
//! serialises coordinates as strings.
//!
//! See: <https://nominatim.org/release-docs/latest/api/Search/>

use serde::Deserialize;

/// A single place in a Nominatim search response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchResult {
    /// Latitude in degrees, as a decimal string.
    pub(crate) lat: String,
    /// Longitude in degrees, as a decimal string.
    pub(crate) lon: String,
    /// Full display name of the match, when present.
    #[serde(default)]
    pub(crate) display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialise_search_results() {
        let json = r#"[
            {
                "lat": "51.5081",
                "lon": "-0.0761",
                "display_name": "Tower of London, London, England"
            },
            {
                "lat": "40.7484",
                "lon": "-73.9857"
            }
        ]"#;

        let results: Vec<SearchResult> = serde_json::from_str(json).expect("should deserialise");

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].lat, "51.5081");
        assert_eq!(results[0].lon, "-0.0761");
        assert_eq!(
            results[0].display_name.as_deref(),
            Some("Tower of London, London, England")
        );
        assert!(results[1].display_name.is_none());
    }

    #[test]
    fn deserialise_empty_result_set() {
        let results: Vec<SearchResult> = serde_json::from_str("[]").expect("should deserialise");
        assert!(results.is_empty());
    }
}
