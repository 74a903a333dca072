//! Travel dataset records: places lived, worked, studied, and visited.
//!
//! Entries carry no coordinates of their own; those are joined in from the
//! geocode cache by `travel::resolve_entries`. An entry can be parked with
//! `enabled: false` instead of being deleted, which keeps it out of both
//! pair extraction and resolution.

use serde::{Deserialize, Serialize};

use super::dates::DateStamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelPurpose {
    Lived,
    Travel,
    Work,
    Conference,
    Study,
}

impl TravelPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelPurpose::Lived => "lived",
            TravelPurpose::Travel => "travel",
            TravelPurpose::Work => "work",
            TravelPurpose::Conference => "conference",
            TravelPurpose::Study => "study",
        }
    }
}

/// One place in the travel dataset, as declared in the data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelEntry {
    pub place: String,
    pub country: String,
    pub start_date: DateStamp,
    pub end_date: Option<DateStamp>,
    pub purpose: TravelPurpose,
    pub notes: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl TravelEntry {
    /// Composite key joining this entry to the geocode cache.
    pub fn cache_key(&self) -> String {
        format!("{}, {}", self.place, self.country)
    }
}

/// A travel entry joined with its resolved coordinates.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTravelEntry {
    #[serde(flatten)]
    pub entry: TravelEntry,
    pub lat: f64,
    pub lng: f64,
    pub country_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_defaults_to_true() {
        let entry: TravelEntry = serde_json::from_str(
            r#"{"place": "Kyoto", "country": "Japan", "startDate": "2025-03-20", "purpose": "travel"}"#,
        )
        .unwrap();
        assert!(entry.enabled);
        assert!(entry.end_date.is_none());
    }

    #[test]
    fn test_cache_key_format() {
        let entry: TravelEntry = serde_json::from_str(
            r#"{"place": "Paris", "country": "France", "startDate": "2024", "purpose": "conference"}"#,
        )
        .unwrap();
        assert_eq!(entry.cache_key(), "Paris, France");
    }

    #[test]
    fn test_disabled_entry_parses() {
        let entry: TravelEntry = serde_json::from_str(
            r#"{"place": "Tokyo", "country": "Japan", "startDate": "2025-03", "purpose": "travel", "enabled": false}"#,
        )
        .unwrap();
        assert!(!entry.enabled);
    }
}
