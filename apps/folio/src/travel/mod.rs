//! Travel dataset operations: loading the data file, extracting the pairs
//! the geocode builder must resolve, and joining entries against the cache
//! for rendering.
//!
//! The dataset is an explicit input loaded from disk and passed by value,
//! not a module-level singleton.

use std::collections::BTreeSet;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::errors::FolioError;
use crate::geocode::cache::{GeocodeCache, UNKNOWN_COUNTRY_CODE};
use crate::models::travel::{ResolvedTravelEntry, TravelEntry};

/// Loads the travel dataset (a JSON array of entries) from `path`.
pub fn load_travel_data(path: &Path) -> Result<Vec<TravelEntry>, FolioError> {
    let raw = fs::read_to_string(path).map_err(|e| FolioError::TravelData {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|e| FolioError::TravelData {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// The (place, country) pairs the geocode cache must cover: enabled entries
/// only, deduplicated by composite key, in order of first appearance.
pub fn required_pairs(entries: &[TravelEntry]) -> Vec<(String, String)> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter(|e| e.enabled)
        .filter(|e| seen.insert(e.cache_key()))
        .map(|e| (e.place.clone(), e.country.clone()))
        .collect()
}

/// Joins enabled entries against the geocode cache by composite key.
///
/// A missing key resolves to sentinel coordinates (0, 0, `??`) and logs a
/// warning: the gap stays visible, but it never blocks the rest of the
/// dataset from rendering.
pub fn resolve_entries(entries: &[TravelEntry], cache: &GeocodeCache) -> Vec<ResolvedTravelEntry> {
    entries
        .iter()
        .filter(|e| e.enabled)
        .map(|entry| {
            let key = entry.cache_key();
            match cache.get(&key) {
                Some(coords) => ResolvedTravelEntry {
                    entry: entry.clone(),
                    lat: coords.lat,
                    lng: coords.lng,
                    country_code: coords.cc.clone(),
                },
                None => {
                    warn!("No coordinates for \"{key}\". Run the geocode builder.");
                    ResolvedTravelEntry {
                        entry: entry.clone(),
                        lat: 0.0,
                        lng: 0.0,
                        country_code: UNKNOWN_COUNTRY_CODE.to_string(),
                    }
                }
            }
        })
        .collect()
}

/// Distinct countries across the resolved entries, sorted.
pub fn unique_countries(entries: &[ResolvedTravelEntry]) -> Vec<String> {
    let set: BTreeSet<&String> = entries.iter().map(|e| &e.entry.country).collect();
    set.into_iter().cloned().collect()
}

/// Distinct places across the resolved entries, sorted.
pub fn unique_places(entries: &[ResolvedTravelEntry]) -> Vec<String> {
    let set: BTreeSet<&String> = entries.iter().map(|e| &e.entry.place).collect();
    set.into_iter().cloned().collect()
}

/// Flag emoji for a two-letter country code via regional indicator symbols.
/// The unknown-country sentinel gets a white flag.
pub fn flag_emoji(country_code: &str) -> String {
    if country_code == UNKNOWN_COUNTRY_CODE {
        return "\u{1F3F3}\u{FE0F}".to_string();
    }
    let flag: Option<String> = country_code
        .chars()
        .map(|c| {
            let c = c.to_ascii_uppercase();
            c.is_ascii_uppercase()
                .then(|| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
                .flatten()
        })
        .collect();
    flag.unwrap_or_else(|| "\u{1F3F3}\u{FE0F}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::cache::CacheEntry;
    use crate::models::travel::TravelPurpose;

    fn make_entry(place: &str, country: &str, enabled: bool) -> TravelEntry {
        TravelEntry {
            place: place.to_string(),
            country: country.to_string(),
            start_date: "2024".parse().unwrap(),
            end_date: None,
            purpose: TravelPurpose::Travel,
            notes: None,
            enabled,
        }
    }

    fn cache_with(key: &str, lat: f64, lng: f64, cc: &str) -> GeocodeCache {
        let mut cache = GeocodeCache::default();
        cache.insert(
            key.to_string(),
            CacheEntry {
                lat,
                lng,
                cc: cc.to_string(),
            },
        );
        cache
    }

    #[test]
    fn test_required_pairs_deduplicates_in_first_appearance_order() {
        let entries = vec![
            make_entry("Stockholm", "Sweden", true),
            make_entry("Dubai", "UAE", true),
            make_entry("Stockholm", "Sweden", true),
        ];
        assert_eq!(
            required_pairs(&entries),
            vec![
                ("Stockholm".to_string(), "Sweden".to_string()),
                ("Dubai".to_string(), "UAE".to_string()),
            ]
        );
    }

    #[test]
    fn test_required_pairs_skip_disabled_entries() {
        let entries = vec![
            make_entry("Tokyo", "Japan", false),
            make_entry("Kyoto", "Japan", true),
        ];
        assert_eq!(
            required_pairs(&entries),
            vec![("Kyoto".to_string(), "Japan".to_string())]
        );
    }

    #[test]
    fn test_resolve_joins_cache_by_key() {
        let entries = vec![make_entry("Paris", "France", true)];
        let cache = cache_with("Paris, France", 48.85, 2.35, "FR");

        let resolved = resolve_entries(&entries, &cache);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].lat, 48.85);
        assert_eq!(resolved[0].lng, 2.35);
        assert_eq!(resolved[0].country_code, "FR");
    }

    #[test]
    fn test_resolve_missing_key_gets_sentinel() {
        let entries = vec![make_entry("Atlantis", "Nowhere", true)];
        let resolved = resolve_entries(&entries, &GeocodeCache::default());

        assert_eq!(resolved.len(), 1, "a gap must not drop the entry");
        assert_eq!(resolved[0].lat, 0.0);
        assert_eq!(resolved[0].lng, 0.0);
        assert_eq!(resolved[0].country_code, UNKNOWN_COUNTRY_CODE);
    }

    #[test]
    fn test_resolve_skips_disabled_entries() {
        let entries = vec![
            make_entry("Paris", "France", true),
            make_entry("Tokyo", "Japan", false),
        ];
        let cache = cache_with("Paris, France", 48.85, 2.35, "FR");
        let resolved = resolve_entries(&entries, &cache);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].entry.place, "Paris");
    }

    #[test]
    fn test_unique_countries_sorted_and_deduplicated() {
        let entries = vec![
            make_entry("Stockholm", "Sweden", true),
            make_entry("Dubai", "UAE", true),
            make_entry("Gothenburg", "Sweden", true),
        ];
        let resolved = resolve_entries(&entries, &GeocodeCache::default());
        assert_eq!(unique_countries(&resolved), vec!["Sweden", "UAE"]);
        assert_eq!(
            unique_places(&resolved),
            vec!["Dubai", "Gothenburg", "Stockholm"]
        );
    }

    #[test]
    fn test_flag_emoji() {
        assert_eq!(flag_emoji("FR"), "\u{1F1EB}\u{1F1F7}");
        assert_eq!(flag_emoji("se"), "\u{1F1F8}\u{1F1EA}", "lowercase codes work");
        assert_eq!(flag_emoji("??"), "\u{1F3F3}\u{FE0F}");
        assert_eq!(flag_emoji("1!"), "\u{1F3F3}\u{FE0F}", "non-alpha falls back");
    }
}
