//! The persisted geocode cache: `"<place>, <country>"` → coordinates.
//!
//! The cache file is committed to version control so builds never need
//! network access. Keys are stored in a `BTreeMap`, so serialization is
//! always lexicographically sorted and diffs stay minimal and stable.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::FolioError;

/// Country code sentinel for places whose lookup produced no usable code,
/// and for unresolved entries at render time.
pub const UNKNOWN_COUNTRY_CODE: &str = "??";

/// Coordinates and ISO 3166-1 alpha-2 country code for one cached place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub lat: f64,
    pub lng: f64,
    pub cc: String,
}

/// Append-only key → coordinate store. Entries are created once per unique
/// place+country pair on first successful lookup and never auto-updated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeocodeCache {
    entries: BTreeMap<String, CacheEntry>,
}

impl GeocodeCache {
    /// Reads the cache from disk. A missing or unparseable file yields an
    /// empty cache; a run must never abort over a bad cache file.
    pub fn load(path: &Path) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No geocode cache at {}, starting empty", path.display());
                return Self::default();
            }
            Err(e) => {
                warn!("Failed to read geocode cache {}: {e}, starting empty", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(cache) => cache,
            Err(e) => {
                warn!("Geocode cache {} is unparseable: {e}, starting empty", path.display());
                Self::default()
            }
        }
    }

    /// Writes the full cache back to disk, key-sorted, pretty-printed, with
    /// a trailing newline. Failure here is the one fatal condition of a
    /// builder run.
    pub fn save(&self, path: &Path) -> Result<(), FolioError> {
        let mut json = serde_json::to_string_pretty(&self)
            .expect("geocode cache serialization cannot fail");
        json.push('\n');
        fs::write(path, json).map_err(|source| FolioError::CacheWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn get(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn insert(&mut self, key: String, entry: CacheEntry) {
        self.entries.insert(key, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
