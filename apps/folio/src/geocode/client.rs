//! Geocode lookup client — the single point of entry for all Nominatim
//! calls in folio.
//!
//! The service is free and rate-limited to ~1 request/second; pacing is the
//! builder's job, this module only performs single lookups. Every request
//! carries an identifying User-Agent, which Nominatim's usage policy
//! requires.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use super::cache::{CacheEntry, UNKNOWN_COUNTRY_CODE};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One ranked match from the search endpoint. Coordinates arrive as
/// strings; country code sits in the address details.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
    #[serde(default)]
    address: Option<SearchAddress>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchAddress {
    country_code: Option<String>,
}

/// Seam for the external lookup service, so the reconcile loop is testable
/// without network access.
///
/// `Ok(None)` means the service answered but had nothing usable for this
/// pair; `Err` means the request itself failed. The builder treats both as
/// recoverable for the single pair.
#[async_trait]
pub trait PlaceLookup: Send + Sync {
    async fn lookup(&self, place: &str, country: &str) -> Result<Option<CacheEntry>, GeocodeError>;
}

/// Client for a Nominatim-style search endpoint.
#[derive(Clone)]
pub struct GeocodeClient {
    client: Client,
    endpoint: String,
}

impl GeocodeClient {
    pub fn new(endpoint: String, user_agent: &str) -> Self {
        Self {
            client: Client::builder()
                .user_agent(user_agent)
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
        }
    }
}

#[async_trait]
impl PlaceLookup for GeocodeClient {
    async fn lookup(&self, place: &str, country: &str) -> Result<Option<CacheEntry>, GeocodeError> {
        let query = format!("{place}, {country}");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", query.as_str()),
                ("format", "json"),
                ("limit", "1"),
                ("addressdetails", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Geocoder returned HTTP {status} for \"{query}\"");
            return Ok(None);
        }

        let body = response.text().await?;
        let hits: Vec<SearchHit> = serde_json::from_str(&body)?;

        let Some(hit) = hits.into_iter().next() else {
            warn!("No results for \"{query}\"");
            return Ok(None);
        };

        match entry_from_hit(&hit) {
            Some(entry) => {
                debug!("Resolved \"{query}\" -> {}, {} ({})", entry.lat, entry.lng, entry.cc);
                Ok(Some(entry))
            }
            None => {
                warn!("Unusable coordinates in result for \"{query}\"");
                Ok(None)
            }
        }
    }
}

/// Extracts a cache entry from the best match: parsed coordinates plus the
/// uppercased country code, `??` when the address carries none.
fn entry_from_hit(hit: &SearchHit) -> Option<CacheEntry> {
    let lat: f64 = hit.lat.trim().parse().ok()?;
    let lng: f64 = hit.lon.trim().parse().ok()?;
    let cc = hit
        .address
        .as_ref()
        .and_then(|a| a.country_code.as_deref())
        .unwrap_or(UNKNOWN_COUNTRY_CODE)
        .to_uppercase();
    Some(CacheEntry { lat, lng, cc })
}
