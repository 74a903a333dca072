//! Geocode Cache Builder — offline batch reconciliation between the travel
//! dataset's required (place, country) pairs and the persisted cache.
//!
//! Strictly sequential: the external service budgets ~1 request/second, so
//! requests are serialized with an explicit inter-request delay. Individual
//! lookup failures skip that pair and continue; only a failed cache write
//! aborts the run.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::cache::GeocodeCache;
use super::client::PlaceLookup;
use crate::errors::FolioError;

/// Knobs for one reconcile run.
#[derive(Debug, Clone)]
pub struct ReconcileOptions {
    /// Pause after every network call. Cache hits skip it.
    pub request_delay: Duration,
    /// Where the cache is persisted, incrementally and at the end.
    pub cache_path: PathBuf,
}

/// Outcome summary of a reconcile run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Entries newly fetched this run.
    pub fetched: usize,
    /// Pairs that produced no usable answer this run.
    pub failed: usize,
    /// Total entries in the cache after the run.
    pub total: usize,
}

/// Fills cache gaps for `pairs`, in order, one lookup per missing pair.
///
/// Already-cached pairs cost no network call and no delay. The cache is
/// persisted after each newly fetched entry (so an interrupted run keeps
/// its progress) and once more at the end; a run over a fully warm cache
/// performs zero lookups and rewrites an identical file.
pub async fn reconcile(
    cache: &mut GeocodeCache,
    pairs: &[(String, String)],
    lookup: &dyn PlaceLookup,
    options: &ReconcileOptions,
) -> Result<ReconcileReport, FolioError> {
    let mut fetched = 0;
    let mut failed = 0;

    for (place, country) in pairs {
        let key = format!("{place}, {country}");
        if cache.contains(&key) {
            debug!("Cache hit for \"{key}\"");
            continue;
        }

        info!("Geocoding \"{key}\"...");
        match lookup.lookup(place, country).await {
            Ok(Some(entry)) => {
                info!("\"{key}\" -> {}, {} ({})", entry.lat, entry.lng, entry.cc);
                cache.insert(key, entry);
                fetched += 1;
                cache.save(&options.cache_path)?;
            }
            Ok(None) => {
                // Already logged by the client; a gap is not fatal to the run
                failed += 1;
            }
            Err(e) => {
                warn!("Lookup failed for \"{key}\": {e}");
                failed += 1;
            }
        }

        tokio::time::sleep(options.request_delay).await;
    }

    cache.save(&options.cache_path)?;

    Ok(ReconcileReport {
        fetched,
        failed,
        total: cache.len(),
    })
}
