use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Nominatim's public instance; override for a self-hosted one.
const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Builder configuration loaded from environment variables.
/// Every variable has a default suitable for running from the repo root.
#[derive(Debug, Clone)]
pub struct Config {
    pub travel_path: PathBuf,
    pub cache_path: PathBuf,
    pub geocoder_url: String,
    /// Identifying client label sent as the User-Agent; the public
    /// geocoding service requires one.
    pub user_agent: String,
    /// Pause between network calls (the service budgets ~1 req/sec).
    pub request_delay: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let delay_ms: u64 = env_or("FOLIO_REQUEST_DELAY_MS", "1100")
            .parse()
            .context("FOLIO_REQUEST_DELAY_MS must be a number of milliseconds")?;

        Ok(Config {
            travel_path: env_or("FOLIO_TRAVEL_PATH", "data/travel.json").into(),
            cache_path: env_or("FOLIO_CACHE_PATH", "data/geocode-cache.json").into(),
            geocoder_url: env_or("FOLIO_GEOCODER_URL", DEFAULT_GEOCODER_URL),
            user_agent: env_or(
                "FOLIO_USER_AGENT",
                concat!("folio-geocoder/", env!("CARGO_PKG_VERSION")),
            ),
            request_delay: Duration::from_millis(delay_ms),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
