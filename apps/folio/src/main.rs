//! `geocode` — one-shot builder that fills the geocode cache for every
//! place in the travel dataset, so the site never needs network access at
//! render time. Safe to re-run: warm pairs cost nothing.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio::config::Config;
use folio::geocode::builder::{reconcile, ReconcileOptions};
use folio::geocode::cache::GeocodeCache;
use folio::geocode::client::GeocodeClient;
use folio::travel::{load_travel_data, required_pairs};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting folio geocoder v{}", env!("CARGO_PKG_VERSION"));

    let entries = load_travel_data(&config.travel_path)?;
    let pairs = required_pairs(&entries);
    info!(
        "Found {} unique places in {}",
        pairs.len(),
        config.travel_path.display()
    );

    let cache_path = config.cache_path.clone();
    let mut cache = GeocodeCache::load(&cache_path);
    info!("Loaded {} cached entries", cache.len());

    let client = GeocodeClient::new(config.geocoder_url.clone(), &config.user_agent);

    let options = ReconcileOptions {
        request_delay: config.request_delay,
        cache_path,
    };
    let report = reconcile(&mut cache, &pairs, &client, &options).await?;

    if report.failed > 0 {
        info!("{} place(s) could not be resolved this run", report.failed);
    }
    info!(
        "Done. {} new lookups, {} total cached entries",
        report.fetched, report.total
    );
    info!("Cache saved to {}", options.cache_path.display());

    Ok(())
}
