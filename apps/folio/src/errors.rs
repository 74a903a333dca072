use std::path::PathBuf;

use thiserror::Error;

/// Application-level error type for content loading, travel data, and the
/// geocode cache. Per-lookup failures stay inside `geocode::client` as
/// `GeocodeError` and never surface here.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("invalid date stamp '{0}' (expected YYYY, YYYY-MM, or YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("{}: {reason}", path.display())]
    Frontmatter { path: PathBuf, reason: String },

    #[error("duplicate slug '{slug}' in {}", path.display())]
    DuplicateSlug { slug: String, path: PathBuf },

    #[error("failed to read travel data from {}: {reason}", path.display())]
    TravelData { path: PathBuf, reason: String },

    #[error("failed to write geocode cache to {}", path.display())]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
