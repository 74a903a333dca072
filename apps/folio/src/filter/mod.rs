//! Content Filter Engine — derives filtered/sorted views over content
//! records for the project and experience list pages.
//!
//! Pure and synchronous: no I/O, no shared state, never mutates its input.
//! It runs on every UI interaction, so malformed criteria degrade to "no
//! filter for that dimension" instead of erroring.

use std::collections::BTreeSet;

use crate::models::content::ContentRecord;

// ────────────────────────────────────────────────────────────────────────────
// Criteria
// ────────────────────────────────────────────────────────────────────────────

/// Which kinds of record survive the kind filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum KindFilter {
    #[default]
    All,
    Only(String),
}

impl KindFilter {
    /// Parses a UI-supplied kind value. Empty and "all" (any case) mean no
    /// kind filtering.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            KindFilter::All
        } else {
            KindFilter::Only(trimmed.to_string())
        }
    }

    fn matches(&self, kind: &str) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(wanted) => wanted.eq_ignore_ascii_case(kind),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Featured records first, then date descending within each partition.
    Featured,
    /// Date descending, ignoring the featured flag.
    #[default]
    Newest,
}

impl SortMode {
    /// Parses a UI-supplied sort value; anything unrecognized falls back to
    /// the default.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("featured") {
            SortMode::Featured
        } else {
            SortMode::Newest
        }
    }
}

/// The set of active filter/sort options applied to a record list.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub kind: KindFilter,
    /// Required tags, AND semantics: a record must carry every one.
    pub tags: Vec<String>,
    /// Case-insensitive substring query; empty means no text filtering.
    pub search: String,
    pub sort: SortMode,
}

// ────────────────────────────────────────────────────────────────────────────
// Filtering
// ────────────────────────────────────────────────────────────────────────────

/// Applies `criteria` to `records` and returns a new, ordered sequence.
///
/// Filters apply in order (kind, then tags with AND semantics, then text
/// search with OR across fields) and are intersective: a record must
/// survive all three. Sorting is stable, so records with equal dates keep
/// their original relative order.
pub fn filter_records<R>(records: &[R], criteria: &FilterCriteria) -> Vec<R>
where
    R: ContentRecord + Clone,
{
    let mut result: Vec<R> = records
        .iter()
        .filter(|r| criteria.kind.matches(r.kind()))
        .filter(|r| criteria.tags.iter().all(|tag| has_tag(*r, tag)))
        .filter(|r| matches_search(*r, &criteria.search))
        .cloned()
        .collect();

    match criteria.sort {
        SortMode::Featured => result.sort_by(|a, b| {
            b.featured()
                .cmp(&a.featured())
                .then_with(|| b.sort_date().cmp(&a.sort_date()))
        }),
        SortMode::Newest => result.sort_by(|a, b| b.sort_date().cmp(&a.sort_date())),
    }

    result
}

/// Collects the universe of filterable tags: deduplicated and sorted
/// lexicographically, for UI population.
pub fn collect_tags<R: ContentRecord>(records: &[R]) -> Vec<String> {
    let set: BTreeSet<&String> = records.iter().flat_map(|r| r.tags()).collect();
    set.into_iter().cloned().collect()
}

fn has_tag<R: ContentRecord + ?Sized>(record: &R, tag: &str) -> bool {
    record.tags().iter().any(|t| t == tag)
}

fn matches_search<R: ContentRecord + ?Sized>(record: &R, search: &str) -> bool {
    let q = search.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    record
        .search_text()
        .iter()
        .any(|text| text.to_lowercase().contains(&q))
        || record.tags().iter().any(|t| t.to_lowercase().contains(&q))
        || record.stack().iter().any(|s| s.to_lowercase().contains(&q))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
