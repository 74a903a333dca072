//! Offline geocoding: the persisted place → coordinate cache, the external
//! lookup client, and the batch reconciliation that fills cache gaps.
//!
//! The runtime site only ever reads the cache (`travel::resolve_entries`);
//! the network-facing pieces here run inside the one-shot `geocode` binary.

pub mod builder;
pub mod cache;
pub mod client;
