//! In-memory authoritative catalog, derived views, and undo orchestration.

/// Solved counters by topic and by date.
pub mod aggregates;
/// Topic index helpers.
pub mod indices;
/// Authoritative question table.
pub mod store;
/// Orchestration of store, views, undo log and tombstone.
pub mod tracker;
