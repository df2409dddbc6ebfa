//! Synchronous session layer: tracker plus write-through persistence.

/// Outcome events emitted by the session.
pub mod events;
/// Session owning the tracker and its catalog sink.
pub mod session;
