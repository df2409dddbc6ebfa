//! Interactive menu shell layered over [`crate::runtime::session::Session`].

/// Menu entries and choice parsing.
pub mod menu;
/// Text rendering of query results and outcomes.
pub mod render;
/// Prompt loop over any reader/writer pair.
pub mod repl;

pub use menu::MenuChoice;
pub use repl::Shell;
