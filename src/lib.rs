//! Interview-preparation question tracker: an in-memory catalog with a topic
//! index, solved counters, single-step undo, and write-through CSV
//! persistence, driven by an interactive menu.
//!
//! # Examples
//!
//! In-memory usage with [`core::tracker::Tracker`]:
//! ```
//! use prep_tracker::{core::tracker::Tracker, question::QuestionDraft};
//!
//! let mut tracker = Tracker::new();
//! let id = tracker.add_question(QuestionDraft {
//!     title: "Two Sum".to_string(),
//!     topic: "Array".to_string(),
//!     difficulty: "Easy".to_string(),
//!     platform: "LeetCode".to_string(),
//!     notes: String::new(),
//! });
//! tracker.mark_solved(id, "15/03/2024".to_string()).expect("solve");
//! assert_eq!(tracker.solved_by_topic(), vec![("Array".to_string(), 1)]);
//!
//! tracker.undo_last_action().expect("undo");
//! assert!(tracker.solved_by_topic().is_empty());
//! ```
//!
//! Session usage with a CSV sink:
//! ```no_run
//! use prep_tracker::{
//!     persist::csv::CsvCatalogSink,
//!     question::QuestionDraft,
//!     runtime::session::Session,
//! };
//!
//! let mut session = Session::load(Box::new(CsvCatalogSink::new("tracker_data.csv"))).expect("load");
//! let done = session.add_question(QuestionDraft {
//!     title: "Valid Parentheses".to_string(),
//!     topic: "Stack".to_string(),
//!     ..QuestionDraft::default()
//! });
//! assert!(done.persist_error.is_none());
//! ```
/// Runtime configuration.
pub mod config;
/// Core in-memory store, derived views and undo orchestration.
pub mod core;
/// Tracing subscriber setup.
pub mod logging;
/// Reversible action model.
pub mod op;
/// Persistence abstraction and CSV implementation.
pub mod persist;
/// Question records and drafts.
pub mod question;
/// Synchronous session and its events.
pub mod runtime;
/// Interactive menu shell.
pub mod shell;
/// Shared primitive types.
pub mod types;
