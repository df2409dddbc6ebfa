//! Session event payloads.

use crate::{
    op::Action,
    types::{QuestionId, SolvedDate},
};

/// Events produced by successful session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerEvent {
    /// A new question was added.
    Added {
        /// Assigned question id.
        id: QuestionId,
    },
    /// A question was marked solved.
    Solved {
        /// Solved question id.
        id: QuestionId,
        /// Date recorded for the solve.
        date: SolvedDate,
    },
    /// A question was deleted.
    Deleted {
        /// Deleted question id.
        id: QuestionId,
    },
    /// The most recent action was reversed.
    Undone {
        /// Reversed action.
        action: Action,
    },
    /// The catalog was written out.
    Saved {
        /// Number of rows written.
        rows: usize,
    },
}
