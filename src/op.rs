//! Reversible action model backing the undo log.

use serde::{Deserialize, Serialize};

use crate::types::QuestionId;

/// Most recent reversible mutation, recorded in the undo log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// A question was created.
    Add {
        /// Created question id.
        id: QuestionId,
    },
    /// A question was marked solved.
    Solve {
        /// Solved question id.
        id: QuestionId,
    },
    /// A question was deleted and tombstoned.
    Delete {
        /// Deleted question id.
        id: QuestionId,
    },
}

impl Action {
    /// Question affected by this action.
    pub fn id(&self) -> QuestionId {
        match self {
            Action::Add { id } | Action::Solve { id } | Action::Delete { id } => *id,
        }
    }

    /// Short lowercase name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Add { .. } => "add",
            Action::Solve { .. } => "solve",
            Action::Delete { .. } => "delete",
        }
    }
}
