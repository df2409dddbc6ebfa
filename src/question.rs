//! Question record and insert payload.

use serde::{Deserialize, Serialize};

use crate::types::{QuestionId, SolvedDate};

/// Fully materialized, authoritative question record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable question identifier.
    pub id: QuestionId,
    /// Question title.
    pub title: String,
    /// Topic used for indexing and solved counts.
    pub topic: String,
    /// Difficulty label (Easy/Medium/Hard by convention, not enforced).
    pub difficulty: String,
    /// Platform the question came from.
    pub platform: String,
    /// Free-form notes.
    pub notes: String,
    /// True once the question was marked solved.
    pub is_solved: bool,
    /// Date of solving; empty while unsolved.
    pub solved_date: SolvedDate,
}

impl Question {
    /// `Yes`/`No` rendering of the solved flag, as persisted and displayed.
    pub fn solved_label(&self) -> &'static str {
        if self.is_solved { "Yes" } else { "No" }
    }
}

/// Insert payload used to create a new [`Question`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionDraft {
    /// Question title.
    pub title: String,
    /// Topic.
    pub topic: String,
    /// Difficulty label.
    pub difficulty: String,
    /// Platform.
    pub platform: String,
    /// Notes.
    pub notes: String,
}

impl QuestionDraft {
    pub(crate) fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            title: self.title,
            topic: self.topic,
            difficulty: self.difficulty,
            platform: self.platform,
            notes: self.notes,
            is_solved: false,
            solved_date: SolvedDate::new(),
        }
    }
}
