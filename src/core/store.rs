use std::collections::BTreeMap;

use thiserror::Error;

use crate::{
    question::{Question, QuestionDraft},
    types::{QuestionId, SolvedDate},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no question with id {0}")]
    NotFound(QuestionId),
    #[error("question {0} is already solved")]
    AlreadySolved(QuestionId),
    #[error("question id {0} is already in use")]
    AlreadyExists(QuestionId),
}

/// Owned question table keyed by id. Iteration is in ascending id order.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: BTreeMap<QuestionId, Question>,
    next_id: QuestionId,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Rebuilds a table from already-assigned records. The next id continues
    /// past the highest one seen.
    pub fn from_records(records: impl IntoIterator<Item = Question>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for rec in records {
            store.restore(rec)?;
        }
        Ok(store)
    }

    pub fn create(&mut self, draft: QuestionDraft) -> QuestionId {
        let id = self.next_id;
        self.next_id += 1;
        self.records.insert(id, draft.into_question(id));
        id
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.records.get(&id)
    }

    pub fn set_solved(&mut self, id: QuestionId, date: SolvedDate) -> Result<&Question, StoreError> {
        let rec = self.records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        if rec.is_solved {
            return Err(StoreError::AlreadySolved(id));
        }
        rec.is_solved = true;
        rec.solved_date = date;
        Ok(&*rec)
    }

    /// Clears the solved flag and returns the date that was held.
    pub fn unset_solved(&mut self, id: QuestionId) -> Result<SolvedDate, StoreError> {
        let rec = self.records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        rec.is_solved = false;
        Ok(std::mem::take(&mut rec.solved_date))
    }

    pub fn remove(&mut self, id: QuestionId) -> Result<Question, StoreError> {
        self.records.remove(&id).ok_or(StoreError::NotFound(id))
    }

    pub fn restore(&mut self, rec: Question) -> Result<(), StoreError> {
        if self.records.contains_key(&rec.id) {
            return Err(StoreError::AlreadyExists(rec.id));
        }
        self.next_id = self.next_id.max(rec.id.saturating_add(1));
        self.records.insert(rec.id, rec);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn next_id(&self) -> QuestionId {
        self.next_id
    }
}
