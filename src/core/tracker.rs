use thiserror::Error;
use tracing::debug;

use crate::{
    core::{
        aggregates::SolvedAggregates,
        indices::TopicIndex,
        store::{RecordStore, StoreError},
    },
    op::Action,
    question::{Question, QuestionDraft},
    types::{QuestionId, SolvedDate},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("no question with id {0}")]
    NotFound(QuestionId),
    #[error("question {0} is already marked as solved")]
    AlreadySolved(QuestionId),
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("no questions match {query:?}")]
    NoMatch { query: String },
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for TrackerError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => Self::NotFound(id),
            StoreError::AlreadySolved(id) => Self::AlreadySolved(id),
            other => Self::Store(other),
        }
    }
}

/// One tracking session: the question table, its derived views, the undo
/// slot and the tombstone of the last deleted question.
///
/// Every mutation goes through the methods below so the topic index and the
/// solved counters never drift from the table.
#[derive(Debug, Default, Clone)]
pub struct Tracker {
    store: RecordStore,
    topics: TopicIndex,
    solved: SolvedAggregates,
    last_action: Option<Action>,
    tombstone: Option<Question>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a session from persisted records. The topic index and solved
    /// counters are recomputed; the undo log starts empty.
    pub fn from_records(records: impl IntoIterator<Item = Question>) -> Result<Self, TrackerError> {
        let store = RecordStore::from_records(records)?;
        let mut topics = TopicIndex::new();
        let mut solved = SolvedAggregates::new();
        for rec in store.iter() {
            topics.add(&rec.topic, rec.id);
            if rec.is_solved {
                solved.record_solved(&rec.topic, &rec.solved_date);
            }
        }
        Ok(Self {
            store,
            topics,
            solved,
            ..Self::default()
        })
    }

    pub fn add_question(&mut self, draft: QuestionDraft) -> QuestionId {
        let id = self.store.create(draft);
        if let Some(rec) = self.store.get(id) {
            self.topics.add(&rec.topic, id);
        }
        self.record(Action::Add { id });
        debug!(id, "question added");
        id
    }

    pub fn mark_solved(&mut self, id: QuestionId, date: SolvedDate) -> Result<(), TrackerError> {
        let rec = self.store.set_solved(id, date)?;
        self.solved.record_solved(&rec.topic, &rec.solved_date);
        debug!(id, date = %rec.solved_date, "question solved");
        self.record(Action::Solve { id });
        Ok(())
    }

    pub fn delete_question(&mut self, id: QuestionId) -> Result<(), TrackerError> {
        let rec = self.store.remove(id)?;
        self.topics.remove(&rec.topic, id);
        if rec.is_solved {
            self.solved.retract_solved(&rec.topic, &rec.solved_date);
        }
        self.record(Action::Delete { id });
        self.tombstone = Some(rec);
        debug!(id, "question deleted");
        Ok(())
    }

    /// Reverses the most recent add, solve or delete and returns it.
    pub fn undo_last_action(&mut self) -> Result<Action, TrackerError> {
        let action = self.last_action.take().ok_or(TrackerError::NothingToUndo)?;
        match action {
            Action::Add { id } => {
                let rec = self.store.remove(id)?;
                self.topics.remove(&rec.topic, id);
            }
            Action::Solve { id } => {
                let date = self.store.unset_solved(id)?;
                let topic = self
                    .store
                    .get(id)
                    .map(|rec| rec.topic.clone())
                    .ok_or(TrackerError::NotFound(id))?;
                self.solved.retract_solved(&topic, &date);
            }
            Action::Delete { id } => {
                let rec = match self.tombstone.take() {
                    Some(rec) if rec.id == id => rec,
                    other => {
                        self.tombstone = other;
                        return Err(TrackerError::NotFound(id));
                    }
                };
                let (topic, is_solved, date) = (rec.topic.clone(), rec.is_solved, rec.solved_date.clone());
                if let Err(err) = self.store.restore(rec.clone()) {
                    self.tombstone = Some(rec);
                    return Err(err.into());
                }
                self.topics.add(&topic, id);
                if is_solved {
                    self.solved.record_solved(&topic, &date);
                }
            }
        }
        debug!(id = action.id(), kind = action.kind(), "action undone");
        Ok(action)
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.store.get(id)
    }

    /// Questions filed under `topic`, in the order they joined it.
    pub fn search_by_topic(&self, topic: &str) -> Result<Vec<&Question>, TrackerError> {
        let found: Vec<&Question> = self
            .topics
            .lookup(topic)
            .iter()
            .filter_map(|id| self.store.get(*id))
            .collect();
        if found.is_empty() {
            return Err(TrackerError::NoMatch {
                query: topic.to_string(),
            });
        }
        Ok(found)
    }

    /// Solved questions whose solve date equals `date`, sorted by title.
    pub fn solved_on(&self, date: &str) -> Result<Vec<&Question>, TrackerError> {
        let mut found: Vec<&Question> = self
            .store
            .iter()
            .filter(|rec| rec.is_solved && rec.solved_date == date)
            .collect();
        if found.is_empty() {
            return Err(TrackerError::NoMatch {
                query: date.to_string(),
            });
        }
        found.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(found)
    }

    pub fn solved_by_topic(&self) -> Vec<(String, u32)> {
        self.solved.all_by_topic()
    }

    pub fn solved_by_date(&self) -> Vec<(String, u32)> {
        self.solved.all_by_date()
    }

    pub fn aggregates(&self) -> &SolvedAggregates {
        &self.solved
    }

    pub fn topic_ids(&self, topic: &str) -> &[QuestionId] {
        self.topics.lookup(topic)
    }

    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.topics.topics()
    }

    /// Live questions in ascending id order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.store.iter()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn last_action(&self) -> Option<Action> {
        self.last_action
    }

    pub fn tombstone(&self) -> Option<&Question> {
        self.tombstone.as_ref()
    }

    pub fn next_id(&self) -> QuestionId {
        self.store.next_id()
    }

    /// Replaces the single undo slot. A tombstone only stays reachable while
    /// its delete is the undoable action.
    fn record(&mut self, action: Action) {
        self.last_action = Some(action);
        self.tombstone = None;
    }
}
