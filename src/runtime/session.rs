use thiserror::Error;
use tracing::{info, warn};

use crate::{
    core::tracker::{Tracker, TrackerError},
    persist::{CatalogSink, PersistError},
    question::QuestionDraft,
    types::{QuestionId, SolvedDate},
};

use super::events::TrackerEvent;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Result of a mutating command. The mutation itself always stands; a failed
/// write-through is carried alongside as a warning.
#[derive(Debug)]
pub struct Completed {
    pub event: TrackerEvent,
    pub persist_error: Option<PersistError>,
}

pub struct Session {
    tracker: Tracker,
    sink: Option<Box<dyn CatalogSink>>,
}

impl Session {
    /// Session with an empty catalog. Nothing is written until the first
    /// mutation or explicit save.
    pub fn new(sink: Option<Box<dyn CatalogSink>>) -> Self {
        Self {
            tracker: Tracker::new(),
            sink,
        }
    }

    /// Session seeded from whatever `sink` currently holds.
    pub fn load(sink: Box<dyn CatalogSink>) -> Result<Self, SessionError> {
        let records = sink.load_catalog()?;
        let tracker = Tracker::from_records(records)?;
        info!(source = %sink.describe(), questions = tracker.len(), "session loaded");
        Ok(Self {
            tracker,
            sink: Some(sink),
        })
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn add_question(&mut self, draft: QuestionDraft) -> Completed {
        let id = self.tracker.add_question(draft);
        self.completed(TrackerEvent::Added { id })
    }

    pub fn mark_solved(&mut self, id: QuestionId, date: SolvedDate) -> Result<Completed, SessionError> {
        self.tracker.mark_solved(id, date.clone()).inspect_err(|err| {
            warn!(id, %err, "mark solved rejected");
        })?;
        Ok(self.completed(TrackerEvent::Solved { id, date }))
    }

    pub fn delete_question(&mut self, id: QuestionId) -> Result<Completed, SessionError> {
        self.tracker.delete_question(id).inspect_err(|err| {
            warn!(id, %err, "delete rejected");
        })?;
        Ok(self.completed(TrackerEvent::Deleted { id }))
    }

    pub fn undo_last_action(&mut self) -> Result<Completed, SessionError> {
        let action = self.tracker.undo_last_action()?;
        Ok(self.completed(TrackerEvent::Undone { action }))
    }

    /// Explicit save. Unlike write-through, a failure here is the error.
    pub fn save(&mut self) -> Result<TrackerEvent, SessionError> {
        let rows = self.persist()?;
        Ok(TrackerEvent::Saved { rows })
    }

    fn completed(&mut self, event: TrackerEvent) -> Completed {
        let persist_error = self.persist().err();
        if let Some(err) = &persist_error {
            warn!(%err, ?event, "write-through failed");
        }
        Completed {
            event,
            persist_error,
        }
    }

    fn persist(&mut self) -> Result<usize, PersistError> {
        match self.sink.as_mut() {
            Some(sink) => sink.write_catalog(&mut self.tracker.questions()),
            None => Ok(0),
        }
    }
}
