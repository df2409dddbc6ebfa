//! Solved counters grouped by topic and by solve date.
//!
//! Both maps only hold keys with a positive count. The orchestration layer is
//! the only caller and always adjusts the topic and date counters together
//! through [`SolvedAggregates::record_solved`] and
//! [`SolvedAggregates::retract_solved`].

use hashbrown::HashMap;

type Counter = HashMap<String, u32>;

/// Derived solved counts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SolvedAggregates {
    by_topic: Counter,
    by_date: Counter,
}

impl SolvedAggregates {
    /// Empty counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more solved question under `topic` and `date`.
    pub fn record_solved(&mut self, topic: &str, date: &str) {
        self.increment_topic(topic);
        self.increment_date(date);
    }

    /// Removes one solved question from `topic` and `date`.
    ///
    /// # Panics
    ///
    /// Panics if either counter is already zero; that means a transition was
    /// applied to the catalog without being mirrored here.
    pub fn retract_solved(&mut self, topic: &str, date: &str) {
        self.decrement_topic(topic);
        self.decrement_date(date);
    }

    /// Increments the solved count for `topic`.
    pub fn increment_topic(&mut self, topic: &str) {
        increment(&mut self.by_topic, topic);
    }

    /// Decrements the solved count for `topic`.
    pub fn decrement_topic(&mut self, topic: &str) {
        decrement(&mut self.by_topic, topic, "topic");
    }

    /// Increments the solved count for `date`.
    pub fn increment_date(&mut self, date: &str) {
        increment(&mut self.by_date, date);
    }

    /// Decrements the solved count for `date`.
    pub fn decrement_date(&mut self, date: &str) {
        decrement(&mut self.by_date, date, "date");
    }

    /// Current count for `topic` (zero when unknown).
    pub fn topic_count(&self, topic: &str) -> u32 {
        self.by_topic.get(topic).copied().unwrap_or(0)
    }

    /// Current count for `date` (zero when unknown).
    pub fn date_count(&self, date: &str) -> u32 {
        self.by_date.get(date).copied().unwrap_or(0)
    }

    /// Snapshot of topic counts ordered lexicographically by topic.
    pub fn all_by_topic(&self) -> Vec<(String, u32)> {
        sorted(&self.by_topic)
    }

    /// Snapshot of date counts ordered lexicographically by date string.
    pub fn all_by_date(&self) -> Vec<(String, u32)> {
        sorted(&self.by_date)
    }
}

fn increment(counter: &mut Counter, key: &str) {
    *counter.entry_ref(key).or_insert(0) += 1;
}

fn decrement(counter: &mut Counter, key: &str, what: &str) {
    let count = counter.get_mut(key);
    assert!(
        count.as_ref().is_some_and(|c| **c > 0),
        "solved count by {what} for {key:?} would go below zero"
    );
    if let Some(count) = count {
        *count -= 1;
        if *count == 0 {
            counter.remove(key);
        }
    }
}

fn sorted(counter: &Counter) -> Vec<(String, u32)> {
    let mut out: Vec<(String, u32)> = counter.iter().map(|(k, v)| (k.clone(), *v)).collect();
    out.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    out
}
