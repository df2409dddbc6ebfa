use hashbrown::HashMap;

use crate::types::QuestionId;

pub type VecIndex<K> = HashMap<K, Vec<QuestionId>>;

/// Topic name to member ids, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct TopicIndex {
    by_topic: VecIndex<String>,
}

impl TopicIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, topic: &str, id: QuestionId) {
        self.by_topic.entry_ref(topic).or_default().push(id);
    }

    /// Removes `id` from `topic`, keeping the order of the rest. Unknown
    /// pairs are ignored.
    pub fn remove(&mut self, topic: &str, id: QuestionId) {
        let Some(ids) = self.by_topic.get_mut(topic) else {
            return;
        };
        if let Some(pos) = ids.iter().position(|x| *x == id) {
            ids.remove(pos);
        }
        if ids.is_empty() {
            self.by_topic.remove(topic);
        }
    }

    pub fn lookup(&self, topic: &str) -> &[QuestionId] {
        self.by_topic.get(topic).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.by_topic.keys().map(String::as_str)
    }
}
