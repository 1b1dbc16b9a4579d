use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

/// FIFO queue of user-facing notices. Posting never blocks the session;
/// each notice stays pending until explicitly acknowledged.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    pending: VecDeque<Notice>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&mut self, level: Level, message: impl Into<String>) {
        self.pending.push_back(Notice {
            level,
            message: message.into(),
        });
    }

    /// Pops the oldest pending notice, or None when nothing is pending.
    pub fn acknowledge(&mut self) -> Option<Notice> {
        self.pending.pop_front()
    }

    pub fn snapshot(&self) -> Vec<Notice> {
        self.pending.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_are_acknowledged_oldest_first() {
        let mut q = NoticeQueue::new();
        q.post(Level::Success, "first");
        q.post(Level::Warning, "second");
        assert_eq!(q.len(), 2);
        assert_eq!(q.acknowledge().unwrap().message, "first");
        assert_eq!(q.acknowledge().unwrap().message, "second");
        assert!(q.is_empty());
    }

    #[test]
    fn acknowledging_an_empty_queue_is_a_noop() {
        let mut q = NoticeQueue::new();
        assert_eq!(q.acknowledge(), None);
    }

    #[test]
    fn snapshot_does_not_consume() {
        let mut q = NoticeQueue::new();
        q.post(Level::Info, "still here");
        assert_eq!(q.snapshot().len(), 1);
        assert_eq!(q.len(), 1);
    }
}
