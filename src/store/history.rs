use crate::domain::{HistoryAction, Task};
use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Maximum number of undoable actions retained
pub const HISTORY_CAPACITY: usize = 10;

/// A pre-mutation copy of the store, taken before each mutating command
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub focus: Option<Task>,
    pub action: HistoryAction,
    pub timestamp: DateTime<Local>,
}

/// Bounded ring of snapshots. Pushing past capacity evicts the oldest
/// entry, so the last `HISTORY_CAPACITY` actions stay reversible.
#[derive(Debug, Default)]
pub struct History {
    entries: VecDeque<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Record a snapshot, evicting the oldest entry if full
    pub fn push(&mut self, tasks: Vec<Task>, focus: Option<Task>, action: HistoryAction) {
        if self.entries.len() == HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(Snapshot {
            tasks,
            focus,
            action,
            timestamp: Local::now(),
        });
    }

    /// Take the most recent snapshot, or None if nothing is undoable
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop_back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The action that would be undone next, if any
    pub fn last_action(&self) -> Option<HistoryAction> {
        self.entries.back().map(|s| s.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn push_n(history: &mut History, n: usize) {
        for i in 0..n {
            history.push(
                vec![Task::new(format!("task {i}"))],
                None,
                HistoryAction::TaskAdd,
            );
        }
    }

    #[test]
    fn test_push_and_pop() {
        let mut history = History::new();
        assert!(history.is_empty());

        history.push(vec![Task::new("a".to_string())], None, HistoryAction::TaskAdd);
        assert_eq!(history.len(), 1);
        assert_eq!(history.last_action(), Some(HistoryAction::TaskAdd));

        let snap = history.pop().unwrap();
        assert_eq!(snap.tasks[0].text, "a");
        assert!(history.is_empty());
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = History::new();
        push_n(&mut history, 15);
        assert_eq!(history.len(), HISTORY_CAPACITY);

        // The oldest surviving entry is the 6th pushed (index 5)
        let mut texts = Vec::new();
        while let Some(snap) = history.pop() {
            texts.push(snap.tasks[0].text.clone());
        }
        assert_eq!(texts.len(), 10);
        assert_eq!(texts.first().unwrap(), "task 14");
        assert_eq!(texts.last().unwrap(), "task 5");
    }

    #[test]
    fn test_pop_order_is_lifo() {
        let mut history = History::new();
        history.push(Vec::new(), None, HistoryAction::TaskAdd);
        history.push(Vec::new(), None, HistoryAction::TaskDelete);

        assert_eq!(history.pop().unwrap().action, HistoryAction::TaskDelete);
        assert_eq!(history.pop().unwrap().action, HistoryAction::TaskAdd);
    }
}
