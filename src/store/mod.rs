pub mod history;

use crate::domain::{BatchKind, HistoryAction, Task, TaskDraft, TaskFilter};
use history::History;
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use uuid::Uuid;

/// Rejected preconditions and caller bugs, reported distinctly from the
/// silent no-ops (unknown id, empty text) so the UI can explain them
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("task is already the focus task")]
    AlreadyFocused,
    #[error("reordered list does not contain the same task ids")]
    OrderMismatch,
}

/// The ordered task collection, the single focus slot, the batch
/// selection, and the bounded undo history.
///
/// A task lives in exactly one of the ordered list or the focus slot.
/// Every mutating command records a pre-mutation snapshot, so the last
/// ten commands can be undone.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    focus: Option<Task>,
    history: History,
    selection: HashSet<Uuid>,
}

impl TaskStore {
    /// Create a store from an initial task list (supplied by the
    /// persistence collaborator, possibly empty)
    pub fn new(initial_tasks: Vec<Task>) -> Self {
        Self {
            tasks: initial_tasks,
            focus: None,
            history: History::new(),
            selection: HashSet::new(),
        }
    }

    // --- queries ---

    /// The ordered task list (excludes the focus task)
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks matching a filter, in list order
    pub fn filtered_tasks(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| match filter {
                TaskFilter::All => true,
                TaskFilter::Active => !t.completed,
                TaskFilter::Completed => t.completed,
            })
            .collect()
    }

    /// The promoted task, if any
    pub fn focus_task(&self) -> Option<&Task> {
        self.focus.as_ref()
    }

    pub fn focus_task_id(&self) -> Option<Uuid> {
        self.focus.as_ref().map(|t| t.id)
    }

    /// First incomplete task in the ordered list. Used by the timer-start
    /// caller to pick a focus task when none is set.
    pub fn topmost_incomplete_task(&self) -> Option<&Task> {
        self.tasks.iter().find(|t| !t.completed)
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The action the next undo would revert, if any
    pub fn pending_undo(&self) -> Option<HistoryAction> {
        self.history.last_action()
    }

    // --- commands ---

    /// Add a task from bare text at the front of the list. Returns the
    /// new id, or None (no-op) when the trimmed text is empty.
    pub fn add_task(&mut self, text: &str) -> Option<Uuid> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.snapshot(HistoryAction::TaskAdd);
        let task = Task::new(trimmed.to_string());
        let id = task.id;
        self.tasks.insert(0, task);
        Some(id)
    }

    /// Add a task with metadata (tags, due date, priority). Same front
    /// insertion and empty-text rejection as `add_task`.
    pub fn add_task_with_metadata(&mut self, mut draft: TaskDraft) -> Option<Uuid> {
        draft.text = draft.text.trim().to_string();
        if draft.text.is_empty() {
            return None;
        }
        self.snapshot(HistoryAction::TaskAdd);
        let task = Task::from_draft(draft);
        let id = task.id;
        self.tasks.insert(0, task);
        Some(id)
    }

    /// Flip a task's completion. Completing the focus task demotes it back
    /// into the list and leaves the focus slot empty; no replacement is
    /// chosen here. Unknown id is a no-op; returns whether anything changed.
    pub fn toggle_task_completion(&mut self, id: Uuid) -> bool {
        if self.focus_task_id() == Some(id) {
            self.snapshot(HistoryAction::TaskCompletion);
            // checked above
            if let Some(mut task) = self.focus.take() {
                task.toggle_completion();
                if task.completed {
                    self.demote_to_list(task);
                } else {
                    self.focus = Some(task);
                }
            }
            return true;
        }

        match self.tasks.iter().position(|t| t.id == id) {
            Some(pos) => {
                self.snapshot(HistoryAction::TaskCompletion);
                self.tasks[pos].toggle_completion();
                true
            }
            None => false,
        }
    }

    /// Delete a task from wherever it lives. Deleting the focus task
    /// promotes the first incomplete list task into the emptied slot.
    /// Unknown id is a no-op; returns whether anything changed.
    pub fn delete_task(&mut self, id: Uuid) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.snapshot(HistoryAction::TaskDelete);
        self.delete_in_place(id);
        self.selection.remove(&id);
        true
    }

    /// Promote a task out of the list into the focus slot. A previously
    /// focused task returns to the front of the list. Ok(false) means the
    /// id was unknown (no-op); Err means the task is already focused.
    pub fn set_task_as_focus(&mut self, id: Uuid) -> Result<bool, StoreError> {
        if self.focus_task_id() == Some(id) {
            return Err(StoreError::AlreadyFocused);
        }
        let Some(pos) = self.tasks.iter().position(|t| t.id == id) else {
            return Ok(false);
        };
        self.snapshot(HistoryAction::FocusChange);
        let target = self.tasks.remove(pos);
        if let Some(prev) = self.focus.take() {
            // Duplicate-safe: update an existing entry with the same id
            // instead of inserting a second one
            if let Some(existing) = self.tasks.iter_mut().find(|t| t.id == prev.id) {
                *existing = prev;
            } else {
                self.tasks.insert(0, prev);
            }
        }
        self.focus = Some(target);
        Ok(true)
    }

    /// Replace the list order with a caller-supplied permutation of ids
    /// (from the drag-and-drop collaborator). An order whose id set differs
    /// from the current list is a caller bug: rejected, state unchanged.
    pub fn reorder_tasks(&mut self, order: &[Uuid]) -> Result<(), StoreError> {
        let new_ids: HashSet<Uuid> = order.iter().copied().collect();
        let current_ids: HashSet<Uuid> = self.tasks.iter().map(|t| t.id).collect();
        if order.len() != self.tasks.len() || new_ids != current_ids {
            return Err(StoreError::OrderMismatch);
        }
        self.snapshot(HistoryAction::TaskReorder);
        let mut by_id: HashMap<Uuid, Task> =
            self.tasks.drain(..).map(|t| (t.id, t)).collect();
        self.tasks = order.iter().filter_map(|id| by_id.remove(id)).collect();
        Ok(())
    }

    /// Apply a complete/delete action to every listed task as one logical
    /// operation: a single history entry covers the whole batch, so one
    /// undo reverses all of it. Returns how many tasks were affected.
    pub fn batch_action(&mut self, kind: BatchKind, ids: &[Uuid]) -> usize {
        if !ids.iter().any(|id| self.contains(*id)) {
            return 0;
        }
        self.snapshot(HistoryAction::BatchAction);
        let mut affected = 0;
        for &id in ids {
            let applied = match kind {
                BatchKind::Complete => self.complete_in_place(id),
                BatchKind::Delete => self.delete_in_place(id),
            };
            if applied {
                affected += 1;
                self.selection.remove(&id);
            }
        }
        affected
    }

    /// Revert the most recent mutating command, restoring tasks and focus
    /// slot verbatim from the snapshot. Returns the reverted action, or
    /// None when there is nothing to undo. Undo itself is not undoable.
    pub fn undo_last_action(&mut self) -> Option<HistoryAction> {
        let snapshot = self.history.pop()?;
        self.tasks = snapshot.tasks;
        self.focus = snapshot.focus;
        Some(snapshot.action)
    }

    // --- selection (UI-local, never captured in history) ---

    /// Toggle a list task in or out of the batch selection. Returns the
    /// new selected state; unknown ids are ignored and report false.
    pub fn toggle_selection(&mut self, id: Uuid) -> bool {
        if !self.contains(id) {
            return false;
        }
        if self.selection.remove(&id) {
            false
        } else {
            self.selection.insert(id);
            true
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_selected(&self, id: Uuid) -> bool {
        self.selection.contains(&id)
    }

    /// Selected ids in list order (focus task last, if selected)
    pub fn selected_ids(&self) -> Vec<Uuid> {
        let mut ids: Vec<Uuid> = self
            .tasks
            .iter()
            .map(|t| t.id)
            .filter(|id| self.selection.contains(id))
            .collect();
        if let Some(id) = self.focus_task_id() {
            if self.selection.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    /// Run a batch action over the current selection
    pub fn batch_selected(&mut self, kind: BatchKind) -> usize {
        let ids = self.selected_ids();
        self.batch_action(kind, &ids)
    }

    // --- internals ---

    fn contains(&self, id: Uuid) -> bool {
        self.focus_task_id() == Some(id) || self.tasks.iter().any(|t| t.id == id)
    }

    fn snapshot(&mut self, action: HistoryAction) {
        self.history.push(self.tasks.clone(), self.focus.clone(), action);
    }

    /// Return a demoted (completed) focus task to the list, replacing an
    /// existing entry with the same id rather than duplicating it
    fn demote_to_list(&mut self, task: Task) {
        if let Some(existing) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *existing = task;
        } else {
            self.tasks.push(task);
        }
    }

    /// Deletion without its own snapshot; shared by `delete_task` and the
    /// batch path so both behave identically per task
    fn delete_in_place(&mut self, id: Uuid) -> bool {
        if self.focus_task_id() == Some(id) {
            self.focus = None;
            self.refill_focus();
            return true;
        }
        match self.tasks.iter().position(|t| t.id == id) {
            Some(pos) => {
                self.tasks.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Completion without its own snapshot; shared by the batch path.
    /// Unlike toggle, batch completion never un-completes a task.
    fn complete_in_place(&mut self, id: Uuid) -> bool {
        if self.focus_task_id() == Some(id) {
            if let Some(mut task) = self.focus.take() {
                task.mark_completed();
                self.demote_to_list(task);
            }
            return true;
        }
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.mark_completed();
                true
            }
            None => false,
        }
    }

    /// Promote the first incomplete list task after the focus slot was
    /// emptied by a deletion. Completion deliberately does not do this.
    fn refill_focus(&mut self) {
        if let Some(pos) = self.tasks.iter().position(|t| !t.completed) {
            let task = self.tasks.remove(pos);
            self.focus = Some(task);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store_with(texts: &[&str]) -> TaskStore {
        // add_task inserts at the front, so add in reverse to get the
        // given display order
        let mut store = TaskStore::new(Vec::new());
        for text in texts.iter().rev() {
            store.add_task(text);
        }
        store
    }

    fn ids_in_order(store: &TaskStore) -> Vec<Uuid> {
        store.tasks().iter().map(|t| t.id).collect()
    }

    /// The focus task must never also appear in the ordered list
    fn assert_focus_disjoint(store: &TaskStore) {
        if let Some(id) = store.focus_task_id() {
            assert!(
                !store.tasks().iter().any(|t| t.id == id),
                "focus task duplicated into the list"
            );
        }
    }

    #[test]
    fn test_add_task_front_insertion() {
        let mut store = TaskStore::new(Vec::new());
        store.add_task("first");
        store.add_task("second");
        assert_eq!(store.tasks()[0].text, "second");
        assert_eq!(store.tasks()[1].text, "first");
    }

    #[test]
    fn test_add_task_rejects_blank_text() {
        let mut store = TaskStore::new(Vec::new());
        assert_eq!(store.add_task(""), None);
        assert_eq!(store.add_task("   "), None);
        assert!(store.tasks().is_empty());
        assert!(!store.can_undo());
    }

    #[test]
    fn test_add_task_trims_text() {
        let mut store = TaskStore::new(Vec::new());
        let id = store.add_task("  padded  ").unwrap();
        assert_eq!(store.tasks()[0].id, id);
        assert_eq!(store.tasks()[0].text, "padded");
    }

    #[test]
    fn test_add_task_with_metadata() {
        let mut store = TaskStore::new(Vec::new());
        let id = store
            .add_task_with_metadata(TaskDraft {
                text: "Plan sprint".to_string(),
                tags: vec!["work".to_string()],
                due_date: None,
                priority: Some(crate::domain::Priority::Medium),
            })
            .unwrap();
        assert_eq!(store.tasks()[0].id, id);
        assert_eq!(store.tasks()[0].tags, vec!["work"]);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut store = store_with(&["a"]);
        assert!(!store.toggle_task_completion(Uuid::new_v4()));
        assert_eq!(store.history_len(), 1); // only the add
    }

    #[test]
    fn test_toggle_list_task() {
        let mut store = store_with(&["a"]);
        let id = store.tasks()[0].id;
        assert!(store.toggle_task_completion(id));
        assert!(store.tasks()[0].completed);
        assert!(store.tasks()[0].completed_at.is_some());
        assert!(store.toggle_task_completion(id));
        assert!(!store.tasks()[0].completed);
        assert!(store.tasks()[0].completed_at.is_none());
    }

    #[test]
    fn test_focus_then_complete_scenario() {
        // Add "Write report", focus it, complete it: list empties into
        // focus and back, with no replacement focus chosen
        let mut store = TaskStore::new(Vec::new());
        let id = store.add_task("Write report").unwrap();

        assert_eq!(store.set_task_as_focus(id), Ok(true));
        assert!(store.tasks().is_empty());
        assert_eq!(store.focus_task().unwrap().text, "Write report");
        assert_focus_disjoint(&store);

        assert!(store.toggle_task_completion(id));
        assert_eq!(store.focus_task_id(), None);
        assert_eq!(store.tasks().len(), 1);
        assert!(store.tasks()[0].completed);
        assert_eq!(store.tasks()[0].text, "Write report");
    }

    #[test]
    fn test_completing_focus_does_not_refill() {
        let mut store = store_with(&["a", "b"]);
        let a = store.tasks()[0].id;
        store.set_task_as_focus(a).unwrap();
        store.toggle_task_completion(a);
        // "b" stays in the list; the slot is left for the user to fill
        assert_eq!(store.focus_task_id(), None);
        assert_eq!(store.tasks().len(), 2);
    }

    #[test]
    fn test_delete_focus_refills_with_first_incomplete() {
        let mut store = store_with(&["a", "b", "c"]);
        let a = store.tasks()[0].id;
        let b = store.tasks()[1].id;
        let c = store.tasks()[2].id;
        store.toggle_task_completion(b);
        store.set_task_as_focus(a).unwrap();

        assert!(store.delete_task(a));
        // "b" is completed, so "c" is promoted
        assert_eq!(store.focus_task_id(), Some(c));
        assert_eq!(ids_in_order(&store), vec![b]);
        assert_focus_disjoint(&store);
    }

    #[test]
    fn test_delete_focus_with_no_incomplete_leaves_slot_empty() {
        let mut store = store_with(&["a", "b"]);
        let a = store.tasks()[0].id;
        let b = store.tasks()[1].id;
        store.toggle_task_completion(b);
        store.set_task_as_focus(a).unwrap();
        store.delete_task(a);
        assert_eq!(store.focus_task_id(), None);
        assert_eq!(ids_in_order(&store), vec![b]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = store_with(&["a"]);
        assert!(!store.delete_task(Uuid::new_v4()));
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn test_set_focus_already_focused_is_rejected() {
        let mut store = store_with(&["a"]);
        let a = store.tasks()[0].id;
        store.set_task_as_focus(a).unwrap();
        assert_eq!(store.set_task_as_focus(a), Err(StoreError::AlreadyFocused));
        // Rejection pushes no snapshot
        assert_eq!(store.pending_undo(), Some(HistoryAction::FocusChange));
    }

    #[test]
    fn test_set_focus_unknown_id_is_noop() {
        let mut store = store_with(&["a"]);
        assert_eq!(store.set_task_as_focus(Uuid::new_v4()), Ok(false));
        assert_eq!(store.focus_task_id(), None);
    }

    #[test]
    fn test_focus_swap_returns_previous_to_front() {
        let mut store = store_with(&["a", "b", "c"]);
        let a = store.tasks()[0].id;
        let c = store.tasks()[2].id;

        store.set_task_as_focus(a).unwrap();
        store.set_task_as_focus(c).unwrap();

        assert_eq!(store.focus_task_id(), Some(c));
        // "a" comes back at the front
        assert_eq!(store.tasks()[0].id, a);
        assert_focus_disjoint(&store);
    }

    #[test]
    fn test_reorder_tasks() {
        let mut store = store_with(&["a", "b", "c"]);
        let mut order = ids_in_order(&store);
        order.reverse();
        assert_eq!(store.reorder_tasks(&order), Ok(()));
        assert_eq!(ids_in_order(&store), order);
        assert_eq!(store.tasks()[0].text, "c");
    }

    #[test]
    fn test_reorder_rejects_mismatched_id_set() {
        let mut store = store_with(&["a", "b"]);
        let before = ids_in_order(&store);

        // Wrong set
        assert_eq!(
            store.reorder_tasks(&[before[0], Uuid::new_v4()]),
            Err(StoreError::OrderMismatch)
        );
        // Missing entry
        assert_eq!(
            store.reorder_tasks(&before[..1]),
            Err(StoreError::OrderMismatch)
        );
        // Duplicated entry
        assert_eq!(
            store.reorder_tasks(&[before[0], before[0]]),
            Err(StoreError::OrderMismatch)
        );
        // State untouched, no snapshot pushed
        assert_eq!(ids_in_order(&store), before);
        assert_eq!(store.pending_undo(), Some(HistoryAction::TaskAdd));
    }

    #[test]
    fn test_batch_complete() {
        let mut store = store_with(&["a", "b", "c"]);
        let ids = ids_in_order(&store);
        let affected = store.batch_action(BatchKind::Complete, &ids[..2]);
        assert_eq!(affected, 2);
        assert!(store.tasks()[0].completed);
        assert!(store.tasks()[1].completed);
        assert!(!store.tasks()[2].completed);
    }

    #[test]
    fn test_batch_complete_includes_focus_task() {
        let mut store = store_with(&["a", "b"]);
        let a = store.tasks()[0].id;
        let b = store.tasks()[1].id;
        store.set_task_as_focus(a).unwrap();

        let affected = store.batch_action(BatchKind::Complete, &[a, b]);
        assert_eq!(affected, 2);
        // Focus task demoted back to the list, completed
        assert_eq!(store.focus_task_id(), None);
        assert_eq!(store.tasks().len(), 2);
        assert!(store.tasks().iter().all(|t| t.completed));
    }

    #[test]
    fn test_batch_delete_undo_restores_all() {
        let mut store = store_with(&["a", "b", "c", "d", "e"]);
        let ids = ids_in_order(&store);
        let before = store.tasks().to_vec();

        let affected = store.batch_action(BatchKind::Delete, &[ids[1], ids[3]]);
        assert_eq!(affected, 2);
        assert_eq!(store.tasks().len(), 3);

        // One history entry covers the batch
        assert_eq!(store.undo_last_action(), Some(HistoryAction::BatchAction));
        assert_eq!(store.tasks(), &before[..]);
    }

    #[test]
    fn test_batch_delete_of_focus_applies_refill() {
        let mut store = store_with(&["a", "b", "c"]);
        let a = store.tasks()[0].id;
        let b = store.tasks()[1].id;
        let c = store.tasks()[2].id;
        store.set_task_as_focus(a).unwrap();

        store.batch_action(BatchKind::Delete, &[a, b]);
        // Deleting the focus task promoted "b" (first incomplete), which
        // the same batch then deleted; that refill promoted "c"
        assert_eq!(store.focus_task_id(), Some(c));
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_batch_with_no_known_ids_is_noop() {
        let mut store = store_with(&["a"]);
        let affected = store.batch_action(BatchKind::Delete, &[Uuid::new_v4()]);
        assert_eq!(affected, 0);
        assert_eq!(store.history_len(), 1); // only the add
    }

    #[test]
    fn test_undo_restores_exact_state() {
        let mut store = store_with(&["a", "b"]);
        let before = store.tasks().to_vec();
        let a = store.tasks()[0].id;

        store.set_task_as_focus(a).unwrap();
        assert_eq!(store.undo_last_action(), Some(HistoryAction::FocusChange));
        assert_eq!(store.tasks(), &before[..]);
        assert_eq!(store.focus_task_id(), None);
    }

    #[test]
    fn test_undo_when_empty_reports_nothing() {
        let mut store = TaskStore::new(Vec::new());
        assert_eq!(store.undo_last_action(), None);

        store.add_task("a");
        assert!(store.undo_last_action().is_some());
        // Drained: second undo is a no-op
        assert_eq!(store.undo_last_action(), None);
    }

    #[test]
    fn test_history_bounded_at_ten() {
        let mut store = TaskStore::new(Vec::new());
        for i in 0..15 {
            store.add_task(&format!("task {i}"));
        }
        assert_eq!(store.history_len(), 10);

        let mut undone = 0;
        while store.undo_last_action().is_some() {
            undone += 1;
        }
        assert_eq!(undone, 10);
        // The five oldest adds are no longer reversible
        assert_eq!(store.tasks().len(), 5);
    }

    #[test]
    fn test_focus_never_duplicated_across_command_sequences() {
        let mut store = TaskStore::new(Vec::new());
        let a = store.add_task("a").unwrap();
        let b = store.add_task("b").unwrap();
        assert_focus_disjoint(&store);

        store.set_task_as_focus(a).unwrap();
        assert_focus_disjoint(&store);
        store.set_task_as_focus(b).unwrap();
        assert_focus_disjoint(&store);
        store.toggle_task_completion(b);
        assert_focus_disjoint(&store);
        store.set_task_as_focus(a).unwrap();
        assert_focus_disjoint(&store);
        store.delete_task(a);
        assert_focus_disjoint(&store);
        store.undo_last_action();
        assert_focus_disjoint(&store);
    }

    #[test]
    fn test_selection_round_trip() {
        let mut store = store_with(&["a", "b"]);
        let a = store.tasks()[0].id;
        let b = store.tasks()[1].id;

        assert!(store.toggle_selection(a));
        assert!(store.toggle_selection(b));
        assert!(store.is_selected(a));
        assert_eq!(store.selected_ids(), vec![a, b]);

        assert!(!store.toggle_selection(a));
        assert!(!store.is_selected(a));

        store.clear_selection();
        assert!(store.selected_ids().is_empty());
    }

    #[test]
    fn test_selection_ignores_unknown_ids() {
        let mut store = store_with(&["a"]);
        assert!(!store.toggle_selection(Uuid::new_v4()));
        assert!(store.selected_ids().is_empty());
    }

    #[test]
    fn test_selection_pruned_on_delete() {
        let mut store = store_with(&["a", "b"]);
        let a = store.tasks()[0].id;
        store.toggle_selection(a);
        store.delete_task(a);
        assert!(!store.is_selected(a));
    }

    #[test]
    fn test_batch_selected() {
        let mut store = store_with(&["a", "b", "c"]);
        let a = store.tasks()[0].id;
        let c = store.tasks()[2].id;
        store.toggle_selection(a);
        store.toggle_selection(c);

        assert_eq!(store.batch_selected(BatchKind::Complete), 2);
        assert!(store.tasks()[0].completed);
        assert!(!store.tasks()[1].completed);
        assert!(store.tasks()[2].completed);
        assert!(store.selected_ids().is_empty());
    }

    #[test]
    fn test_filtered_tasks() {
        let mut store = store_with(&["a", "b", "c"]);
        let b = store.tasks()[1].id;
        store.toggle_task_completion(b);

        assert_eq!(store.filtered_tasks(TaskFilter::All).len(), 3);
        assert_eq!(store.filtered_tasks(TaskFilter::Active).len(), 2);
        let completed = store.filtered_tasks(TaskFilter::Completed);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, b);
    }

    #[test]
    fn test_topmost_incomplete_task() {
        let mut store = store_with(&["a", "b"]);
        let a = store.tasks()[0].id;
        let b = store.tasks()[1].id;
        assert_eq!(store.topmost_incomplete_task().map(|t| t.id), Some(a));

        store.toggle_task_completion(a);
        assert_eq!(store.topmost_incomplete_task().map(|t| t.id), Some(b));

        store.toggle_task_completion(b);
        assert!(store.topmost_incomplete_task().is_none());
    }
}
