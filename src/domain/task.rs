use super::enums::Priority;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task in the ordered list or the focus slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique ID for all cross-references
    pub id: Uuid,
    /// Task text
    pub text: String,
    /// Whether the task is completed
    pub completed: bool,
    /// When the task was completed (present iff completed)
    pub completed_at: Option<DateTime<Local>>,
    /// When the task was created (never changes)
    pub created_at: DateTime<Local>,
    /// Tags for categorization
    pub tags: Vec<String>,
    /// Optional due date
    pub due_date: Option<NaiveDate>,
    /// Optional priority
    pub priority: Option<Priority>,
}

/// Fields for creating a task with metadata, supplied by the caller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskDraft {
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl Task {
    /// Create a task from bare text. The text should already be trimmed
    /// and non-empty; `TaskStore::add_task` enforces that.
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
            completed_at: None,
            created_at: Local::now(),
            tags: Vec::new(),
            due_date: None,
            priority: None,
        }
    }

    /// Create a task from a draft with metadata
    pub fn from_draft(draft: TaskDraft) -> Self {
        let mut task = Self::new(draft.text);
        task.tags = draft.tags;
        task.due_date = draft.due_date;
        task.priority = draft.priority;
        task
    }

    /// Mark as completed, stamping the completion time
    pub fn mark_completed(&mut self) {
        self.completed = true;
        self.completed_at = Some(Local::now());
    }

    /// Mark as not completed, clearing the completion time
    pub fn mark_incomplete(&mut self) {
        self.completed = false;
        self.completed_at = None;
    }

    /// Flip completion, keeping `completed_at` consistent
    pub fn toggle_completion(&mut self) {
        if self.completed {
            self.mark_incomplete();
        } else {
            self.mark_completed();
        }
    }
}
