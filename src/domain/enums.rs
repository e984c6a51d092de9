use serde::{Deserialize, Serialize};

/// Priority level for a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Parse priority from a tag like "high"
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Convert priority to its tag
    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Kind of mutation recorded in a history snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryAction {
    TaskAdd,
    TaskCompletion,
    TaskDelete,
    FocusChange,
    TaskReorder,
    BatchAction,
}

impl HistoryAction {
    /// Human-readable label, for undo feedback in the driver
    pub fn label(&self) -> &'static str {
        match self {
            Self::TaskAdd => "task-add",
            Self::TaskCompletion => "task-completion",
            Self::TaskDelete => "task-delete",
            Self::FocusChange => "focus-change",
            Self::TaskReorder => "task-reorder",
            Self::BatchAction => "batch-action",
        }
    }
}

/// Batch operation applied to a set of task ids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchKind {
    Complete,
    Delete,
}

/// Filter over the ordered task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}
