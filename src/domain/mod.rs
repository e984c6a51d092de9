pub mod enums;
pub mod task;

pub use enums::{BatchKind, HistoryAction, Priority, TaskFilter};
pub use task::{Task, TaskDraft};
