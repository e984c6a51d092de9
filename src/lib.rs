//! focusdeck - a focus session engine.
//!
//! Pairs an ordered task list (with a single promoted "focus" task and a
//! bounded undo history) with a dual work/break timer where break credit
//! is earned from elapsed work time. The engine is synchronous and does no
//! I/O of its own; a driver delivers commands and a one-second heartbeat
//! and reads state back after each.

pub mod domain;
pub mod notifications;
pub mod session;
pub mod store;
pub mod ticker;
pub mod timer;
pub mod views;

pub use domain::{BatchKind, HistoryAction, Priority, Task, TaskDraft, TaskFilter};
pub use session::{FocusSession, SessionRecord};
pub use store::{history::HISTORY_CAPACITY, StoreError, TaskStore};
pub use timer::{TimerConfig, TimerEngine, TimerError, TimerEvent};
