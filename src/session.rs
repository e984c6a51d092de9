use crate::domain::Task;
use crate::notifications;
use crate::store::TaskStore;
use crate::timer::{TimerConfig, TimerEngine, TimerError, TimerEvent};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Totals for one ended work/break session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub work_seconds: u64,
    pub break_earned_seconds: u64,
    pub timestamp: DateTime<Local>,
}

/// The focus session engine: the task store and the timer pair, plus the
/// one piece of wiring between them. Starting the work timer with an empty
/// focus slot promotes the topmost incomplete task.
///
/// Everything is synchronous and single-owner: the UI event loop issues
/// one command at a time and reads state back after each.
pub struct FocusSession {
    pub store: TaskStore,
    pub timer: TimerEngine,
    sessions: Vec<SessionRecord>,
}

impl FocusSession {
    pub fn new(initial_tasks: Vec<Task>, config: TimerConfig) -> Self {
        Self {
            store: TaskStore::new(initial_tasks),
            timer: TimerEngine::new(config),
            sessions: Vec::new(),
        }
    }

    /// Start the work timer. On an actual idle-to-running transition with
    /// no focus task set, the topmost incomplete task is promoted.
    /// Returns whether the work timer transitioned.
    pub fn start_work(&mut self) -> bool {
        let started = self.timer.start_work();
        if started && self.store.focus_task().is_none() {
            if let Some(id) = self.store.topmost_incomplete_task().map(|t| t.id) {
                // Cannot be AlreadyFocused: the slot is empty
                let _ = self.store.set_task_as_focus(id);
            }
        }
        started
    }

    /// Start the break timer; fails when no break credit has been earned
    pub fn start_break(&mut self) -> Result<(), TimerError> {
        self.timer.start_break()
    }

    /// Deliver one heartbeat second to the timer pair, surfacing any
    /// resulting event as a notification
    pub fn tick(&mut self) -> Option<TimerEvent> {
        let event = self.timer.tick();
        match event {
            Some(TimerEvent::BreakEarned { total_earned }) => {
                notifications::notify_break_earned(
                    self.timer.config().break_reward,
                    total_earned,
                );
            }
            Some(TimerEvent::BreakDepleted) => {
                notifications::notify_break_ended();
            }
            None => {}
        }
        event
    }

    /// End the logical session: record its totals, then zero both timers
    pub fn end_session(&mut self) -> SessionRecord {
        let record = SessionRecord {
            work_seconds: self.timer.work_elapsed_seconds(),
            break_earned_seconds: self.timer.break_earned_seconds(),
            timestamp: Local::now(),
        };
        self.sessions.push(record.clone());
        self.timer.end_session();
        notifications::notify_session_saved();
        record
    }

    /// Sessions ended so far, oldest first
    pub fn sessions(&self) -> &[SessionRecord] {
        &self.sessions
    }
}
