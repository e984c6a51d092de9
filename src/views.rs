//! Plain-text state rendering for the driver. Pure functions over engine
//! state; the engine itself never formats anything.

use crate::domain::Task;
use crate::session::FocusSession;
use std::fmt::Write;

/// Format the work clock: MM:SS below one hour, HH:MM:SS from there on
pub fn format_work_clock(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

/// Format the break clock, always MM:SS
pub fn format_break_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Render a progress bar of the given width
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let clamped = progress.clamp(0.0, 1.0);
    let filled = (clamped * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(empty))
}

/// One line for a task: completion box, selection marker, text, metadata
pub fn task_row(task: &Task, selected: bool) -> String {
    let mut row = String::new();
    let box_mark = if task.completed { "[x]" } else { "[ ]" };
    let sel_mark = if selected { "*" } else { " " };
    let _ = write!(row, "{box_mark}{sel_mark} {}", task.text);

    if let Some(priority) = task.priority {
        let _ = write!(row, " !{}", priority.to_tag());
    }
    if let Some(due) = task.due_date {
        let _ = write!(row, " due:{due}");
    }
    if !task.tags.is_empty() {
        let _ = write!(row, " #{}", task.tags.join(" #"));
    }
    row
}

/// Full state snapshot: focus slot, numbered task list, both timers
pub fn render_session(session: &FocusSession) -> String {
    let mut out = String::new();

    match session.store.focus_task() {
        Some(task) => {
            let _ = writeln!(out, "Focus: {}", task_row(task, session.store.is_selected(task.id)));
        }
        None => {
            let _ = writeln!(out, "Focus: (none)");
        }
    }

    if session.store.tasks().is_empty() {
        let _ = writeln!(out, "Tasks: (empty)");
    } else {
        let _ = writeln!(out, "Tasks:");
        for (i, task) in session.store.tasks().iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. {}",
                i + 1,
                task_row(task, session.store.is_selected(task.id))
            );
        }
    }

    let timer = &session.timer;
    let _ = writeln!(
        out,
        "Work  {} {} {}",
        format_work_clock(timer.work_elapsed_seconds()),
        render_progress_bar(timer.work_progress(), 20),
        if timer.work_running() { "running" } else { "idle" },
    );
    let _ = writeln!(
        out,
        "Break {} {} {} (earned {})",
        format_break_clock(timer.break_remaining_seconds()),
        render_progress_bar(timer.break_progress(), 20),
        if timer.break_running() { "running" } else { "idle" },
        format_break_clock(timer.break_earned_seconds()),
    );

    out
}
