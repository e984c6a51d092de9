use anyhow::{Context, Result};
use clap::Parser;
use focusdeck::domain::{BatchKind, Task, TaskDraft};
use focusdeck::session::FocusSession;
use focusdeck::ticker;
use focusdeck::timer::{TimerConfig, TimerEvent};
use focusdeck::views;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Instant;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "focusdeck")]
#[command(about = "A focus session engine with an earn-your-break dual timer", long_about = None)]
struct Cli {
    /// JSON file with initial tasks (array of {text, tags?, due_date?, priority?})
    #[arg(short, long)]
    tasks: Option<PathBuf>,

    /// Seconds in one work cycle (progress display wraps here)
    #[arg(long, default_value_t = 1500)]
    work_interval: u64,

    /// Work seconds required to earn one break reward
    #[arg(long, default_value_t = 300)]
    earn_interval: u64,

    /// Break seconds granted per earn interval
    #[arg(long, default_value_t = 60)]
    break_reward: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let initial_tasks = match &cli.tasks {
        Some(path) => load_tasks(path)?,
        None => Vec::new(),
    };

    let config = TimerConfig {
        work_interval: cli.work_interval,
        earn_interval: cli.earn_interval,
        break_reward: cli.break_reward,
    };

    let mut session = FocusSession::new(initial_tasks, config);
    run_repl(&mut session)
}

/// Load initial tasks from a JSON file supplied by the caller
fn load_tasks(path: &PathBuf) -> Result<Vec<Task>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read tasks file {}", path.display()))?;
    let drafts: Vec<TaskDraft> = serde_json::from_str(&content)
        .with_context(|| format!("invalid tasks file {}", path.display()))?;
    Ok(drafts
        .into_iter()
        .filter(|d| !d.text.trim().is_empty())
        .map(Task::from_draft)
        .collect())
}

/// Command loop. A background thread feeds stdin lines over a channel;
/// the loop waits on it with a timeout so the heartbeat keeps firing
/// while the prompt is idle, one tick per elapsed second.
fn run_repl(session: &mut FocusSession) -> Result<()> {
    let (tx, rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    println!("focusdeck - type 'help' for commands");
    print!("{}", views::render_session(session));
    prompt()?;

    let heartbeat = ticker::heartbeat_duration();
    let mut last_tick = Instant::now();

    loop {
        let timeout = heartbeat.saturating_sub(last_tick.elapsed());
        match rx.recv_timeout(timeout) {
            Ok(line) => {
                if handle_command(session, &line)? {
                    return Ok(());
                }
                prompt()?;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        }

        // Catch up one tick per whole second since the last delivery, so a
        // slow command cannot swallow heartbeats
        while last_tick.elapsed() >= heartbeat {
            last_tick += heartbeat;
            match session.tick() {
                Some(TimerEvent::BreakEarned { total_earned }) => {
                    println!(
                        "\nBreak time earned! {} available.",
                        views::format_break_clock(total_earned)
                    );
                    prompt()?;
                }
                Some(TimerEvent::BreakDepleted) => {
                    println!("\nBreak ended. Time to get back to work!");
                    prompt()?;
                }
                None => {}
            }
        }
    }
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

/// Apply one command line. Returns true when the user asked to quit.
fn handle_command(session: &mut FocusSession, line: &str) -> Result<bool> {
    let mut parts = line.trim().split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(false);
    };

    match command {
        "quit" | "exit" | "q" => return Ok(true),
        "help" => print_help(),
        "show" => print!("{}", views::render_session(session)),
        "add" => {
            let text = parts.collect::<Vec<_>>().join(" ");
            match session.store.add_task(&text) {
                Some(_) => print!("{}", views::render_session(session)),
                None => println!("Nothing to add."),
            }
        }
        "done" => {
            if let Some(id) = resolve_target(session, parts.next()) {
                if session.store.toggle_task_completion(id) {
                    print!("{}", views::render_session(session));
                }
            } else {
                println!("No such task.");
            }
        }
        "del" => {
            if let Some(id) = resolve_target(session, parts.next()) {
                if session.store.delete_task(id) {
                    print!("{}", views::render_session(session));
                }
            } else {
                println!("No such task.");
            }
        }
        "focus" => match resolve_target(session, parts.next()) {
            Some(id) => match session.store.set_task_as_focus(id) {
                Ok(true) => print!("{}", views::render_session(session)),
                Ok(false) => println!("No such task."),
                Err(err) => println!("{err}."),
            },
            None => println!("No such task."),
        },
        "move" => {
            let from = parts.next().and_then(|s| s.parse::<usize>().ok());
            let to = parts.next().and_then(|s| s.parse::<usize>().ok());
            match (from, to) {
                (Some(from), Some(to)) if from >= 1 && to >= 1 => {
                    move_task(session, from - 1, to - 1);
                }
                _ => println!("Usage: move <from> <to>"),
            }
        }
        "select" => {
            if let Some(id) = resolve_target(session, parts.next()) {
                let selected = session.store.toggle_selection(id);
                println!("{}", if selected { "Selected." } else { "Deselected." });
            } else {
                println!("No such task.");
            }
        }
        "clear" => session.store.clear_selection(),
        "batch" => match parts.next() {
            Some("done") => {
                let n = session.store.batch_selected(BatchKind::Complete);
                println!("Completed {n} task(s).");
                print!("{}", views::render_session(session));
            }
            Some("del") => {
                let n = session.store.batch_selected(BatchKind::Delete);
                println!("Deleted {n} task(s).");
                print!("{}", views::render_session(session));
            }
            _ => println!("Usage: batch done|del"),
        },
        "undo" => match session.store.undo_last_action() {
            Some(action) => {
                println!("Undid {}.", action.label());
                print!("{}", views::render_session(session));
            }
            None => println!("Nothing to undo."),
        },
        "work" => match parts.next() {
            Some("start") => {
                session.start_work();
                print!("{}", views::render_session(session));
            }
            Some("stop") => session.timer.stop_work(),
            Some("reset") => session.timer.reset_work(),
            _ => println!("Usage: work start|stop|reset"),
        },
        "break" => match parts.next() {
            Some("start") => match session.start_break() {
                Ok(()) => print!("{}", views::render_session(session)),
                Err(err) => println!("{err}. Work first to earn some."),
            },
            Some("stop") => session.timer.stop_break(),
            Some("skip") => session.timer.end_break(),
            _ => println!("Usage: break start|stop|skip"),
        },
        "end" => {
            let record = session.end_session();
            println!(
                "Session saved: {} worked, {} break earned.",
                views::format_work_clock(record.work_seconds),
                views::format_break_clock(record.break_earned_seconds)
            );
        }
        other => println!("Unknown command '{other}'. Type 'help'."),
    }

    Ok(false)
}

/// Resolve a command target: a 1-based list index, or the word "focus"
fn resolve_target(session: &FocusSession, arg: Option<&str>) -> Option<Uuid> {
    match arg? {
        "focus" => session.store.focus_task_id(),
        index => {
            let n = index.parse::<usize>().ok()?;
            session.store.tasks().get(n.checked_sub(1)?).map(|t| t.id)
        }
    }
}

/// Move a list task between 0-based positions via a reorder permutation
fn move_task(session: &mut FocusSession, from: usize, to: usize) {
    let mut order: Vec<Uuid> = session.store.tasks().iter().map(|t| t.id).collect();
    if from >= order.len() || to >= order.len() {
        println!("No such task.");
        return;
    }
    let id = order.remove(from);
    order.insert(to, id);
    match session.store.reorder_tasks(&order) {
        Ok(()) => print!("{}", views::render_session(session)),
        Err(err) => println!("{err}."),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  add <text>          add a task at the top of the list");
    println!("  done <n|focus>      toggle completion");
    println!("  del <n|focus>       delete a task");
    println!("  focus <n>           promote a task to the focus slot");
    println!("  move <from> <to>    reorder the list");
    println!("  select <n|focus>    toggle batch selection");
    println!("  clear               clear the selection");
    println!("  batch done|del      apply to the selection (one undo step)");
    println!("  undo                revert the last change");
    println!("  work start|stop|reset");
    println!("  break start|stop|skip");
    println!("  end                 end and record the session");
    println!("  show                print the current state");
    println!("  quit");
}
