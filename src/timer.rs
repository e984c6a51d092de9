use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Timer intervals in whole seconds. Constructor-injected, never mutated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimerConfig {
    /// One full work cycle, for the wrapping progress display
    pub work_interval: u64,
    /// Work seconds per break credit grant
    pub earn_interval: u64,
    /// Break seconds granted per earn interval
    pub break_reward: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_interval: 25 * 60,
            earn_interval: 5 * 60,
            break_reward: 60,
        }
    }
}

/// Something a tick made happen, for the caller to surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Another `break_reward` of credit was earned; carries the new total
    BreakEarned { total_earned: u64 },
    /// The running break counted down to zero and ended itself
    BreakDepleted,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimerError {
    #[error("no break time available")]
    NoBreakCredit,
}

/// The work/break timer pair.
///
/// Work counts up and earns break credit; break counts down against that
/// credit. At most one of the two runs at a time: starting one forces the
/// other to stop. All counters advance only through `tick`, one second per
/// call, delivered by the caller-owned heartbeat.
#[derive(Debug)]
pub struct TimerEngine {
    config: TimerConfig,
    work_elapsed: u64,
    work_running: bool,
    break_earned: u64,
    break_remaining: u64,
    break_running: bool,
    /// Earned credit captured when the break was seeded; break progress is
    /// computed against this, not the live earned value
    break_seeded_from: u64,
}

impl TimerEngine {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            work_elapsed: 0,
            work_running: false,
            break_earned: 0,
            break_remaining: 0,
            break_running: false,
            break_seeded_from: 0,
        }
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    // --- work timer ---

    /// Start the work timer, forcing a running break to stop. Returns
    /// whether this call actually transitioned work from idle to running.
    pub fn start_work(&mut self) -> bool {
        if self.break_running {
            self.break_running = false;
        }
        if self.work_running {
            return false;
        }
        self.work_running = true;
        true
    }

    pub fn stop_work(&mut self) {
        self.work_running = false;
    }

    /// Stop the work timer and zero its counter. Break state is untouched.
    pub fn reset_work(&mut self) {
        self.work_running = false;
        self.work_elapsed = 0;
    }

    // --- break timer ---

    /// Start the break timer, forcing running work to stop. With no banked
    /// countdown the remaining time is seeded from the earned credit;
    /// rejected when no credit has been earned.
    pub fn start_break(&mut self) -> Result<(), TimerError> {
        if self.break_earned == 0 {
            return Err(TimerError::NoBreakCredit);
        }
        if self.work_running {
            self.work_running = false;
        }
        if self.break_remaining == 0 {
            self.break_remaining = self.break_earned;
            self.break_seeded_from = self.break_earned;
        }
        self.break_running = true;
        Ok(())
    }

    /// Pause the break, keeping the remaining countdown for a resume
    pub fn stop_break(&mut self) {
        self.break_running = false;
    }

    /// End the break outright (manual skip or automatic depletion):
    /// stops it and forfeits both remaining time and earned credit
    pub fn end_break(&mut self) {
        self.break_running = false;
        self.break_remaining = 0;
        self.break_earned = 0;
        self.break_seeded_from = 0;
    }

    /// Zero every counter and stop both timers, ending the logical session
    pub fn end_session(&mut self) {
        self.work_running = false;
        self.work_elapsed = 0;
        self.end_break();
    }

    // --- heartbeat ---

    /// Advance whichever timer is running by one second. A tick with both
    /// timers idle is a harmless no-op. At most one event can result,
    /// since the timers never run concurrently.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if self.work_running {
            self.work_elapsed += 1;
            if self.config.earn_interval > 0 && self.work_elapsed % self.config.earn_interval == 0 {
                self.break_earned += self.config.break_reward;
                return Some(TimerEvent::BreakEarned {
                    total_earned: self.break_earned,
                });
            }
        } else if self.break_running {
            self.break_remaining = self.break_remaining.saturating_sub(1);
            if self.break_remaining == 0 {
                self.end_break();
                return Some(TimerEvent::BreakDepleted);
            }
        }
        None
    }

    // --- state queries ---

    pub fn work_elapsed_seconds(&self) -> u64 {
        self.work_elapsed
    }

    pub fn work_running(&self) -> bool {
        self.work_running
    }

    pub fn break_earned_seconds(&self) -> u64 {
        self.break_earned
    }

    pub fn break_remaining_seconds(&self) -> u64 {
        self.break_remaining
    }

    pub fn break_running(&self) -> bool {
        self.break_running
    }

    pub fn any_running(&self) -> bool {
        self.work_running || self.break_running
    }

    /// Fraction of the current work cycle elapsed (wraps each cycle)
    pub fn work_progress(&self) -> f64 {
        if self.config.work_interval == 0 {
            return 0.0;
        }
        (self.work_elapsed % self.config.work_interval) as f64
            / self.config.work_interval as f64
    }

    /// Fraction of the seeded break consumed, against the credit captured
    /// when the break started
    pub fn break_progress(&self) -> f64 {
        if self.break_seeded_from == 0 {
            return 0.0;
        }
        1.0 - self.break_remaining as f64 / self.break_seeded_from as f64
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(TimerConfig::default())
    }
}
