use std::time::Duration;

/// Heartbeat interval in milliseconds: the engine counts whole seconds
pub const HEARTBEAT_MS: u64 = 1000;

/// Get the heartbeat duration
pub fn heartbeat_duration() -> Duration {
    Duration::from_millis(HEARTBEAT_MS)
}
