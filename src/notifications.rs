/// Cross-platform notification support
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::Command;

#[cfg(target_os = "macos")]
fn notify(title: &str, body: &str) {
    let script = format!(
        r#"display notification "{}" with title "{}""#,
        body.replace('"', "\\\""),
        title.replace('"', "\\\"")
    );

    let _ = Command::new("osascript")
        .arg("-e")
        .arg(&script)
        .output();
}

/// Notify that another chunk of break time was earned
pub fn notify_break_earned(reward_seconds: u64, total_seconds: u64) {
    #[cfg(target_os = "macos")]
    {
        notify(
            "Focusdeck - Break Time Earned!",
            &format!(
                "You've earned {} more minute(s) of break time ({} total).",
                reward_seconds / 60,
                total_seconds / 60
            ),
        );
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = (reward_seconds, total_seconds);
    }
}

/// Notify that the break ran out
pub fn notify_break_ended() {
    #[cfg(target_os = "macos")]
    {
        notify(
            "Focusdeck - Break Ended",
            "Your break has ended. Time to get back to work!",
        );
    }
}

/// Notify that the session was recorded
pub fn notify_session_saved() {
    #[cfg(target_os = "macos")]
    {
        notify("Focusdeck - Session Ended", "Your session has been saved.");
    }
}
