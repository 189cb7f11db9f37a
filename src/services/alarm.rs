//! Alarm side effect fired when the countdown expires

use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

/// Something that can be told the timer has expired
pub trait AlarmSink {
    /// Fire and forget. Failures are the sink's own business and never reach the caller.
    fn fire(&mut self);
}

/// Launches a shell command without waiting for it
#[derive(Debug, Clone, Default)]
pub struct CommandAlarm {
    command: String,
}

impl CommandAlarm {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Spawn `sh -c <command>` detached from stdout so the bar line stays clean
    fn spawn(&self) -> Result<u32, String> {
        let child = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| format!("Failed to launch alarm command: {}", e))?;
        Ok(child.id())
    }
}

impl AlarmSink for CommandAlarm {
    fn fire(&mut self) {
        if self.command.is_empty() {
            debug!("Timer expired, no alarm command configured");
            return;
        }

        match self.spawn() {
            Ok(pid) => info!("Alarm command launched (pid {})", pid),
            Err(e) => warn!("{}", e),
        }
    }
}

/// Records how many times it fired, for tests
#[derive(Debug, Clone, Default)]
pub struct RecordingAlarm {
    pub fired: usize,
}

impl AlarmSink for RecordingAlarm {
    fn fire(&mut self) {
        self.fired += 1;
    }
}
