//! Renderable state emitted after every accepted event.

use std::fmt;

use super::state::{RecordedLap, Status};

/// Line between the lap history and the current status.
pub const SEPARATOR: &str = "====";

/// Message attached while the timer is paused.
pub const PAUSED_MESSAGE: &str = "Paused. Press Enter to resume, Ctrl-C again to quit.";

/// Complete renderable state: current status, full lap history and an
/// optional message. Never mutated after emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub current: Status,
    pub laps: Vec<RecordedLap>,
    pub message: Option<String>,
}

impl Snapshot {
    pub fn new(current: Status, laps: &[RecordedLap]) -> Self {
        Self {
            current,
            laps: laps.to_vec(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn has_message(&self) -> bool {
        self.message.is_some()
    }

    /// Numbered lap lines, the separator and the current status, without
    /// the message.
    pub fn status_block(&self) -> String {
        let mut block = String::new();
        for (idx, lap) in self.laps.iter().enumerate() {
            block.push_str(&format!("{}. {}\n", idx + 1, lap));
        }
        block.push_str(SEPARATOR);
        block.push('\n');
        block.push_str(&self.current.to_string());
        block
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.status_block())?;
        if let Some(message) = &self.message {
            write!(f, "\n{}", message)?;
        }
        Ok(())
    }
}
