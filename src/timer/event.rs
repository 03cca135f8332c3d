//! Events the engine understands and the raw triggers producers send.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::state::Phase;

/// Phase-agnostic input pushed by producers into the engine intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The record key (Enter) was pressed
    Enter,
    /// SIGINT or SIGTERM was received
    Interrupt,
    /// The controller asked the run to end
    Cancel,
}

/// Logical event applied to the run state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick,
    RecordLap,
    Pause,
    Resume,
    Quit,
}

/// What an interrupt does while running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InterruptMode {
    /// First interrupt pauses, a second one while paused quits
    #[default]
    Pause,
    /// Every interrupt quits immediately
    Quit,
}

impl Trigger {
    /// Map a trigger onto the event it means in `phase`. Triggers have no
    /// meaning once the run is terminating.
    pub fn interpret(self, phase: Phase, mode: InterruptMode) -> Option<TimerEvent> {
        match (phase, self) {
            (Phase::Terminating, _) => None,
            (_, Trigger::Cancel) => Some(TimerEvent::Quit),
            (Phase::Running, Trigger::Enter) => Some(TimerEvent::RecordLap),
            (Phase::Running, Trigger::Interrupt) => match mode {
                InterruptMode::Pause => Some(TimerEvent::Pause),
                InterruptMode::Quit => Some(TimerEvent::Quit),
            },
            (Phase::Paused(_), Trigger::Enter) => Some(TimerEvent::Resume),
            (Phase::Paused(_), Trigger::Interrupt) => Some(TimerEvent::Quit),
        }
    }
}
