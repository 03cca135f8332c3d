//! Timing state owned by the engine.

use std::fmt;
use std::time::{Duration, Instant};

use crate::format::format_duration;

/// One measured instant, relative to the run start and to the previous lap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    /// Time since the run started, paused intervals excluded
    pub elapsed: Duration,
    /// Time since the previous lap, or since the run start before any lap
    pub since_previous: Duration,
}

impl Status {
    pub fn new(elapsed: Duration, since_previous: Duration) -> Self {
        Self { elapsed, since_previous }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            format_duration(self.since_previous),
            format_duration(self.elapsed)
        )
    }
}

/// A status captured at the moment a lap was accepted.
pub type RecordedLap = Status;

/// Engine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// Paused since the contained instant
    Paused(Instant),
    Terminating,
}

impl Phase {
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Phase::Paused(_))
    }

    pub fn is_terminating(&self) -> bool {
        matches!(self, Phase::Terminating)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Running => "running",
            Phase::Paused(_) => "paused",
            Phase::Terminating => "terminating",
        }
    }
}

/// Mutable run state. Only the engine's event loop holds one.
#[derive(Debug)]
pub struct RunState {
    start_time: Instant,
    last_lap_time: Instant,
    laps: Vec<RecordedLap>,
    phase: Phase,
}

impl RunState {
    /// Start a run at `now`.
    pub fn new(now: Instant) -> Self {
        Self {
            start_time: now,
            last_lap_time: now,
            laps: Vec::new(),
            phase: Phase::Running,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn laps(&self) -> &[RecordedLap] {
        &self.laps
    }

    /// Measure the status at `now`. Instants earlier than the reference
    /// points saturate to zero.
    pub fn status_at(&self, now: Instant) -> Status {
        Status::new(
            now.saturating_duration_since(self.start_time),
            now.saturating_duration_since(self.last_lap_time),
        )
    }

    /// Measure the status at `now`, append it as a lap and restart the
    /// since-previous reference.
    pub fn record_lap(&mut self, now: Instant) -> Status {
        let status = self.status_at(now);
        self.laps.push(status);
        self.last_lap_time = now;
        status
    }

    pub fn pause(&mut self, now: Instant) {
        self.phase = Phase::Paused(now);
    }

    /// Leave the paused phase, shifting both reference instants forward by
    /// the paused interval. Returns the interval, or `None` when not paused.
    pub fn resume(&mut self, now: Instant) -> Option<Duration> {
        let Phase::Paused(since) = self.phase else {
            return None;
        };
        let paused_for = now.saturating_duration_since(since);
        self.start_time += paused_for;
        self.last_lap_time += paused_for;
        self.phase = Phase::Running;
        Some(paused_for)
    }

    /// The instant time stopped advancing: the pause start while paused,
    /// otherwise `now`.
    pub fn effective_now(&self, now: Instant) -> Instant {
        match self.phase {
            Phase::Paused(since) => since,
            _ => now,
        }
    }

    pub fn terminate(&mut self) {
        self.phase = Phase::Terminating;
    }
}
