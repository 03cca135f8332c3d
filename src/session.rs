//! Session - one timer run from start to summary.
//!
//! The controller starts the producers, runs the engine and the sink side
//! by side, and tears the producers down once the snapshot stream closes:
//!
//! ```text
//! keyboard ─┐
//!           ├─> trigger intake ─> engine ─> snapshot stream ─> sink
//! signals ──┘
//! ```

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use log::{info, warn};
use tokio::sync::{mpsc, watch};

use crate::display::{SnapshotSink, TerminalSink, drain};
use crate::error::Result;
use crate::format::format_timestamp;
use crate::input::{spawn_keyboard_listener, spawn_signal_listener};
use crate::timer::{self, InterruptMode, RecordedLap, TimerEngine, Trigger};

const TRIGGER_BUFFER: usize = 16;
const SNAPSHOT_BUFFER: usize = 16;

/// Settings for one session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub tick_interval: Duration,
    pub interrupt_mode: InterruptMode,
    pub clear_screen: bool,
    pub color: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            interrupt_mode: InterruptMode::Pause,
            clear_screen: true,
            color: true,
        }
    }
}

/// Outcome of a finished run.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
    pub laps: Vec<RecordedLap>,
    pub snapshots: usize,
}

impl SessionReport {
    /// `<start> - <end>`, both as `YYYY/MM/DD HH:MM:SS`.
    pub fn summary_line(&self) -> String {
        format!(
            "{} - {}",
            format_timestamp(&self.started_at),
            format_timestamp(&self.finished_at)
        )
    }
}

/// Run a timer against the real keyboard, OS signals and stdout.
pub async fn run(options: &SessionOptions) -> Result<SessionReport> {
    let (trigger_tx, trigger_rx) = mpsc::channel(TRIGGER_BUFFER);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let signals = spawn_signal_listener(trigger_tx.clone())?;
    let keyboard = spawn_keyboard_listener(trigger_tx, shutdown_rx);

    let mut sink = TerminalSink::stdout(options.clear_screen, options.color);
    let report = drive(options, trigger_rx, &mut sink).await;

    let _ = shutdown_tx.send(true);
    signals.abort();
    match keyboard.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!("Keyboard listener failed: {}", e),
        Err(e) => warn!("Keyboard listener task failed: {}", e),
    }

    report
}

/// Run a timer fed by `triggers`, rendering into `sink`, until it quits.
pub async fn drive<S: SnapshotSink>(
    options: &SessionOptions,
    triggers: mpsc::Receiver<Trigger>,
    sink: &mut S,
) -> Result<SessionReport> {
    let started_at = Local::now();
    info!("Session started (interrupt mode: {:?})", options.interrupt_mode);

    let (snapshot_tx, snapshot_rx) = mpsc::channel(SNAPSHOT_BUFFER);
    let engine = TimerEngine::new(Instant::now(), options.interrupt_mode);
    let engine_task = tokio::spawn(timer::run(engine, options.tick_interval, triggers, snapshot_tx));

    let snapshots = drain(snapshot_rx, sink).await;
    let laps = engine_task.await?;

    let finished_at = Local::now();
    info!("Session finished: {} laps, {} snapshots", laps.len(), snapshots);

    Ok(SessionReport {
        started_at,
        finished_at,
        laps,
        snapshots,
    })
}
