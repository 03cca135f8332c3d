//! Timer engine - the single mutator of run state.
//!
//! `TimerEngine::apply` is the transition table: a total function of
//! (phase, event, now) that returns the snapshot to emit, or `None` when the
//! event means nothing in the current phase. `run` wraps it in the event
//! loop that multiplexes the ticker with the trigger intake and feeds the
//! snapshot stream.

use std::time::{Duration, Instant};

use log::{debug, info, warn};
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

use super::event::{InterruptMode, TimerEvent, Trigger};
use super::snapshot::{PAUSED_MESSAGE, Snapshot};
use super::state::{Phase, RecordedLap, RunState};

/// Shortest tick period the loop will run with.
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Event-processing state machine owning the run state.
#[derive(Debug)]
pub struct TimerEngine {
    state: RunState,
    interrupt_mode: InterruptMode,
}

impl TimerEngine {
    /// Start a run at `now`.
    pub fn new(now: Instant, interrupt_mode: InterruptMode) -> Self {
        Self {
            state: RunState::new(now),
            interrupt_mode,
        }
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn laps(&self) -> &[RecordedLap] {
        self.state.laps()
    }

    /// Translate a raw trigger using the current phase.
    pub fn interpret(&self, trigger: Trigger) -> Option<TimerEvent> {
        trigger.interpret(self.state.phase(), self.interrupt_mode)
    }

    /// Apply one event at `now`. Returns the snapshot reflecting the state
    /// after the transition, or `None` if the event was ignored.
    pub fn apply(&mut self, event: TimerEvent, now: Instant) -> Option<Snapshot> {
        let phase = self.state.phase();
        let snapshot = match (phase, event) {
            (Phase::Running, TimerEvent::Tick) => self.snapshot(now),
            (Phase::Running, TimerEvent::RecordLap) => {
                let lap = self.state.record_lap(now);
                debug!("Recorded lap {} at {:?}", self.state.laps().len(), lap.elapsed);
                self.snapshot(now)
            }
            (Phase::Running, TimerEvent::Pause) => {
                self.state.pause(now);
                info!("Timer paused");
                self.snapshot(now).with_message(PAUSED_MESSAGE)
            }
            (Phase::Paused(_), TimerEvent::Resume) => {
                if let Some(paused_for) = self.state.resume(now) {
                    info!("Timer resumed after {:?}", paused_for);
                }
                self.snapshot(now)
            }
            (Phase::Running | Phase::Paused(_), TimerEvent::Quit) => {
                let at = self.state.effective_now(now);
                self.state.record_lap(at);
                self.state.terminate();
                info!("Timer stopping with {} laps", self.state.laps().len());
                self.snapshot(at)
            }
            _ => {
                debug!("Ignoring {:?} while {}", event, phase.name());
                return None;
            }
        };
        Some(snapshot)
    }

    fn snapshot(&self, now: Instant) -> Snapshot {
        Snapshot::new(self.state.status_at(now), self.state.laps())
    }
}

/// Drive `engine` until it terminates.
///
/// Triggers arrive on `triggers`; a closed intake counts as cancellation.
/// Every produced snapshot is sent on `snapshots`, which is closed (by
/// dropping the sender) after the final one. The ticker lives only inside
/// this call and is released on every exit path. Intervals shorter than
/// `MIN_TICK_INTERVAL` are raised to it.
pub async fn run(
    mut engine: TimerEngine,
    tick_interval: Duration,
    mut triggers: mpsc::Receiver<Trigger>,
    snapshots: mpsc::Sender<Snapshot>,
) -> Vec<RecordedLap> {
    let tick_interval = tick_interval.max(MIN_TICK_INTERVAL);
    let mut ticker = time::interval_at(time::Instant::now() + tick_interval, tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!("Timer engine started (tick every {:?})", tick_interval);

    while !engine.phase().is_terminating() {
        let event = tokio::select! {
            _ = ticker.tick() => TimerEvent::Tick,
            trigger = triggers.recv() => {
                let trigger = trigger.unwrap_or(Trigger::Cancel);
                match engine.interpret(trigger) {
                    Some(event) => event,
                    None => {
                        warn!("Ignoring {:?} while {}", trigger, engine.phase().name());
                        continue;
                    }
                }
            }
        };

        let Some(snapshot) = engine.apply(event, Instant::now()) else {
            continue;
        };
        if snapshots.send(snapshot).await.is_err() {
            warn!("Snapshot receiver dropped, stopping timer engine");
            break;
        }
    }

    drop(ticker);
    drop(snapshots);
    discard_late_triggers(&mut triggers);
    info!("Timer engine stopped");

    engine.laps().to_vec()
}

/// Close the intake and drop whatever was queued behind the final event.
/// Returns how many triggers were discarded.
fn discard_late_triggers(triggers: &mut mpsc::Receiver<Trigger>) -> usize {
    triggers.close();
    let mut dropped = 0;
    while let Ok(trigger) = triggers.try_recv() {
        warn!("Dropping {:?} received after shutdown", trigger);
        dropped += 1;
    }
    dropped
}
