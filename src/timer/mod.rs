//! Lap timer core.
//!
//! - `state`: measured statuses and the run state they are computed from
//! - `event`: producer triggers and the logical events they map to
//! - `snapshot`: the renderable state emitted after each accepted event
//! - `engine`: the state machine and its event loop

pub mod engine;
pub mod event;
pub mod snapshot;
pub mod state;

pub use engine::{TimerEngine, run};
pub use event::{InterruptMode, TimerEvent, Trigger};
pub use snapshot::{PAUSED_MESSAGE, SEPARATOR, Snapshot};
pub use state::{Phase, RecordedLap, RunState, Status};
