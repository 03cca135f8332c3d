//! Lapr - a terminal lap timer
//!
//! A single engine task owns all timing state and reconciles a periodic
//! tick, lap requests and pause/quit interrupts into a stream of snapshots.

pub mod display;
pub mod error;
pub mod format;
pub mod input;
pub mod session;
pub mod timer;

pub use error::{LaprError, Result};
