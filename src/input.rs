//! Trigger producers - keyboard and OS signals.
//!
//! Each producer runs as its own task and only pushes `Trigger`s into the
//! engine intake. None of them know the timer's phase.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};
use log::{debug, info};
#[cfg(not(unix))]
use tokio::signal;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::error::{LaprError, Result};
use crate::timer::Trigger;

/// How long the keyboard task blocks before re-checking for shutdown.
pub const KEYBOARD_POLL: Duration = Duration::from_millis(100);

/// Map a key event onto a trigger. Only presses of Enter count.
pub fn key_to_trigger(key: &KeyEvent) -> Option<Trigger> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Enter => Some(Trigger::Enter),
        _ => None,
    }
}

/// Read the keyboard on a blocking thread until `shutdown` flips or the
/// intake closes.
///
/// Raw mode is left off so Ctrl-C keeps raising SIGINT; crossterm reports
/// the line-buffered newline as `KeyCode::Enter`.
pub fn spawn_keyboard_listener(
    tx: mpsc::Sender<Trigger>,
    shutdown: watch::Receiver<bool>,
) -> JoinHandle<Result<()>> {
    tokio::task::spawn_blocking(move || -> Result<()> {
        while !*shutdown.borrow() {
            if !event::poll(KEYBOARD_POLL)? {
                continue;
            }
            let CrosstermEvent::Key(key) = event::read()? else {
                continue;
            };
            if let Some(trigger) = key_to_trigger(&key) {
                debug!("Key {:?} -> {:?}", key.code, trigger);
                if tx.blocking_send(trigger).is_err() {
                    break;
                }
            }
        }
        debug!("Keyboard listener stopped");
        Ok(())
    })
}

/// Turn SIGINT and SIGTERM into `Trigger::Interrupt`.
///
/// The listeners are registered before this returns so registration
/// failures surface to the caller.
#[cfg(unix)]
pub fn spawn_signal_listener(tx: mpsc::Sender<Trigger>) -> Result<JoinHandle<()>> {
    use tokio::signal::unix::{SignalKind, signal as unix_signal};

    let mut sigint = unix_signal(SignalKind::interrupt()).map_err(|e| LaprError::Signal(format!("SIGINT: {}", e)))?;
    let mut sigterm =
        unix_signal(SignalKind::terminate()).map_err(|e| LaprError::Signal(format!("SIGTERM: {}", e)))?;

    Ok(tokio::spawn(async move {
        loop {
            let name = tokio::select! {
                Some(()) = sigint.recv() => "SIGINT",
                Some(()) = sigterm.recv() => "SIGTERM",
                else => break,
            };
            info!("Received {}", name);
            if tx.send(Trigger::Interrupt).await.is_err() {
                break;
            }
        }
    }))
}

#[cfg(not(unix))]
pub fn spawn_signal_listener(tx: mpsc::Sender<Trigger>) -> Result<JoinHandle<()>> {
    Ok(tokio::spawn(async move {
        loop {
            if let Err(e) = signal::ctrl_c().await {
                log::warn!("{}", LaprError::Signal(e.to_string()));
                break;
            }
            info!("Received Ctrl-C");
            if tx.send(Trigger::Interrupt).await.is_err() {
                break;
            }
        }
    }))
}
