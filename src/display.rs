//! Snapshot sinks - where rendered snapshots end up.
//!
//! The engine only produces snapshots; a sink turns each one into output.
//! `drain` consumes the snapshot stream in order until the engine closes it.

use std::io::Write;

use colored::Colorize;
use crossterm::{
    QueueableCommand,
    cursor::MoveTo,
    terminal::{Clear, ClearType},
};
use log::{debug, warn};
use tokio::sync::mpsc;

use crate::error::Result;
use crate::timer::Snapshot;

/// Consumer of rendered snapshots.
pub trait SnapshotSink {
    /// Render one snapshot. Later snapshots supersede earlier ones.
    fn render(&mut self, snapshot: &Snapshot) -> Result<()>;
}

/// Writes each snapshot to a terminal, clearing the screen first.
pub struct TerminalSink<W: Write> {
    out: W,
    clear_screen: bool,
    color: bool,
}

impl TerminalSink<std::io::Stdout> {
    /// Sink writing to the process's stdout.
    pub fn stdout(clear_screen: bool, color: bool) -> Self {
        Self::new(std::io::stdout(), clear_screen, color)
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, clear_screen: bool, color: bool) -> Self {
        Self {
            out,
            clear_screen,
            color,
        }
    }

    /// Consume the sink and hand back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn clear(&mut self) -> Result<()> {
        self.out.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;
        Ok(())
    }
}

impl<W: Write> SnapshotSink for TerminalSink<W> {
    fn render(&mut self, snapshot: &Snapshot) -> Result<()> {
        if self.clear_screen {
            if let Err(e) = self.clear() {
                warn!("Failed to clear screen: {}", e);
            }
        }

        writeln!(self.out)?;
        write!(self.out, "{}", snapshot.status_block())?;
        if let Some(message) = &snapshot.message {
            if self.color {
                write!(self.out, "\n{}", message.yellow())?;
            } else {
                write!(self.out, "\n{}", message)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Keeps every rendered frame in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub frames: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl SnapshotSink for MemorySink {
    fn render(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.frames.push(snapshot.to_string());
        Ok(())
    }
}

/// Render every snapshot from `rx` in arrival order until the stream
/// closes. Render failures are logged and skipped. Returns the number of
/// snapshots received.
pub async fn drain<S: SnapshotSink>(mut rx: mpsc::Receiver<Snapshot>, sink: &mut S) -> usize {
    let mut count = 0;
    while let Some(snapshot) = rx.recv().await {
        count += 1;
        if let Err(e) = sink.render(&snapshot) {
            warn!("Failed to render snapshot {}: {}", count, e);
        }
    }
    debug!("Snapshot stream closed after {} snapshots", count);
    count
}
