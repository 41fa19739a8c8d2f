//! Periodic re-read, re-render and replace.
//!
//! Ticks run one at a time on a single thread. Each tick reads a fresh
//! snapshot, renders a complete new tree and only then hands it to the
//! [`Surface`]. A failed read skips the tick and leaves the displayed tree
//! untouched.

pub mod surface;

pub use surface::{MemorySurface, Surface};

use crate::errors::MwanError;
use crate::render::Renderer;
use crate::source::StatusSource;
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, info};

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Replaced,
    /// The read failed; nothing was displayed.
    Skipped,
}

pub struct RefreshLoop<S> {
    source: S,
    renderer: Renderer,
    interval: Duration,
}

impl<S: StatusSource> RefreshLoop<S> {
    pub fn new(source: S, renderer: Renderer, interval: Duration) -> Self {
        Self {
            source,
            renderer,
            interval,
        }
    }

    /// Run one read → render → replace cycle.
    ///
    /// Read failures are swallowed. An error is returned only when the
    /// surface itself cannot be written.
    pub fn tick(&mut self, surface: &mut dyn Surface) -> io::Result<TickOutcome> {
        let raw = match self.source.read() {
            Ok(raw) => raw,
            Err(e) => {
                debug!(
                    event = "core.refresh.read_failed",
                    error = %e,
                    error_code = e.error_code()
                );
                return Ok(TickOutcome::Skipped);
            }
        };

        let tree = Arc::new(self.renderer.render(Some(&raw)));
        surface.replace(tree)?;

        debug!(event = "core.refresh.tick_completed", bytes = raw.len());
        Ok(TickOutcome::Replaced)
    }

    /// Tick every `interval` on the calling thread until `stop` receives a
    /// message or its sender is dropped. The first tick happens one interval
    /// after the call.
    pub fn run(&mut self, surface: &mut dyn Surface, stop: &Receiver<()>) -> io::Result<()> {
        info!(
            event = "core.refresh.started",
            interval_ms = self.interval.as_millis() as u64
        );

        let mut ticks = 0u64;
        loop {
            match stop.recv_timeout(self.interval) {
                Err(RecvTimeoutError::Timeout) => {
                    self.tick(surface)?;
                    ticks += 1;
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        info!(event = "core.refresh.stopped", ticks = ticks);
        Ok(())
    }
}

impl<S: StatusSource + Send + 'static> RefreshLoop<S> {
    /// Run the loop on a worker thread against `surface`.
    pub fn spawn<T>(mut self, mut surface: T) -> RefreshHandle
    where
        T: Surface + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel();
        let join = thread::spawn(move || self.run(&mut surface, &stop_rx));
        RefreshHandle { stop_tx, join }
    }
}

/// Handle to a refresh loop running on its own thread.
pub struct RefreshHandle {
    stop_tx: Sender<()>,
    join: JoinHandle<io::Result<()>>,
}

impl RefreshHandle {
    /// Stop the loop and wait for the in-flight tick, if any, to finish.
    pub fn cancel(self) -> io::Result<()> {
        // The loop may already have exited after a surface error.
        let _ = self.stop_tx.send(());
        self.wait()
    }

    /// Block until the loop exits on its own.
    pub fn wait(self) -> io::Result<()> {
        self.join
            .join()
            .map_err(|_| io::Error::other("refresh thread panicked"))?
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}
