//! Periodic presence updates.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};
use tracing::debug;

use crate::domain::ports::PresencePort;

/// A request to refresh the user's presence status with the server.
///
/// Consumed by whoever owns the server session; the updater only schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRefresh;

/// Interval-driven presence scheduler.
///
/// `start_periodic_updates` spawns a ticker that emits a [`StatusRefresh`]
/// once per interval, first tick after one full interval. Starting while
/// already running is a no-op; `stop_periodic_updates` aborts the ticker
/// task, so a stop/start cycle never leaves a second ticker behind.
pub struct PresenceUpdater {
    interval: Duration,
    update_tx: mpsc::Sender<StatusRefresh>,
    running: Arc<AtomicBool>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl PresenceUpdater {
    /// Creates an updater emitting refreshes on the given channel.
    #[must_use]
    pub fn new(interval: Duration, update_tx: mpsc::Sender<StatusRefresh>) -> Self {
        Self {
            interval,
            update_tx,
            running: Arc::new(AtomicBool::new(false)),
            task: Mutex::new(None),
        }
    }

    /// Returns whether the ticker task is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

impl PresencePort for PresenceUpdater {
    fn start_periodic_updates(&self) {
        if self.running.swap(true, Ordering::SeqCst) {
            debug!("Presence updates already running");
            return;
        }

        let interval = self.interval;
        let update_tx = self.update_tx.clone();
        let running = Arc::clone(&self.running);

        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + interval, interval);

            while running.load(Ordering::SeqCst) {
                ticker.tick().await;

                if !running.load(Ordering::SeqCst) {
                    break;
                }

                if update_tx.send(StatusRefresh).await.is_err() {
                    debug!("Presence channel closed");
                    running.store(false, Ordering::SeqCst);
                    break;
                }

                debug!("Requested presence refresh");
            }

            debug!("Presence update loop stopped");
        });

        if let Some(previous) = self.task.lock().replace(handle) {
            // Only ever a finished task; a live one is excluded by `running`.
            previous.abort();
        }
    }

    fn stop_periodic_updates(&self) {
        self.running.store(false, Ordering::SeqCst);

        // Abort rather than wait for the next tick: the task may be parked
        // mid-interval, and a restart must not inherit a second ticker.
        if let Some(handle) = self.task.lock().take() {
            handle.abort();
        }
    }
}

impl Drop for PresenceUpdater {
    fn drop(&mut self) {
        self.stop_periodic_updates();
    }
}
