//! Shared connection-state record.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::connection::ConnectionStatus;
use crate::domain::ports::ConnectionStatePort;

/// Process-wide connection-state cell.
///
/// Single writer (the connectivity orchestrator), any number of readers.
/// The value trails the transport's real socket state; readers must treat
/// it as eventually consistent.
#[derive(Debug, Default)]
pub struct ConnectionStateCell {
    connected: AtomicBool,
}

impl ConnectionStateCell {
    /// Creates a cell recording `Disconnected`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            connected: AtomicBool::new(false),
        }
    }

    /// Returns the recorded status as a domain value.
    #[must_use]
    pub fn status(&self) -> ConnectionStatus {
        ConnectionStatus::from_reachable(self.connected.load(Ordering::SeqCst))
    }
}

impl ConnectionStatePort for ConnectionStateCell {
    fn set_connection_state(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}
