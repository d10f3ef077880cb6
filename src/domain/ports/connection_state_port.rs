//! Connection-state record port definition.

/// Port for the shared connection-state record.
///
/// A pure state write with no side effect beyond storage. Exactly one
/// writer (the connectivity orchestrator); readers must treat the value as
/// eventually consistent with the transport's real socket state.
pub trait ConnectionStatePort: Send + Sync {
    /// Records the connection state.
    fn set_connection_state(&self, connected: bool);

    /// Returns the recorded connection state.
    fn is_connected(&self) -> bool;
}
