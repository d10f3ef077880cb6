//! Connection status as recorded for the rest of the client.

/// Reachability-derived connection status of the persistent transport.
///
/// This is a state record, not the socket itself: readers must treat it as
/// eventually consistent with the transport's real state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    /// The transport is (believed to be) open.
    Connected,
    /// The transport is closed or the network is unreachable.
    #[default]
    Disconnected,
}

impl ConnectionStatus {
    /// Maps a reachability signal to a status.
    #[must_use]
    pub const fn from_reachable(reachable: bool) -> Self {
        if reachable {
            Self::Connected
        } else {
            Self::Disconnected
        }
    }

    /// Returns whether this status is `Connected`.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connected => write!(f, "Connected"),
            Self::Disconnected => write!(f, "Disconnected"),
        }
    }
}
