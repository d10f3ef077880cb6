//! Transport lifecycle port definition.

use crate::domain::platform::Platform;

/// Port for the persistent live-update transport.
///
/// Both operations are fire-and-forget from the caller's perspective: the
/// transport owns its own connect/retry/error handling and never fails
/// synchronously.
pub trait TransportPort: Send + Sync {
    /// Opens the persistent connection, handing the server a platform hint
    /// for capability negotiation.
    fn open_connection(&self, platform: Platform);

    /// Closes the persistent connection.
    ///
    /// `retryable` distinguishes a close that may be followed by a reconnect
    /// (network dropped) from the terminal close issued at teardown.
    fn close_connection(&self, retryable: bool);
}
