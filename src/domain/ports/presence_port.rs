//! Presence scheduler port definition.

/// Port for the periodic presence-update scheduler.
///
/// Presence updates refresh the user's online/away status with the server on
/// an interval; they are distinct from the transport itself.
pub trait PresencePort: Send + Sync {
    /// Starts the periodic update task. Starting an already-running
    /// scheduler is a no-op.
    fn start_periodic_updates(&self);

    /// Stops the periodic update task.
    fn stop_periodic_updates(&self);
}
