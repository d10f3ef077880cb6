//! Shared ordered call recorder used by the port mocks.

use std::sync::Arc;

use parking_lot::Mutex;

/// Records port invocations in arrival order across a set of mocks.
///
/// Cloning shares the underlying log, so one recorder can be threaded
/// through every mock a test wires together and the test can assert on the
/// exact interleaving.
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a call to the log.
    pub fn record(&self, call: impl Into<String>) {
        self.calls.lock().push(call.into());
    }

    /// Returns a snapshot of the recorded calls.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Returns how many recorded calls match the given name prefix.
    #[must_use]
    pub fn count_of(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }
}
