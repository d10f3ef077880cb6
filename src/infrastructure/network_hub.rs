//! Network reachability fan-out hub.

use std::collections::HashMap;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tracing::debug;

use crate::domain::ports::{NetworkMonitorPort, SubscriptionId};

/// In-process fan-out for reachability signals.
///
/// The platform shell feeds OS reachability callbacks into [`publish`];
/// subscribers receive every transition in publish order. Dead receivers
/// are pruned on publish.
///
/// [`publish`]: NetworkMonitorHub::publish
#[derive(Default)]
pub struct NetworkMonitorHub {
    subscribers: Mutex<HashMap<SubscriptionId, mpsc::UnboundedSender<bool>>>,
}

impl NetworkMonitorHub {
    /// Creates a hub with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers a reachability transition to every live subscriber.
    pub fn publish(&self, reachable: bool) {
        self.subscribers
            .lock()
            .retain(|id, tx| match tx.send(reachable) {
                Ok(()) => true,
                Err(_) => {
                    debug!(subscription = %id, "Pruning dead reachability subscriber");
                    false
                }
            });
    }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }
}

impl NetworkMonitorPort for NetworkMonitorHub {
    fn subscribe(&self) -> (SubscriptionId, mpsc::UnboundedReceiver<bool>) {
        let id = SubscriptionId::new();
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.lock().insert(id, tx);
        (id, rx)
    }

    fn release(&self, id: SubscriptionId) {
        self.subscribers.lock().remove(&id);
    }
}
