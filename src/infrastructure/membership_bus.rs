//! Team-membership event bus.

use std::collections::HashMap;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tracing::debug;

use crate::domain::events::MembershipEvent;
use crate::domain::ports::{MembershipEventsPort, SubscriptionId};

/// In-process bus for team-membership events.
///
/// Injected into subscribers instead of living as ambient global state;
/// subscription lifetime is the subscriber's responsibility. The session
/// layer publishes events it receives from the server.
#[derive(Default)]
pub struct MembershipBus {
    subscribers: Mutex<HashMap<SubscriptionId, mpsc::UnboundedSender<MembershipEvent>>>,
}

impl MembershipBus {
    /// Creates a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers an event to every live subscriber.
    pub fn publish(&self, event: MembershipEvent) {
        self.subscribers
            .lock()
            .retain(|id, tx| match tx.send(event.clone()) {
                Ok(()) => true,
                Err(_) => {
                    debug!(subscription = %id, "Pruning dead membership subscriber");
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

impl MembershipEventsPort for MembershipBus {
    fn subscribe(&self) -> (SubscriptionId, mpsc::UnboundedReceiver<MembershipEvent>) {
        let id = SubscriptionId::new();
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.lock().insert(id, tx);
        (id, rx)
    }

    fn release(&self, id: SubscriptionId) {
        self.subscribers.lock().remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_events_fan_out_in_order() {
        let bus = MembershipBus::new();
        let (_id, mut rx) = bus.subscribe();

        bus.publish(MembershipEvent::left_team("team-a"));
        bus.publish(MembershipEvent::left_team("team-b"));

        assert_eq!(rx.recv().await, Some(MembershipEvent::left_team("team-a")));
        assert_eq!(rx.recv().await, Some(MembershipEvent::left_team("team-b")));
    }

    #[tokio::test]
    async fn test_release_stops_delivery() {
        let bus = MembershipBus::new();
        let (id, mut rx) = bus.subscribe();

        bus.release(id);
        bus.publish(MembershipEvent::left_team("team-a"));

        assert!(rx.try_recv().is_err());
        assert_eq!(bus.subscriber_count(), 0);
    }
}
