//! Team-membership event bus port definition.

use tokio::sync::mpsc;

use super::subscription::SubscriptionId;
use crate::domain::events::MembershipEvent;

/// Port for the injected team-membership event bus.
///
/// Replaces an ambient process-wide emitter: the bus is passed into whoever
/// needs it, and subscription lifetime is tied explicitly to the
/// subscriber's own lifetime.
pub trait MembershipEventsPort: Send + Sync {
    /// Registers a subscriber and returns its id and event receiver.
    fn subscribe(&self) -> (SubscriptionId, mpsc::UnboundedReceiver<MembershipEvent>);

    /// Releases a subscription. Releasing an unknown id is a no-op.
    fn release(&self, id: SubscriptionId);
}
