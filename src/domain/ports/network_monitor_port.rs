//! Network reachability monitor port definition.

use tokio::sync::mpsc;

use super::subscription::SubscriptionId;

/// Port for network-reachability notifications.
///
/// `subscribe` hands out an id and a receiver of reachability transitions
/// (`true` = reachable). Signals are delivered in the order the monitor
/// observed them, without debouncing or coalescing.
pub trait NetworkMonitorPort: Send + Sync {
    /// Registers a subscriber and returns its id and signal receiver.
    fn subscribe(&self) -> (SubscriptionId, mpsc::UnboundedReceiver<bool>);

    /// Releases a subscription. Releasing an unknown id is a no-op.
    fn release(&self, id: SubscriptionId);
}
