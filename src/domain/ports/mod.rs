//! Capability ports consumed by the lifecycle controller.

mod channel_loader_port;
mod connection_state_port;
mod membership_events_port;
mod network_monitor_port;
mod presence_port;
mod subscription;
mod team_change_port;
mod transport_port;

pub use channel_loader_port::ChannelLoaderPort;
pub use connection_state_port::ConnectionStatePort;
pub use membership_events_port::MembershipEventsPort;
pub use network_monitor_port::NetworkMonitorPort;
pub use presence_port::PresencePort;
pub use subscription::SubscriptionId;
pub use team_change_port::TeamChangePort;
pub use transport_port::TransportPort;

#[cfg(test)]
pub(crate) mod recording;
