//! Infrastructure layer with adapters for external services.

/// Application configuration.
pub mod config;
/// Shared connection-state record.
pub mod connection_cell;
/// Logging initialization.
pub mod logging;
/// Team-membership event bus.
pub mod membership_bus;
/// Network reachability fan-out.
pub mod network_hub;
/// Periodic presence updates.
pub mod presence;
/// Session state persistence.
pub mod state_store;

pub use config::{AppConfig, CliArgs, LogLevel};
pub use connection_cell::ConnectionStateCell;
pub use membership_bus::MembershipBus;
pub use network_hub::NetworkMonitorHub;
pub use presence::{PresenceUpdater, StatusRefresh};
pub use state_store::{SessionState, SessionStateStore};
