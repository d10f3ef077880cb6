//! Domain layer with core business entities and port definitions.

/// Connection status definitions.
pub mod connection;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Membership event definitions.
pub mod events;
/// Platform hint definitions.
pub mod platform;
/// Port definitions.
pub mod ports;

pub use connection::ConnectionStatus;
pub use entities::{Channel, ChannelId, Team, TeamId};
pub use errors::LoadError;
pub use events::MembershipEvent;
pub use platform::Platform;
pub use ports::{ChannelLoaderPort, PresencePort, TransportPort};
