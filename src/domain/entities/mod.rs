//! Domain entity definitions.

mod channel;
mod team;

pub use channel::{Channel, ChannelId};
pub use team::{Team, TeamId};
