//! Channel entity.

use serde::{Deserialize, Serialize};

use super::team::TeamId;

/// Unique identifier for a channel, issued by the chat backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelId(String);

impl ChannelId {
    /// Creates a channel id from its backend representation.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ChannelId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ChannelId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A channel within a team.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Channel {
    id: ChannelId,
    team_id: TeamId,
    display_name: String,
}

impl Channel {
    /// Creates a new channel with the given id, owning team, and name.
    #[must_use]
    pub fn new(
        id: impl Into<ChannelId>,
        team_id: impl Into<TeamId>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            team_id: team_id.into(),
            display_name: display_name.into(),
        }
    }

    /// Returns the channel id.
    #[must_use]
    pub const fn id(&self) -> &ChannelId {
        &self.id
    }

    /// Returns the id of the team the channel belongs to.
    #[must_use]
    pub const fn team_id(&self) -> &TeamId {
        &self.team_id
    }

    /// Returns the channel display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_creation() {
        let channel = Channel::new("chan-1", "team-1", "town-square");

        assert_eq!(channel.id().as_str(), "chan-1");
        assert_eq!(channel.team_id().as_str(), "team-1");
        assert_eq!(channel.display_name(), "town-square");
    }
}
