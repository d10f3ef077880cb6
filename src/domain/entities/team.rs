//! Team entity.

use serde::{Deserialize, Serialize};

/// Unique identifier for a team, issued by the chat backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(String);

impl TeamId {
    /// Creates a team id from its backend representation.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether the id is empty (absent team).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TeamId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TeamId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A team the user is a member of.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    id: TeamId,
    display_name: String,
}

impl Team {
    /// Creates a new team with the given id and display name.
    #[must_use]
    pub fn new(id: impl Into<TeamId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }

    /// Returns the team id.
    #[must_use]
    pub const fn id(&self) -> &TeamId {
        &self.id
    }

    /// Returns the team display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_creation() {
        let team = Team::new("team-1", "Engineering");

        assert_eq!(team.id().as_str(), "team-1");
        assert_eq!(team.display_name(), "Engineering");
    }

    #[test]
    fn test_team_id_display() {
        let id = TeamId::new("abc123");
        assert_eq!(format!("{id}"), "abc123");
        assert!(!id.is_empty());
        assert!(TeamId::new("").is_empty());
    }
}
