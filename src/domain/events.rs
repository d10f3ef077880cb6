//! Team-membership events delivered over the injected event bus.

use crate::domain::entities::TeamId;

/// A membership change affecting the signed-in user.
///
/// Published by whatever owns the server session (push events, moderation
/// actions) and consumed by the lifecycle controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipEvent {
    /// The user left, or was removed from, the named team.
    LeftTeam {
        /// Team the user is no longer a member of.
        team_id: TeamId,
    },
}

impl MembershipEvent {
    /// Creates a left-team event.
    #[must_use]
    pub fn left_team(team_id: impl Into<TeamId>) -> Self {
        Self::LeftTeam {
            team_id: team_id.into(),
        }
    }

    /// Returns the team this event concerns.
    #[must_use]
    pub const fn team_id(&self) -> &TeamId {
        match self {
            Self::LeftTeam { team_id } => team_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_team_event() {
        let event = MembershipEvent::left_team("team-7");
        assert_eq!(event.team_id().as_str(), "team-7");
    }
}
