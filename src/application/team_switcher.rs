//! Explicit team reselection from a team list surface.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::TeamId;
use crate::domain::errors::LoadError;
use crate::domain::ports::TeamChangePort;

/// Handles a user tapping a team row in the team-switcher drawer.
///
/// Only delegates to the store when the chosen team actually differs from
/// the current one; loading is retriggered indirectly once the controller
/// observes the resulting team-selection change.
#[derive(Clone)]
pub struct TeamSwitcher {
    team_change: Arc<dyn TeamChangePort>,
}

impl TeamSwitcher {
    /// Creates a switcher over the given team-change capability.
    #[must_use]
    pub const fn new(team_change: Arc<dyn TeamChangePort>) -> Self {
        Self { team_change }
    }

    /// Requests a switch to `chosen`.
    ///
    /// The presenting surface closes itself after the tap regardless of the
    /// outcome; the returned bool only reports whether a change was actually
    /// requested.
    ///
    /// # Errors
    ///
    /// Returns the store's error when the change request fails.
    pub async fn select_team(
        &self,
        chosen: &TeamId,
        current: Option<&TeamId>,
    ) -> Result<bool, LoadError> {
        if current == Some(chosen) {
            debug!(team_id = %chosen, "Team already current, nothing to do");
            return Ok(false);
        }

        info!(team_id = %chosen, "Switching team");
        self.team_change.handle_team_change(chosen).await?;
        Ok(true)
    }
}
