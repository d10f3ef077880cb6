//! Per-team channel-load sequencing.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use crate::domain::entities::TeamId;
use crate::domain::errors::LoadError;
use crate::domain::ports::ChannelLoaderPort;

/// What to do when the channel-list fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Still attempt channel selection so the UI has a best-effort channel
    /// to show instead of hanging on a load error.
    #[default]
    ProceedOnFailure,
    /// Return the load error without attempting selection.
    SurfaceFailure,
}

/// Brings the client into a state where a channel is selected for a team.
///
/// One sequencer serves any number of teams; invoking [`run`] for a new team
/// while an older chain is still pending is legal. Chains are never
/// cancelled: a superseded chain runs to completion, including its selection
/// step, and whichever chain resolves last determines the visible selection.
///
/// [`run`]: LoadSequencer::run
pub struct LoadSequencer {
    loader: Arc<dyn ChannelLoaderPort>,
    policy: LoadPolicy,
    channels_request_failed: Arc<AtomicBool>,
}

impl LoadSequencer {
    /// Creates a sequencer over the given loader.
    #[must_use]
    pub fn new(loader: Arc<dyn ChannelLoaderPort>, policy: LoadPolicy) -> Self {
        Self {
            loader,
            policy,
            channels_request_failed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns the shared channels-request-failed flag.
    ///
    /// The host UI reads this to show a retry affordance instead of a
    /// perpetual loading indicator when no channel could be selected.
    #[must_use]
    pub fn failure_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.channels_request_failed)
    }

    /// Returns whether the most recent channel-list fetch failed.
    #[must_use]
    pub fn channels_request_failed(&self) -> bool {
        self.channels_request_failed.load(Ordering::SeqCst)
    }

    /// Runs the load sequence for the given team.
    ///
    /// Fetches the channel list, issues the sidebar profile load without
    /// awaiting it, then selects the team's initial channel. On a fetch
    /// failure the failure flag is set and, under
    /// [`LoadPolicy::ProceedOnFailure`], selection is still attempted.
    ///
    /// # Errors
    ///
    /// Returns the selection error, or under [`LoadPolicy::SurfaceFailure`]
    /// the fetch error.
    pub async fn run(&self, team_id: &TeamId) -> Result<(), LoadError> {
        debug!(team_id = %team_id, "Starting channel load sequence");

        match self.loader.load_channels_if_necessary(team_id).await {
            Ok(()) => {
                self.channels_request_failed.store(false, Ordering::SeqCst);
                self.issue_sidebar_load(team_id);
            }
            Err(e) => {
                warn!(team_id = %team_id, error = %e, "Channel list fetch failed");
                self.channels_request_failed.store(true, Ordering::SeqCst);

                if self.policy == LoadPolicy::SurfaceFailure {
                    return Err(e);
                }
            }
        }

        let result = self.loader.select_initial_channel(team_id).await;
        debug!(team_id = %team_id, ok = result.is_ok(), "Channel load sequence finished");
        result
    }

    // Issued, never awaited; its own failure is not fatal to the sequence.
    fn issue_sidebar_load(&self, team_id: &TeamId) {
        let loader = Arc::clone(&self.loader);
        let team_id = team_id.clone();
        tokio::spawn(async move {
            if let Err(e) = loader.load_profiles_and_team_members(&team_id).await {
                debug!(team_id = %team_id, error = %e, "Sidebar profile load failed");
            }
        });
    }
}
