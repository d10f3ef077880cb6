//! Channel loader port definition.

use async_trait::async_trait;

use crate::domain::entities::TeamId;
use crate::domain::errors::LoadError;

/// Port for the store-backed channel loading operations.
///
/// Implementations dispatch into the client's data store; every operation is
/// scoped to the signed-in user's session.
#[async_trait]
pub trait ChannelLoaderPort: Send + Sync {
    /// Fetches the channel list for the team unless it is already fresh.
    async fn load_channels_if_necessary(&self, team_id: &TeamId) -> Result<(), LoadError>;

    /// Fetches profiles and team members backing the sidebar.
    async fn load_profiles_and_team_members(&self, team_id: &TeamId) -> Result<(), LoadError>;

    /// Selects the channel the team should open on (last visited or default).
    async fn select_initial_channel(&self, team_id: &TeamId) -> Result<(), LoadError>;

    /// Selects the first team the user is still a member of.
    async fn select_first_available_team(&self) -> Result<(), LoadError>;
}

#[cfg(test)]
pub mod mock {
    use std::collections::{HashMap, HashSet};
    use std::sync::Arc;
    use std::time::Duration;

    use parking_lot::Mutex;

    use super::*;
    use crate::domain::ports::recording::Recorder;

    /// Recording channel loader with scriptable per-team failures and delays.
    pub struct MockChannelLoader {
        recorder: Recorder,
        failing_loads: Mutex<HashSet<String>>,
        load_delays: Mutex<HashMap<String, Duration>>,
        fail_selection: Mutex<bool>,
    }

    impl MockChannelLoader {
        /// Creates a mock recording into the given log.
        pub fn new(recorder: Recorder) -> Arc<Self> {
            Arc::new(Self {
                recorder,
                failing_loads: Mutex::new(HashSet::new()),
                load_delays: Mutex::new(HashMap::new()),
                fail_selection: Mutex::new(false),
            })
        }

        /// Makes `load_channels_if_necessary` fail for the given team.
        pub fn fail_load_for(&self, team_id: &TeamId) {
            self.failing_loads.lock().insert(team_id.as_str().to_string());
        }

        /// Delays `load_channels_if_necessary` for the given team.
        pub fn delay_load_for(&self, team_id: &TeamId, delay: Duration) {
            self.load_delays
                .lock()
                .insert(team_id.as_str().to_string(), delay);
        }

        /// Makes `select_initial_channel` fail for every team.
        pub fn fail_selection(&self) {
            *self.fail_selection.lock() = true;
        }
    }

    #[async_trait]
    impl ChannelLoaderPort for MockChannelLoader {
        async fn load_channels_if_necessary(&self, team_id: &TeamId) -> Result<(), LoadError> {
            let delay = self.load_delays.lock().get(team_id.as_str()).copied();
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }

            self.recorder
                .record(format!("load_channels_if_necessary({team_id})"));

            if self.failing_loads.lock().contains(team_id.as_str()) {
                Err(LoadError::network("mock load failure"))
            } else {
                Ok(())
            }
        }

        async fn load_profiles_and_team_members(&self, team_id: &TeamId) -> Result<(), LoadError> {
            self.recorder
                .record(format!("load_profiles_and_team_members({team_id})"));
            Ok(())
        }

        async fn select_initial_channel(&self, team_id: &TeamId) -> Result<(), LoadError> {
            self.recorder
                .record(format!("select_initial_channel({team_id})"));

            if *self.fail_selection.lock() {
                Err(LoadError::selection_failed("mock selection failure"))
            } else {
                Ok(())
            }
        }

        async fn select_first_available_team(&self) -> Result<(), LoadError> {
            self.recorder.record("select_first_available_team()");
            Ok(())
        }
    }
}
