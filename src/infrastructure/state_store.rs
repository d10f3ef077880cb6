//! Session state persistence.

use std::path::PathBuf;

use color_eyre::eyre::{Result, WrapErr};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::domain::entities::{ChannelId, TeamId};

/// Last visited team and channel, persisted so the client reopens in place.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Team the client was last scoped to.
    pub last_team_id: Option<TeamId>,
    /// Channel the client last had open.
    pub last_channel_id: Option<ChannelId>,
}

/// Stores [`SessionState`] as `state.toml` under the project config dir.
#[derive(Clone)]
pub struct SessionStateStore {
    state_path: Option<PathBuf>,
}

impl Default for SessionStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStateStore {
    /// Creates a store under the platform config directory.
    ///
    /// If project directories cannot be determined, persistence is disabled
    /// and a warning is logged.
    #[must_use]
    pub fn new() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("com", "tecknian", "huddle") {
            let state_path = proj_dirs.config_dir().join("state.toml");
            Self {
                state_path: Some(state_path),
            }
        } else {
            tracing::warn!("Failed to determine project directories. State persistence disabled.");
            Self { state_path: None }
        }
    }

    /// Creates a store at an explicit path.
    #[must_use]
    pub const fn at(state_path: PathBuf) -> Self {
        Self {
            state_path: Some(state_path),
        }
    }

    /// Loads the persisted state from disk.
    ///
    /// A missing or unparseable file yields the default state.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing state file cannot be read.
    pub async fn load(&self) -> Result<SessionState> {
        let Some(path) = &self.state_path else {
            return Ok(SessionState::default());
        };

        if !path.exists() {
            return Ok(SessionState::default());
        }

        let content = fs::read_to_string(path)
            .await
            .wrap_err("Failed to read state file")?;

        match toml::from_str(&content) {
            Ok(state) => Ok(state),
            Err(_) => Ok(SessionState::default()),
        }
    }

    /// Saves the current state to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created or the
    /// state file cannot be written.
    pub async fn save(
        &self,
        team_id: Option<TeamId>,
        channel_id: Option<ChannelId>,
    ) -> Result<()> {
        let Some(path) = &self.state_path else {
            return Ok(());
        };

        let state = SessionState {
            last_team_id: team_id,
            last_channel_id: channel_id,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .wrap_err("Failed to create config directory")?;
        }

        let content = toml::to_string(&state).wrap_err("Failed to serialize state")?;

        fs::write(path, content)
            .await
            .wrap_err("Failed to write state file")?;

        Ok(())
    }
}
