//! Team change port definition.

use async_trait::async_trait;

use crate::domain::entities::TeamId;
use crate::domain::errors::LoadError;

/// Port for requesting a current-team change in the client's data store.
///
/// The store updates its current-team record; the lifecycle controller
/// observes that change through team selection and reloads accordingly.
#[async_trait]
pub trait TeamChangePort: Send + Sync {
    /// Makes the given team current.
    async fn handle_team_change(&self, team_id: &TeamId) -> Result<(), LoadError>;
}
