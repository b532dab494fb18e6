//! Goal service
//!
//! Goals are created once; afterwards only their current amount changes,
//! through a partial update.

use tracing::debug;

use crate::api::{envelope, ApiClient};
use crate::error::{PfmError, PfmResult};
use crate::models::{Goal, GoalProgressUpdate, Money, NewGoal};

const GOALS_PATH: &str = "/goals";

/// Service for savings goals
pub struct GoalService<'a> {
    api: &'a ApiClient,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> PfmResult<Vec<Goal>> {
        let body = self.api.get(GOALS_PATH).await?;
        envelope::list(body)
    }

    pub async fn create(&self, goal: &NewGoal) -> PfmResult<Goal> {
        goal.validate()
            .map_err(|e| PfmError::Validation(e.to_string()))?;

        let body = self.api.post(GOALS_PATH, goal).await?;
        let created: Goal = envelope::entity(body)?;
        debug!(id = %created.id, "goal created");
        Ok(created)
    }

    /// Add `contribution` to the goal's current amount
    pub async fn add_progress(&self, goal: &Goal, contribution: Money) -> PfmResult<Goal> {
        let update = GoalProgressUpdate::contribute(goal, contribution)
            .map_err(|e| PfmError::Validation(e.to_string()))?;

        let path = format!("{}/{}", GOALS_PATH, goal.id);
        let body = self.api.put(&path, &update).await?;
        let updated: Goal = envelope::entity(body)?;
        debug!(id = %updated.id, current = %updated.current_amount, "goal progress updated");
        Ok(updated)
    }
}
