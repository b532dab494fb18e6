//! Budget service

use tracing::debug;

use crate::api::{envelope, ApiClient};
use crate::error::{PfmError, PfmResult};
use crate::models::{Budget, NewBudget};

const BUDGETS_PATH: &str = "/budgets";

/// Service for budget management
pub struct BudgetService<'a> {
    api: &'a ApiClient,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> PfmResult<Vec<Budget>> {
        let body = self.api.get(BUDGETS_PATH).await?;
        envelope::list(body)
    }

    pub async fn create(&self, budget: &NewBudget) -> PfmResult<Budget> {
        budget
            .validate()
            .map_err(|e| PfmError::Validation(e.to_string()))?;

        let body = self.api.post(BUDGETS_PATH, budget).await?;
        let created: Budget = envelope::entity(body)?;
        debug!(id = %created.id, category = %created.category, "budget created");
        Ok(created)
    }
}
