//! Income service
//!
//! Income can be listed and created; the backend offers no edit or delete.

use tracing::debug;

use crate::api::{envelope, ApiClient};
use crate::error::{PfmError, PfmResult};
use crate::models::{Income, NewIncome};

const INCOME_PATH: &str = "/income";

/// Service for income entries
pub struct IncomeService<'a> {
    api: &'a ApiClient,
}

impl<'a> IncomeService<'a> {
    /// Create a new income service
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Fetch every income entry of the signed-in user
    pub async fn list(&self) -> PfmResult<Vec<Income>> {
        let body = self.api.get(INCOME_PATH).await?;
        envelope::list(body)
    }

    /// Record a new income entry
    pub async fn create(&self, income: &NewIncome) -> PfmResult<Income> {
        income
            .validate()
            .map_err(|e| PfmError::Validation(e.to_string()))?;

        let body = self.api.post(INCOME_PATH, income).await?;
        let created: Income = envelope::entity(body)?;
        debug!(id = %created.id, "income created");
        Ok(created)
    }
}
