//! Expense service
//!
//! Expenses are the one resource with full create, update and delete. An
//! update always resends the whole draft.

use tracing::debug;

use crate::api::{envelope, ApiClient};
use crate::error::{PfmError, PfmResult};
use crate::models::{Expense, ExpenseDraft, ExpenseId};

const EXPENSES_PATH: &str = "/expenses";

/// Service for expense management
pub struct ExpenseService<'a> {
    api: &'a ApiClient,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> PfmResult<Vec<Expense>> {
        let body = self.api.get(EXPENSES_PATH).await?;
        envelope::list(body)
    }

    pub async fn create(&self, draft: &ExpenseDraft) -> PfmResult<Expense> {
        Self::validate(draft)?;

        let body = self.api.post(EXPENSES_PATH, draft).await?;
        let created: Expense = envelope::entity(body)?;
        debug!(id = %created.id, "expense created");
        Ok(created)
    }

    pub async fn update(&self, id: &ExpenseId, draft: &ExpenseDraft) -> PfmResult<Expense> {
        Self::validate(draft)?;

        let body = self.api.put(&Self::item_path(id), draft).await?;
        let updated: Expense = envelope::entity(body)?;
        debug!(id = %updated.id, "expense updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: &ExpenseId) -> PfmResult<()> {
        self.api.delete(&Self::item_path(id)).await?;
        debug!(%id, "expense deleted");
        Ok(())
    }

    fn item_path(id: &ExpenseId) -> String {
        format!("{}/{}", EXPENSES_PATH, id)
    }

    fn validate(draft: &ExpenseDraft) -> PfmResult<()> {
        draft
            .validate()
            .map_err(|e| PfmError::Validation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::session::MemoryTokenStore;
    use chrono::NaiveDate;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::sync::Arc;

    fn api(server: &MockServer) -> ApiClient {
        ApiClient::new(server.url("/api"), Arc::new(MemoryTokenStore::with_token("t"))).unwrap()
    }

    fn draft() -> ExpenseDraft {
        let mut draft = ExpenseDraft::new(
            "Rent",
            Money::from_whole(15000),
            "Housing",
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        );
        draft.set_recurring(true);
        draft
    }

    #[tokio::test]
    async fn test_create_sends_full_payload() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/expenses").json_body(json!({
                "title": "Rent",
                "description": "",
                "amount": 15000,
                "category": "Housing",
                "date": "2025-02-01",
                "isRecurring": true,
                "frequency": "monthly"
            }));
            then.status(201).json_body(json!({"data": {
                "_id": "e1", "title": "Rent", "amount": 15000, "category": "Housing",
                "date": "2025-02-01T00:00:00.000Z", "isRecurring": true, "frequency": "monthly"
            }}));
        });

        let api = api(&server);
        let created = ExpenseService::new(&api).create(&draft()).await.unwrap();

        mock.assert();
        assert_eq!(created.id.as_str(), "e1");
        assert!(created.is_recurring);
    }

    #[tokio::test]
    async fn test_update_targets_item_path() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT).path("/api/expenses/e1");
            then.status(200).json_body(json!({"data": {
                "_id": "e1", "title": "Rent", "amount": 16000, "category": "Housing"
            }}));
        });

        let api = api(&server);
        let mut draft = draft();
        draft.amount = Money::from_whole(16000);

        let updated = ExpenseService::new(&api)
            .update(&ExpenseId::from("e1"), &draft)
            .await
            .unwrap();

        mock.assert();
        assert_eq!(updated.amount, Money::from_whole(16000));
    }

    #[tokio::test]
    async fn test_delete_surfaces_backend_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/api/expenses/missing");
            then.status(404).json_body(json!({"message": "Expense not found"}));
        });

        let api = api(&server);
        let err = ExpenseService::new(&api)
            .delete(&ExpenseId::from("missing"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Expense not found");
    }

    #[tokio::test]
    async fn test_list_without_data_is_empty() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/expenses");
            then.status(200).json_body(json!({"success": true}));
        });

        let api = api(&server);
        assert!(ExpenseService::new(&api).list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_draft_is_rejected_locally() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/expenses");
            then.status(201).json_body(json!({"data": {}}));
        });

        let api = api(&server);
        let mut bad = draft();
        bad.title.clear();

        let err = ExpenseService::new(&api).create(&bad).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(mock.calls(), 0);
    }
}
