//! Expenses view
//!
//! Holds every expense; the category filter only narrows what is shown.

use super::{degrade, ViewScope};
use crate::api::ApiClient;
use crate::error::PfmResult;
use crate::models::{find_by_key, remove_by_key, upsert_by_key, Expense, ExpenseId};
use crate::services::ExpenseService;

#[derive(Debug, Clone, Default)]
pub struct ExpensesView {
    pub expenses: Vec<Expense>,
    category: Option<String>,
}

impl ExpensesView {
    pub async fn load(api: &ApiClient, scope: &ViewScope) -> PfmResult<Self> {
        degrade("expenses", Self::fetch(api, scope).await)
    }

    /// Load without degrading, for commands that must report a failed fetch
    pub async fn fetch(api: &ApiClient, scope: &ViewScope) -> PfmResult<Self> {
        let expenses = scope.run(ExpenseService::new(api).list()).await?;
        Ok(Self {
            expenses,
            category: None,
        })
    }

    /// Show only one category; `None` or an empty name clears the filter
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        self
    }

    pub fn category_filter(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Expenses matching the current filter
    pub fn visible(&self) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| self.category.as_ref().map_or(true, |c| &e.category == c))
            .collect()
    }

    /// Distinct categories in order of first appearance
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for expense in &self.expenses {
            if !seen.contains(&expense.category.as_str()) {
                seen.push(&expense.category);
            }
        }
        seen
    }

    pub fn find(&self, id: &ExpenseId) -> Option<&Expense> {
        find_by_key(&self.expenses, id)
    }

    /// Reconcile a created or updated expense
    pub fn apply(&mut self, expense: Expense) {
        upsert_by_key(&mut self.expenses, expense);
    }

    /// Drop a deleted expense; returns whether anything was removed
    pub fn remove(&mut self, id: &ExpenseId) -> bool {
        remove_by_key(&mut self.expenses, id) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::reports::fixtures::expense;
    use crate::views::testing::api;
    use httpmock::prelude::*;
    use serde_json::json;

    fn view() -> ExpensesView {
        ExpensesView {
            expenses: vec![
                expense("1", "Food", 10, None),
                expense("2", "Travel", 20, None),
                expense("3", "Food", 30, None),
            ],
            category: None,
        }
    }

    #[test]
    fn test_category_filter() {
        let filtered = view().with_category(Some("Food".into()));
        let ids: Vec<&str> = filtered.visible().iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids, ["1", "3"]);
        assert_eq!(filtered.categories(), ["Food", "Travel"]);
    }

    #[test]
    fn test_blank_filter_shows_everything() {
        assert_eq!(view().with_category(Some("  ".into())).visible().len(), 3);
    }

    #[test]
    fn test_apply_replaces_by_id() {
        let mut view = view();
        let mut updated = expense("2", "Travel", 99, None);
        updated.title = "Train".into();

        view.apply(updated);

        assert_eq!(view.expenses.len(), 3);
        assert_eq!(view.find(&ExpenseId::from("2")).unwrap().amount, Money::from_whole(99));
    }

    #[test]
    fn test_remove() {
        let mut view = view();
        assert!(view.remove(&ExpenseId::from("1")));
        assert!(!view.remove(&ExpenseId::from("1")));
        assert_eq!(view.expenses.len(), 2);
    }

    #[tokio::test]
    async fn test_application_error_degrades() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/expenses");
            then.status(401).json_body(json!({"message": "Unauthorized"}));
        });

        let api = api(&server);
        let view = ExpensesView::load(&api, &ViewScope::new()).await.unwrap();
        assert!(view.expenses.is_empty());
    }
}
