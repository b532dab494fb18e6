//! Budgets view: budgets plus the expenses they are measured against

use super::{degrade, ViewScope};
use crate::api::ApiClient;
use crate::error::PfmResult;
use crate::models::{upsert_by_key, Budget, Expense};
use crate::reports::BudgetUsageReport;
use crate::services::{BudgetService, ExpenseService};

#[derive(Debug, Clone, Default)]
pub struct BudgetsView {
    pub budgets: Vec<Budget>,
    pub expenses: Vec<Expense>,
}

impl BudgetsView {
    pub async fn load(api: &ApiClient, scope: &ViewScope) -> PfmResult<Self> {
        let budgets = degrade("budgets", scope.run(BudgetService::new(api).list()).await)?;
        let expenses = degrade("budgets", scope.run(ExpenseService::new(api).list()).await)?;
        Ok(Self { budgets, expenses })
    }

    pub fn usage(&self) -> BudgetUsageReport {
        BudgetUsageReport::generate(&self.budgets, &self.expenses)
    }

    pub fn apply(&mut self, budget: Budget) {
        upsert_by_key(&mut self.budgets, budget);
    }
}
