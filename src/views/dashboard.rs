//! Dashboard view: income, expenses and budgets fetched concurrently

use super::{degrade, ViewScope};
use crate::api::ApiClient;
use crate::error::{PfmError, PfmResult};
use crate::models::{Budget, Expense, Income};
use crate::reports::DashboardSummary;
use crate::services::{BudgetService, ExpenseService, IncomeService};

#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    pub income: Vec<Income>,
    pub expenses: Vec<Expense>,
    pub budgets: Vec<Budget>,
}

impl DashboardView {
    /// Issue the three GETs at once and wait for all of them
    ///
    /// One failed request empties the whole view.
    pub async fn load(api: &ApiClient, scope: &ViewScope) -> PfmResult<Self> {
        let expense_service = ExpenseService::new(api);
        let budget_service = BudgetService::new(api);
        let income_service = IncomeService::new(api);

        let fetch = async {
            let (expenses, budgets, income) = tokio::try_join!(
                expense_service.list(),
                budget_service.list(),
                income_service.list(),
            )?;
            Ok::<_, PfmError>(Self {
                income,
                expenses,
                budgets,
            })
        };

        degrade("dashboard", scope.run(fetch).await)
    }

    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary::generate(&self.income, &self.expenses, &self.budgets)
    }
}
