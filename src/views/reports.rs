//! Reports view: expenses, income and budgets for the financial report

use super::{degrade, ViewScope};
use crate::api::ApiClient;
use crate::error::{PfmError, PfmResult};
use crate::models::{Budget, Expense, Income};
use crate::reports::{DateRange, FinancialReport};
use crate::services::{BudgetService, ExpenseService, IncomeService};

#[derive(Debug, Clone, Default)]
pub struct ReportsView {
    pub expenses: Vec<Expense>,
    pub income: Vec<Income>,
    pub budgets: Vec<Budget>,
}

impl ReportsView {
    pub async fn load(api: &ApiClient, scope: &ViewScope) -> PfmResult<Self> {
        let fetch = async {
            let expenses = ExpenseService::new(api).list().await?;
            let income = IncomeService::new(api).list().await?;
            let budgets = BudgetService::new(api).list().await?;
            Ok::<_, PfmError>(Self {
                expenses,
                income,
                budgets,
            })
        };

        degrade("reports", scope.run(fetch).await)
    }

    pub fn report(&self, range: DateRange) -> FinancialReport {
        FinancialReport::generate(&self.income, &self.expenses, &self.budgets, range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::views::testing::api;
    use chrono::NaiveDate;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_report_over_loaded_lists() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/expenses");
            then.status(200).json_body(json!({"data": [
                {"_id": "e1", "title": "Jan", "amount": 100, "category": "Food", "date": "2025-01-15"},
                {"_id": "e2", "title": "Feb", "amount": 200, "category": "Food", "date": "2025-02-15"}
            ]}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/income");
            then.status(200).json_body(json!({"data": [{"_id": "i1", "source": "Pay", "amount": 1000}]}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/budgets");
            then.status(200).json_body(json!({"data": []}));
        });

        let api = api(&server);
        let view = ReportsView::load(&api, &ViewScope::new()).await.unwrap();
        let report = view.report(DateRange::new(
            NaiveDate::from_ymd_opt(2025, 2, 1),
            None,
        ));

        assert_eq!(report.total_expense, Money::from_whole(200));
        assert_eq!(report.savings, Money::from_whole(800));
    }
}
