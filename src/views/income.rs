//! Income view

use super::{degrade, ViewScope};
use crate::api::ApiClient;
use crate::error::PfmResult;
use crate::models::{upsert_by_key, Income, Money};
use crate::services::IncomeService;

#[derive(Debug, Clone, Default)]
pub struct IncomeView {
    pub income: Vec<Income>,
}

impl IncomeView {
    pub async fn load(api: &ApiClient, scope: &ViewScope) -> PfmResult<Self> {
        let income = degrade("income", scope.run(IncomeService::new(api).list()).await)?;
        Ok(Self { income })
    }

    pub fn total(&self) -> Money {
        self.income.iter().map(|i| i.amount).sum()
    }

    /// Reconcile a created entry into the local list
    pub fn apply(&mut self, income: Income) {
        upsert_by_key(&mut self.income, income);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IncomeId;
    use crate::views::testing::api;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_transport_failure_gives_empty_list() {
        let api = ApiClient::new(
            "http://127.0.0.1:1/api",
            std::sync::Arc::new(crate::session::MemoryTokenStore::new()),
        )
        .unwrap();

        let view = IncomeView::load(&api, &ViewScope::new()).await.unwrap();
        assert!(view.income.is_empty());
        assert_eq!(view.total(), Money::zero());
    }

    #[tokio::test]
    async fn test_apply_appends_new_entry() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/income");
            then.status(200)
                .json_body(json!({"data": [{"_id": "i1", "source": "Salary", "amount": 100}]}));
        });

        let api = api(&server);
        let mut view = IncomeView::load(&api, &ViewScope::new()).await.unwrap();
        view.apply(Income {
            id: IncomeId::from("i2"),
            source: "Gift".into(),
            amount: Money::from_whole(50),
        });

        assert_eq!(view.income.len(), 2);
        assert_eq!(view.total(), Money::from_whole(150));
    }
}
