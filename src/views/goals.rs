//! Goals view

use super::{degrade, ViewScope};
use crate::api::ApiClient;
use crate::error::PfmResult;
use crate::models::{find_by_key, upsert_by_key, Goal, GoalId};
use crate::reports::GoalProgressReport;
use crate::services::GoalService;

#[derive(Debug, Clone, Default)]
pub struct GoalsView {
    pub goals: Vec<Goal>,
}

impl GoalsView {
    pub async fn load(api: &ApiClient, scope: &ViewScope) -> PfmResult<Self> {
        degrade("goals", Self::fetch(api, scope).await)
    }

    /// Load without degrading, for commands that must report a failed fetch
    pub async fn fetch(api: &ApiClient, scope: &ViewScope) -> PfmResult<Self> {
        let goals = scope.run(GoalService::new(api).list()).await?;
        Ok(Self { goals })
    }

    pub fn find(&self, id: &GoalId) -> Option<&Goal> {
        find_by_key(&self.goals, id)
    }

    pub fn progress(&self) -> GoalProgressReport {
        GoalProgressReport::generate(&self.goals)
    }

    /// Reconcile a created goal or a progress update
    pub fn apply(&mut self, goal: Goal) {
        upsert_by_key(&mut self.goals, goal);
    }
}
