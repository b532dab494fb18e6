//! Savings goal model
//!
//! Goals track progress toward a target amount. Only `currentAmount` is ever
//! changed after creation, through a partial update.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::dates;
use super::ids::GoalId;
use super::money::Money;

/// Amount added by a quick contribution when none is given
pub const DEFAULT_CONTRIBUTION: Money = Money::from_whole(1000);

/// A savings goal as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(rename = "_id", alias = "id")]
    pub id: GoalId,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub title: String,

    #[serde(default)]
    pub target_amount: Money,

    #[serde(default)]
    pub current_amount: Money,

    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub deadline: Option<NaiveDate>,
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} / {}",
            self.title, self.current_amount, self.target_amount
        )
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    MissingTitle,
    NonPositiveTarget,
    NegativeCurrent,
    NonPositiveContribution,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "Goal title is required"),
            Self::NonPositiveTarget => write!(f, "Goal target amount must be greater than zero"),
            Self::NegativeCurrent => write!(f, "Goal current amount cannot be negative"),
            Self::NonPositiveContribution => {
                write!(f, "Contribution must be greater than zero")
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}

/// Body of `POST /goals`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub title: String,
    pub target_amount: Money,
    pub current_amount: Money,
    pub deadline: Option<NaiveDate>,
}

impl NewGoal {
    pub fn new(title: impl Into<String>, target_amount: Money) -> Self {
        Self {
            title: title.into().trim().to_string(),
            target_amount,
            current_amount: Money::zero(),
            deadline: None,
        }
    }

    pub fn with_current(mut self, current_amount: Money) -> Self {
        self.current_amount = current_amount;
        self
    }

    pub fn with_deadline(mut self, deadline: Option<NaiveDate>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Validate the goal before submitting it
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.title.trim().is_empty() {
            return Err(GoalValidationError::MissingTitle);
        }
        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget);
        }
        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeCurrent);
        }
        Ok(())
    }
}

/// Body of `PUT /goals/:id`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgressUpdate {
    pub current_amount: Money,
}

impl GoalProgressUpdate {
    /// Progress after adding `contribution` to the goal's current amount
    pub fn contribute(goal: &Goal, contribution: Money) -> Result<Self, GoalValidationError> {
        if !contribution.is_positive() {
            return Err(GoalValidationError::NonPositiveContribution);
        }
        Ok(Self {
            current_amount: goal.current_amount + contribution,
        })
    }
}
