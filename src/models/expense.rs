//! Expense model
//!
//! Expenses are the only entity the client can create, update and delete.
//! A recurring expense always repeats monthly; a one-off carries no frequency.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::dates;
use super::ids::ExpenseId;
use super::money::Money;

/// Frequency sent for recurring expenses
pub const RECURRING_FREQUENCY: &str = "monthly";

/// An expense as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(rename = "_id", alias = "id")]
    pub id: ExpenseId,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub description: String,

    #[serde(default)]
    pub amount: Money,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub category: String,

    /// Calendar date of the expense; `None` when the backend sent nothing usable
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub is_recurring: bool,

    #[serde(default)]
    pub frequency: Option<String>,
}

impl Expense {
    /// Check whether the expense falls inside an inclusive date range
    ///
    /// An open bound always matches. An expense without a date only matches
    /// when both bounds are open.
    pub fn in_range(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
        if from.is_none() && to.is_none() {
            return true;
        }
        match self.date {
            Some(date) => from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t),
            None => false,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.title, self.category, self.amount)
    }
}

/// Validation errors for expense drafts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    MissingTitle,
    MissingCategory,
    NonPositiveAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "Expense title is required"),
            Self::MissingCategory => write!(f, "Expense category is required"),
            Self::NonPositiveAmount => write!(f, "Expense amount must be greater than zero"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// Full expense payload used by both `POST /expenses` and `PUT /expenses/:id`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDraft {
    pub title: String,
    pub description: String,
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
    pub is_recurring: bool,
    pub frequency: Option<String>,
}

impl ExpenseDraft {
    /// Create a one-off expense draft
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into().trim().to_string(),
            description: String::new(),
            amount,
            category: category.into().trim().to_string(),
            date,
            is_recurring: false,
            frequency: None,
        }
    }

    /// Start an edit from an existing expense; a missing date falls back to `today`
    pub fn from_expense(expense: &Expense, today: NaiveDate) -> Self {
        let mut draft = Self::new(
            expense.title.clone(),
            expense.amount,
            expense.category.clone(),
            expense.date.unwrap_or(today),
        );
        draft.description = expense.description.clone();
        draft.set_recurring(expense.is_recurring);
        draft
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Toggle recurrence, keeping `frequency` consistent with it
    pub fn set_recurring(&mut self, recurring: bool) {
        self.is_recurring = recurring;
        self.frequency = recurring.then(|| RECURRING_FREQUENCY.to_string());
    }

    /// Validate the draft before submitting it
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.title.trim().is_empty() {
            return Err(ExpenseValidationError::MissingTitle);
        }
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::MissingCategory);
        }
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense_on(day: Option<NaiveDate>) -> Expense {
        Expense {
            id: ExpenseId::from("e1"),
            title: "Lunch".into(),
            description: String::new(),
            amount: Money::from_whole(250),
            category: "Food".into(),
            date: day,
            is_recurring: false,
            frequency: None,
        }
    }

    #[test]
    fn test_deserialize_backend_expense() {
        let expense: Expense = serde_json::from_str(
            r#"{"_id":"e9","title":"Rent","description":"Flat","amount":15000,"category":"Housing",
                "date":"2025-02-01T00:00:00.000Z","isRecurring":true,"frequency":"monthly"}"#,
        )
        .unwrap();

        assert_eq!(expense.id.as_str(), "e9");
        assert_eq!(expense.date, Some(date(2025, 2, 1)));
        assert!(expense.is_recurring);
        assert_eq!(expense.frequency.as_deref(), Some("monthly"));
    }

    #[test]
    fn test_in_range_is_inclusive() {
        let e = expense_on(Some(date(2025, 1, 10)));

        assert!(e.in_range(Some(date(2025, 1, 10)), Some(date(2025, 1, 10))));
        assert!(e.in_range(None, Some(date(2025, 1, 31))));
        assert!(!e.in_range(Some(date(2025, 1, 11)), None));
    }

    #[test]
    fn test_undated_expense_only_matches_open_range() {
        let e = expense_on(None);

        assert!(e.in_range(None, None));
        assert!(!e.in_range(Some(date(2025, 1, 1)), None));
    }

    #[test]
    fn test_recurring_sets_frequency() {
        let mut draft = ExpenseDraft::new("Gym", Money::from_whole(40), "Health", date(2025, 3, 1));
        assert_eq!(draft.frequency, None);

        draft.set_recurring(true);
        assert_eq!(draft.frequency.as_deref(), Some(RECURRING_FREQUENCY));

        draft.set_recurring(false);
        assert_eq!(draft.frequency, None);
    }

    #[test]
    fn test_draft_wire_shape() {
        let draft = ExpenseDraft::new("Gym", Money::from_whole(40), "Health", date(2025, 3, 1));
        let json = serde_json::to_value(&draft).unwrap();

        assert_eq!(json["date"], "2025-03-01");
        assert_eq!(json["isRecurring"], false);
        assert!(json["frequency"].is_null());
    }

    #[test]
    fn test_validation() {
        let ok = ExpenseDraft::new("Gym", Money::from_whole(40), "Health", date(2025, 3, 1));
        assert!(ok.validate().is_ok());

        let mut missing_category = ok.clone();
        missing_category.category = String::new();
        assert_eq!(
            missing_category.validate(),
            Err(ExpenseValidationError::MissingCategory)
        );

        let mut zero = ok;
        zero.amount = Money::zero();
        assert_eq!(zero.validate(), Err(ExpenseValidationError::NonPositiveAmount));
    }

    #[test]
    fn test_draft_from_expense_keeps_fields() {
        let mut e = expense_on(None);
        e.is_recurring = true;
        e.description = "with team".into();

        let draft = ExpenseDraft::from_expense(&e, date(2025, 6, 1));

        assert_eq!(draft.date, date(2025, 6, 1));
        assert_eq!(draft.description, "with team");
        assert_eq!(draft.frequency.as_deref(), Some("monthly"));
    }
}
