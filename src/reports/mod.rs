//! Reports module for pfm
//!
//! Pure aggregates over fetched lists: the dashboard summary, per-budget
//! usage, goal progress and the date-filtered financial report. Nothing here
//! touches the network or caches results.

pub mod budget_usage;
pub mod dashboard;
pub mod financial;
pub mod goal_progress;

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::models::{Expense, Money};

pub use budget_usage::{budget_usage, BudgetUsage, BudgetUsageReport};
pub use dashboard::DashboardSummary;
pub use financial::FinancialReport;
pub use goal_progress::{completion_percentage, remaining_amount, GoalProgressReport};

/// Spending for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    pub count: usize,
}

/// Group expenses by category, summing amounts
///
/// Categories appear in the order their first expense appears.
pub fn category_totals<'a, I>(expenses: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(total) => {
                total.total += expense.amount;
                total.count += 1;
            }
            None => totals.push(CategoryTotal {
                category: expense.category.clone(),
                total: expense.amount,
                count: 1,
            }),
        }
    }
    totals
}

/// Inclusive date range; either bound may be open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn is_open(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn contains(&self, expense: &Expense) -> bool {
        expense.in_range(self.from, self.to)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.from, self.to) {
            (None, None) => write!(f, "all time"),
            (Some(from), None) => write!(f, "from {}", from),
            (None, Some(to)) => write!(f, "until {}", to),
            (Some(from), Some(to)) => write!(f, "{} to {}", from, to),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::{Budget, BudgetId, BudgetPeriod, Expense, ExpenseId, Income, IncomeId, Money};
    use chrono::NaiveDate;

    pub fn expense(id: &str, category: &str, amount: i64, date: Option<(i32, u32, u32)>) -> Expense {
        Expense {
            id: ExpenseId::from(id),
            title: format!("{} expense", category),
            description: String::new(),
            amount: Money::from_whole(amount),
            category: category.into(),
            date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            is_recurring: false,
            frequency: None,
        }
    }

    pub fn income(id: &str, amount: i64) -> Income {
        Income {
            id: IncomeId::from(id),
            source: "Salary".into(),
            amount: Money::from_whole(amount),
        }
    }

    pub fn budget(id: &str, category: &str, limit: i64) -> Budget {
        Budget {
            id: BudgetId::from(id),
            category: category.into(),
            limit: Money::from_whole(limit),
            period: BudgetPeriod::Monthly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::expense;
    use super::*;

    #[test]
    fn test_category_totals_keep_first_appearance_order() {
        let expenses = vec![
            expense("1", "Travel", 300, None),
            expense("2", "Food", 100, None),
            expense("3", "Travel", 200, None),
            expense("4", "Bills", 50, None),
        ];

        let totals = category_totals(&expenses);
        let order: Vec<&str> = totals.iter().map(|t| t.category.as_str()).collect();

        assert_eq!(order, ["Travel", "Food", "Bills"]);
        assert_eq!(totals[0].total, Money::from_whole(500));
        assert_eq!(totals[0].count, 2);
    }

    #[test]
    fn test_category_totals_empty() {
        assert!(category_totals(&Vec::<Expense>::new()).is_empty());
    }

    #[test]
    fn test_date_range_display() {
        let from = NaiveDate::from_ymd_opt(2025, 1, 1);
        assert_eq!(DateRange::default().to_string(), "all time");
        assert_eq!(DateRange::new(from, None).to_string(), "from 2025-01-01");
    }
}
