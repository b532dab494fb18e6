//! Dashboard summary
//!
//! Headline totals over every income entry, expense and budget.

use serde::Serialize;

use super::{category_totals, CategoryTotal};
use crate::display::{format_bar, format_money, separator};
use crate::models::{Budget, Expense, Income, Money};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_income: Money,
    pub total_expense: Money,
    pub total_budget: Money,
    /// Income minus expenses
    pub savings: Money,
    /// Budget minus expenses
    pub remaining_budget: Money,
    pub categories: Vec<CategoryTotal>,
}

impl DashboardSummary {
    pub fn generate(income: &[Income], expenses: &[Expense], budgets: &[Budget]) -> Self {
        let total_income: Money = income.iter().map(|i| i.amount).sum();
        let total_expense: Money = expenses.iter().map(|e| e.amount).sum();
        let total_budget: Money = budgets.iter().map(|b| b.limit).sum();

        Self {
            total_income,
            total_expense,
            total_budget,
            savings: total_income - total_expense,
            remaining_budget: total_budget - total_expense,
            categories: category_totals(expenses),
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Dashboard\n");
        output.push_str(&separator(48));
        output.push('\n');

        for (label, amount) in [
            ("Total Income", self.total_income),
            ("Total Expenses", self.total_expense),
            ("Savings", self.savings),
            ("Total Budget", self.total_budget),
            ("Remaining Budget", self.remaining_budget),
        ] {
            output.push_str(&format!(
                "{:<20} {:>27}\n",
                label,
                format_money(amount, currency)
            ));
        }

        if self.categories.is_empty() {
            output.push_str("\nNo expenses yet.\n");
            return output;
        }

        output.push_str("\nSpending by category\n");
        let max = self
            .categories
            .iter()
            .map(|c| c.total.as_f64())
            .fold(0.0, f64::max);

        for category in &self.categories {
            output.push_str(&format!(
                "{:<18} {} {:>14}\n",
                crate::display::truncate(&category.category, 18),
                format_bar(category.total.as_f64(), max, 12),
                format_money(category.total, currency)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures::{budget, expense, income};

    #[test]
    fn test_totals() {
        let summary = DashboardSummary::generate(
            &[income("i1", 50000), income("i2", 5000)],
            &[
                expense("e1", "Food", 3000, None),
                expense("e2", "Rent", 15000, None),
                expense("e3", "Food", 1000, None),
            ],
            &[budget("b1", "Food", 5000), budget("b2", "Rent", 15000)],
        );

        assert_eq!(summary.total_income, Money::from_whole(55000));
        assert_eq!(summary.total_expense, Money::from_whole(19000));
        assert_eq!(summary.savings, Money::from_whole(36000));
        assert_eq!(summary.total_budget, Money::from_whole(20000));
        assert_eq!(summary.remaining_budget, Money::from_whole(1000));
        assert_eq!(summary.categories.len(), 2);
        assert_eq!(summary.categories[0].category, "Food");
    }

    #[test]
    fn test_empty_lists_give_zero_savings() {
        let summary = DashboardSummary::generate(&[], &[], &[]);

        assert_eq!(summary.savings, Money::zero());
        assert_eq!(summary.remaining_budget, Money::zero());
        assert!(summary.format_terminal("INR").contains("No expenses yet."));
    }

    #[test]
    fn test_overspending_gives_negative_savings() {
        let summary = DashboardSummary::generate(
            &[income("i1", 100)],
            &[expense("e1", "Food", 250, None)],
            &[],
        );

        assert_eq!(summary.savings, Money::from_whole(-150));
        assert!(summary.format_terminal("INR").contains("-₹150"));
    }
}
