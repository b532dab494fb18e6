//! Financial report
//!
//! The expense aggregates restricted to a date range. Income carries no date
//! and is never filtered.

use serde::Serialize;

use super::{category_totals, CategoryTotal, DateRange};
use crate::display::{format_money, format_percentage, separator, truncate};
use crate::models::{Budget, Expense, Income, Money};

#[derive(Debug, Clone, Serialize)]
pub struct FinancialReport {
    pub range: DateRange,
    pub total_income: Money,
    pub total_expense: Money,
    pub total_budget: Money,
    pub savings: Money,
    pub categories: Vec<CategoryTotal>,
    /// Expenses inside the range, in backend order
    pub expenses: Vec<Expense>,
    pub income: Vec<Income>,
}

impl FinancialReport {
    pub fn generate(
        income: &[Income],
        expenses: &[Expense],
        budgets: &[Budget],
        range: DateRange,
    ) -> Self {
        let filtered: Vec<Expense> = expenses
            .iter()
            .filter(|e| range.contains(e))
            .cloned()
            .collect();

        let total_income: Money = income.iter().map(|i| i.amount).sum();
        let total_expense: Money = filtered.iter().map(|e| e.amount).sum();

        Self {
            range,
            total_income,
            total_expense,
            total_budget: budgets.iter().map(|b| b.limit).sum(),
            savings: total_income - total_expense,
            categories: category_totals(&filtered),
            expenses: filtered,
            income: income.to_vec(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Financial Report ({})\n", self.range));
        output.push_str(&separator(60));
        output.push('\n');

        output.push_str(&format!(
            "{:<20} {:>20}\n",
            "Total Income",
            format_money(self.total_income, currency)
        ));
        output.push_str(&format!(
            "{:<20} {:>20}\n",
            "Total Expenses",
            format_money(self.total_expense, currency)
        ));
        output.push_str(&format!(
            "{:<20} {:>20}\n",
            "Savings",
            format_money(self.savings, currency)
        ));

        if self.categories.is_empty() {
            output.push_str("\nNo expenses in this range.\n");
            return output;
        }

        output.push_str(&format!(
            "\n{:<24} {:>14} {:>8} {:>6}\n",
            "Category", "Spent", "Share", "Count"
        ));
        output.push_str(&separator(60));
        output.push('\n');

        let total = self.total_expense.as_f64();
        for category in &self.categories {
            let share = if total > 0.0 {
                format_percentage(category.total.as_f64() / total * 100.0)
            } else {
                "-".to_string()
            };

            output.push_str(&format!(
                "{:<24} {:>14} {:>8} {:>6}\n",
                truncate(&category.category, 24),
                format_money(category.total, currency),
                share,
                category.count
            ));
        }

        output
    }
}
