//! Budget usage
//!
//! How much of each budget has been spent. A budget's usage counts every
//! expense whose category matches exactly, whatever its date.

use serde::Serialize;

use crate::display::{format_bar, format_money, format_percentage, separator, truncate};
use crate::models::{Budget, Expense, Money};

/// Spending measured against one budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetUsage {
    pub used: Money,
    /// Limit minus used; negative when overspent
    pub remaining: Money,
    pub over_budget: bool,
    /// Used as a percentage of the limit; `None` when the limit is not positive
    pub utilization: Option<f64>,
}

impl BudgetUsage {
    pub fn calculate(budget: &Budget, expenses: &[Expense]) -> Self {
        let used: Money = expenses
            .iter()
            .filter(|e| e.category == budget.category)
            .map(|e| e.amount)
            .sum();
        let remaining = budget.limit - used;

        let utilization = budget
            .limit
            .is_positive()
            .then(|| used.as_f64() / budget.limit.as_f64() * 100.0);

        Self {
            used,
            remaining,
            over_budget: remaining.is_negative(),
            utilization,
        }
    }
}

/// Pair every budget with its usage, keeping the budgets' order
pub fn budget_usage(budgets: &[Budget], expenses: &[Expense]) -> Vec<(Budget, BudgetUsage)> {
    budgets
        .iter()
        .map(|b| (b.clone(), BudgetUsage::calculate(b, expenses)))
        .collect()
}

/// Budget usage report
#[derive(Debug, Clone)]
pub struct BudgetUsageReport {
    pub rows: Vec<(Budget, BudgetUsage)>,
}

impl BudgetUsageReport {
    pub fn generate(budgets: &[Budget], expenses: &[Expense]) -> Self {
        Self {
            rows: budget_usage(budgets, expenses),
        }
    }

    pub fn over_budget_count(&self) -> usize {
        self.rows.iter().filter(|(_, u)| u.over_budget).count()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Budgets\n");
        output.push_str(&separator(72));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No budgets yet.\n");
            return output;
        }

        for (budget, usage) in &self.rows {
            let pct = usage
                .utilization
                .map(format_percentage)
                .unwrap_or_else(|| "n/a".into());
            let flag = if usage.over_budget { " OVER" } else { "" };

            output.push_str(&format!(
                "{:<18} {} {:>6}  {} of {} ({}){}\n",
                truncate(&budget.category, 18),
                format_bar(usage.used.as_f64(), budget.limit.as_f64(), 16),
                pct,
                format_money(usage.used, currency),
                format_money(budget.limit, currency),
                budget.period,
                flag
            ));
        }

        let over = self.over_budget_count();
        if over > 0 {
            output.push_str(&format!("\n{} budget(s) over limit\n", over));
        }

        output
    }
}
