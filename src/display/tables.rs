//! List tables rendered with `tabled`

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::currency::format_money;
use super::truncate;
use crate::models::{Budget, Expense, Goal, Income};
use crate::reports::{completion_percentage, BudgetUsage};

/// Render a date, falling back to ISO when the pattern is invalid
fn format_date(date: Option<NaiveDate>, date_format: &str) -> String {
    let Some(date) = date else {
        return "-".into();
    };
    let mut out = String::new();
    match write!(out, "{}", date.format(date_format)) {
        Ok(()) => out,
        Err(_) => date.to_string(),
    }
}

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Recurring")]
    recurring: String,
}

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Goal")]
    title: String,
    #[tabled(rename = "Saved")]
    current: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
}

fn render<R: Tabled>(rows: Vec<R>) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn income_table(income: &[Income], currency: &str) -> String {
    render(
        income
            .iter()
            .map(|i| IncomeRow {
                id: i.id.to_string(),
                source: truncate(&i.source, 32),
                amount: format_money(i.amount, currency),
            })
            .collect(),
    )
}

pub fn expense_table(expenses: &[Expense], currency: &str, date_format: &str) -> String {
    render(
        expenses
            .iter()
            .map(|e| ExpenseRow {
                id: e.id.to_string(),
                date: format_date(e.date, date_format),
                title: truncate(&e.title, 28),
                category: truncate(&e.category, 20),
                amount: format_money(e.amount, currency),
                recurring: e.frequency.clone().unwrap_or_else(|| "-".into()),
            })
            .collect(),
    )
}

pub fn budget_table(usage: &[(Budget, BudgetUsage)], currency: &str) -> String {
    render(
        usage
            .iter()
            .map(|(budget, usage)| BudgetRow {
                category: truncate(&budget.category, 24),
                period: budget.period.to_string(),
                limit: format_money(budget.limit, currency),
                used: format_money(usage.used, currency),
                remaining: format_money(usage.remaining, currency),
                status: if usage.over_budget {
                    "OVER".into()
                } else {
                    "ok".into()
                },
            })
            .collect(),
    )
}

pub fn goal_table(goals: &[Goal], currency: &str, date_format: &str) -> String {
    render(
        goals
            .iter()
            .map(|g| GoalRow {
                id: g.id.to_string(),
                title: truncate(&g.title, 28),
                current: format_money(g.current_amount, currency),
                target: format_money(g.target_amount, currency),
                progress: format!("{}%", completion_percentage(g)),
                deadline: format_date(g.deadline, date_format),
            })
            .collect(),
    )
}
