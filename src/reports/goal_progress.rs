//! Goal progress

use serde::Serialize;

use crate::display::{format_bar, format_money, separator, truncate};
use crate::models::{Goal, Money};

/// Completion percentage, rounded and clamped to 0..=100
///
/// A goal whose target is not positive counts as complete.
pub fn completion_percentage(goal: &Goal) -> u8 {
    if !goal.target_amount.is_positive() {
        return 100;
    }
    let pct = (goal.current_amount.as_f64() / goal.target_amount.as_f64() * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Amount still missing; negative when the goal is exceeded
pub fn remaining_amount(goal: &Goal) -> Money {
    goal.target_amount - goal.current_amount
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgressRow {
    pub title: String,
    pub percentage: u8,
    pub remaining: Money,
    pub current: Money,
    pub target: Money,
}

/// Progress of every goal
#[derive(Debug, Clone)]
pub struct GoalProgressReport {
    pub rows: Vec<GoalProgressRow>,
}

impl GoalProgressReport {
    pub fn generate(goals: &[Goal]) -> Self {
        Self {
            rows: goals
                .iter()
                .map(|g| GoalProgressRow {
                    title: g.title.clone(),
                    percentage: completion_percentage(g),
                    remaining: remaining_amount(g),
                    current: g.current_amount,
                    target: g.target_amount,
                })
                .collect(),
        }
    }

    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Savings Goals\n");
        output.push_str(&separator(72));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No goals yet.\n");
            return output;
        }

        for row in &self.rows {
            let left = if row.remaining.is_positive() {
                format!("{} to go", format_money(row.remaining, currency))
            } else {
                "reached".to_string()
            };

            output.push_str(&format!(
                "{:<20} {} {:>4}%  {} / {}  {}\n",
                truncate(&row.title, 20),
                format_bar(f64::from(row.percentage), 100.0, 20),
                row.percentage,
                format_money(row.current, currency),
                format_money(row.target, currency),
                left
            ));
        }

        output
    }
}
