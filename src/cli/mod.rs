//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the session, views and services.

pub mod auth;
pub mod budget;
pub mod dashboard;
pub mod expense;
pub mod goal;
pub mod income;
pub mod profile;
pub mod report;

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use tokio_util::sync::CancellationToken;

use crate::config::{PfmPaths, Settings};
use crate::error::{PfmError, PfmResult};
use crate::models::dates::parse_iso_date;
use crate::models::Money;
use crate::session::Session;
use crate::views::ViewScope;

pub use auth::{handle_login, handle_logout, handle_register, handle_whoami, Credentials};
pub use budget::{handle_budget_command, BudgetCommands};
pub use dashboard::handle_dashboard;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use profile::{handle_profile_command, ProfileCommands};
pub use report::{handle_report_command, ReportCommands};

/// Shared state every command handler reads
pub struct CommandContext<'a> {
    pub paths: &'a PfmPaths,
    pub settings: &'a Settings,
    /// Root token cancelled on Ctrl-C
    pub cancel: &'a CancellationToken,
}

impl<'a> CommandContext<'a> {
    pub fn new(paths: &'a PfmPaths, settings: &'a Settings, cancel: &'a CancellationToken) -> Self {
        Self {
            paths,
            settings,
            cancel,
        }
    }

    /// Fresh view scope tied to the root token
    pub fn scope(&self) -> ViewScope {
        ViewScope::with_parent(self.cancel)
    }

    pub fn date_format(&self) -> &str {
        &self.settings.date_format
    }
}

/// Restore the session and return the currency to format amounts in
pub(crate) async fn signed_in_currency(
    session: &mut Session,
    ctx: &CommandContext<'_>,
) -> PfmResult<String> {
    let scope = ctx.scope();
    let user = scope.run(session.ensure_authenticated()).await?;
    let currency = user.currency.trim();
    Ok(if currency.is_empty() {
        ctx.settings.default_currency.clone()
    } else {
        currency.to_string()
    })
}

/// Parse an amount argument such as `1500`, `249.50` or `₹1,000`
pub(crate) fn parse_amount(raw: &str) -> PfmResult<Money> {
    Money::parse(raw).map_err(|e| PfmError::Validation(format!("Invalid amount: {}", e)))
}

/// Parse a `YYYY-MM-DD` date argument
pub(crate) fn parse_date(raw: &str) -> PfmResult<NaiveDate> {
    parse_iso_date(raw)
        .ok_or_else(|| PfmError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", raw)))
}

pub(crate) fn parse_optional_date(raw: Option<&str>) -> PfmResult<Option<NaiveDate>> {
    raw.map(parse_date).transpose()
}

/// Ask a yes/no question on stdin; anything but `y`/`yes` is a no
pub(crate) fn confirm(prompt: &str) -> PfmResult<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
