//! Budget CLI commands

use clap::Subcommand;

use super::{parse_amount, signed_in_currency, CommandContext};
use crate::display::{budget_table, format_money};
use crate::error::{PfmError, PfmResult};
use crate::models::{BudgetPeriod, NewBudget};
use crate::services::BudgetService;
use crate::session::Session;
use crate::views::BudgetsView;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Show budgets with what has been spent against them
    List {
        /// Show progress bars instead of a table
        #[arg(long)]
        bars: bool,
    },

    /// Create a budget for a category
    Add {
        /// Category the budget applies to
        category: String,

        /// Spending limit
        limit: String,

        /// Budget period (monthly or yearly)
        #[arg(short, long, default_value = "monthly")]
        period: String,
    },
}

/// Handle a budget command
pub async fn handle_budget_command(
    session: &mut Session,
    ctx: &CommandContext<'_>,
    cmd: BudgetCommands,
) -> PfmResult<()> {
    let currency = signed_in_currency(session, ctx).await?;
    let api = session.api();
    let scope = ctx.scope();

    match cmd {
        BudgetCommands::List { bars } => {
            let view = BudgetsView::load(api, &scope).await?;
            let report = view.usage();

            if report.rows.is_empty() {
                println!("No budgets yet.");
                println!("Create one with: pfm budget add <category> <limit>");
                return Ok(());
            }

            if bars {
                print!("{}", report.format_terminal(&currency));
            } else {
                println!("{}", budget_table(&report.rows, &currency));
                let over = report.over_budget_count();
                if over > 0 {
                    println!("{} budget(s) over limit", over);
                }
            }
        }

        BudgetCommands::Add {
            category,
            limit,
            period,
        } => {
            let period: BudgetPeriod = period.parse().map_err(PfmError::Validation)?;
            let budget = NewBudget::new(category, parse_amount(&limit)?, period);
            let created = scope.run(BudgetService::new(api).create(&budget)).await?;

            println!(
                "Created {} budget for '{}': {}",
                created.period,
                created.category,
                format_money(created.limit, &currency)
            );
        }
    }

    Ok(())
}
