//! Income CLI commands

use clap::Subcommand;

use super::{parse_amount, signed_in_currency, CommandContext};
use crate::display::{format_money, income_table};
use crate::error::PfmResult;
use crate::models::NewIncome;
use crate::services::IncomeService;
use crate::session::Session;
use crate::views::IncomeView;

/// Income subcommands
#[derive(Subcommand, Debug)]
pub enum IncomeCommands {
    /// List income entries
    List,

    /// Record an income entry
    Add {
        /// Where the money came from (e.g., "Salary")
        source: String,

        /// Amount (e.g., "50000" or "1,250.50")
        amount: String,
    },
}

/// Handle an income command
pub async fn handle_income_command(
    session: &mut Session,
    ctx: &CommandContext<'_>,
    cmd: IncomeCommands,
) -> PfmResult<()> {
    let currency = signed_in_currency(session, ctx).await?;
    let api = session.api();
    let scope = ctx.scope();

    match cmd {
        IncomeCommands::List => {
            let view = IncomeView::load(api, &scope).await?;
            if view.income.is_empty() {
                println!("No income recorded yet.");
                println!("Add one with: pfm income add <source> <amount>");
                return Ok(());
            }

            println!("{}", income_table(&view.income, &currency));
            println!("Total: {}", format_money(view.total(), &currency));
        }

        IncomeCommands::Add { source, amount } => {
            let income = NewIncome::new(source, parse_amount(&amount)?);
            let created = scope.run(IncomeService::new(api).create(&income)).await?;

            println!(
                "Added income: {} {}",
                created.source,
                format_money(created.amount, &currency)
            );
        }
    }

    Ok(())
}
