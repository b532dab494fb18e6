//! Expense CLI commands
//!
//! Implements listing, creating, editing and deleting expenses.

use chrono::Local;
use clap::Subcommand;

use super::{confirm, parse_amount, parse_date, parse_optional_date, signed_in_currency, CommandContext};
use crate::display::{expense_table, format_money};
use crate::error::{PfmError, PfmResult};
use crate::models::{ExpenseDraft, ExpenseId};
use crate::services::ExpenseService;
use crate::session::Session;
use crate::views::ExpensesView;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// List expenses
    List {
        /// Only show one category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Record an expense
    Add {
        /// Short title (e.g., "Groceries")
        title: String,

        /// Amount spent
        amount: String,

        /// Category
        #[arg(short, long)]
        category: String,

        /// Date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Longer description
        #[arg(long)]
        description: Option<String>,

        /// Repeats every month
        #[arg(short, long)]
        recurring: bool,
    },

    /// Edit an expense; omitted fields keep their value
    Edit {
        /// Expense ID
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        amount: Option<String>,

        #[arg(short, long)]
        category: Option<String>,

        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Set whether the expense repeats monthly
        #[arg(long)]
        recurring: Option<bool>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle an expense command
pub async fn handle_expense_command(
    session: &mut Session,
    ctx: &CommandContext<'_>,
    cmd: ExpenseCommands,
) -> PfmResult<()> {
    let currency = signed_in_currency(session, ctx).await?;
    let api = session.api();
    let service = ExpenseService::new(api);
    let scope = ctx.scope();
    let today = Local::now().date_naive();

    match cmd {
        ExpenseCommands::List { category } => {
            let view = ExpensesView::load(api, &scope)
                .await?
                .with_category(category);

            let visible: Vec<_> = view.visible().into_iter().cloned().collect();
            if visible.is_empty() {
                match view.category_filter() {
                    Some(category) => println!("No expenses in category '{}'.", category),
                    None => println!("No expenses recorded yet."),
                }
                return Ok(());
            }

            println!("{}", expense_table(&visible, &currency, ctx.date_format()));
            let total = visible.iter().map(|e| e.amount).sum();
            println!("Total: {}", format_money(total, &currency));

            let categories = view.categories();
            if view.category_filter().is_none() && categories.len() > 1 {
                println!("Categories: {}", categories.join(", "));
            }
        }

        ExpenseCommands::Add {
            title,
            amount,
            category,
            date,
            description,
            recurring,
        } => {
            let date = parse_optional_date(date.as_deref())?.unwrap_or(today);
            let mut draft = ExpenseDraft::new(title, parse_amount(&amount)?, category, date);
            if let Some(description) = description {
                draft = draft.with_description(description);
            }
            draft.set_recurring(recurring);

            let created = scope.run(service.create(&draft)).await?;
            println!(
                "Added expense: {} ({}) {} [{}]",
                created.title,
                created.category,
                format_money(created.amount, &currency),
                created.id
            );
        }

        ExpenseCommands::Edit {
            id,
            title,
            amount,
            category,
            date,
            description,
            recurring,
        } => {
            let id: ExpenseId = id.parse().map_err(PfmError::Validation)?;
            let mut view = ExpensesView::fetch(api, &scope).await?;
            let existing = view
                .find(&id)
                .ok_or_else(|| PfmError::expense_not_found(id.as_str()))?;

            let mut draft = ExpenseDraft::from_expense(existing, today);
            if let Some(title) = title {
                draft.title = title.trim().to_string();
            }
            if let Some(amount) = amount {
                draft.amount = parse_amount(&amount)?;
            }
            if let Some(category) = category {
                draft.category = category.trim().to_string();
            }
            if let Some(date) = date {
                draft.date = parse_date(&date)?;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(recurring) = recurring {
                draft.set_recurring(recurring);
            }

            let updated = scope.run(service.update(&id, &draft)).await?;
            println!(
                "Updated expense: {} ({}) {}",
                updated.title,
                updated.category,
                format_money(updated.amount, &currency)
            );
            view.apply(updated);
        }

        ExpenseCommands::Delete { id, yes } => {
            let id: ExpenseId = id.parse().map_err(PfmError::Validation)?;
            let mut view = ExpensesView::fetch(api, &scope).await?;
            let title = view
                .find(&id)
                .map(|e| e.title.clone())
                .ok_or_else(|| PfmError::expense_not_found(id.as_str()))?;

            if !yes && !confirm(&format!("Delete expense '{}'?", title))? {
                println!("Cancelled.");
                return Ok(());
            }

            scope.run(service.delete(&id)).await?;
            view.remove(&id);
            println!("Deleted expense: {}", title);
        }
    }

    Ok(())
}
