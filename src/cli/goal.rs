//! Goal CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_optional_date, signed_in_currency, CommandContext};
use crate::display::{format_money, goal_table};
use crate::error::{PfmError, PfmResult};
use crate::models::{GoalId, NewGoal, DEFAULT_CONTRIBUTION};
use crate::reports::completion_percentage;
use crate::services::GoalService;
use crate::session::Session;
use crate::views::GoalsView;

/// Goal subcommands
#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// List savings goals
    List {
        /// Show progress bars instead of a table
        #[arg(long)]
        bars: bool,
    },

    /// Create a savings goal
    Add {
        /// What you are saving for
        title: String,

        /// Target amount
        target: String,

        /// Amount already saved
        #[arg(long)]
        current: Option<String>,

        /// Deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: Option<String>,
    },

    /// Add money to a goal
    Contribute {
        /// Goal ID
        id: String,

        /// Amount to add (defaults to 1000)
        amount: Option<String>,
    },
}

/// Handle a goal command
pub async fn handle_goal_command(
    session: &mut Session,
    ctx: &CommandContext<'_>,
    cmd: GoalCommands,
) -> PfmResult<()> {
    let currency = signed_in_currency(session, ctx).await?;
    let api = session.api();
    let service = GoalService::new(api);
    let scope = ctx.scope();

    match cmd {
        GoalCommands::List { bars } => {
            let view = GoalsView::load(api, &scope).await?;
            if view.goals.is_empty() {
                println!("No goals yet.");
                println!("Create one with: pfm goal add <title> <target>");
                return Ok(());
            }

            if bars {
                print!("{}", view.progress().format_terminal(&currency));
            } else {
                println!("{}", goal_table(&view.goals, &currency, ctx.date_format()));
            }
        }

        GoalCommands::Add {
            title,
            target,
            current,
            deadline,
        } => {
            let mut goal = NewGoal::new(title, parse_amount(&target)?)
                .with_deadline(parse_optional_date(deadline.as_deref())?);
            if let Some(current) = current {
                goal = goal.with_current(parse_amount(&current)?);
            }

            let created = scope.run(service.create(&goal)).await?;
            println!(
                "Created goal '{}': target {} [{}]",
                created.title,
                format_money(created.target_amount, &currency),
                created.id
            );
        }

        GoalCommands::Contribute { id, amount } => {
            let id: GoalId = id.parse().map_err(PfmError::Validation)?;
            let contribution = match amount {
                Some(amount) => parse_amount(&amount)?,
                None => DEFAULT_CONTRIBUTION,
            };

            let mut view = GoalsView::fetch(api, &scope).await?;
            let goal = view
                .find(&id)
                .cloned()
                .ok_or_else(|| PfmError::goal_not_found(id.as_str()))?;

            let updated = scope.run(service.add_progress(&goal, contribution)).await?;
            println!(
                "Added {} to '{}': {} of {} ({}%)",
                format_money(contribution, &currency),
                updated.title,
                format_money(updated.current_amount, &currency),
                format_money(updated.target_amount, &currency),
                completion_percentage(&updated)
            );
            view.apply(updated);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::testing::signed_in;
    use crate::config::{PfmPaths, Settings};
    use httpmock::prelude::*;
    use serde_json::json;
    use tempfile::TempDir;
    use tokio_util::sync::CancellationToken;

    #[tokio::test]
    async fn test_contribute_reports_backend_error() {
        let server = MockServer::start();
        let mut session = signed_in(&server);
        server.mock(|when, then| {
            when.method(GET).path("/api/goals");
            then.status(503).json_body(json!({"message": "Service unavailable"}));
        });

        let temp_dir = TempDir::new().unwrap();
        let paths = PfmPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let cancel = CancellationToken::new();
        let ctx = CommandContext::new(&paths, &settings, &cancel);

        let cmd = GoalCommands::Contribute {
            id: "g1".into(),
            amount: None,
        };
        let err = handle_goal_command(&mut session, &ctx, cmd).await.unwrap_err();

        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Service unavailable");
    }
}
