use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use pfm::api::ApiClient;
use pfm::cli::{
    handle_budget_command, handle_dashboard, handle_expense_command, handle_goal_command,
    handle_income_command, handle_login, handle_logout, handle_profile_command, handle_register,
    handle_report_command, handle_whoami, CommandContext, Credentials,
};
use pfm::config::{PfmPaths, Settings};
use pfm::error::PfmError;
use pfm::session::{FileTokenStore, Session, TokenStore};

#[derive(Parser)]
#[command(
    name = "pfm",
    version,
    about = "Terminal client for the personal finance manager",
    long_about = "pfm talks to the personal finance manager backend: sign in, record \
                  income and expenses, set budgets, track savings goals and export \
                  reports from the command line."
)]
struct Cli {
    /// Base URL of the API (overrides PFM_API_URL and the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and remember the session
    Login(Credentials),

    /// Create an account and sign in
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        #[command(flatten)]
        credentials: Credentials,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Profile management commands
    #[command(subcommand)]
    Profile(pfm::cli::ProfileCommands),

    /// Show totals, savings and spending by category
    #[command(alias = "home")]
    Dashboard,

    /// Income management commands
    #[command(subcommand)]
    Income(pfm::cli::IncomeCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(pfm::cli::ExpenseCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(pfm::cli::BudgetCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(pfm::cli::GoalCommands),

    /// Reports and exports
    #[command(subcommand)]
    Report(pfm::cli::ReportCommands),

    /// Show current configuration and paths
    Config {
        /// Write the effective settings to the config file
        #[arg(long)]
        save: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = PfmPaths::new()?;
    let settings = Settings::load_or_create(&paths)?.with_api_url_override(cli.api_url);
    pfm::logging::init(&settings.log_filter);
    settings.validate()?;

    let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(paths.session_file()));
    let api = ApiClient::new(settings.api_url.clone(), tokens)?;
    let mut session = Session::new(api)?;

    // Ctrl-C cancels every view scope derived from the root token
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupted");
            on_interrupt.cancel();
        }
    });

    let ctx = CommandContext::new(&paths, &settings, &cancel);

    let result = match cli.command {
        Some(Commands::Login(credentials)) => handle_login(&mut session, &ctx, credentials).await,
        Some(Commands::Register { name, credentials }) => {
            handle_register(&mut session, &ctx, name, credentials).await
        }
        Some(Commands::Logout) => handle_logout(&mut session),
        Some(Commands::Whoami) => handle_whoami(&mut session, &ctx).await,
        Some(Commands::Profile(cmd)) => handle_profile_command(&mut session, &ctx, cmd).await,
        Some(Commands::Dashboard) => handle_dashboard(&mut session, &ctx).await,
        Some(Commands::Income(cmd)) => handle_income_command(&mut session, &ctx, cmd).await,
        Some(Commands::Expense(cmd)) => handle_expense_command(&mut session, &ctx, cmd).await,
        Some(Commands::Budget(cmd)) => handle_budget_command(&mut session, &ctx, cmd).await,
        Some(Commands::Goal(cmd)) => handle_goal_command(&mut session, &ctx, cmd).await,
        Some(Commands::Report(cmd)) => handle_report_command(&mut session, &ctx, cmd).await,
        Some(Commands::Config { save }) => {
            println!("pfm Configuration");
            println!("=================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Session file:     {}", paths.session_file().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!();
            println!("Settings:");
            println!("  API URL:          {}", settings.api_url);
            println!("  Default currency: {}", settings.default_currency);
            println!("  Date format:      {}", settings.date_format);
            println!("  Log filter:       {}", settings.log_filter);
            println!(
                "  Signed in:        {}",
                if session.has_token() { "yes" } else { "no" }
            );

            if save {
                settings.save(&paths)?;
                println!();
                println!("Settings saved.");
            }
            Ok(())
        }
        None => {
            println!("pfm - personal finance manager client");
            println!();
            println!("Run 'pfm --help' for usage information.");
            println!("Run 'pfm login <email>' to get started.");
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(PfmError::Cancelled) => {
            eprintln!("Cancelled.");
            std::process::exit(130);
        }
        Err(err) => Err(err.into()),
    }
}
