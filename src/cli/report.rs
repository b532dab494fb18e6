//! CLI commands for reports
//!
//! Shows the financial report and exports it, or its underlying lists, to
//! files. Without `--output` files land in the exports directory.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand, ValueEnum};

use super::{parse_optional_date, signed_in_currency, CommandContext};
use crate::error::{PfmError, PfmResult};
use crate::export::{export_expenses_csv, export_income_csv, export_report_json, export_report_yaml};
use crate::reports::DateRange;
use crate::session::Session;
use crate::views::ReportsView;

/// Report export formats
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Yaml,
}

impl ReportFormat {
    fn default_file_name(self) -> &'static str {
        match self {
            Self::Json => "financial-report.json",
            Self::Yaml => "financial-report.yaml",
        }
    }
}

/// Inclusive date range applied to expenses
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

impl RangeArgs {
    fn to_range(&self) -> PfmResult<DateRange> {
        let range = DateRange::new(
            parse_optional_date(self.from.as_deref())?,
            parse_optional_date(self.to.as_deref())?,
        );
        if let (Some(from), Some(to)) = (range.from, range.to) {
            if from > to {
                return Err(PfmError::Validation(format!(
                    "Start date {} is after end date {}",
                    from, to
                )));
            }
        }
        Ok(range)
    }
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show income, expenses, savings and spending by category
    Show {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Export the expenses inside the range to CSV
    ExpensesCsv {
        #[command(flatten)]
        range: RangeArgs,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export all income entries to CSV
    IncomeCsv {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the full financial report
    Export {
        #[command(flatten)]
        range: RangeArgs,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ReportFormat,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub async fn handle_report_command(
    session: &mut Session,
    ctx: &CommandContext<'_>,
    cmd: ReportCommands,
) -> PfmResult<()> {
    let currency = signed_in_currency(session, ctx).await?;
    let scope = ctx.scope();

    match cmd {
        ReportCommands::Show { range } => {
            let range = range.to_range()?;
            let view = ReportsView::load(session.api(), &scope).await?;
            print!("{}", view.report(range).format_terminal(&currency));
        }

        ReportCommands::ExpensesCsv { range, output } => {
            let range = range.to_range()?;
            let view = ReportsView::load(session.api(), &scope).await?;
            let report = view.report(range);

            let path = output_path(ctx, output, "expenses.csv")?;
            export_expenses_csv(&report.expenses, create_output(&path)?)?;
            println!(
                "Exported {} expense(s) to: {}",
                report.expenses.len(),
                path.display()
            );
        }

        ReportCommands::IncomeCsv { output } => {
            let view = ReportsView::load(session.api(), &scope).await?;

            let path = output_path(ctx, output, "income.csv")?;
            export_income_csv(&view.income, create_output(&path)?)?;
            println!(
                "Exported {} income entr{} to: {}",
                view.income.len(),
                if view.income.len() == 1 { "y" } else { "ies" },
                path.display()
            );
        }

        ReportCommands::Export {
            range,
            format,
            output,
        } => {
            let range = range.to_range()?;
            let view = ReportsView::load(session.api(), &scope).await?;
            let report = view.report(range);

            let path = output_path(ctx, output, format.default_file_name())?;
            let mut writer = create_output(&path)?;
            match format {
                ReportFormat::Json => export_report_json(&report, &currency, &mut writer)?,
                ReportFormat::Yaml => export_report_yaml(&report, &currency, &mut writer)?,
            }
            writer.flush()?;
            println!("Financial report exported to: {}", path.display());
        }
    }

    Ok(())
}

/// The requested path, or `name` inside the exports directory
fn output_path(
    ctx: &CommandContext<'_>,
    output: Option<PathBuf>,
    name: &str,
) -> PfmResult<PathBuf> {
    match output {
        Some(path) => Ok(path),
        None => {
            ctx.paths.ensure_directories()?;
            Ok(ctx.paths.export_dir().join(name))
        }
    }
}

fn create_output(path: &Path) -> PfmResult<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            PfmError::Export(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }
    let file = File::create(path).map_err(|e| {
        PfmError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_args_parse() {
        let args = RangeArgs {
            from: Some("2025-01-01".into()),
            to: None,
        };
        let range = args.to_range().unwrap();

        assert!(range.from.is_some());
        assert!(range.to.is_none());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let args = RangeArgs {
            from: Some("2025-02-01".into()),
            to: Some("2025-01-01".into()),
        };
        assert!(args.to_range().unwrap_err().is_validation());
    }

    #[test]
    fn test_create_output_makes_parent_dirs() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("out.csv");

        create_output(&path).unwrap();
        assert!(path.exists());
    }
}
