//! JSON Export functionality
//!
//! Exports the financial report with schema versioning.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::PfmResult;
use crate::reports::FinancialReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Financial report export structure
#[derive(Debug, Clone, Serialize)]
pub struct FinancialReportExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    /// Currency the amounts are denominated in
    pub currency: String,

    pub report: &'a FinancialReport,
}

impl<'a> FinancialReportExport<'a> {
    pub fn new(report: &'a FinancialReport, currency: &str) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            currency: currency.to_string(),
            report,
        }
    }
}

/// Export the report as pretty-printed JSON
pub fn export_report_json<W: Write>(
    report: &FinancialReport,
    currency: &str,
    writer: &mut W,
) -> PfmResult<()> {
    let export = FinancialReportExport::new(report, currency);
    serde_json::to_writer_pretty(&mut *writer, &export)?;
    writeln!(writer)?;
    Ok(())
}
