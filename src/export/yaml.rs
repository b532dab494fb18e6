//! YAML Export functionality
//!
//! Same document as the JSON export, in a human-readable format.

use std::io::Write;

use super::json::FinancialReportExport;
use crate::error::PfmResult;
use crate::reports::FinancialReport;

/// Export the report as YAML
pub fn export_report_yaml<W: Write>(
    report: &FinancialReport,
    currency: &str,
    writer: &mut W,
) -> PfmResult<()> {
    let export = FinancialReportExport::new(report, currency);
    serde_yaml::to_writer(&mut *writer, &export)?;
    Ok(())
}
