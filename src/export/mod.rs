//! Export module for pfm
//!
//! - CSV: expenses and income, one row per entity with every field
//! - JSON / YAML: the financial report with schema versioning

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_expenses_csv, export_income_csv};
pub use json::{export_report_json, FinancialReportExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_report_yaml;
