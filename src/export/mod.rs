//! Export module for budget-sheet
//!
//! Writes rows to spreadsheet files:
//! - CSV: quoted text fields, two-decimal amounts
//! - XLSX: one `Budget` sheet with currency-formatted amounts
//!
//! Every free-text field is sanitized exactly once on the way out, whatever
//! the format. The `export_to_*` entry points report success as a `bool`
//! and log the reason when they fail.

pub mod csv;
pub mod xlsx;

pub use self::csv::{budget_csv_string, export_to_csv, write_budget_csv};
pub use self::xlsx::{budget_xlsx_bytes, build_budget_workbook, export_to_excel};

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::models::BudgetRow;
use crate::security::sanitize_for_export;

/// Column headers shared by both formats
pub use crate::storage::CSV_HEADERS as EXPORT_HEADERS;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated values
    #[default]
    Csv,
    /// Excel workbook
    Xlsx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A row with its text fields sanitized for output
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedRow {
    /// Type names are fixed words and need no sanitizing
    pub kind: &'static str,
    pub category: String,
    pub item: String,
    pub description: String,
    pub date: String,
    /// Always finite: NaN and infinities are written as 0
    pub amount: f64,
    pub notes: String,
}

impl From<&BudgetRow> for SanitizedRow {
    fn from(row: &BudgetRow) -> Self {
        Self {
            kind: row.kind.as_str(),
            category: sanitize_for_export(&row.category),
            item: sanitize_for_export(&row.item),
            description: sanitize_for_export(&row.description),
            date: sanitize_for_export(&row.date),
            amount: if row.amount.is_finite() { row.amount } else { 0.0 },
            notes: sanitize_for_export(&row.notes),
        }
    }
}

/// `{prefix}-{YYYY-MM-DD}`, the default export file name
pub fn default_basename(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}", prefix, date.format("%Y-%m-%d"))
}

/// Append the format's extension to a basename
///
/// The extension is appended, never substituted, so a basename that
/// already contains a dot keeps it.
pub fn output_path(basename: impl AsRef<Path>, format: ExportFormat) -> PathBuf {
    let mut name = OsString::from(basename.as_ref().as_os_str());
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}

/// Export in the given format; see [`export_to_csv`] / [`export_to_excel`]
pub fn export_rows(rows: &[BudgetRow], basename: impl AsRef<Path>, format: ExportFormat) -> bool {
    match format {
        ExportFormat::Csv => export_to_csv(rows, basename),
        ExportFormat::Xlsx => export_to_excel(rows, basename),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetType;

    #[test]
    fn test_sanitized_row() {
        let row = BudgetRow::new(BudgetType::Expense, "=cmd", "<b>Rent</b>", 10.0)
            .with_date("2025-01-01")
            .with_notes("@note");
        let clean = SanitizedRow::from(&row);

        assert_eq!(clean.kind, "Expense");
        assert_eq!(clean.category, "cmd");
        assert_eq!(clean.item, "&lt;b&gt;Rent&lt;/b&gt;");
        assert_eq!(clean.notes, "note");
        assert_eq!(clean.amount, 10.0);
    }

    #[test]
    fn test_non_finite_amount_exports_as_zero() {
        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let row = BudgetRow::new(BudgetType::Expense, "Pets", "Vet Bills", amount);
            assert_eq!(SanitizedRow::from(&row).amount, 0.0);
        }
    }

    #[test]
    fn test_default_basename() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
        assert_eq!(default_basename("budget", date), "budget-2025-02-03");
    }

    #[test]
    fn test_output_path_appends_extension() {
        assert_eq!(
            output_path("budget-2025-02-03", ExportFormat::Csv),
            PathBuf::from("budget-2025-02-03.csv")
        );
        assert_eq!(
            output_path("out/v1.2", ExportFormat::Xlsx),
            PathBuf::from("out/v1.2.xlsx")
        );
    }
}
