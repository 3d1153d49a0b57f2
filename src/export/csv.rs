//! CSV Export functionality
//!
//! Layout: the header line, then one line per row with every text field in
//! double quotes and the amount unquoted with two decimals. Lines are joined
//! with `\n` and the file has no trailing newline. Sanitized text never
//! contains `"` (it is escaped to `&quot;`), so quoting needs no doubling.

use std::io::Write;
use std::path::Path;

use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetRow;

use super::{output_path, ExportFormat, SanitizedRow, EXPORT_HEADERS};

/// Write rows as CSV
pub fn write_budget_csv<W: Write>(rows: &[BudgetRow], writer: &mut W) -> BudgetResult<()> {
    write!(writer, "{}", EXPORT_HEADERS.join(","))
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    for row in rows.iter().map(SanitizedRow::from) {
        write!(
            writer,
            "\n\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",{:.2},\"{}\"",
            row.kind, row.category, row.item, row.description, row.date, row.amount, row.notes
        )
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Render rows as a CSV string
pub fn budget_csv_string(rows: &[BudgetRow]) -> BudgetResult<String> {
    let mut buffer = Vec::new();
    write_budget_csv(rows, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| BudgetError::Export(e.to_string()))
}

/// Export rows to `{basename}.csv`
///
/// The content is rendered in memory first, so a failure never leaves a
/// half-written file behind. Returns `false` and logs on failure.
pub fn export_to_csv(rows: &[BudgetRow], basename: impl AsRef<Path>) -> bool {
    let path = output_path(basename, ExportFormat::Csv);

    let result = budget_csv_string(rows).and_then(|content| {
        std::fs::write(&path, content).map_err(|e| {
            BudgetError::Export(format!("Failed to write {}: {}", path.display(), e))
        })
    });

    match result {
        Ok(()) => {
            tracing::info!(path = %path.display(), rows = rows.len(), "exported CSV");
            true
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "error exporting to CSV");
            false
        }
    }
}
