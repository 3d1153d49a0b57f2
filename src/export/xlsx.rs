//! Excel (.xlsx) export
//!
//! One worksheet named `Budget`: the header row, then the sanitized rows
//! with the amount kept numeric and shown in a currency format.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetRow;

use super::{output_path, ExportFormat, SanitizedRow, EXPORT_HEADERS};

pub const SHEET_NAME: &str = "Budget";

/// Number format applied to every amount cell
pub const CURRENCY_FORMAT: &str = "$#,##0.00";

/// Character widths of the seven columns, in header order
pub const COLUMN_WIDTHS: [f64; 7] = [10.0, 15.0, 20.0, 25.0, 12.0, 12.0, 25.0];

const AMOUNT_COLUMN: u16 = 5;

/// Build the workbook in memory
pub fn build_budget_workbook(rows: &[BudgetRow]) -> BudgetResult<Workbook> {
    let mut workbook = Workbook::new();
    let currency = Format::new().set_num_format(CURRENCY_FORMAT);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, (header, width)) in EXPORT_HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        worksheet.write_string(0, col, *header)?;
        worksheet.set_column_width(col, width)?;
    }

    for (i, row) in rows.iter().map(SanitizedRow::from).enumerate() {
        let r = u32::try_from(i + 1)
            .map_err(|_| BudgetError::Export("Too many rows for one worksheet".into()))?;

        worksheet.write_string(r, 0, row.kind)?;
        worksheet.write_string(r, 1, &row.category)?;
        worksheet.write_string(r, 2, &row.item)?;
        worksheet.write_string(r, 3, &row.description)?;
        worksheet.write_string(r, 4, &row.date)?;
        worksheet.write_number_with_format(r, AMOUNT_COLUMN, row.amount, &currency)?;
        worksheet.write_string(r, 6, &row.notes)?;
    }

    Ok(workbook)
}

/// The finished .xlsx file as bytes
pub fn budget_xlsx_bytes(rows: &[BudgetRow]) -> BudgetResult<Vec<u8>> {
    let mut workbook = build_budget_workbook(rows)?;
    Ok(workbook.save_to_buffer()?)
}

/// Export rows to `{basename}.xlsx`
///
/// Returns `false` and logs on failure; no partial file is written.
pub fn export_to_excel(rows: &[BudgetRow], basename: impl AsRef<Path>) -> bool {
    let path = output_path(basename, ExportFormat::Xlsx);

    let result = budget_xlsx_bytes(rows).and_then(|bytes| {
        std::fs::write(&path, bytes).map_err(|e| {
            BudgetError::Export(format!("Failed to write {}: {}", path.display(), e))
        })
    });

    match result {
        Ok(()) => {
            tracing::info!(path = %path.display(), rows = rows.len(), "exported Excel workbook");
            true
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "error exporting to Excel");
            false
        }
    }
}
