//! Sheet documents
//!
//! A sheet document is the input the CLI works on: rows plus any custom
//! dropdown options. It can be JSON, YAML, or a CSV file in the export
//! layout (rows only). Rows are read as [`RowDraft`]s so a bad type name is
//! reported by validation instead of failing the whole load.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{OptionCatalog, RowDraft};
use crate::services::BudgetSheet;

use super::file_io::{read_json_required, read_yaml_required};

/// Header of the CSV export layout
pub const CSV_HEADERS: [&str; 7] = [
    "Type",
    "Category",
    "Item",
    "Description",
    "Date",
    "Amount",
    "Notes",
];

/// Rows and custom options as stored in a file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetDocument {
    #[serde(default)]
    pub rows: Vec<RowDraft>,

    #[serde(flatten)]
    pub options: OptionCatalog,
}

impl SheetDocument {
    /// Load a document, picking the format from the file extension
    ///
    /// `.yaml`/`.yml` and `.csv` are recognised; anything else is read as
    /// JSON.
    pub fn load(path: impl AsRef<Path>) -> BudgetResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let document = match extension.as_deref() {
            Some("yaml") | Some("yml") => read_yaml_required(path)?,
            Some("csv") => {
                let file = std::fs::File::open(path).map_err(|e| {
                    BudgetError::Storage(format!("Failed to open {}: {}", path.display(), e))
                })?;
                Self {
                    rows: read_budget_csv(file)?,
                    options: OptionCatalog::default(),
                }
            }
            _ => read_json_required(path)?,
        };

        tracing::debug!(
            path = %path.display(),
            rows = document.rows.len(),
            "loaded sheet document"
        );
        Ok(document)
    }

    /// Convert into an editable sheet
    ///
    /// Fails on the first row whose type is not `Income` or `Expense`.
    pub fn into_sheet(self) -> BudgetResult<BudgetSheet> {
        let rows = self
            .rows
            .into_iter()
            .enumerate()
            .map(|(i, draft)| {
                draft
                    .into_row()
                    .map_err(|e| BudgetError::Validation(format!("row {}: {}", i + 1, e)))
            })
            .collect::<BudgetResult<Vec<_>>>()?;

        Ok(BudgetSheet::from_rows(rows).with_options(self.options))
    }
}

/// Read rows from CSV in the export layout
///
/// Values are taken as written; nothing is unescaped, so reading an export
/// gives back exactly the sanitized text that went into it. A missing or
/// unparseable amount reads as 0.
pub fn read_budget_csv<R: Read>(reader: R) -> BudgetResult<Vec<RowDraft>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.iter().ne(CSV_HEADERS.iter().copied()) {
        return Err(BudgetError::Storage(format!(
            "Unexpected CSV header: expected {}",
            CSV_HEADERS.join(",")
        )));
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let field = |i: usize| record.get(i).unwrap_or_default().to_string();

        rows.push(RowDraft {
            kind: field(0),
            category: field(1),
            item: field(2),
            description: field(3),
            date: field(4),
            amount: record
                .get(5)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(0.0),
            notes: field(6),
        });
    }

    Ok(rows)
}
