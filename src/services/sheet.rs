//! Sheet service
//!
//! The row collection a caller edits. Every edit returns a new sheet and
//! leaves the old one untouched, so there is exactly one writer and nothing
//! to lock: the caller swaps in the returned value.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetRow, BudgetType, OptionCatalog};
use crate::security::sanitize_spreadsheet_cell;
use crate::validation::{RowField, RowValidation};

/// A new value for one cell of a row
#[derive(Debug, Clone, PartialEq)]
pub enum CellEdit {
    Type(BudgetType),
    Category(String),
    Item(String),
    Description(String),
    Date(String),
    Amount(f64),
    Notes(String),
}

impl CellEdit {
    /// Build an edit from form input
    ///
    /// Amount text that does not parse as a number becomes 0. A type must
    /// be `Income` or `Expense`.
    pub fn from_input(field: RowField, input: &str) -> BudgetResult<Self> {
        Ok(match field {
            RowField::Type => Self::Type(
                input
                    .parse::<BudgetType>()
                    .map_err(|e| BudgetError::Validation(e.to_string()))?,
            ),
            RowField::Category => Self::Category(input.to_string()),
            RowField::Item => Self::Item(input.to_string()),
            RowField::Description => Self::Description(input.to_string()),
            RowField::Date => Self::Date(input.to_string()),
            RowField::Amount => Self::Amount(parse_amount_input(input)),
            RowField::Notes => Self::Notes(input.to_string()),
        })
    }

    /// Apply to a row, sanitizing text values
    fn apply(self, row: &BudgetRow) -> BudgetRow {
        let mut row = row.clone();
        match self {
            Self::Type(kind) => row.kind = kind,
            Self::Category(v) => row.category = sanitize_spreadsheet_cell(&v),
            Self::Item(v) => row.item = sanitize_spreadsheet_cell(&v),
            Self::Description(v) => row.description = sanitize_spreadsheet_cell(&v),
            Self::Date(v) => row.date = sanitize_spreadsheet_cell(&v),
            Self::Amount(amount) => row.amount = amount,
            Self::Notes(v) => row.notes = sanitize_spreadsheet_cell(&v),
        }
        row
    }
}

/// Amount text as a number input reads it: unparseable or non-finite is 0
fn parse_amount_input(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Rows plus the custom dropdown options added while editing them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetSheet {
    #[serde(default)]
    rows: Vec<BudgetRow>,

    #[serde(flatten)]
    options: OptionCatalog,
}

impl BudgetSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<BudgetRow>) -> Self {
        Self {
            rows,
            options: OptionCatalog::default(),
        }
    }

    pub fn with_options(mut self, options: OptionCatalog) -> Self {
        self.options = options;
        self
    }

    pub fn rows(&self) -> &[BudgetRow] {
        &self.rows
    }

    pub fn options(&self) -> &OptionCatalog {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> BudgetResult<&BudgetRow> {
        self.rows
            .get(index)
            .ok_or_else(|| BudgetError::row_not_found(index))
    }

    /// Append a blank income row dated `today`
    pub fn with_new_row(&self, today: NaiveDate) -> Self {
        let mut rows = self.rows.clone();
        rows.push(BudgetRow::blank(today));
        Self {
            rows,
            options: self.options.clone(),
        }
    }

    /// Replace row `index` with a copy that has one cell changed
    pub fn with_cell(&self, index: usize, edit: CellEdit) -> BudgetResult<Self> {
        let updated = edit.apply(self.row(index)?);
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| if i == index { updated.clone() } else { row.clone() })
            .collect();
        Ok(Self {
            rows,
            options: self.options.clone(),
        })
    }

    /// Drop row `index`
    pub fn without_row(&self, index: usize) -> BudgetResult<Self> {
        self.row(index)?;
        let rows = self
            .rows
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, row)| row.clone())
            .collect();
        Ok(Self {
            rows,
            options: self.options.clone(),
        })
    }

    /// Add a custom category; unchanged when the value is blank or known
    pub fn with_custom_category(&self, value: &str) -> Self {
        let mut options = self.options.clone();
        options.add_category(value);
        Self {
            rows: self.rows.clone(),
            options,
        }
    }

    /// Add a custom item under a category
    pub fn with_custom_item(&self, category: &str, value: &str) -> Self {
        let mut options = self.options.clone();
        options.add_item(category, value);
        Self {
            rows: self.rows.clone(),
            options,
        }
    }

    /// Strict validation of every row, paired with its index
    pub fn validate(&self) -> Vec<(usize, RowValidation)> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| (i, row.validate()))
            .collect()
    }
}
