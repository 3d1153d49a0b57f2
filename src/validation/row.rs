//! Strict row validation
//!
//! Free-text fields are sanitized first and the checks run on the
//! sanitized text, so a value that is only a formula trigger (`"="`) counts
//! as empty. The amount is checked as given.

use std::collections::BTreeMap;
use std::fmt;

use crate::models::{BudgetType, RowDraft};
use crate::security::sanitize_spreadsheet_cell;

use super::field::{
    validate_amount, validate_date, validate_required, validate_string_length, FieldError,
};

/// Length bounds per free-text field
pub const MAX_CATEGORY_LENGTH: usize = 100;
pub const MAX_ITEM_LENGTH: usize = 200;
pub const MAX_DESCRIPTION_LENGTH: usize = 500;
pub const MAX_NOTES_LENGTH: usize = 1000;

/// A row field that can carry an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RowField {
    Type,
    Category,
    Item,
    Description,
    Date,
    Amount,
    Notes,
}

impl RowField {
    /// Key used in error maps
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Category => "category",
            Self::Item => "item",
            Self::Description => "description",
            Self::Date => "date",
            Self::Amount => "amount",
            Self::Notes => "notes",
        }
    }

    /// Name used inside "{name} is required"
    pub fn label(&self) -> &'static str {
        match self {
            Self::Type => "Type",
            Self::Category => "Category",
            Self::Item => "Item",
            Self::Description => "Description",
            Self::Date => "Date",
            Self::Amount => "Amount",
            Self::Notes => "Notes",
        }
    }
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`validate_budget_row`]: field -> error, empty when valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowValidation {
    errors: BTreeMap<RowField, FieldError>,
}

impl RowValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Look up the error for a field by its key (`"type"`, `"amount"`, ...)
    pub fn error(&self, field: &str) -> Option<&FieldError> {
        self.errors
            .iter()
            .find(|(f, _)| f.as_str() == field)
            .map(|(_, e)| e)
    }

    pub fn get(&self, field: RowField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Errors in field order
    pub fn errors(&self) -> impl Iterator<Item = (RowField, &FieldError)> {
        self.errors.iter().map(|(f, e)| (*f, e))
    }

    /// Field key -> message, the shape a form renders
    pub fn messages(&self) -> BTreeMap<&'static str, String> {
        self.errors
            .iter()
            .map(|(f, e)| (f.as_str(), e.to_string()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn record(&mut self, field: RowField, check: Result<(), FieldError>) {
        if let Err(err) = check {
            self.errors.insert(field, err);
        }
    }
}

/// Validate every field of a row
///
/// Required: type, category, item, description, date, amount. Notes are
/// optional but length-bounded. When a field fails both the required and
/// the length check, the length error is the one reported.
pub fn validate_budget_row(row: &RowDraft) -> RowValidation {
    let kind = sanitize_spreadsheet_cell(&row.kind);
    let category = sanitize_spreadsheet_cell(&row.category);
    let item = sanitize_spreadsheet_cell(&row.item);
    let description = sanitize_spreadsheet_cell(&row.description);
    let date = sanitize_spreadsheet_cell(&row.date);
    let notes = sanitize_spreadsheet_cell(&row.notes);

    let mut result = RowValidation::default();

    result.record(
        RowField::Type,
        validate_required(&kind, RowField::Type.label()).and_then(|()| {
            kind.parse::<BudgetType>()
                .map(|_| ())
                .map_err(|_| FieldError::InvalidType)
        }),
    );
    result.record(
        RowField::Category,
        validate_required(&category, RowField::Category.label()),
    );
    result.record(RowField::Item, validate_required(&item, RowField::Item.label()));
    result.record(
        RowField::Description,
        validate_required(&description, RowField::Description.label()),
    );
    result.record(RowField::Date, validate_date(&date));
    result.record(RowField::Amount, validate_amount(row.amount));

    for (field, value, max_length) in [
        (RowField::Category, &category, MAX_CATEGORY_LENGTH),
        (RowField::Item, &item, MAX_ITEM_LENGTH),
        (RowField::Description, &description, MAX_DESCRIPTION_LENGTH),
        (RowField::Notes, &notes, MAX_NOTES_LENGTH),
    ] {
        result.record(field, validate_string_length(value, max_length));
    }

    result
}
