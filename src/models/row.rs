//! Budget row model
//!
//! A `BudgetRow` is one income or expense line item. Rows are value objects:
//! no id, no links to other rows, and an edit replaces the whole row.
//! `RowDraft` is the same record before its type has been checked, which is
//! what arrives from files and forms.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::{validate_budget_row, RowValidation};

/// Whether a row brings money in or sends it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BudgetType {
    #[default]
    Income,
    Expense,
}

impl BudgetType {
    /// Both types in display order
    pub fn all() -> &'static [Self] {
        &[Self::Income, Self::Expense]
    }

    /// The literal name used in files and exports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for BudgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetType {
    type Err = BudgetTypeParseError;

    /// Only the exact names `Income` and `Expense` are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" => Ok(Self::Income),
            "Expense" => Ok(Self::Expense),
            other => Err(BudgetTypeParseError(other.to_string())),
        }
    }
}

/// Error for a type name other than `Income` / `Expense`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetTypeParseError(pub String);

impl fmt::Display for BudgetTypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown budget type '{}': expected Income or Expense", self.0)
    }
}

impl std::error::Error for BudgetTypeParseError {}

/// One income or expense line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRow {
    #[serde(rename = "type")]
    pub kind: BudgetType,

    pub category: String,

    pub item: String,

    #[serde(default)]
    pub description: String,

    /// Calendar date as entered (normally `YYYY-MM-DD`)
    #[serde(default)]
    pub date: String,

    pub amount: f64,

    #[serde(default)]
    pub notes: String,
}

impl BudgetRow {
    /// Create a row with the required classification fields set
    pub fn new(
        kind: BudgetType,
        category: impl Into<String>,
        item: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            kind,
            category: category.into(),
            item: item.into(),
            description: String::new(),
            date: String::new(),
            amount,
            notes: String::new(),
        }
    }

    /// The row a sheet appends on "add row": an income line dated `today`
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            ..Self::new(BudgetType::Income, "", "", 0.0)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == BudgetType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == BudgetType::Expense
    }

    /// Run the strict field-by-field check on this row
    pub fn validate(&self) -> RowValidation {
        validate_budget_row(&RowDraft::from(self))
    }
}

/// A row whose type has not been checked yet
///
/// Every field defaults, so partial input deserializes and the validator,
/// not the parser, reports what is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowDraft {
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub item: String,
    pub description: String,
    pub date: String,
    pub amount: f64,
    pub notes: String,
}

impl RowDraft {
    /// Strict field-by-field validation
    pub fn validate(&self) -> RowValidation {
        validate_budget_row(self)
    }

    /// Convert into a typed row; only the type name has to be valid
    pub fn into_row(self) -> Result<BudgetRow, BudgetTypeParseError> {
        Ok(BudgetRow {
            kind: self.kind.parse()?,
            category: self.category,
            item: self.item,
            description: self.description,
            date: self.date,
            amount: self.amount,
            notes: self.notes,
        })
    }
}

impl From<&BudgetRow> for RowDraft {
    fn from(row: &BudgetRow) -> Self {
        Self {
            kind: row.kind.as_str().to_string(),
            category: row.category.clone(),
            item: row.item.clone(),
            description: row.description.clone(),
            date: row.date.clone(),
            amount: row.amount,
            notes: row.notes.clone(),
        }
    }
}

impl From<BudgetRow> for RowDraft {
    fn from(row: BudgetRow) -> Self {
        Self {
            kind: row.kind.as_str().to_string(),
            category: row.category,
            item: row.item,
            description: row.description,
            date: row.date,
            amount: row.amount,
            notes: row.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salary() -> BudgetRow {
        BudgetRow::new(BudgetType::Income, "Salary", "Monthly Salary", 5000.0)
            .with_description("Primary income")
            .with_date("2025-01-15")
            .with_notes("Direct deposit")
    }

    #[test]
    fn test_budget_type_parse() {
        assert_eq!("Income".parse::<BudgetType>(), Ok(BudgetType::Income));
        assert_eq!("Expense".parse::<BudgetType>(), Ok(BudgetType::Expense));
        assert!("income".parse::<BudgetType>().is_err());
        assert!("Invalid".parse::<BudgetType>().is_err());
    }

    #[test]
    fn test_blank_row() {
        let row = BudgetRow::blank(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
        assert_eq!(row.kind, BudgetType::Income);
        assert_eq!(row.date, "2025-03-09");
        assert_eq!(row.amount, 0.0);
        assert!(row.category.is_empty());
        assert!(!row.validate().is_valid());
    }

    #[test]
    fn test_complete_row_is_valid() {
        assert!(salary().validate().is_valid());
        assert!(salary().is_income());
        assert!(!salary().is_expense());
    }

    #[test]
    fn test_serialization_uses_type_key() {
        let json = serde_json::to_value(salary()).unwrap();
        assert_eq!(json["type"], "Income");
        assert_eq!(json["amount"], 5000.0);

        let back: BudgetRow = serde_json::from_value(json).unwrap();
        assert_eq!(back, salary());
    }

    #[test]
    fn test_notes_optional_in_input() {
        let row: BudgetRow = serde_json::from_str(
            r#"{"type":"Expense","category":"Housing","item":"Rent","amount":1200}"#,
        )
        .unwrap();
        assert!(row.notes.is_empty());
        assert!(row.is_expense());
    }

    #[test]
    fn test_draft_accepts_unknown_type() {
        let draft: RowDraft =
            serde_json::from_str(r#"{"type":"Gift","category":"Other","amount":3}"#).unwrap();
        assert_eq!(draft.kind, "Gift");
        assert!(draft.clone().into_row().is_err());
        assert!(draft.validate().error("type").is_some());
    }

    #[test]
    fn test_draft_round_trip() {
        let draft = RowDraft::from(&salary());
        assert_eq!(draft.kind, "Income");
        assert_eq!(draft.into_row().unwrap(), salary());
    }
}
