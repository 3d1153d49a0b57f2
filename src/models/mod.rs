//! Core data models for budget-sheet
//!
//! The budget row itself, plus the dropdown option tables the sheet offers
//! when a row is edited.

pub mod defaults;
pub mod options;
pub mod row;

pub use defaults::{categories_for, default_items, DEFAULT_CATEGORIES, DEFAULT_ITEMS};
pub use options::{CustomOption, OptionCatalog};
pub use row::{BudgetRow, BudgetType, BudgetTypeParseError, RowDraft};
