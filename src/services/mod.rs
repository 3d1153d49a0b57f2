//! Service layer for budget-sheet
//!
//! Editing operations over the caller-owned row collection.

pub mod sheet;

pub use sheet::{BudgetSheet, CellEdit};
