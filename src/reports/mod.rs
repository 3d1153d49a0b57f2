//! Reports for budget-sheet
//!
//! Derived views over a set of rows.

pub mod summary;

pub use summary::{BudgetSummary, CategoryTotal, Standing, UNCATEGORIZED};
