//! budget-sheet - Monthly budget sheets with safe spreadsheet export
//!
//! This library provides the core functionality for budget-sheet: income
//! and expense rows, their validation, a summary report, and export to CSV
//! and Excel with every free-text cell sanitized against formula injection
//! and HTML injection.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `security`: Cell sanitization and tracking-ID checks
//! - `validation`: Field and row validators
//! - `models`: Budget rows and dropdown options
//! - `services`: The editable budget sheet
//! - `storage`: Reading sheet documents (JSON, YAML, CSV)
//! - `export`: CSV and Excel export
//! - `reports`: Budget summary
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `budget` binary
//!
//! # Example
//!
//! ```rust
//! use budget_sheet::export::budget_csv_string;
//! use budget_sheet::models::{BudgetRow, BudgetType};
//!
//! let rows = vec![BudgetRow::new(BudgetType::Expense, "Housing", "=Rent", 1200.0)];
//! let csv = budget_csv_string(&rows).unwrap();
//! assert!(csv.contains("\"Rent\""));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod security;
pub mod services;
pub mod storage;
pub mod validation;

pub use error::{BudgetError, BudgetResult};
