//! Storage layer for budget-sheet
//!
//! Reads sheet documents the caller points at and writes small JSON files
//! (settings) atomically. There is no data store of our own.

pub mod document;
pub mod file_io;

pub use document::{read_budget_csv, SheetDocument, CSV_HEADERS};
pub use file_io::{read_json_required, read_yaml_required, write_json_atomic};
