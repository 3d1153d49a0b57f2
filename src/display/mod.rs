//! Display formatting for terminal output
//!
//! Provides utilities for formatting summaries, validation reports and
//! option lists for the terminal.

pub mod format;
pub mod options;
pub mod summary;
pub mod validation;

pub use format::format_currency;
pub use options::format_option_list;
pub use summary::{format_category_table, format_summary};
pub use validation::{format_loose_report, format_validation_report};
