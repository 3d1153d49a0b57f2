//! Validation for budget rows
//!
//! - `field`: single-value checks (required, amount, date, length)
//! - `row`: the strict field-by-field row check
//! - `legacy`: the loose boolean row check

pub mod field;
pub mod legacy;
pub mod row;

pub use field::{
    parse_date, validate_amount, validate_date, validate_default_length, validate_required,
    validate_string_length, FieldCheck, FieldError, DEFAULT_MAX_LENGTH,
};
pub use legacy::is_loosely_valid;
pub use row::{validate_budget_row, RowField, RowValidation};
