//! Single-value checks
//!
//! Each check returns `Ok(())` or the [`FieldError`] whose `Display` text is
//! the message shown next to the field.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Length bound used when a caller gives none
pub const DEFAULT_MAX_LENGTH: usize = 1000;

/// Why a single field was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(String),

    #[error("Type must be either Income or Expense")]
    InvalidType,

    #[error("Amount must be greater than 0")]
    AmountNotPositive,

    #[error("Date is required")]
    DateRequired,

    #[error("Invalid date format")]
    InvalidDate,

    #[error("Input too long. Maximum {max_length} characters allowed.")]
    TooLong { max_length: usize },
}

/// Result of a single-field check
pub type FieldCheck = Result<(), FieldError>;

/// Fails when `value` is empty or only whitespace
pub fn validate_required(value: &str, field_name: &str) -> FieldCheck {
    if value.trim().is_empty() {
        return Err(FieldError::Required(field_name.to_string()));
    }
    Ok(())
}

/// Fails unless `amount` is strictly greater than zero
pub fn validate_amount(amount: f64) -> FieldCheck {
    // written as a negated `>` so NaN fails too
    if !(amount > 0.0) {
        return Err(FieldError::AmountNotPositive);
    }
    Ok(())
}

/// Fails when the date is blank or does not name a real calendar day
pub fn validate_date(date: &str) -> FieldCheck {
    let date = date.trim();
    if date.is_empty() {
        return Err(FieldError::DateRequired);
    }
    if parse_date(date).is_none() {
        return Err(FieldError::InvalidDate);
    }
    Ok(())
}

/// Fails when `value` has more than `max_length` characters
pub fn validate_string_length(value: &str, max_length: usize) -> FieldCheck {
    if value.chars().count() > max_length {
        return Err(FieldError::TooLong { max_length });
    }
    Ok(())
}

/// [`validate_string_length`] with [`DEFAULT_MAX_LENGTH`]
pub fn validate_default_length(value: &str) -> FieldCheck {
    validate_string_length(value, DEFAULT_MAX_LENGTH)
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse the date formats a row may carry
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `MM/DD/YYYY`, RFC 3339 timestamps and
/// `YYYY-MM-DDTHH:MM[:SS]`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}
