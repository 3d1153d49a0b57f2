//! Input sanitization
//!
//! Everything typed by a user passes through here before it is rendered or
//! written to a spreadsheet file:
//! - `sanitize`: formula-trigger stripping and HTML escaping
//! - `analytics`: tracking-ID format guard

pub mod analytics;
pub mod sanitize;

pub use analytics::sanitize_analytics_id;
pub use sanitize::{
    escape_html, prevent_xss, sanitize_for_export, sanitize_optional_cell,
    sanitize_spreadsheet_cell, FORMULA_TRIGGERS,
};
