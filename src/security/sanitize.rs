//! Spreadsheet-cell and HTML sanitization
//!
//! A cell value that starts with `=`, `+`, `-` or `@` is run as a formula by
//! spreadsheet applications. We strip one such leading character, then
//! escape the five HTML-reserved characters so the value is also safe to
//! render. Escaping is not idempotent: apply it once per output.

/// Leading characters that spreadsheet applications treat as a formula
pub const FORMULA_TRIGGERS: [char; 4] = ['=', '+', '-', '@'];

/// Sanitize a spreadsheet cell value
///
/// Strips a single leading formula trigger (never more than one) and then
/// HTML-escapes the remainder. Empty input is returned unchanged.
///
/// # Examples
/// ```
/// use budget_sheet::security::sanitize_spreadsheet_cell;
/// assert_eq!(sanitize_spreadsheet_cell("=SUM(A1:A10)"), "SUM(A1:A10)");
/// assert_eq!(sanitize_spreadsheet_cell("Tom & Jerry"), "Tom &amp; Jerry");
/// ```
pub fn sanitize_spreadsheet_cell(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let stripped = value
        .strip_prefix(|c: char| FORMULA_TRIGGERS.contains(&c))
        .unwrap_or(value);

    escape_html(stripped)
}

/// Cell sanitizer for optional input: `None` passes through untouched
pub fn sanitize_optional_cell(value: Option<&str>) -> Option<String> {
    value.map(sanitize_spreadsheet_cell)
}

/// Sanitize a value on its way into an export file
///
/// Same algorithm as [`sanitize_spreadsheet_cell`]; kept as its own entry
/// point so export call sites read as what they are.
pub fn sanitize_for_export(value: &str) -> String {
    sanitize_spreadsheet_cell(value)
}

/// General XSS prevention: escape only, no formula handling
///
/// Absent input yields an empty string.
pub fn prevent_xss(input: Option<&str>) -> String {
    match input {
        Some(s) if !s.is_empty() => escape_html(s),
        _ => String::new(),
    }
}

/// Escape `< > & " '` to their HTML entities
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
