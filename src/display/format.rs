//! Formatting helpers for terminal output

use crate::reports::Standing;

/// Format an amount the en-US way: `$1,234.56`, `-$50.00`
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return format!("{}-", symbol);
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = group_thousands(cents / 100);
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    format!("{}{}{}.{:02}", sign, symbol, dollars, cents % 100)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Color a formatted amount by budget standing
pub fn colored_by_standing(text: &str, standing: Standing) -> String {
    match standing {
        Standing::Surplus => format!("\x1b[32m{}\x1b[0m", text), // Green
        Standing::Deficit => format!("\x1b[31m{}\x1b[0m", text), // Red
        Standing::Balanced => text.to_string(),
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
