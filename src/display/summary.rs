//! Summary display formatting
//!
//! Renders a [`BudgetSummary`] as totals plus one table per row type.

use tabled::{settings::Style, Table, Tabled};

use crate::models::BudgetType;
use crate::reports::{BudgetSummary, CategoryTotal};

use super::format::{colored_by_standing, format_currency, separator};

#[derive(Tabled)]
struct CategoryLine {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Rows")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
}

/// Format the full summary
pub fn format_summary(summary: &BudgetSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("Budget Summary\n");
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!(
        "  Total Income:     {}\n",
        format_currency(summary.total_income, symbol)
    ));
    output.push_str(&format!(
        "  Total Expenses:   {}\n",
        format_currency(summary.total_expenses, symbol)
    ));
    output.push_str(&format!(
        "  Remaining Budget: {}\n",
        colored_by_standing(&format_currency(summary.remaining, symbol), summary.standing())
    ));

    for kind in BudgetType::all() {
        output.push('\n');
        output.push_str(&format!("{} Categories\n", kind));
        output.push_str(&format_category_table(summary.categories(*kind), *kind, symbol));
        output.push('\n');
    }

    output
}

/// Format one category breakdown as a table
pub fn format_category_table(totals: &[CategoryTotal], kind: BudgetType, symbol: &str) -> String {
    if totals.is_empty() {
        return format!("No {} categories", kind.as_str().to_lowercase());
    }

    let lines = totals.iter().map(|t| CategoryLine {
        category: t.category.clone(),
        count: t.count,
        total: format_currency(t.total, symbol),
    });

    let mut table = Table::new(lines);
    table.with(Style::psql());
    table.to_string()
}
