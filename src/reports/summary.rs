//! Budget summary
//!
//! Totals by type and per-category breakdowns for a set of rows.

use crate::models::{BudgetRow, BudgetType};

/// Label for rows with an empty category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
    /// Number of rows in the category
    pub count: usize,
}

/// Whether income covers expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    Surplus,
    Balanced,
    Deficit,
}

/// Budget summary over a set of rows
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    /// Income minus expenses
    pub remaining: f64,
    /// Income per category, in order of first appearance
    pub income_categories: Vec<CategoryTotal>,
    /// Expenses per category, in order of first appearance
    pub expense_categories: Vec<CategoryTotal>,
    pub row_count: usize,
}

impl BudgetSummary {
    /// Generate the summary
    pub fn generate(rows: &[BudgetRow]) -> Self {
        let income_categories = group_by_category(rows, BudgetType::Income);
        let expense_categories = group_by_category(rows, BudgetType::Expense);

        let total_income: f64 = income_categories.iter().map(|c| c.total).sum();
        let total_expenses: f64 = expense_categories.iter().map(|c| c.total).sum();

        Self {
            total_income,
            total_expenses,
            remaining: total_income - total_expenses,
            income_categories,
            expense_categories,
            row_count: rows.len(),
        }
    }

    pub fn standing(&self) -> Standing {
        if self.remaining > 0.0 {
            Standing::Surplus
        } else if self.remaining < 0.0 {
            Standing::Deficit
        } else {
            Standing::Balanced
        }
    }

    pub fn categories(&self, kind: BudgetType) -> &[CategoryTotal] {
        match kind {
            BudgetType::Income => &self.income_categories,
            BudgetType::Expense => &self.expense_categories,
        }
    }
}

fn group_by_category(rows: &[BudgetRow], kind: BudgetType) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for row in rows.iter().filter(|r| r.kind == kind) {
        let category = if row.category.is_empty() {
            UNCATEGORIZED
        } else {
            row.category.as_str()
        };
        // a NaN amount would poison every total after it
        let amount = if row.amount.is_nan() { 0.0 } else { row.amount };

        match totals.iter_mut().find(|t| t.category == category) {
            Some(entry) => {
                entry.total += amount;
                entry.count += 1;
            }
            None => totals.push(CategoryTotal {
                category: category.to_string(),
                total: amount,
                count: 1,
            }),
        }
    }

    totals
}
