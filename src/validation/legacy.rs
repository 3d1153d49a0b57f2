//! Loose boolean row check
//!
//! Older call paths only need a yes/no answer and are more permissive than
//! [`super::validate_budget_row`]: description and date may be blank, and an
//! expense may carry a negative amount. Keep the two checks separate.

use crate::models::{BudgetType, RowDraft};

/// `true` when the row has a known type, a category and item, a finite
/// amount, and no negative income
pub fn is_loosely_valid(row: &RowDraft) -> bool {
    let Ok(kind) = row.kind.parse::<BudgetType>() else {
        return false;
    };

    if row.category.is_empty() || row.item.is_empty() {
        return false;
    }

    if !row.amount.is_finite() {
        return false;
    }

    !(kind == BudgetType::Income && row.amount < 0.0)
}
