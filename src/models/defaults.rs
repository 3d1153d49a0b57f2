//! Built-in category and item lists
//!
//! These tables are immutable. User additions live in
//! [`super::options::OptionCatalog`] and are merged in at query time.

use super::row::BudgetType;

/// Default categories offered in the sheet: income first, then expenses
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Salary",
    "Business",
    "Investments",
    "Government",
    "Other Income",
    "Housing",
    "Transportation",
    "Food & Dining",
    "Utilities",
    "Healthcare",
    "Personal Care",
    "Entertainment",
    "Savings",
    "Debt Payments",
    "Insurance",
    "Education",
    "Childcare",
    "Pets",
    "Gifts & Donations",
    "Miscellaneous",
];

/// Default items per category
pub const DEFAULT_ITEMS: &[(&str, &[&str])] = &[
    ("Salary", &["Base Salary", "Overtime Pay", "Bonus", "Commission", "Tips"]),
    ("Business", &["Revenue", "Consulting", "Freelance Work", "Contract Work", "Sales"]),
    ("Investments", &["Dividends", "Interest", "Capital Gains", "Rental Income", "Royalties"]),
    ("Government", &["Social Security", "Unemployment", "Tax Refund", "Stimulus", "Disability"]),
    ("Other Income", &["Gifts", "Lottery", "Side Hustle", "Alimony", "Child Support"]),
    (
        "Housing",
        &["Rent", "Mortgage", "Property Tax", "HOA Fees", "Home Insurance", "Maintenance", "Utilities Deposit"],
    ),
    (
        "Transportation",
        &["Gas", "Car Payment", "Car Insurance", "Parking", "Public Transit", "Car Maintenance", "Registration"],
    ),
    (
        "Food & Dining",
        &["Groceries", "Dining Out", "Coffee & Snacks", "Meal Delivery", "Work Lunches", "Alcohol"],
    ),
    (
        "Utilities",
        &["Electric", "Water", "Internet", "Phone", "Cable TV", "Trash", "Security System"],
    ),
    (
        "Healthcare",
        &["Health Insurance", "Doctor Visits", "Prescriptions", "Dental", "Vision", "Mental Health"],
    ),
    ("Personal Care", &["Haircuts", "Cosmetics", "Clothing", "Gym Membership", "Subscriptions"]),
    ("Entertainment", &["Movies", "Streaming Services", "Games", "Hobbies", "Concerts", "Books"]),
    ("Savings", &["Emergency Fund", "Retirement", "Vacation Fund", "Investment", "Down Payment"]),
    ("Debt Payments", &["Credit Card", "Student Loan", "Personal Loan", "Medical Debt"]),
    ("Insurance", &["Life Insurance", "Disability Insurance", "Umbrella Policy"]),
    ("Education", &["Tuition", "Books", "Courses", "Training"]),
    ("Childcare", &["Daycare", "Babysitting", "School Supplies", "Activities"]),
    ("Pets", &["Pet Food", "Vet Bills", "Pet Insurance", "Grooming"]),
    ("Gifts & Donations", &["Birthday Gifts", "Holiday Gifts", "Charity", "Tips"]),
    ("Miscellaneous", &["Bank Fees", "Legal Fees", "Tax Preparation", "Other"]),
];

/// Short category list for the simple entry form, income side
pub const INCOME_CATEGORIES: &[&str] = &["Salary", "Freelance", "Investment", "Other Income"];

/// Short category list for the simple entry form, expense side
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Housing",
    "Food",
    "Transportation",
    "Healthcare",
    "Entertainment",
    "Other Expense",
];

/// Default items for a category; empty for categories without defaults
pub fn default_items(category: &str) -> &'static [&'static str] {
    DEFAULT_ITEMS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, items)| *items)
        .unwrap_or(&[])
}

/// Simple-form categories for a row type
pub fn categories_for(kind: BudgetType) -> &'static [&'static str] {
    match kind {
        BudgetType::Income => INCOME_CATEGORIES,
        BudgetType::Expense => EXPENSE_CATEGORIES,
    }
}

/// The catch-all entry of the simple-form list for a row type
pub fn other_category(kind: BudgetType) -> &'static str {
    match kind {
        BudgetType::Income => "Other Income",
        BudgetType::Expense => "Other Expense",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_default_category_has_items() {
        assert_eq!(DEFAULT_CATEGORIES.len(), 20);
        for category in DEFAULT_CATEGORIES {
            assert!(!default_items(category).is_empty(), "{category}");
        }
    }

    #[test]
    fn test_default_items_lookup() {
        assert_eq!(default_items("Pets"), &["Pet Food", "Vet Bills", "Pet Insurance", "Grooming"]);
        assert!(default_items("Nope").is_empty());
    }

    #[test]
    fn test_simple_form_lists() {
        assert_eq!(categories_for(BudgetType::Income).len(), 4);
        assert_eq!(categories_for(BudgetType::Expense).len(), 6);
        assert!(categories_for(BudgetType::Expense).contains(&other_category(BudgetType::Expense)));
        assert!(categories_for(BudgetType::Income).contains(&other_category(BudgetType::Income)));
    }
}
