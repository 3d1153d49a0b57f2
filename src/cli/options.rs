//! CLI command for listing dropdown options

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::display::format_option_list;
use crate::error::BudgetResult;
use crate::models::{categories_for, BudgetType, OptionCatalog};
use crate::storage::SheetDocument;

/// Row type filter for the simple-form category list
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypeFilter {
    Income,
    Expense,
}

impl From<TypeFilter> for BudgetType {
    fn from(filter: TypeFilter) -> Self {
        match filter {
            TypeFilter::Income => BudgetType::Income,
            TypeFilter::Expense => BudgetType::Expense,
        }
    }
}

#[derive(Args, Debug)]
pub struct OptionsArgs {
    /// List the items offered for this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Include the custom options saved in this sheet document
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// List the simple-form categories for one row type
    #[arg(short = 't', long = "type", value_enum, conflicts_with = "category")]
    pub kind: Option<TypeFilter>,
}

/// Handle the options command
pub fn handle_options_command(args: OptionsArgs) -> BudgetResult<()> {
    let catalog = match &args.file {
        Some(path) => SheetDocument::load(path)?.options,
        None => OptionCatalog::default(),
    };

    println!("{}", option_listing(&catalog, &args));
    Ok(())
}

fn option_listing(catalog: &OptionCatalog, args: &OptionsArgs) -> String {
    if let Some(kind) = args.kind {
        let kind = BudgetType::from(kind);
        let categories: Vec<String> = categories_for(kind).iter().map(|c| c.to_string()).collect();
        return format_option_list(&format!("{} categories", kind), &categories);
    }

    match &args.category {
        Some(category) => {
            format_option_list(&format!("Items for {}", category), &catalog.items(category))
        }
        None => format_option_list("Categories", &catalog.categories()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(category: Option<&str>, kind: Option<TypeFilter>) -> OptionsArgs {
        OptionsArgs {
            category: category.map(String::from),
            file: None,
            kind,
        }
    }

    #[test]
    fn test_lists_all_categories() {
        let mut catalog = OptionCatalog::default();
        catalog.add_category("Side Hustle");

        let output = option_listing(&catalog, &args(None, None));
        assert!(output.starts_with("Categories:\n"));
        assert!(output.contains("  Side Hustle\n"));
        assert!(output.contains("  Housing\n"));
    }

    #[test]
    fn test_lists_items_for_category() {
        let mut catalog = OptionCatalog::default();
        catalog.add_item("Housing", "Storage Unit");

        let output = option_listing(&catalog, &args(Some("Housing"), None));
        assert!(output.starts_with("Items for Housing:\n"));
        assert!(output.contains("  Rent\n"));
        assert!(output.contains("  Storage Unit\n"));
    }

    #[test]
    fn test_unknown_category_has_no_items() {
        let output = option_listing(&OptionCatalog::default(), &args(Some("Nope"), None));
        assert_eq!(output, "Items for Nope: (none)");
    }

    #[test]
    fn test_simple_form_categories() {
        let output = option_listing(&OptionCatalog::default(), &args(None, Some(TypeFilter::Income)));
        assert!(output.starts_with("Income categories:\n"));
        assert!(output.contains("  Freelance\n"));
        assert!(!output.contains("Housing"));
    }
}
