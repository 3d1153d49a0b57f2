//! User-added dropdown options
//!
//! Custom categories and items are append-only and kept in insertion order.
//! Lookups merge them with the built-in tables and sort for display; the
//! built-in tables themselves never change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::defaults::{default_items, DEFAULT_CATEGORIES};

/// A dropdown entry added by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomOption {
    pub id: Uuid,

    pub value: String,

    /// When the option was added
    pub created_at: DateTime<Utc>,
}

impl CustomOption {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            value: value.into(),
            created_at: Utc::now(),
        }
    }
}

/// Custom categories, and custom items grouped by category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionCatalog {
    #[serde(default)]
    custom_categories: Vec<CustomOption>,

    #[serde(default)]
    custom_items: BTreeMap<String, Vec<CustomOption>>,
}

impl OptionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a custom category
    ///
    /// The value is trimmed. Returns `false` (and adds nothing) for blank
    /// input or a category that is already offered.
    pub fn add_category(&mut self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() || self.categories().iter().any(|c| c == value) {
            return false;
        }
        self.custom_categories.push(CustomOption::new(value));
        true
    }

    /// Add a custom item under `category`, with the same rules as
    /// [`Self::add_category`]
    pub fn add_item(&mut self, category: &str, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() || self.items(category).iter().any(|i| i == value) {
            return false;
        }
        self.custom_items
            .entry(category.to_string())
            .or_default()
            .push(CustomOption::new(value));
        true
    }

    /// Custom categories in the order they were added
    pub fn custom_categories(&self) -> &[CustomOption] {
        &self.custom_categories
    }

    /// Custom items for a category in the order they were added
    pub fn custom_items(&self, category: &str) -> &[CustomOption] {
        self.custom_items
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Default and custom categories, sorted
    pub fn categories(&self) -> Vec<String> {
        merge_sorted(
            DEFAULT_CATEGORIES,
            self.custom_categories.iter().map(|o| o.value.as_str()),
        )
    }

    /// Default and custom items for a category, sorted
    pub fn items(&self, category: &str) -> Vec<String> {
        merge_sorted(
            default_items(category),
            self.custom_items(category).iter().map(|o| o.value.as_str()),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.custom_categories.is_empty() && self.custom_items.values().all(Vec::is_empty)
    }
}

fn merge_sorted<'a>(defaults: &[&'a str], custom: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut all: Vec<String> = defaults
        .iter()
        .copied()
        .chain(custom)
        .map(str::to_string)
        .collect();
    all.sort();
    all.dedup();
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_sorted_with_defaults() {
        let catalog = OptionCatalog::new();
        let categories = catalog.categories();
        assert_eq!(categories.len(), DEFAULT_CATEGORIES.len());
        assert_eq!(categories.first().map(String::as_str), Some("Business"));
        assert!(categories.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_add_category_merges_and_sorts() {
        let mut catalog = OptionCatalog::new();
        assert!(catalog.add_category("  Aardvark Care "));
        assert!(catalog.add_category("Zoo Pass"));

        let categories = catalog.categories();
        assert_eq!(categories.first().map(String::as_str), Some("Aardvark Care"));
        assert_eq!(categories.last().map(String::as_str), Some("Zoo Pass"));

        let custom: Vec<_> = catalog
            .custom_categories()
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(custom, vec!["Aardvark Care", "Zoo Pass"]);
    }

    #[test]
    fn test_add_rejects_blank_and_duplicates() {
        let mut catalog = OptionCatalog::new();
        assert!(!catalog.add_category("   "));
        assert!(!catalog.add_category("Housing"));
        assert!(catalog.add_category("Hobby"));
        assert!(!catalog.add_category("Hobby"));
        assert_eq!(catalog.custom_categories().len(), 1);
    }

    #[test]
    fn test_items_per_category() {
        let mut catalog = OptionCatalog::new();
        assert!(catalog.add_item("Pets", "Aquarium"));
        assert!(!catalog.add_item("Pets", "Grooming"));

        let items = catalog.items("Pets");
        assert_eq!(items, vec!["Aquarium", "Grooming", "Pet Food", "Pet Insurance", "Vet Bills"]);
        assert!(catalog.items("Housing").iter().all(|i| i != "Aquarium"));
    }

    #[test]
    fn test_items_for_custom_category() {
        let mut catalog = OptionCatalog::new();
        assert!(catalog.items("Side Projects").is_empty());
        catalog.add_category("Side Projects");
        catalog.add_item("Side Projects", "Domain Names");
        assert_eq!(catalog.items("Side Projects"), vec!["Domain Names"]);
    }

    #[test]
    fn test_merge_sorted_dedups_across_sources() {
        let custom = [String::from("Bonus"), String::from("Advance")];
        let merged = merge_sorted(&["Tips", "Bonus"], custom.iter().map(String::as_str));
        assert_eq!(merged, vec!["Advance", "Bonus", "Tips"]);
    }

    #[test]
    fn test_defaults_untouched() {
        let mut catalog = OptionCatalog::new();
        catalog.add_category("Extra");
        assert!(!DEFAULT_CATEGORIES.contains(&"Extra"));
        assert!(OptionCatalog::new().is_empty());
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_serialization() {
        let mut catalog = OptionCatalog::new();
        catalog.add_category("Hobby");
        catalog.add_item("Hobby", "Paint");
        let json = serde_json::to_string(&catalog).unwrap();
        let back: OptionCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
