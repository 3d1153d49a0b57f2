//! Configuration module for budget-sheet
//!
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::{SettingKey, Settings};
