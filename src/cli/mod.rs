//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the library layer.

pub mod config;
pub mod export;
pub mod options;
pub mod sanitize;
pub mod summary;
pub mod validate;

pub use config::{handle_config_command, ConfigCommands};
pub use export::{handle_export_command, ExportArgs};
pub use options::{handle_options_command, OptionsArgs};
pub use sanitize::{handle_sanitize_command, SanitizeArgs};
pub use summary::{handle_summary_command, SummaryArgs};
pub use validate::{handle_validate_command, ValidateArgs};
