//! CLI commands for showing and changing configuration

use clap::Subcommand;

use crate::config::{paths::BudgetPaths, settings::SettingKey, settings::Settings};
use crate::error::BudgetResult;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration and paths (default)
    Show,

    /// Change one setting and save it
    Set {
        /// Setting to change
        #[arg(value_enum)]
        key: SettingKey,

        /// New value; empty clears export-dir and analytics-id
        value: String,
    },
}

/// Handle config commands
pub fn handle_config_command(paths: &BudgetPaths, cmd: Option<ConfigCommands>) -> BudgetResult<()> {
    let mut settings = Settings::load_or_create(paths)?;

    match cmd.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => println!("{}", format_config(paths, &settings)),
        ConfigCommands::Set { key, value } => {
            settings.set(key, &value)?;
            settings.save(paths)?;
            tracing::info!(key = %key, "saved setting");
            println!("Set {} in {}", key, paths.settings_file().display());
        }
    }

    Ok(())
}

fn format_config(paths: &BudgetPaths, settings: &Settings) -> String {
    let export_dir = settings
        .export_dir
        .as_ref()
        .map(|d| d.display().to_string())
        .unwrap_or_else(|| "(current directory)".into());

    let mut lines = vec![
        "budget-sheet Configuration".to_string(),
        "==========================".to_string(),
        format!("Config directory: {}", paths.base_dir().display()),
        format!(
            "Settings file:    {}{}",
            paths.settings_file().display(),
            if paths.is_initialized() { "" } else { " (not created)" }
        ),
        String::new(),
        "Settings:".to_string(),
        format!("  Site name:        {}", settings.site_name),
        format!("  Currency symbol:  {}", settings.currency_symbol),
        format!("  Export prefix:    {}", settings.export_prefix),
        format!("  Export format:    {}", settings.default_export_format),
        format!("  Export directory: {}", export_dir),
    ];
    if let Some(id) = settings.analytics_id() {
        lines.push(format!("  Analytics ID:     {}", id));
    }

    lines.join("\n")
}
