use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_sheet::cli::{
    handle_config_command, handle_export_command, handle_options_command,
    handle_sanitize_command, handle_summary_command, handle_validate_command,
};
use budget_sheet::config::{paths::BudgetPaths, settings::Settings};
use budget_sheet::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Monthly budget sheets with safe spreadsheet export",
    long_about = "budget-sheet checks, summarizes and exports monthly income and \
                  expense sheets. Every free-text cell is sanitized on export so \
                  the files are safe to open in a spreadsheet application."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check every row of a sheet document
    Validate(budget_sheet::cli::ValidateArgs),

    /// Show income and expense totals
    Summary(budget_sheet::cli::SummaryArgs),

    /// Export a sheet document to CSV or Excel
    Export(budget_sheet::cli::ExportArgs),

    /// Sanitize a single value as it would be exported
    Sanitize(budget_sheet::cli::SanitizeArgs),

    /// List dropdown categories and items
    Options(budget_sheet::cli::OptionsArgs),

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: Option<budget_sheet::cli::ConfigCommands>,
    },
}

/// Resolve the config directory and load settings
///
/// Only commands that read settings call this, so a broken `config.json`
/// does not stop `sanitize`, `validate` or `options`.
fn load_settings() -> Result<Settings> {
    let paths = BudgetPaths::new()?;
    Ok(Settings::load_or_create(&paths)?)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Validate(args)) => handle_validate_command(args)?,
        Some(Commands::Summary(args)) => handle_summary_command(&load_settings()?, args)?,
        Some(Commands::Export(args)) => handle_export_command(&load_settings()?, args)?,
        Some(Commands::Sanitize(args)) => handle_sanitize_command(args)?,
        Some(Commands::Options(args)) => handle_options_command(args)?,
        Some(Commands::Config { command }) => handle_config_command(&BudgetPaths::new()?, command)?,
        None => {
            println!("budget-sheet - Monthly budget sheets");
            println!();
            println!("Run 'budget --help' for usage information.");
        }
    }

    Ok(())
}
