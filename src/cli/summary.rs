//! CLI command for the budget summary

use clap::Args;
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::display::format_summary;
use crate::error::BudgetResult;
use crate::reports::BudgetSummary;
use crate::storage::SheetDocument;

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Sheet document (JSON, YAML or CSV)
    pub file: PathBuf,
}

/// Handle the summary command
pub fn handle_summary_command(settings: &Settings, args: SummaryArgs) -> BudgetResult<()> {
    let sheet = SheetDocument::load(&args.file)?.into_sheet()?;
    let summary = BudgetSummary::generate(sheet.rows());

    println!("{}", format_summary(&summary, &settings.currency_symbol));
    Ok(())
}
