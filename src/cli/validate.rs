//! CLI command for checking a sheet document

use clap::Args;
use std::path::PathBuf;

use crate::display::{format_loose_report, format_validation_report};
use crate::error::{BudgetError, BudgetResult};
use crate::storage::SheetDocument;
use crate::validation::is_loosely_valid;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Sheet document (JSON, YAML or CSV)
    pub file: PathBuf,

    /// Loose check: a known type, category and item, a finite amount, and no negative income
    #[arg(long)]
    pub legacy: bool,
}

/// Handle the validate command
///
/// Prints a report and fails when any row does not pass.
pub fn handle_validate_command(args: ValidateArgs) -> BudgetResult<()> {
    let document = SheetDocument::load(&args.file)?;
    let total = document.rows.len();

    let failed = if args.legacy {
        let results: Vec<(usize, bool)> = document
            .rows
            .iter()
            .map(is_loosely_valid)
            .enumerate()
            .collect();
        println!("{}", format_loose_report(&results));
        results.iter().filter(|(_, ok)| !ok).count()
    } else {
        let results: Vec<_> = document
            .rows
            .iter()
            .map(|row| row.validate())
            .enumerate()
            .collect();
        println!("{}", format_validation_report(&results));
        results.iter().filter(|(_, r)| !r.is_valid()).count()
    };

    if failed > 0 {
        return Err(BudgetError::Validation(format!(
            "{} of {} rows in {} failed validation",
            failed,
            total,
            args.file.display()
        )));
    }

    Ok(())
}
