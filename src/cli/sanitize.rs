//! CLI command for sanitizing a single value

use clap::Args;

use crate::error::BudgetResult;
use crate::security::{prevent_xss, sanitize_spreadsheet_cell};

#[derive(Args, Debug)]
pub struct SanitizeArgs {
    /// Text to sanitize
    pub text: String,

    /// Only escape HTML, keep a leading formula character
    #[arg(long)]
    pub xss_only: bool,
}

/// Handle the sanitize command
pub fn handle_sanitize_command(args: SanitizeArgs) -> BudgetResult<()> {
    println!("{}", sanitized(&args));
    Ok(())
}

fn sanitized(args: &SanitizeArgs) -> String {
    if args.xss_only {
        prevent_xss(Some(&args.text))
    } else {
        sanitize_spreadsheet_cell(&args.text)
    }
}
