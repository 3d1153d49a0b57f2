//! CLI command for exporting a sheet to CSV or Excel

use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::export::{default_basename, export_rows, output_path, ExportFormat};
use crate::storage::SheetDocument;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Sheet document (JSON, YAML or CSV)
    pub file: PathBuf,

    /// Export format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Output file name without extension (default: {prefix}-{YYYY-MM-DD})
    #[arg(short, long)]
    pub output: Option<String>,

    /// Directory to write into (defaults to the configured export directory)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(settings: &Settings, args: ExportArgs) -> BudgetResult<()> {
    let sheet = SheetDocument::load(&args.file)?.into_sheet()?;

    let failing = sheet.validate().iter().filter(|(_, r)| !r.is_valid()).count();
    if failing > 0 {
        tracing::warn!(rows = failing, "exporting rows that fail validation");
    }

    let format = args.format.unwrap_or(settings.default_export_format);
    let basename = export_basename(settings, &args, Local::now().date_naive());

    if !export_rows(sheet.rows(), &basename, format) {
        return Err(BudgetError::Export(format!(
            "Failed to export {}",
            output_path(&basename, format).display()
        )));
    }

    println!(
        "Exported {} rows to: {}",
        sheet.len(),
        output_path(&basename, format).display()
    );
    Ok(())
}

/// Where the export goes, without extension
fn export_basename(settings: &Settings, args: &ExportArgs, today: NaiveDate) -> PathBuf {
    let name = args
        .output
        .clone()
        .unwrap_or_else(|| default_basename(&settings.export_prefix, today));

    match args.dir.as_ref().or(settings.export_dir.as_ref()) {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(output: Option<&str>, dir: Option<&str>) -> ExportArgs {
        ExportArgs {
            file: PathBuf::from("sheet.json"),
            format: None,
            output: output.map(String::from),
            dir: dir.map(PathBuf::from),
        }
    }

    #[test]
    fn test_default_basename_uses_prefix_and_date() {
        let mut settings = Settings::default();
        settings.export_prefix = "household".into();
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();

        assert_eq!(
            export_basename(&settings, &args(None, None), today),
            PathBuf::from("household-2025-06-30")
        );
    }

    #[test]
    fn test_dir_flag_overrides_settings() {
        let mut settings = Settings::default();
        settings.export_dir = Some(PathBuf::from("/configured"));
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();

        assert_eq!(
            export_basename(&settings, &args(Some("june"), Some("/tmp/out")), today),
            PathBuf::from("/tmp/out/june")
        );
        assert_eq!(
            export_basename(&settings, &args(Some("june"), None), today),
            PathBuf::from("/configured/june")
        );
    }
}
