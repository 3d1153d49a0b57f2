//! Validation report formatting

use crate::validation::RowValidation;

/// Format per-row results; only failing rows are listed
///
/// Row numbers are 1-based.
pub fn format_validation_report(results: &[(usize, RowValidation)]) -> String {
    let failing: Vec<_> = results.iter().filter(|(_, r)| !r.is_valid()).collect();

    if failing.is_empty() {
        return format!("All {} rows are valid.", results.len());
    }

    let mut output = String::new();
    for (index, result) in &failing {
        output.push_str(&format!("Row {}:\n", index + 1));
        for (field, error) in result.errors() {
            output.push_str(&format!("  {:<12} {}\n", field.as_str(), error));
        }
    }
    output.push_str(&format!(
        "\n{} of {} rows failed validation.",
        failing.len(),
        results.len()
    ));

    output
}

/// Format loose-check results (one flag per row)
pub fn format_loose_report(results: &[(usize, bool)]) -> String {
    let failing: Vec<_> = results.iter().filter(|(_, ok)| !ok).map(|(i, _)| i + 1).collect();

    if failing.is_empty() {
        return format!("All {} rows pass the basic check.", results.len());
    }

    let rows: Vec<String> = failing.iter().map(ToString::to_string).collect();
    format!(
        "Rows failing the basic check: {}\n\n{} of {} rows failed.",
        rows.join(", "),
        failing.len(),
        results.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RowDraft;

    #[test]
    fn test_all_valid() {
        let output = format_validation_report(&[(0, RowValidation::default())]);
        assert_eq!(output, "All 1 rows are valid.");
    }

    #[test]
    fn test_failing_row_listed() {
        let results = vec![
            (0, RowValidation::default()),
            (1, RowDraft::default().validate()),
        ];
        let output = format_validation_report(&results);

        assert!(output.contains("Row 2:"));
        assert!(!output.contains("Row 1:"));
        assert!(output.contains("Amount must be greater than 0"));
        assert!(output.contains("1 of 2 rows failed validation."));
    }

    #[test]
    fn test_loose_report() {
        assert!(format_loose_report(&[(0, true)]).contains("All 1 rows"));
        let output = format_loose_report(&[(0, true), (1, false), (2, false)]);
        assert!(output.contains("Rows failing the basic check: 2, 3"));
    }
}
