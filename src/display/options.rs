//! Dropdown option list formatting

/// Format a titled option list, one entry per line
pub fn format_option_list(title: &str, options: &[String]) -> String {
    if options.is_empty() {
        return format!("{}: (none)", title);
    }

    let mut output = format!("{}:\n", title);
    for option in options {
        output.push_str(&format!("  {}\n", option));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_option_list() {
        let output = format_option_list("Items for Pets", &["Grooming".into(), "Pet Food".into()]);
        assert!(output.starts_with("Items for Pets:\n"));
        assert!(output.contains("  Grooming\n"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_option_list("Items for X", &[]), "Items for X: (none)");
    }
}
