//! Shared output formatting for lint results.

use anyhow::Result;
use naming_lint_core::{LintResult, Severity, Violation};

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    let (errors, warnings, infos) = result.count_by_severity();

    for violation in &result.violations {
        let severity_indicator = match violation.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        match &violation.location {
            Some(location) => println!("{} {} at {location}", violation.code, violation.rule),
            None => println!("{} {}", violation.code, violation.rule),
        }
        println!("  {}: {}", severity_indicator, violation.message);
        if let Some(uri) = &violation.help_uri {
            println!("  = see: {uri}");
        }
        println!();
    }

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} compilation(s)\x1b[0m",
        summary_color, errors, warnings, infos, result.compilations_checked
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        println!("{}", compact_line(violation));
    }
}

fn compact_line(violation: &Violation) -> String {
    violation.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use naming_lint_core::Location;

    #[test]
    fn compact_line_with_and_without_location() {
        let located = Violation::new(
            "NL0004",
            "boolean-member-name",
            Severity::Warning,
            Some(Location::new("src/Widget.cs", 12, 18)),
            "Boolean 'visible' does not follow the 'can|has|is' naming convention",
        );
        let global = Violation::new(
            "NL0004",
            "boolean-member-name",
            Severity::Error,
            None,
            "'[' is an invalid regex pattern",
        );

        assert!(compact_line(&located).starts_with("src/Widget.cs:12:18: "));
        assert!(compact_line(&located).ends_with("[NL0004] Boolean 'visible' does not follow the 'can|has|is' naming convention"));
        assert!(compact_line(&global).ends_with("[NL0004] '[' is an invalid regex pattern"));
    }
}
