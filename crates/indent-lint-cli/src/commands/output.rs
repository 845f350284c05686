//! Shared output formatting for lint results.

use anyhow::Result;
use indent_lint_core::{DiagnosticReport, LintResult, Severity};
use miette::NamedSource;
use std::path::Path;

use crate::OutputFormat;

/// Print lint results in the specified format.
///
/// `root` is the analyzed directory; diagnostic paths are relative to it.
pub fn print(result: &LintResult, format: OutputFormat, root: &Path) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Pretty => print_pretty(result, root),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    let (errors, warnings) = result.count_by_severity();

    for diagnostic in &result.diagnostics {
        let severity_indicator = match diagnostic.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
        };

        println!(
            "{} at {}:{}:{}",
            diagnostic.rule,
            diagnostic.location.file.display(),
            diagnostic.location.line,
            diagnostic.location.column,
        );
        println!("  {}: {}", severity_indicator, diagnostic.message);
        println!();
    }

    println!(
        "{}{}\x1b[0m",
        summary_color(errors, warnings),
        result.summary()
    );
}

fn print_pretty(result: &LintResult, root: &Path) {
    let (errors, warnings) = result.count_by_severity();

    for diagnostic in &result.diagnostics {
        let file = &diagnostic.location.file;
        let report = miette::Report::new(DiagnosticReport::from(diagnostic));
        match std::fs::read_to_string(root.join(file)) {
            Ok(content) => {
                let named = NamedSource::new(file.display().to_string(), content);
                eprintln!("{:?}", report.with_source_code(named));
            }
            Err(e) => {
                tracing::debug!("Cannot read {} for snippet: {}", file.display(), e);
                eprintln!("{diagnostic}");
            }
        }
    }

    eprintln!(
        "{}{}\x1b[0m",
        summary_color(errors, warnings),
        result.summary()
    );
}

fn summary_color(errors: usize, warnings: usize) -> &'static str {
    if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    }
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for diagnostic in &result.diagnostics {
        println!("{diagnostic}");
    }
}
