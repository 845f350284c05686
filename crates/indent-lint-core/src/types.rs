//! Core types for matches, violations, and lint results.

use miette::{Diagnostic as MietteDiagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for lint violations.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    #[default]
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A located occurrence of a rule's pattern in source text.
///
/// `offset` and `length` are byte positions into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    /// Start of the match.
    pub offset: usize,
    /// Number of bytes covered by the match.
    pub length: usize,
}

impl Match {
    /// Creates a new match.
    #[must_use]
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// Exclusive end offset of the match.
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

/// A rule violation at a byte offset, before location translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    /// Stable rule identifier (e.g., "`mixed_indentation`").
    pub rule: String,
    /// Severity configured on the rule that produced this violation.
    pub severity: Severity,
    /// Byte offset of the violation in the file.
    #[serde(rename = "byte_offset")]
    pub offset: usize,
    /// Length of the offending span in bytes.
    #[serde(rename = "byte_length")]
    pub length: usize,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(rule: impl Into<String>, severity: Severity, offset: usize, length: usize) -> Self {
        Self {
            rule: rule.into(),
            severity,
            offset,
            length,
        }
    }
}

/// Source code location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path relative to project root.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, in characters).
    pub column: usize,
    /// Byte offset in file (for miette integration).
    ///
    /// Serialized as `byte_offset` so JSON consumers see the unit.
    #[serde(rename = "byte_offset")]
    pub offset: usize,
    /// Length of the span in bytes.
    #[serde(rename = "byte_length")]
    pub length: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// A violation resolved to a file location, ready for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Rule identifier.
    pub rule: String,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Location of the offending span.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.into(),
            severity,
            location,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.rule,
            self.message
        )
    }
}

/// A [`Diagnostic`] as a miette diagnostic for rich terminal rendering.
#[derive(Debug, thiserror::Error, MietteDiagnostic)]
#[error("{message}")]
pub struct DiagnosticReport {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Diagnostic> for DiagnosticReport {
    fn from(d: &Diagnostic) -> Self {
        Self {
            message: format!("[{}] {}", d.rule, d.message),
            help: Some("indent with either tabs or spaces, not both".to_string()),
            span: SourceSpan::from((d.location.offset, d.location.length)),
            label_message: format!("{} here", d.severity),
        }
    }
}

/// Result of running lint analysis.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All diagnostics found.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of files checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_violations_at(Severity::Error)
    }

    /// Checks if any diagnostics meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.diagnostics.iter().any(|d| d.severity >= severity)
    }

    /// Counts diagnostics as `(errors, warnings)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize) {
        let errors = self
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        (errors, self.diagnostics.len() - errors)
    }

    /// Formats a one-line summary of the result.
    #[must_use]
    pub fn summary(&self) -> String {
        let (errors, warnings) = self.count_by_severity();
        format!(
            "Found {} error(s), {} warning(s) in {} file(s)",
            errors, warnings, self.files_checked
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_diagnostic(severity: Severity) -> Diagnostic {
        Diagnostic::new(
            "mixed_indentation",
            severity,
            Location::new(PathBuf::from("src/lib.rs"), 3, 1).with_span(20, 2),
            "Files should not have mixed tab and space indentation.",
        )
    }

    #[test]
    fn severity_defaults_to_error() {
        assert_eq!(Severity::default(), Severity::Error);
        assert!(Severity::Error > Severity::Warning);
    }

    #[test]
    fn severity_serializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            severity: Severity,
        }
        let w: Wrapper = toml::from_str("severity = \"warning\"").unwrap();
        assert_eq!(w.severity, Severity::Warning);
        assert_eq!(Severity::Error.to_string(), "error");
    }

    #[test]
    fn match_end_is_exclusive() {
        assert_eq!(Match::new(4, 3).end(), 7);
    }

    #[test]
    fn diagnostic_display_is_compact() {
        let d = make_diagnostic(Severity::Warning);
        assert_eq!(
            d.to_string(),
            "src/lib.rs:3:1: warning [mixed_indentation] Files should not have mixed tab and space indentation."
        );
    }

    #[test]
    fn report_span_matches_location() {
        let d = make_diagnostic(Severity::Error);
        let report = DiagnosticReport::from(&d);
        assert_eq!(report.span.offset(), 20);
        assert_eq!(report.span.len(), 2);
    }

    #[test]
    fn has_violations_at_threshold() {
        let mut result = LintResult::new();
        result.diagnostics.push(make_diagnostic(Severity::Warning));
        assert!(!result.has_errors());
        assert!(result.has_violations_at(Severity::Warning));

        result.diagnostics.push(make_diagnostic(Severity::Error));
        assert!(result.has_errors());
        assert_eq!(result.count_by_severity(), (1, 1));
    }

    #[test]
    fn summary_counts_files_and_severities() {
        let mut result = LintResult::new();
        result.files_checked = 5;
        result.diagnostics.push(make_diagnostic(Severity::Error));
        assert_eq!(
            result.summary(),
            "Found 1 error(s), 0 warning(s) in 5 file(s)"
        );
    }
}
