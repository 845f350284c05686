//! Rule to forbid mixing tabs and spaces in leading indentation.
//!
//! # Rationale
//!
//! A line indented with both tabs and spaces renders differently depending
//! on the reader's tab width, so its visual nesting cannot be trusted.
//!
//! # Detected Patterns
//!
//! - A tab directly followed by a space in a line's leading whitespace
//! - A space directly followed by a tab in a line's leading whitespace
//!
//! # Allowed Patterns
//!
//! - Lines indented only with tabs or only with spaces
//! - Mixed whitespace inside comments and string literals
//!
//! # Configuration
//!
//! - `severity`: `"warning"` or `"error"` (default: `"error"`)

use crate::filter::ViolationFilter;
use crate::scanner::scan;
use indent_lint_core::{
    FileContext, LintError, LintRule, RuleDescription, Severity, SyntaxSpanIndex, Violation,
};
use tracing::debug;

/// Rule identifier for mixed indentation.
pub const IDENTIFIER: &str = "mixed_indentation";

/// Static description of the mixed indentation rule.
pub static DESCRIPTION: RuleDescription = RuleDescription {
    identifier: IDENTIFIER,
    name: "Mixed Indentation",
    description: "Files should not have mixed tab and space indentation.",
    non_triggering_examples: &["func abc() {\n    if a > b {\n        return\n    }\n}\n"],
    triggering_examples: &["\t let a = 1\n    let b = 2"],
    opt_in: true,
};

/// Flags lines whose leading whitespace mixes tabs and spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct MixedIndentation {
    severity: Severity,
}

impl MixedIndentation {
    /// Creates the rule with the default severity ([`Severity::Error`]).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the rule with the given severity.
    #[must_use]
    pub fn with_severity(severity: Severity) -> Self {
        Self { severity }
    }

    /// Checks raw text against a span index.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::InvariantViolation`] if the scanner produced an
    /// inconsistent match.
    pub fn validate_text(
        &self,
        text: &str,
        index: &dyn SyntaxSpanIndex,
    ) -> Result<Vec<Violation>, LintError> {
        ViolationFilter::new(IDENTIFIER, self.severity).filter(text, scan(text), index)
    }
}

impl LintRule for MixedIndentation {
    fn description(&self) -> &'static RuleDescription {
        &DESCRIPTION
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn validate(
        &self,
        ctx: &FileContext,
        index: &dyn SyntaxSpanIndex,
    ) -> Result<Vec<Violation>, LintError> {
        let violations = self.validate_text(ctx.content, index)?;
        debug!(
            file = %ctx.relative_path.display(),
            violations = violations.len(),
            "Checked for mixed indentation"
        );
        Ok(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indent_lint_core::{SpanIndex, SyntaxCategory, SyntaxSpan};
    use std::path::Path;

    fn code_index(text: &str) -> SpanIndex {
        SpanIndex::uniform(text.len(), SyntaxCategory::Code)
    }

    fn check_code(text: &str) -> Vec<Violation> {
        MixedIndentation::new()
            .validate_text(text, &code_index(text))
            .expect("validation should succeed")
    }

    #[test]
    fn test_detects_tab_then_space() {
        let violations = check_code("\t let a = 1\n    let b = 2");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].offset, 0);
        assert_eq!(violations[0].rule, IDENTIFIER);
        assert_eq!(violations[0].severity, Severity::Error);
    }

    #[test]
    fn test_allows_uniform_spaces() {
        assert!(check_code("func abc() {\n    if a > b {\n        return\n    }\n}\n").is_empty());
    }

    #[test]
    fn test_allows_uniform_tabs() {
        assert!(check_code("fn a() {\n\tif b {\n\t\treturn;\n\t}\n}\n").is_empty());
    }

    #[test]
    fn test_allows_escaped_tab_in_string() {
        // A `\t` escape is not a tab character.
        assert!(check_code("let s = \"a\\tb\"\n").is_empty());
    }

    #[test]
    fn test_allows_mixed_indentation_in_string() {
        let text = "let s = \"\n\t b\"\n";
        let index = SpanIndex::new(vec![
            SyntaxSpan::new(0, text.len(), SyntaxCategory::Code),
            SyntaxSpan::new(8, 14, SyntaxCategory::StringLiteral),
        ]);
        let violations = MixedIndentation::new().validate_text(text, &index).unwrap();
        assert!(violations.is_empty());
    }

    #[test]
    fn test_allows_mixed_indentation_in_block_comment() {
        let text = "/*\n \t * doc\n */\nfn a() {}\n";
        let index = SpanIndex::new(vec![
            SyntaxSpan::new(0, text.len(), SyntaxCategory::Code),
            SyntaxSpan::new(0, 15, SyntaxCategory::Comment),
        ]);
        let violations = MixedIndentation::new().validate_text(text, &index).unwrap();
        assert!(violations.is_empty());
    }

    #[test]
    fn test_code_after_comment_still_flagged() {
        let text = "/* a */\n\t x\n";
        let index = SpanIndex::new(vec![
            SyntaxSpan::new(0, text.len(), SyntaxCategory::Code),
            SyntaxSpan::new(0, 7, SyntaxCategory::Comment),
        ]);
        let violations = MixedIndentation::new().validate_text(text, &index).unwrap();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].offset, 8);
    }

    #[test]
    fn test_missing_classification_keeps_violation() {
        let violations = MixedIndentation::new()
            .validate_text(" \tx\n", &SpanIndex::empty())
            .unwrap();
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_empty_text() {
        assert!(check_code("").is_empty());
    }

    #[test]
    fn test_every_offending_line_reported_at_line_start() {
        let text = "a\n\t b\nc\n \td\n  e\n";
        let offsets: Vec<usize> = check_code(text).iter().map(|v| v.offset).collect();
        assert_eq!(offsets, vec![2, 8]);
    }

    #[test]
    fn test_severity_only_changes_severity() {
        let text = "\t a\n \tb\n    c\n";
        let index = code_index(text);
        let errors = MixedIndentation::new().validate_text(text, &index).unwrap();
        let warnings = MixedIndentation::with_severity(Severity::Warning)
            .validate_text(text, &index)
            .unwrap();

        assert_eq!(errors.len(), warnings.len());
        for (e, w) in errors.iter().zip(&warnings) {
            assert_eq!((e.offset, e.length), (w.offset, w.length));
            assert_eq!(e.severity, Severity::Error);
            assert_eq!(w.severity, Severity::Warning);
        }
    }

    #[test]
    fn test_deterministic() {
        let text = "\t a\n/*\n \t*/\n \tb\n";
        let index = SpanIndex::new(vec![
            SyntaxSpan::new(0, text.len(), SyntaxCategory::Code),
            SyntaxSpan::new(4, 11, SyntaxCategory::Comment),
        ]);
        let rule = MixedIndentation::new();
        let first = rule.validate_text(text, &index).unwrap();
        let second = rule.validate_text(text, &index).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.iter().map(|v| v.offset).collect::<Vec<_>>(), vec![0, 12]);
    }

    #[test]
    fn test_description_examples() {
        let rule = MixedIndentation::new();
        for example in DESCRIPTION.non_triggering_examples {
            assert!(check_code(example).is_empty(), "should not trigger: {example:?}");
        }
        for example in DESCRIPTION.triggering_examples {
            let violations = rule.validate_text(example, &code_index(example)).unwrap();
            assert_eq!(violations.len(), 1, "should trigger once: {example:?}");
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = MixedIndentation::new();
        assert_eq!(rule.identifier(), IDENTIFIER);
        assert!(rule.description().opt_in);

        let text = "\t x\n";
        let ctx = FileContext::new(Path::new("a.rs"), text, Path::new("."));
        let violations = rule.validate(&ctx, &code_index(text)).unwrap();
        assert_eq!(violations, vec![Violation::new(IDENTIFIER, Severity::Error, 0, 2)]);
    }
}
