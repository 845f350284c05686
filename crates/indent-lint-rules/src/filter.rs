//! Drops scanner matches that sit inside comments or string literals.

use indent_lint_core::{CategorySet, LintError, Match, Severity, SyntaxSpanIndex, Violation};
use tracing::trace;

/// Turns scanner matches into violations, consulting a syntax span index.
///
/// A match is discarded when any category at its start offset is a comment
/// or string literal. When the index has no answer for an offset the match
/// is kept: a missing classification never hides a real violation.
#[derive(Debug, Clone, Copy)]
pub struct ViolationFilter {
    rule: &'static str,
    severity: Severity,
}

impl ViolationFilter {
    /// Creates a filter emitting violations for `rule` at `severity`.
    #[must_use]
    pub fn new(rule: &'static str, severity: Severity) -> Self {
        Self { rule, severity }
    }

    /// Filters `matches` found in `source`, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::InvariantViolation`] for an empty match, a match
    /// running past the end of `source`, a match not starting on a character
    /// boundary, or matches not in strictly ascending offset order.
    pub fn filter<I>(
        &self,
        source: &str,
        matches: I,
        index: &dyn SyntaxSpanIndex,
    ) -> Result<Vec<Violation>, LintError>
    where
        I: IntoIterator<Item = Match>,
    {
        let mut violations = Vec::new();
        let mut previous = None;

        for m in matches {
            check_match(source, m, previous)?;
            previous = Some(m.offset);

            match index.categories_at(m.offset) {
                Some(categories) if categories.intersects(CategorySet::COMMENT_OR_STRING) => {
                    trace!(
                        offset = m.offset,
                        ?categories,
                        "Discarding match in comment or string"
                    );
                }
                categories => {
                    if categories.is_none() {
                        trace!(offset = m.offset, "No classification for match, keeping it");
                    }
                    violations.push(Violation::new(
                        self.rule,
                        self.severity,
                        m.offset,
                        m.length,
                    ));
                }
            }
        }

        Ok(violations)
    }
}

fn check_match(source: &str, m: Match, previous: Option<usize>) -> Result<(), LintError> {
    let reason = if m.length == 0 {
        "match is empty"
    } else if m.offset.checked_add(m.length).map_or(true, |end| end > source.len()) {
        "match extends past end of source"
    } else if !source.is_char_boundary(m.offset) {
        "match does not start on a character boundary"
    } else if previous.is_some_and(|p| p >= m.offset) {
        "matches are not in ascending offset order"
    } else {
        return Ok(());
    };

    Err(LintError::InvariantViolation {
        offset: m.offset,
        length: m.length,
        source_len: source.len(),
        reason,
    })
}
