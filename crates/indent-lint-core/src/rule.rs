//! Rule trait and static rule metadata.

use crate::context::FileContext;
use crate::error::LintError;
use crate::syntax::SyntaxSpanIndex;
use crate::types::{Severity, Violation};

/// Static metadata describing a rule.
///
/// Each rule type declares one of these as a `static`, so reporting never
/// depends on runtime type identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDescription {
    /// Stable identifier used in config files and reports (e.g., "`mixed_indentation`").
    pub identifier: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// One-sentence description, also used as the diagnostic message.
    pub description: &'static str,
    /// Sources that must not trigger the rule.
    pub non_triggering_examples: &'static [&'static str],
    /// Sources that must trigger the rule.
    pub triggering_examples: &'static [&'static str],
    /// Whether the rule is off unless explicitly requested.
    pub opt_in: bool,
}

/// A per-file lint rule over raw text and a syntax span index.
///
/// # Example
///
/// ```ignore
/// use indent_lint_core::{FileContext, LintError, LintRule, RuleDescription, Severity,
///     SyntaxSpanIndex, Violation};
///
/// pub struct NoTrailingTab;
///
/// static DESCRIPTION: RuleDescription = RuleDescription { /* ... */ };
///
/// impl LintRule for NoTrailingTab {
///     fn description(&self) -> &'static RuleDescription { &DESCRIPTION }
///     fn severity(&self) -> Severity { Severity::Warning }
///
///     fn validate(&self, ctx: &FileContext, index: &dyn SyntaxSpanIndex)
///         -> Result<Vec<Violation>, LintError>
///     {
///         Ok(vec![])
///     }
/// }
/// ```
pub trait LintRule: Send + Sync {
    /// Returns the static description of this rule.
    fn description(&self) -> &'static RuleDescription;

    /// Returns the severity attached to every violation of this rule.
    ///
    /// Fixed when the rule is constructed.
    fn severity(&self) -> Severity;

    /// Returns the rule identifier.
    fn identifier(&self) -> &'static str {
        self.description().identifier
    }

    /// Checks a single file and returns violations in ascending offset order.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The file being checked
    /// * `index` - Syntax classification of the file's contents
    ///
    /// # Errors
    ///
    /// Returns [`LintError::InvariantViolation`] if the rule produced an
    /// internally inconsistent match.
    fn validate(
        &self,
        ctx: &FileContext,
        index: &dyn SyntaxSpanIndex,
    ) -> Result<Vec<Violation>, LintError>;
}

/// Type alias for boxed `LintRule` trait objects.
pub type RuleBox = Box<dyn LintRule>;
