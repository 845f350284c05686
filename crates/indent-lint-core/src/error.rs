//! Errors raised by rules and classifiers.

use thiserror::Error;

/// Errors that can occur while validating a single source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LintError {
    /// A match handed to a rule broke an internal invariant.
    ///
    /// Raised instead of emitting a violation with a bad offset.
    #[error("Invariant violation at offset {offset} (length {length}, source length {source_len}): {reason}")]
    InvariantViolation {
        /// Offset of the offending match.
        offset: usize,
        /// Length of the offending match.
        length: usize,
        /// Length of the source text in bytes.
        source_len: usize,
        /// Which invariant was broken.
        reason: &'static str,
    },

    /// The syntax classifier could not produce a span index.
    #[error("Failed to classify {language} source: {message}")]
    Classify {
        /// Language identifier of the classifier.
        language: &'static str,
        /// Error message from the classifier.
        message: String,
    },
}

impl LintError {
    /// Returns true if this error reports a broken internal invariant.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation { .. })
    }
}
