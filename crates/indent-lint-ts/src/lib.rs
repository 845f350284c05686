//! # indent-lint-ts
//!
//! Tree-sitter based syntax classification for indent-lint.
//!
//! Rules in `indent-lint-rules` scan raw text and ask a span index whether a
//! hit lies in code, a comment, or a string literal. This crate builds that
//! index from a tree-sitter parse:
//!
//! - [`TreeSitterClassifier`] implements `SyntaxClassifier` for any grammar
//! - [`TreeSitterClassifier::rust`] and [`TreeSitterClassifier::kotlin`]
//!   configure it for the bundled grammars
//! - [`default_classifiers`] returns every bundled classifier

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classifier;
mod kotlin;
mod rust;

pub use classifier::TreeSitterClassifier;

use indent_lint_core::ClassifierBox;

/// Returns a classifier for every bundled grammar.
#[must_use]
pub fn default_classifiers() -> Vec<ClassifierBox> {
    vec![
        Box::new(TreeSitterClassifier::rust()),
        Box::new(TreeSitterClassifier::kotlin()),
    ]
}
