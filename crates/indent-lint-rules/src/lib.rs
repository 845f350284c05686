//! # indent-lint-rules
//!
//! Built-in lint rules for indent-lint.
//!
//! ## Available Rules
//!
//! | Identifier | Description |
//! |------------|-------------|
//! | `mixed_indentation` | Forbids mixing tabs and spaces in leading indentation |
//!
//! Each rule pairs a text [`scanner`] with a [`filter`] that consults the
//! file's syntax classification, so whitespace inside comments and string
//! literals is never reported.
//!
//! ## Usage
//!
//! ```ignore
//! use indent_lint_core::Analyzer;
//! use indent_lint_rules::MixedIndentation;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(MixedIndentation::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod filter;
pub mod mixed_indentation;
mod registry;
pub mod scanner;

pub use filter::ViolationFilter;
pub use mixed_indentation::MixedIndentation;
pub use registry::{all_rules, descriptions, rule_by_name, rules_from_config};
pub use scanner::{scan, Scanner};

/// Re-export core types for convenience.
pub use indent_lint_core::{LintRule, Severity, Violation};
