//! # indent-lint-core
//!
//! Core framework for indentation linting over raw source text.
//!
//! This crate provides the foundational traits and types for building
//! text-level lint rules that consult a syntax classification. It includes:
//!
//! - [`LintRule`] trait for per-file rules with static [`RuleDescription`]s
//! - [`SyntaxSpanIndex`] lookup contract and the [`SpanIndex`] interval index
//! - [`SyntaxClassifier`] trait for pluggable language classification
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] and [`Diagnostic`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use indent_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(MyRule::new())
//!     .classifier(MyClassifier::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! println!("{}", result.summary());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod error;
mod rule;
mod syntax;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use error::LintError;
pub use rule::{LintRule, RuleBox, RuleDescription};
pub use syntax::{
    CategorySet, ClassifierBox, SpanIndex, SyntaxCategory, SyntaxClassifier, SyntaxSpan,
    SyntaxSpanIndex,
};
pub use types::{Diagnostic, DiagnosticReport, LintResult, Location, Match, Severity, Violation};
