//! Check command implementation.

use anyhow::{Context, Result};
use indent_lint_core::{Analyzer, Config, RuleBox};
use indent_lint_rules::{rule_by_name, rules_from_config};
use indent_lint_ts::default_classifiers;
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Options for the check command.
pub struct CheckOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated rule identifiers to run instead of the configured set.
    pub rules_filter: Option<String>,
    /// Extra exclude patterns.
    pub exclude: Vec<String>,
    /// Abort on classification failures.
    pub strict_classify: bool,
}

/// Runs the check command.
pub fn run(path: &Path, options: CheckOptions, source: &ConfigSource) -> Result<()> {
    let config = source.load()?;

    let rules = match options.rules_filter.as_deref() {
        Some(filter) => {
            let selection = select_rules(filter, &config);
            for name in &selection.unknown {
                tracing::warn!("Unknown rule: {}", name);
            }
            for name in &selection.disabled {
                tracing::warn!(
                    "Rule {} was requested with --rules but is disabled in the config; it will not run",
                    name
                );
            }
            selection.rules
        }
        None => rules_from_config(&config),
    };

    let mut builder = Analyzer::builder()
        .root(path)
        .config(config)
        .excludes(options.exclude)
        .fail_on_classify_error(options.strict_classify);

    for rule in rules {
        builder = builder.rule_box(rule);
    }
    for classifier in default_classifiers() {
        builder = builder.classifier_box(classifier);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, options.format, analyzer.root())?;

    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Rules picked with `--rules`, plus the names that cannot run.
struct RuleSelection {
    rules: Vec<RuleBox>,
    unknown: Vec<String>,
    disabled: Vec<String>,
}

fn select_rules(filter: &str, config: &Config) -> RuleSelection {
    let mut selection = RuleSelection {
        rules: Vec::new(),
        unknown: Vec::new(),
        disabled: Vec::new(),
    };

    for name in filter.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        let Some(rule) = rule_by_name(name, config) else {
            selection.unknown.push(name.to_string());
            continue;
        };
        if !config.is_rule_enabled(name) {
            selection.disabled.push(name.to_string());
        }
        selection.rules.push(rule);
    }

    selection
}
