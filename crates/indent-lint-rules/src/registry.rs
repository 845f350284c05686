//! Built-in rule registry.

use crate::mixed_indentation::{self, MixedIndentation};
use indent_lint_core::{Config, RuleBox, RuleDescription};
use tracing::debug;

/// Descriptions of every built-in rule.
#[must_use]
pub fn descriptions() -> Vec<&'static RuleDescription> {
    vec![&mixed_indentation::DESCRIPTION]
}

/// Returns every built-in rule with default settings.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(MixedIndentation::new())]
}

/// Builds a single rule by identifier, using the severity from `config`.
///
/// Returns `None` for unknown identifiers.
#[must_use]
pub fn rule_by_name(name: &str, config: &Config) -> Option<RuleBox> {
    let severity = config.rule_severity(name).unwrap_or_default();
    match name {
        mixed_indentation::IDENTIFIER => Some(Box::new(MixedIndentation::with_severity(severity))),
        _ => None,
    }
}

/// Builds every built-in rule that `config` leaves enabled.
#[must_use]
pub fn rules_from_config(config: &Config) -> Vec<RuleBox> {
    descriptions()
        .into_iter()
        .filter(|d| {
            let enabled = config.is_rule_enabled(d.identifier);
            if !enabled {
                debug!("Rule disabled by config: {}", d.identifier);
            }
            enabled
        })
        .filter_map(|d| rule_by_name(d.identifier, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indent_lint_core::{LintRule, Severity};

    #[test]
    fn test_all_rules_match_descriptions() {
        let ids: Vec<_> = all_rules().iter().map(|r| r.identifier()).collect();
        let described: Vec<_> = descriptions().iter().map(|d| d.identifier).collect();
        assert_eq!(ids, described);
    }

    #[test]
    fn test_default_config_enables_every_rule() {
        let rules = rules_from_config(&Config::default());
        assert_eq!(rules.len(), all_rules().len());
        assert_eq!(rules[0].severity(), Severity::Error);
    }

    #[test]
    fn test_config_sets_severity() {
        let config = Config::parse("[rules.mixed_indentation]\nseverity = \"warning\"\n").unwrap();
        let rules = rules_from_config(&config);
        assert_eq!(rules[0].severity(), Severity::Warning);
    }

    #[test]
    fn test_config_disables_rule() {
        let config = Config::parse("[rules.mixed_indentation]\nenabled = false\n").unwrap();
        assert!(rules_from_config(&config).is_empty());
    }

    #[test]
    fn test_unknown_rule_name() {
        assert!(rule_by_name("no-such-rule", &Config::default()).is_none());
    }
}
