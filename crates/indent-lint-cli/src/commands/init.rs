//! Init command implementation.
//!
//! The generated file lists the analyzer's default excludes and one table
//! per built-in rule, so it stays in step with the registry.

use anyhow::{bail, Context, Result};
use indent_lint_core::AnalyzerConfig;
use indent_lint_rules::descriptions;
use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::config_resolver::PROJECT_CONFIG_NAMES;

/// Runs the init command in the current directory.
pub fn run(force: bool) -> Result<()> {
    let path = write_config(Path::new("."), force)?;

    println!("Created {}", path.display());
    println!("\nNext steps:");
    println!("  1. Set `severity = \"warning\"` on rules that should not fail the build");
    println!("  2. Run: indent-lint check");

    Ok(())
}

fn write_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let existing = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.exists());

    if let (Some(existing), false) = (existing, force) {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            existing.display()
        );
    }

    let path = dir.join(PROJECT_CONFIG_NAMES[0]);
    std::fs::write(&path, render_config())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

fn render_config() -> String {
    let analyzer = AnalyzerConfig::default();
    let mut out = String::from("# indent-lint configuration\n\n[analyzer]\n");
    out.push_str("# Directory to analyze when none is given on the command line\n");
    out.push_str("# root = \"./src\"\n\n");
    out.push_str("# Glob patterns, relative to root, to skip\nexclude = [\n");
    for pattern in &analyzer.exclude {
        let _ = writeln!(out, "    {pattern:?},");
    }
    out.push_str("]\n");

    for rule in descriptions() {
        let _ = write!(
            out,
            "\n# {}: {}\n[rules.{}]\nenabled = true\n# severity = \"warning\"\n",
            rule.name, rule.description, rule.identifier
        );
    }

    out
}
