//! Locating the configuration that applies to a `check` run.
//!
//! `--config` always wins. Otherwise the nearest `indent-lint.toml` (or
//! `.indent-lint.toml`) at or above the analyzed path applies, so checking a
//! subdirectory still picks up the project's settings. The upward search
//! stops at the repository root, the first directory holding a `.git` entry.
//! Without a project file, `config.toml` in `$INDENT_LINT_CONFIG_DIR` or
//! `~/.indent-lint/` is used, and failing that the built-in defaults.

use anyhow::{Context, Result};
use indent_lint_core::Config;
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order within one directory.
pub const PROJECT_CONFIG_NAMES: &[&str] = &["indent-lint.toml", ".indent-lint.toml"];

const GLOBAL_DIR_ENV: &str = "INDENT_LINT_CONFIG_DIR";

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`.
    Explicit(PathBuf),
    /// Nearest project file at or above the analyzed path.
    Project(PathBuf),
    /// The user's global config file.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Returns the config file path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Explicit(_) => "explicit",
            Self::Project(_) => "project",
            Self::Global(_) => "global",
            Self::Default => "default",
        }
    }

    /// Loads the configuration, falling back to defaults when none was found.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed. A missing
    /// `--config` file is an error rather than a silent fallback.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            tracing::debug!("No config file found, using defaults");
            return Ok(Config::default());
        };

        tracing::info!("Using {} config: {}", self.kind(), path.display());
        Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

/// Finds the configuration for an analyzed path.
#[derive(Debug, Clone, Default)]
pub struct ConfigLocator {
    explicit: Option<PathBuf>,
    global_dir: Option<PathBuf>,
}

impl ConfigLocator {
    /// Creates a locator honoring `--config` and the user's global directory.
    #[must_use]
    pub fn new(explicit: Option<PathBuf>) -> Self {
        Self {
            explicit,
            global_dir: global_config_dir(),
        }
    }

    #[cfg(test)]
    fn with_global_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.global_dir = dir;
        self
    }

    /// Resolves the config source for `target` (a directory or a file).
    #[must_use]
    pub fn locate(&self, target: &Path) -> ConfigSource {
        if let Some(path) = &self.explicit {
            return ConfigSource::Explicit(path.clone());
        }

        if let Some(path) = find_project_config(target) {
            return ConfigSource::Project(path);
        }

        self.global_dir
            .as_ref()
            .map(|dir| dir.join("config.toml"))
            .filter(|path| path.is_file())
            .map_or(ConfigSource::Default, ConfigSource::Global)
    }
}

fn find_project_config(target: &Path) -> Option<PathBuf> {
    let start = std::fs::canonicalize(target).unwrap_or_else(|_| target.to_path_buf());
    let start = if start.is_file() {
        start.parent()?.to_path_buf()
    } else {
        start
    };

    for dir in start.ancestors() {
        let found = PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file());
        if let Some(found) = found {
            tracing::debug!("Found project config: {}", found.display());
            return Some(found);
        }
        if dir.join(".git").exists() {
            break;
        }
    }

    None
}

fn global_config_dir() -> Option<PathBuf> {
    std::env::var_os(GLOBAL_DIR_ENV)
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".indent-lint")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// A temporary repository root; the `.git` marker bounds the search.
    fn repo() -> (TempDir, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let root = fs::canonicalize(tmp.path()).unwrap();
        fs::create_dir(root.join(".git")).unwrap();
        (tmp, root)
    }

    fn locate(target: &Path) -> ConfigSource {
        ConfigLocator::default().locate(target)
    }

    #[test]
    fn finds_config_above_analyzed_subdirectory() {
        let (_tmp, root) = repo();
        fs::write(root.join("indent-lint.toml"), "").unwrap();
        let sub = root.join("crates/app/src");
        fs::create_dir_all(&sub).unwrap();

        assert_eq!(
            locate(&sub),
            ConfigSource::Project(root.join("indent-lint.toml"))
        );
    }

    #[test]
    fn nearest_config_shadows_outer_one() {
        let (_tmp, root) = repo();
        fs::write(root.join("indent-lint.toml"), "").unwrap();
        let member = root.join("crates/app");
        fs::create_dir_all(&member).unwrap();
        fs::write(member.join(".indent-lint.toml"), "").unwrap();

        assert_eq!(
            locate(&member.join("src")),
            ConfigSource::Project(member.join(".indent-lint.toml"))
        );
    }

    #[test]
    fn analyzed_file_uses_its_directory() {
        let (_tmp, root) = repo();
        fs::write(root.join(".indent-lint.toml"), "").unwrap();
        fs::write(root.join("main.rs"), "fn main() {}\n").unwrap();

        assert_eq!(
            locate(&root.join("main.rs")),
            ConfigSource::Project(root.join(".indent-lint.toml"))
        );
    }

    #[test]
    fn search_stops_at_repository_root() {
        let tmp = TempDir::new().unwrap();
        let outer = fs::canonicalize(tmp.path()).unwrap();
        fs::write(outer.join("indent-lint.toml"), "").unwrap();
        let repo_root = outer.join("repo");
        fs::create_dir_all(repo_root.join(".git")).unwrap();

        assert_eq!(locate(&repo_root), ConfigSource::Default);
    }

    #[test]
    fn explicit_path_skips_search() {
        let (_tmp, root) = repo();
        fs::write(root.join("indent-lint.toml"), "").unwrap();
        let explicit = PathBuf::from("/elsewhere/lint.toml");

        let locator = ConfigLocator {
            explicit: Some(explicit.clone()),
            global_dir: None,
        };
        assert_eq!(locator.locate(&root), ConfigSource::Explicit(explicit));
    }

    #[test]
    fn global_config_used_without_project_file() {
        let (_tmp, root) = repo();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), "").unwrap();

        let source = ConfigLocator::default()
            .with_global_dir(Some(global.path().to_path_buf()))
            .locate(&root);
        assert_eq!(
            source,
            ConfigSource::Global(global.path().join("config.toml"))
        );
    }

    #[test]
    fn load_reads_rule_settings() {
        let (_tmp, root) = repo();
        let path = root.join("indent-lint.toml");
        fs::write(&path, "[rules.mixed_indentation]\nenabled = false\n").unwrap();

        let config = ConfigSource::Project(path).load().unwrap();
        assert!(!config.is_rule_enabled("mixed_indentation"));
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let source = ConfigSource::Explicit("/nonexistent/indent-lint.toml".into());
        assert!(source.load().is_err());
    }

    #[test]
    fn load_default_gives_default_config() {
        let config = ConfigSource::Default.load().unwrap();
        assert!(config.rules.is_empty());
    }
}
