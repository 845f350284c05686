//! Core analyzer for orchestrating lint execution.

use crate::config::Config;
use crate::context::FileContext;
use crate::error::LintError;
use crate::rule::{LintRule, RuleBox};
use crate::syntax::{ClassifierBox, SpanIndex, SyntaxClassifier};
use crate::types::{Diagnostic, LintResult};

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A file could not be classified.
    #[error("Classification error in {path}: {message}")]
    Classify {
        /// Path to the file that failed to classify.
        path: PathBuf,
        /// Classifier error message.
        message: String,
    },

    /// A rule failed on a file.
    #[error("Rule failed on {path}: {source}")]
    Lint {
        /// Path to the file being checked.
        path: PathBuf,
        /// Underlying rule error.
        source: LintError,
    },

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    classifiers: Vec<ClassifierBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_classify_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: LintRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds a syntax classifier to the analyzer.
    #[must_use]
    pub fn classifier<C: SyntaxClassifier + 'static>(mut self, classifier: C) -> Self {
        self.classifiers.push(Box::new(classifier));
        self
    }

    /// Adds a boxed syntax classifier to the analyzer.
    #[must_use]
    pub fn classifier_box(mut self, classifier: ClassifierBox) -> Self {
        self.classifiers.push(classifier);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether a classification failure aborts analysis (default: false).
    ///
    /// When false, the file is checked against an empty span index, so every
    /// match is treated as code.
    #[must_use]
    pub fn fail_on_classify_error(mut self, fail: bool) -> Self {
        self.fail_on_classify_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let root = self
            .root
            .or_else(|| self.config.as_ref().map(|c| c.analyzer.root.clone()))
            .unwrap_or_else(|| PathBuf::from("."));

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let mut exclude_patterns = self.exclude_patterns;
        if let Some(ref config) = self.config {
            exclude_patterns.extend(config.analyzer.exclude.clone());
        }

        if exclude_patterns.is_empty() {
            exclude_patterns.extend(["**/target/**".to_string(), "**/vendor/**".to_string()]);
        }

        Ok(Analyzer {
            root,
            rules: self.rules,
            classifiers: self.classifiers,
            exclude_patterns,
            config: self.config.unwrap_or_default(),
            fail_on_classify_error: self.fail_on_classify_error,
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    rules: Vec<RuleBox>,
    classifiers: Vec<ClassifierBox>,
    exclude_patterns: Vec<String>,
    config: Config,
    fail_on_classify_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Analyzes all files and returns the results.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery or reading fails, if a rule breaks
    /// an invariant, or if classification fails with
    /// [`AnalyzerBuilder::fail_on_classify_error`] set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let mut result = LintResult::new();
        let files = self.discover_files()?;

        info!("Found {} files to analyze", files.len());

        for file_path in &files {
            let content = std::fs::read_to_string(file_path)?;
            let diagnostics = self.analyze_source(file_path, &content)?;
            result.diagnostics.extend(diagnostics);
            result.files_checked += 1;
        }

        result.diagnostics.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });

        info!(
            "Analysis complete: {} diagnostics in {} files",
            result.diagnostics.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Runs every enabled rule over in-memory source text.
    ///
    /// The classifier is chosen by the extension of `path`. Files no
    /// classifier handles are checked against an empty span index.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule breaks an invariant, or if classification
    /// fails with [`AnalyzerBuilder::fail_on_classify_error`] set.
    pub fn analyze_source(
        &self,
        path: &Path,
        content: &str,
    ) -> Result<Vec<Diagnostic>, AnalyzerError> {
        debug!("Analyzing: {}", path.display());

        let index = self.classify(path, content)?;
        let ctx = FileContext::new(path, content, &self.root);
        let mut diagnostics = Vec::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.identifier()) {
                debug!("Skipping disabled rule: {}", rule.identifier());
                continue;
            }

            let violations = rule
                .validate(&ctx, &index)
                .map_err(|source| AnalyzerError::Lint {
                    path: path.to_path_buf(),
                    source,
                })?;

            let message = rule.description().description;
            diagnostics.extend(violations.into_iter().map(|v| {
                let location = ctx.location_for(v.offset, v.length);
                Diagnostic::new(v.rule, v.severity, location, message)
            }));
        }

        Ok(diagnostics)
    }

    fn classify(&self, path: &Path, content: &str) -> Result<SpanIndex, AnalyzerError> {
        let Some(classifier) = self.classifier_for(path) else {
            debug!("No classifier for {}, treating as code", path.display());
            return Ok(SpanIndex::empty());
        };

        match classifier.classify(content) {
            Ok(index) => Ok(index),
            Err(e) if self.fail_on_classify_error => Err(AnalyzerError::Classify {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(e) => {
                warn!("Failed to classify {}: {}", path.display(), e);
                Ok(SpanIndex::empty())
            }
        }
    }

    fn classifier_for(&self, path: &Path) -> Option<&dyn SyntaxClassifier> {
        let ext = path.extension()?.to_str()?;
        self.classifiers
            .iter()
            .find(|c| c.extensions().contains(&ext))
            .map(|c| c.as_ref())
    }

    /// Discovers all source files a registered classifier handles.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let extensions: BTreeSet<&str> = self
            .classifiers
            .iter()
            .flat_map(|c| c.extensions().iter().copied())
            .collect();

        let mut files = BTreeSet::new();
        for ext in extensions {
            let pattern = format!("{}/**/*.{ext}", self.root.display());

            for entry in glob::glob(&pattern)? {
                let path = entry.map_err(|e| AnalyzerError::Io(e.into_error()))?;

                if self.should_exclude(&path) {
                    debug!("Excluding: {}", path.display());
                    continue;
                }

                files.insert(path);
            }
        }

        Ok(files.into_iter().collect())
    }

    /// Checks if a path should be excluded.
    ///
    /// Patterns are matched against the path relative to the analysis root,
    /// so directories above the root never exclude anything.
    fn should_exclude(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);

        self.exclude_patterns
            .iter()
            .any(|pattern| match glob::Pattern::new(pattern) {
                Ok(glob_pattern) => glob_pattern.matches_path(relative),
                Err(e) => {
                    warn!("Ignoring invalid exclude pattern {:?}: {}", pattern, e);
                    false
                }
            })
    }
}
