//! Grammar-agnostic tree-sitter classifier.
//!
//! Parses the source, then walks the syntax tree and records a span for
//! every node whose kind is a comment or string/char literal. Matching nodes
//! are not descended into, so escape sequences and string interpolations
//! stay inside their literal's span. The whole file is covered by one
//! `Code` span underneath.

use indent_lint_core::{LintError, SpanIndex, SyntaxCategory, SyntaxClassifier, SyntaxSpan};
use tree_sitter::{Language, Node, Parser};

/// A [`SyntaxClassifier`] backed by a tree-sitter grammar.
pub struct TreeSitterClassifier {
    language_id: &'static str,
    extensions: &'static [&'static str],
    language: Language,
    comment_kinds: &'static [&'static str],
    string_kinds: &'static [&'static str],
}

impl TreeSitterClassifier {
    /// Creates a classifier for an arbitrary grammar.
    ///
    /// `comment_kinds` and `string_kinds` list the node kinds of the grammar
    /// that are classified as comments and string literals.
    #[must_use]
    pub fn new(
        language_id: &'static str,
        extensions: &'static [&'static str],
        language: Language,
        comment_kinds: &'static [&'static str],
        string_kinds: &'static [&'static str],
    ) -> Self {
        Self {
            language_id,
            extensions,
            language,
            comment_kinds,
            string_kinds,
        }
    }

    /// Maps a node kind to the category it marks, if any.
    #[must_use]
    pub fn category_of(&self, kind: &str) -> Option<SyntaxCategory> {
        if self.comment_kinds.contains(&kind) {
            Some(SyntaxCategory::Comment)
        } else if self.string_kinds.contains(&kind) {
            Some(SyntaxCategory::StringLiteral)
        } else {
            None
        }
    }

    fn collect_spans(&self, root: Node<'_>, spans: &mut Vec<SyntaxSpan>) {
        let mut cursor = root.walk();
        loop {
            let node = cursor.node();
            let category = self.category_of(node.kind());
            if let Some(category) = category {
                spans.push(SyntaxSpan::new(node.start_byte(), node.end_byte(), category));
            }

            if category.is_none() && cursor.goto_first_child() {
                continue;
            }

            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return;
                }
            }
        }
    }

    fn error(&self, message: impl Into<String>) -> LintError {
        LintError::Classify {
            language: self.language_id,
            message: message.into(),
        }
    }
}

impl std::fmt::Debug for TreeSitterClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeSitterClassifier")
            .field("language_id", &self.language_id)
            .field("extensions", &self.extensions)
            .finish_non_exhaustive()
    }
}

impl SyntaxClassifier for TreeSitterClassifier {
    fn language_id(&self) -> &'static str {
        self.language_id
    }

    fn extensions(&self) -> &'static [&'static str] {
        self.extensions
    }

    fn classify(&self, source: &str) -> Result<SpanIndex, LintError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| self.error(e.to_string()))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| self.error("parser returned no tree"))?;

        let mut spans = vec![SyntaxSpan::new(0, source.len(), SyntaxCategory::Code)];
        self.collect_spans(tree.root_node(), &mut spans);
        let index = SpanIndex::new(spans);

        tracing::trace!(
            language = self.language_id,
            spans = index.len(),
            has_errors = tree.root_node().has_error(),
            "Classified source"
        );

        Ok(index)
    }
}
