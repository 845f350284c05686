//! Rust grammar.

use crate::classifier::TreeSitterClassifier;

const COMMENT_KINDS: &[&str] = &["line_comment", "block_comment"];

const STRING_KINDS: &[&str] = &["string_literal", "raw_string_literal", "char_literal"];

impl TreeSitterClassifier {
    /// Classifier for Rust sources (`.rs`).
    #[must_use]
    pub fn rust() -> Self {
        Self::new(
            "rust",
            &["rs"],
            tree_sitter_rust::LANGUAGE.into(),
            COMMENT_KINDS,
            STRING_KINDS,
        )
    }
}
