//! Kotlin grammar.

use crate::classifier::TreeSitterClassifier;

const COMMENT_KINDS: &[&str] = &["line_comment", "block_comment"];

const STRING_KINDS: &[&str] = &[
    "string_literal",
    "multiline_string_literal",
    "character_literal",
];

impl TreeSitterClassifier {
    /// Classifier for Kotlin sources (`.kt`, `.kts`).
    #[must_use]
    pub fn kotlin() -> Self {
        Self::new(
            "kotlin",
            &["kt", "kts"],
            tree_sitter_kotlin_ng::LANGUAGE.into(),
            COMMENT_KINDS,
            STRING_KINDS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indent_lint_core::{CategorySet, SyntaxCategory, SyntaxClassifier, SyntaxSpanIndex};

    fn at(src: &str, needle: &str) -> CategorySet {
        let offset = src.find(needle).unwrap();
        TreeSitterClassifier::kotlin()
            .classify(src)
            .unwrap()
            .categories_at(offset)
            .unwrap()
    }

    #[test]
    fn code_is_code_only() {
        let src = "fun main() {\n    val a = 1\n}\n";
        assert_eq!(at(src, "    val"), CategorySet::of(SyntaxCategory::Code));
    }

    #[test]
    fn block_comment_lines() {
        let src = "/**\n \t * KDoc\n */\nfun main() {}\n";
        assert!(at(src, " \t * KDoc").contains(SyntaxCategory::Comment));
    }

    #[test]
    fn line_comment() {
        let src = "fun main() {\n    // note\n}\n";
        assert!(at(src, "// note").contains(SyntaxCategory::Comment));
    }

    #[test]
    fn raw_string() {
        let src = "fun main() {\n    val s = \"\"\"\n \tindented\n\"\"\"\n}\n";
        assert!(at(src, " \tindented").contains(SyntaxCategory::StringLiteral));
    }

    #[test]
    fn handles_kotlin_extensions() {
        assert_eq!(TreeSitterClassifier::kotlin().extensions(), &["kt", "kts"]);
    }
}
