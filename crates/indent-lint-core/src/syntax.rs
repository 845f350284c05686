//! Syntax classification: categories, span index, and classifier trait.
//!
//! Rules never parse source themselves. A [`SyntaxClassifier`] turns source
//! text into a [`SpanIndex`], and rules ask the index which
//! [`SyntaxCategory`] values cover a given byte offset.

use crate::error::LintError;

/// Classification of a span of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxCategory {
    /// Ordinary code.
    Code,
    /// Line or block comment, including doc comments.
    Comment,
    /// String or character literal content.
    StringLiteral,
}

impl SyntaxCategory {
    /// Every category, in declaration order.
    pub const ALL: [Self; 3] = [Self::Code, Self::Comment, Self::StringLiteral];

    const fn bit(self) -> u8 {
        match self {
            Self::Code => 1,
            Self::Comment => 1 << 1,
            Self::StringLiteral => 1 << 2,
        }
    }
}

impl std::fmt::Display for SyntaxCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Code => write!(f, "code"),
            Self::Comment => write!(f, "comment"),
            Self::StringLiteral => write!(f, "string"),
        }
    }
}

/// A set of syntax categories covering one offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CategorySet(u8);

impl CategorySet {
    /// Comments and string literals: text that is not code indentation.
    pub const COMMENT_OR_STRING: Self =
        Self(SyntaxCategory::Comment.bit() | SyntaxCategory::StringLiteral.bit());

    /// Creates an empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Creates a set holding a single category.
    #[must_use]
    pub const fn of(category: SyntaxCategory) -> Self {
        Self(category.bit())
    }

    /// Adds a category to the set.
    pub fn insert(&mut self, category: SyntaxCategory) {
        self.0 |= category.bit();
    }

    /// Returns true if the set holds `category`.
    #[must_use]
    pub const fn contains(self, category: SyntaxCategory) -> bool {
        self.0 & category.bit() != 0
    }

    /// Returns true if the two sets share any category.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns true if the set holds no category.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the categories in the set.
    pub fn iter(self) -> impl Iterator<Item = SyntaxCategory> {
        SyntaxCategory::ALL
            .into_iter()
            .filter(move |c| self.contains(*c))
    }
}

impl FromIterator<SyntaxCategory> for CategorySet {
    fn from_iter<I: IntoIterator<Item = SyntaxCategory>>(iter: I) -> Self {
        let mut set = Self::empty();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

/// A half-open byte range `[start, end)` with a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SyntaxSpan {
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
    /// Category of the text in this range.
    pub category: SyntaxCategory,
}

impl SyntaxSpan {
    /// Creates a new span.
    #[must_use]
    pub fn new(start: usize, end: usize, category: SyntaxCategory) -> Self {
        Self {
            start,
            end,
            category,
        }
    }

    /// Returns true if `offset` falls inside this span.
    #[must_use]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// Lookup contract between rules and syntax classification.
pub trait SyntaxSpanIndex {
    /// Returns the categories covering `offset`.
    ///
    /// `None` means the index has no information about this offset. Callers
    /// decide how to treat that; the built-in rules treat it as code.
    fn categories_at(&self, offset: usize) -> Option<CategorySet>;
}

/// Interval index over classified spans.
///
/// Spans are kept sorted by start offset, alongside a running maximum of
/// span ends. A lookup binary-searches the last span starting at or before
/// the offset and walks backwards only while some earlier span can still
/// reach it, so nested and overlapping spans are both supported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanIndex {
    spans: Vec<SyntaxSpan>,
    max_end: Vec<usize>,
}

impl SpanIndex {
    /// Builds an index from spans in any order. Empty spans are dropped.
    #[must_use]
    pub fn new(mut spans: Vec<SyntaxSpan>) -> Self {
        spans.retain(|s| s.start < s.end);
        spans.sort_by_key(|s| (s.start, s.end));

        let mut running = 0;
        let max_end = spans
            .iter()
            .map(|s| {
                running = running.max(s.end);
                running
            })
            .collect();

        Self { spans, max_end }
    }

    /// An index that cannot answer for any offset.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// An index classifying `[0, len)` as a single category.
    #[must_use]
    pub fn uniform(len: usize, category: SyntaxCategory) -> Self {
        Self::new(vec![SyntaxSpan::new(0, len, category)])
    }

    /// Number of indexed spans.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns true if the index holds no spans.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

impl SyntaxSpanIndex for SpanIndex {
    fn categories_at(&self, offset: usize) -> Option<CategorySet> {
        let upper = self.spans.partition_point(|s| s.start <= offset);

        let mut found = None;
        for i in (0..upper).rev() {
            if self.max_end[i] <= offset {
                break;
            }
            let span = &self.spans[i];
            if span.contains(offset) {
                found
                    .get_or_insert_with(CategorySet::empty)
                    .insert(span.category);
            }
        }
        found
    }
}

/// Produces a [`SpanIndex`] for source text in one language.
///
/// Implement this to teach the analyzer about a new language.
pub trait SyntaxClassifier: Send + Sync {
    /// Language identifier (e.g., `"rust"`, `"kotlin"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this classifier handles, without the dot (e.g., `&["kt", "kts"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Classifies `source` into code, comment, and string spans.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::Classify`] if the source cannot be classified.
    fn classify(&self, source: &str) -> Result<SpanIndex, LintError>;
}

/// Type alias for boxed `SyntaxClassifier` trait objects.
pub type ClassifierBox = Box<dyn SyntaxClassifier>;
