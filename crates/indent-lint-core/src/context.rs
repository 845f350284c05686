//! Context types for rule execution.

use crate::types::Location;
use std::path::{Path, PathBuf};

/// Context provided to per-file rules.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path to the file as discovered.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
    /// Byte offset of the start of every line, beginning with 0.
    line_starts: Vec<usize>,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        let line_starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            path,
            content,
            relative_path,
            line_starts,
        }
    }

    /// Converts a byte offset into a 1-indexed line and character column.
    ///
    /// Offsets past the end clamp to the end of the file.
    #[must_use]
    pub fn line_column(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let line_index = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line_index];
        let column = self
            .content
            .get(line_start..offset)
            .map_or(offset - line_start, |prefix| prefix.chars().count());
        (line_index + 1, column + 1)
    }

    /// Builds a [`Location`] for the byte span `[offset, offset + length)`.
    #[must_use]
    pub fn location_for(&self, offset: usize, length: usize) -> Location {
        let (line, column) = self.line_column(offset);
        Location::new(self.relative_path.clone(), line, column).with_span(offset, length)
    }
}
