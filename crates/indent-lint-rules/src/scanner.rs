//! Line-oriented scan for tab/space transitions in leading whitespace.
//!
//! For every line, the scanner consumes the leading run of tabs and spaces
//! and looks for the first adjacent pair that differs in kind. A hit yields
//! a [`Match`] anchored at the line start and spanning through that pair.
//! Lines are scanned independently, at most one match per line, in
//! ascending offset order. The scanner knows nothing about comments or
//! strings; that is left to [`crate::filter`].

use indent_lint_core::Match;
use std::iter::FusedIterator;

/// Returns true for the two characters that make up indentation.
#[must_use]
pub fn is_indent(byte: u8) -> bool {
    byte == b'\t' || byte == b' '
}

/// Lazily scans `text` for lines with mixed tab/space indentation.
#[must_use]
pub fn scan(text: &str) -> Scanner<'_> {
    Scanner {
        bytes: text.as_bytes(),
        next_line: Some(0),
    }
}

/// Iterator returned by [`scan`].
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    bytes: &'a [u8],
    next_line: Option<usize>,
}

impl Iterator for Scanner<'_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        while let Some(line_start) = self.next_line {
            let rest = &self.bytes[line_start..];
            let run = rest.iter().take_while(|&&b| is_indent(b)).count();
            let transition = rest[..run].windows(2).position(|pair| pair[0] != pair[1]);

            self.next_line = rest[run..]
                .iter()
                .position(|&b| b == b'\n')
                .map(|i| line_start + run + i + 1);

            if let Some(i) = transition {
                return Some(Match::new(line_start, i + 2));
            }
        }
        None
    }
}

impl FusedIterator for Scanner<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(text: &str) -> Vec<(usize, usize)> {
        scan(text).map(|m| (m.offset, m.length)).collect()
    }

    #[test]
    fn empty_text_has_no_matches() {
        assert!(matches("").is_empty());
    }

    #[test]
    fn uniform_indentation_has_no_matches() {
        assert!(matches("a\n\t\tb\n    c\n\t\n  \n").is_empty());
    }

    #[test]
    fn transition_at_line_start() {
        assert_eq!(matches("\t let a = 1"), vec![(0, 2)]);
        assert_eq!(matches(" \tlet a = 1"), vec![(0, 2)]);
    }

    #[test]
    fn length_runs_through_first_transition() {
        // two tabs, then a space: transition pair is bytes 1..3
        assert_eq!(matches("\t\t x"), vec![(0, 3)]);
        // four spaces then tab, then more mixing: first pair only
        assert_eq!(matches("    \t \tx"), vec![(0, 5)]);
    }

    #[test]
    fn offset_is_line_start_not_pair_start() {
        let text = "fn a() {\n    \tb();\n}\n";
        assert_eq!(matches(text), vec![(9, 5)]);
    }

    #[test]
    fn at_most_one_match_per_line() {
        assert_eq!(matches("\t \t \t x\n"), vec![(0, 2)]);
    }

    #[test]
    fn whitespace_after_code_is_ignored() {
        assert!(matches("let a = 1; \t // note\n").is_empty());
    }

    #[test]
    fn one_match_per_offending_line_in_order() {
        let text = "\t a\n    b\n \tc\nd\n\t\t  e";
        assert_eq!(matches(text), vec![(0, 2), (10, 2), (16, 3)]);
    }

    #[test]
    fn carriage_return_ends_the_run() {
        assert!(matches("\t\r\n \r\n").is_empty());
        assert_eq!(matches("a\r\n\t x\r\n"), vec![(3, 2)]);
    }

    #[test]
    fn whitespace_only_final_line() {
        assert_eq!(matches("a\n \t"), vec![(2, 2)]);
    }

    #[test]
    fn multibyte_text_keeps_byte_offsets() {
        let text = "// é\n\t y";
        let m: Vec<_> = scan(text).collect();
        assert_eq!(m, vec![Match::new(6, 2)]);
        assert!(text.is_char_boundary(m[0].offset));
    }

    #[test]
    fn scanner_is_fused() {
        let mut s = scan("\t x");
        assert!(s.next().is_some());
        assert!(s.next().is_none());
        assert!(s.next().is_none());
    }
}
