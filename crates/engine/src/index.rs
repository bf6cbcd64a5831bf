// Stepview - Recorded Execution Trace Viewer
// Copyright (C) 2026 The Stepview Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Line offset indexing for source file text.
//!
//! Built once per displayed file rather than per navigation step: an
//! execution trace typically runs through many consecutive steps in one file
//! before jumping elsewhere, so re-scanning the text on every step would be
//! wasted work. Lookup after the build is O(1).

use crate::error::LineOutOfRangeError;

/// Per-file table of half-open byte ranges, one per line.
///
/// A line's range covers its characters plus its `'\n'` terminator, so
/// consecutive ranges are contiguous and together cover exactly
/// `[0, text.len())`. A `'\r'` before the terminator stays inside the span.
/// The final line's range ends at `text.len()` whether or not the text ends
/// with a terminator; a trailing terminator does not produce an extra empty
/// entry. External lookup is 1-based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineOffsetTable {
    spans: Vec<(usize, usize)>,
}

impl LineOffsetTable {
    /// Build the offset table for `text`.
    ///
    /// Pure and deterministic: the same text always yields the same table.
    /// Empty text yields an empty table.
    pub fn build(text: &str) -> Self {
        let mut spans = Vec::new();
        let mut start = 0;

        for (pos, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                spans.push((start, pos + 1));
                start = pos + 1;
            }
        }

        if start < text.len() {
            spans.push((start, text.len()));
        }

        Self { spans }
    }

    /// The half-open byte range of the given 1-based line
    pub fn range_for(&self, line: u32) -> Result<(usize, usize), LineOutOfRangeError> {
        if line == 0 {
            return Err(LineOutOfRangeError { line, line_count: self.line_count() });
        }

        self.spans
            .get(line as usize - 1)
            .copied()
            .ok_or(LineOutOfRangeError { line, line_count: self.line_count() })
    }

    /// Number of lines in the indexed text
    pub fn line_count(&self) -> usize {
        self.spans.len()
    }

    /// Whether the indexed text was empty
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(text: &str) -> Vec<(usize, usize)> {
        let table = LineOffsetTable::build(text);
        (1..=table.line_count())
            .map(|n| table.range_for(n as u32).unwrap())
            .collect()
    }

    #[test]
    fn terminated_lines_include_their_terminator() {
        assert_eq!(spans("ab\ncd\n"), vec![(0, 3), (3, 6)]);
    }

    #[test]
    fn unterminated_last_line_ends_at_text_length() {
        assert_eq!(spans("ab\ncd"), vec![(0, 3), (3, 5)]);
    }

    #[test]
    fn single_line_without_terminator() {
        assert_eq!(spans("a"), vec![(0, 1)]);
    }

    #[test]
    fn lone_terminator_is_one_empty_line() {
        assert_eq!(spans("\n"), vec![(0, 1)]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        let table = LineOffsetTable::build("");
        assert!(table.is_empty());
        assert_eq!(table.line_count(), 0);
    }

    #[test]
    fn carriage_return_stays_inside_span() {
        assert_eq!(spans("ab\r\ncd\r\n"), vec![(0, 4), (4, 8)]);
    }

    #[test]
    fn interior_empty_lines_get_their_own_spans() {
        assert_eq!(spans("a\n\n\nb\n"), vec![(0, 2), (2, 3), (3, 4), (4, 6)]);
    }

    #[test]
    fn ranges_tile_the_text_exactly() {
        let samples = ["", "x", "x\n", "ab\ncd\n", "ab\ncd", "\n\n", "fn main() {}\n\nfin"];

        for text in samples {
            let ranges = spans(text);

            let mut expected_start = 0;
            for (start, end) in &ranges {
                assert_eq!(*start, expected_start, "gap or overlap in {text:?}");
                assert!(end > start, "empty span in {text:?}");
                expected_start = *end;
            }
            assert_eq!(expected_start, text.len(), "ranges do not cover {text:?}");
        }
    }

    #[test]
    fn out_of_range_lookups_fail() {
        let table = LineOffsetTable::build("ab\ncd\n");

        assert!(matches!(table.range_for(0), Err(LineOutOfRangeError { line: 0, .. })));
        assert!(matches!(table.range_for(3), Err(LineOutOfRangeError { line: 3, .. })));
        let err = table.range_for(3).unwrap_err();
        assert_eq!(err.line_count, 2);
    }

    #[test]
    fn build_is_deterministic() {
        let text = "a\nbb\nccc";
        assert_eq!(LineOffsetTable::build(text), LineOffsetTable::build(text));
    }

    #[test]
    fn multibyte_text_is_indexed_by_byte() {
        // "é" is two bytes in UTF-8
        assert_eq!(spans("é\nx\n"), vec![(0, 3), (3, 5)]);
    }
}
