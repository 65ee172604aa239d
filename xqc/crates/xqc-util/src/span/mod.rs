//! Span module - Source location tracking.
//!
//! A [`Span`] records where a token or diagnostic sits in the query text:
//! a half-open byte range plus the 1-based line and column of its first
//! character. Lines advance once per LF; a lone CR does not start a line.
//!
//! # Examples
//!
//! ```
//! use xqc_util::span::Span;
//!
//! let source = "for $x in 1 to 3";
//! let span = Span::new(0, 3, 1, 1);
//! assert_eq!(span.source_text(source), Some("for"));
//! ```

mod source_map;

pub use source_map::SourceFile;

/// Source location span
///
/// `start..end` is a byte range into the scanned text; `line` and `column`
/// locate `start` for human-readable output. Columns count characters,
/// not bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Placeholder span for diagnostics that have no location
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number of `start` (1-based)
    /// * `column` - Column number of `start` (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns the slice of `source` this span covers
    ///
    /// `None` if the span is out of range or splits a character.
    #[inline]
    pub fn source_text<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_span_new() {
        let span = Span::new(10, 20, 1, 5);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
        assert_eq!(span.line, 1);
        assert_eq!(span.column, 5);
    }

    #[test]
    fn test_source_text_multibyte() {
        let source = "<a>é</a>";
        assert_eq!(Span::new(3, 5, 1, 4).source_text(source), Some("é"));
        assert_eq!(Span::new(3, 4, 1, 4).source_text(source), None);
    }

    #[test]
    fn test_source_text_out_of_range() {
        assert_eq!(Span::new(2, 9, 1, 3).source_text("abc"), None);
        assert_eq!(Span::new(2, 1, 1, 3).source_text("abc"), None);
    }

    #[test]
    fn test_span_default_is_dummy() {
        assert_eq!(Span::default(), Span::DUMMY);
    }

    #[quickcheck]
    fn prop_split_spans_cover_source(text: String, cut: usize) -> bool {
        let len = text.len();
        let mut cut = if len == 0 { 0 } else { cut % (len + 1) };
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        let head = Span::new(0, cut, 1, 1).source_text(&text);
        let tail = Span::new(cut, len, 1, 1).source_text(&text);
        match (head, tail) {
            (Some(head), Some(tail)) => format!("{head}{tail}") == text,
            _ => false,
        }
    }
}
