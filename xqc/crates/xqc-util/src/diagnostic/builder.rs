//! Diagnostic builder for fluent diagnostic construction.
//!
//! [`DiagnosticBuilder`] assembles a [`Diagnostic`] step by step, and
//! [`SourceSnippet`] renders one source line with a caret underline.

use super::{Diagnostic, DiagnosticCode, Handler, Span};
use crate::span::SourceFile;

/// One line of source with an underlined column range
///
/// # Examples
///
/// ```
/// use xqc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("let $x := 1 # 2", 1, 13, 14);
/// let text = snippet.format();
/// assert!(text.contains("let $x := 1 # 2"));
/// assert!(text.ends_with("            ^"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// Source line without its terminator
    pub line: String,
    /// 1-based line number
    pub line_number: usize,
    /// 1-based first underlined column
    pub start_column: usize,
    /// 1-based column after the underline
    pub end_column: usize,
}

impl SourceSnippet {
    /// Create a snippet underlining `start_column..end_column`
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
        }
    }

    /// Build a snippet for `span` from the file it points into
    ///
    /// Returns `None` when the span's line is not part of the file. A span
    /// that crosses a line break is underlined to the end of its first line.
    pub fn from_span(file: &SourceFile, span: Span) -> Option<Self> {
        let line = file.line_at(span.line as usize)?;
        let start_column = span.column.max(1) as usize;
        let width = span
            .source_text(file.content())
            .map(|text| text.lines().next().unwrap_or("").chars().count())
            .unwrap_or(0);
        Some(Self::new(
            line,
            span.line as usize,
            start_column,
            start_column + width,
        ))
    }

    /// Render the line and its caret underline
    pub fn format(&self) -> String {
        let gutter = self.line_number.to_string().len().max(3);
        let mut result = format!("{:>gutter$} | {}\n", self.line_number, self.line);
        result.push_str(&format!("{:>gutter$} | ", ""));

        // Tabs stay tabs so the carets line up under them
        for ch in self.line.chars().take(self.start_column.saturating_sub(1)) {
            result.push(if ch == '\t' { '\t' } else { ' ' });
        }
        let underline = self.end_column.saturating_sub(self.start_column).max(1);
        result.push_str(&"^".repeat(underline));
        result
    }
}

/// Fluent builder for [`Diagnostic`]
///
/// # Examples
///
/// ```
/// use xqc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("unterminated comment")
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_CONSTRUCT)
///     .span(Span::new(0, 4, 1, 1))
///     .help("close the comment with `:)`")
///     .emit(&handler);
///
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug)]
#[must_use = "a diagnostic does nothing until it is built or emitted"]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Start an error
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::new(message, Span::DUMMY),
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    /// Set the primary location
    pub fn span(mut self, span: Span) -> Self {
        self.diagnostic.span = span;
        self
    }

    /// Add a help suggestion
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.diagnostic.helps.push(help.into());
        self
    }

    /// Finish without emitting
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    /// Finish and hand the diagnostic to `handler`
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_single_column_has_one_caret() {
        let snippet = SourceSnippet::new("1 + #", 1, 5, 5);
        let rendered = snippet.format();
        assert!(rendered.ends_with("    ^"), "{rendered:?}");
    }

    #[test]
    fn test_snippet_keeps_tabs() {
        let snippet = SourceSnippet::new("\t\tfoo", 2, 3, 6);
        let caret_line = snippet.format().lines().nth(1).unwrap_or("").to_string();
        assert_eq!(caret_line, "    | \t\t^^^");
    }

    #[test]
    fn test_snippet_from_span() {
        let file = SourceFile::new("q.xq", "1,\n(: open");
        let snippet = SourceSnippet::from_span(&file, Span::new(3, 10, 2, 1));
        let snippet = snippet.unwrap();
        assert_eq!(snippet.line, "(: open");
        assert_eq!(snippet.line_number, 2);
        assert_eq!((snippet.start_column, snippet.end_column), (1, 8));
    }

    #[test]
    fn test_snippet_from_span_counts_characters() {
        let file = SourceFile::new("q.xq", "<a>été</a>");
        let snippet = SourceSnippet::from_span(&file, Span::new(3, 8, 1, 4)).unwrap();
        assert_eq!((snippet.start_column, snippet.end_column), (4, 7));
    }

    #[test]
    fn test_snippet_from_span_off_char_boundary() {
        let file = SourceFile::new("q.xq", "été");
        let snippet = SourceSnippet::from_span(&file, Span::new(0, 1, 1, 1)).unwrap();
        assert_eq!((snippet.start_column, snippet.end_column), (1, 1));
    }

    #[test]
    fn test_snippet_from_span_missing_line() {
        let file = SourceFile::new("q.xq", "1");
        assert!(SourceSnippet::from_span(&file, Span::new(0, 1, 9, 1)).is_none());
    }

    #[test]
    fn test_builder_collects_everything() {
        let diag = DiagnosticBuilder::error("unexpected character '#'")
            .code(DiagnosticCode::E_LEXER_NO_VIABLE_TOKEN)
            .span(Span::new(4, 5, 1, 5))
            .help("did you mean `(#`?")
            .build();

        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_NO_VIABLE_TOKEN));
        assert_eq!(diag.span.column, 5);
        assert_eq!(diag.helps.len(), 1);
    }

    #[test]
    fn test_builder_emit() {
        let handler = Handler::new();
        DiagnosticBuilder::error("unexpected character '!'").emit(&handler);
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
    }
}
