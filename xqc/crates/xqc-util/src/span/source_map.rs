//! Source file with a precomputed line index.
//!
//! Used by diagnostics to show the offending line of a query under the
//! error message.

/// A named piece of query text with line lookup
///
/// # Examples
///
/// ```
/// use xqc_util::span::SourceFile;
///
/// let file = SourceFile::new("q.xq", "let $a := 1\nreturn $a");
/// assert_eq!(file.line_count(), 2);
/// assert_eq!(file.line_at(2), Some("return $a"));
/// ```
pub struct SourceFile {
    name: String,
    content: String,
    /// Byte offset of the first character of every line
    line_starts: Vec<usize>,
}

impl SourceFile {
    /// Create a source file and index its lines
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let line_starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Display name, usually the path the text was read from
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full text
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of lines, counting a trailing empty line after a final LF
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the text of a 1-based line without its line terminator
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = *self.line_starts.get(line - 1)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());
        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}
