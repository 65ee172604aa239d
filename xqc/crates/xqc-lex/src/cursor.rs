//! Character cursor with bounded lookahead and backtracking.
//!
//! The scanner resolves shared prefixes (`1.5` vs `1.5e3`, `<?` vs `?>`,
//! `(#` vs `(:`) by looking ahead and, where that is not enough, by
//! running a recognizer speculatively and rewinding on failure. Both live
//! here: [`Cursor::la`] peeks without consuming, and
//! [`Cursor::snapshot`] / [`Cursor::restore`] give a position that can be
//! returned to. [`Cursor::speculate`] and [`Cursor::attempt`] wrap the
//! pattern so that a failed trial can never leave the position half moved.

/// A cursor over query text, tracking line and column.
///
/// Lines advance once per LF. A CR is an ordinary character for position
/// purposes, so CRLF counts as one line break and a lone CR as none.
/// Columns count characters, not bytes.
///
/// # Example
///
/// ```
/// use xqc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("(: x :)");
/// assert_eq!(cursor.la(1), Some('('));
/// assert_eq!(cursor.la(2), Some(':'));
///
/// let before = cursor.snapshot();
/// assert!(cursor.eat_str("(:"));
/// cursor.restore(before);
/// assert_eq!(cursor.position(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

/// A saved cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character under the cursor, `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        let b = *self.source.as_bytes().get(self.position)?;
        if b < 128 {
            return Some(b as char);
        }
        self.remaining().chars().next()
    }

    /// Returns the `n`-th character ahead, 0-based (`peek(0)` is current).
    #[inline]
    pub fn peek(&self, n: usize) -> Option<char> {
        if n == 0 {
            return self.current();
        }
        self.remaining().chars().nth(n)
    }

    /// Lookahead in the classic 1-based form: `la(1)` is the current
    /// character.
    ///
    /// ```
    /// use xqc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("ab");
    /// assert_eq!(cursor.la(1), Some('a'));
    /// assert_eq!(cursor.la(2), Some('b'));
    /// assert_eq!(cursor.la(3), None);
    /// ```
    #[inline]
    pub fn la(&self, k: usize) -> Option<char> {
        debug_assert!(k >= 1, "lookahead is 1-based");
        self.peek(k.saturating_sub(1))
    }

    /// Returns true if the current character equals `expected`.
    #[inline]
    pub fn at(&self, expected: char) -> bool {
        self.current() == Some(expected)
    }

    /// Returns true if the remaining input starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Returns true when every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes one character and returns it.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consumes `expected` if it is the current character.
    #[inline]
    pub fn eat(&mut self, expected: char) -> bool {
        if self.at(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes `prefix` if the remaining input starts with it.
    pub fn eat_str(&mut self, prefix: &str) -> bool {
        if !self.starts_with(prefix) {
            return false;
        }
        for _ in prefix.chars() {
            self.advance();
        }
        true
    }

    /// Consumes characters while `pred` holds and returns how many.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.advance();
            count += 1;
        }
        count
    }

    /// Consumes everything up to, not including, the first occurrence of
    /// `terminator`. Returns false, with the cursor at end of input, if
    /// the terminator never occurs.
    pub fn eat_until(&mut self, terminator: &str) -> bool {
        match self.remaining().find(terminator) {
            Some(offset) => {
                let target = self.position + offset;
                while self.position < target {
                    self.advance();
                }
                true
            },
            None => {
                while self.advance().is_some() {}
                false
            },
        }
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Source text from byte `start` up to the cursor.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Unconsumed input.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// The whole source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Saves the current position (mark).
    #[inline]
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Returns to a saved position (rewind).
    #[inline]
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }

    /// Runs `trial` as pure lookahead: whatever it consumes is given back.
    ///
    /// ```
    /// use xqc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("12e5");
    /// let is_double = cursor.speculate(|c| {
    ///     c.eat_while(|ch| ch.is_ascii_digit()) > 0 && (c.eat('e') || c.eat('E'))
    /// });
    /// assert!(is_double);
    /// assert_eq!(cursor.position(), 0);
    /// ```
    pub fn speculate(&mut self, trial: impl FnOnce(&mut Self) -> bool) -> bool {
        let mark = self.snapshot();
        let matched = trial(self);
        self.restore(mark);
        matched
    }

    /// Runs `trial` and keeps its progress only if it returns `Some`.
    ///
    /// ```
    /// use xqc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<?x");
    /// let miss: Option<()> = cursor.attempt(|c| {
    ///     c.eat_str("<?");
    ///     c.eat('!').then_some(())
    /// });
    /// assert!(miss.is_none());
    /// assert_eq!(cursor.position(), 0);
    /// ```
    pub fn attempt<T>(&mut self, trial: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let mark = self.snapshot();
        let result = trial(self);
        if result.is_none() {
            self.restore(mark);
        }
        result
    }
}
