//! Core lexer implementation.
//!
//! This module contains the [`Lexer`] struct, the `next_token` driver and the
//! dispatcher that picks a recognizer for the current input.

use tracing::{debug, trace};
use xqc_util::{DiagnosticBuilder, Handler, Span};

use crate::cursor::{Cursor, CursorSnapshot};
use crate::error::{ConstructKind, LexError, Result};
use crate::state::{AttrDelim, ScanState};
use crate::token::{Token, TokenKind};
use crate::unicode::{is_name_start, is_ws};

/// Scanner for query text.
///
/// Tokens are pulled one at a time with [`next_token`](Self::next_token).
/// Once [`TokenKind::Eof`] has been returned, further calls keep returning
/// `Eof` at the same position. Once an error has been returned the lexer is
/// poisoned and keeps returning the same error. Every error is also
/// reported to the [`Handler`] the lexer was created with.
///
/// The parser steers the scanner through the mode setters
/// ([`set_element_content`](Self::set_element_content) and friends) as it
/// enters and leaves direct constructors.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Collects diagnostics for every lexical error.
    handler: &'a Handler,

    /// Mode flags.
    pub(crate) state: ScanState,

    /// Where the token being scanned starts.
    pub(crate) token_start: CursorSnapshot,

    /// Where the open pragma starts, for unterminated pragma errors.
    pragma_start: Option<CursorSnapshot>,

    /// The error every call returns once scanning has failed.
    poisoned: Option<LexError>,

    /// Set once the iterator has seen `Eof` or an error.
    exhausted: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer in the default mode.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self::with_state(source, handler, ScanState::default())
    }

    /// Creates a lexer starting in `state`, e.g. inside element content.
    pub fn with_state(source: &'a str, handler: &'a Handler, state: ScanState) -> Self {
        let cursor = Cursor::new(source);
        let token_start = cursor.snapshot();
        Self {
            cursor,
            handler,
            state,
            token_start,
            pragma_start: None,
            poisoned: None,
            exhausted: false,
        }
    }

    /// Returns the next token.
    ///
    /// Comments and, unless whitespace is explicit, whitespace are skipped.
    pub fn next_token(&mut self) -> Result<Token> {
        if let Some(err) = &self.poisoned {
            return Err(err.clone());
        }

        loop {
            self.token_start = self.cursor.snapshot();
            match self.dispatch() {
                Ok(Some(kind)) => {
                    let token = self.make_token(kind);
                    if kind == TokenKind::PragmaStart {
                        self.pragma_start = Some(self.token_start);
                    } else if kind == TokenKind::PragmaEnd {
                        self.pragma_start = None;
                    }
                    self.state.on_token(kind);
                    return Ok(token);
                },
                Ok(None) => continue,
                Err(err) => {
                    self.report(&err);
                    self.poisoned = Some(err.clone());
                    return Err(err);
                },
            }
        }
    }

    /// Scans everything up to, not including, `Eof`.
    pub fn tokenize(self) -> Result<Vec<Token>> {
        self.collect()
    }

    /// Picks the first enabled rule that matches. `None` means the input
    /// was skipped (a comment or insignificant whitespace).
    fn dispatch(&mut self) -> Result<Option<TokenKind>> {
        let Some(c) = self.cursor.current() else {
            return self.end_of_input().map(Some);
        };
        let content = self.state.in_content();

        match c {
            '{' => return Ok(Some(self.single(TokenKind::LCurly))),
            '}' => return Ok(Some(self.single(TokenKind::RCurly))),
            _ => {},
        }

        if !content && self.cursor.starts_with("(:") {
            self.skip_expr_comment()?;
            return Ok(None);
        }

        if self.cursor.starts_with("<!--") {
            return self.lex_xml_comment().map(Some);
        }
        if self.cursor.starts_with("<![CDATA[") {
            return self.lex_cdata().map(Some);
        }

        if !content {
            if let Some(kind) = self.lex_number()? {
                return Ok(Some(kind));
            }
            if let Some(kind) = self.lex_terminator() {
                return Ok(Some(kind));
            }
        }

        if c == '<' {
            if let Some(kind) = self.lex_angle()? {
                return Ok(Some(kind));
            }
        }

        if let Some(kind) = self.lex_attribute_escape() {
            return Ok(Some(kind));
        }

        if matches!(c, '"' | '\'')
            && self.state.parse_string_literals()
            && !self.state.in_element_content()
        {
            return self.lex_string_literal().map(Some);
        }

        if !content {
            if let Some(kind) = self.lex_double_char_operator() {
                return Ok(Some(kind));
            }
            if self.cursor.starts_with("(#") {
                return Ok(Some(self.lex_pragma_start()));
            }
        }

        if self.state.in_pragma() && (is_ws(c) || c == '#') {
            return self.lex_pragma_end().map(Some);
        }

        if c == '<' {
            return Ok(Some(self.single(TokenKind::Lt)));
        }

        if self.state.in_attribute_content() {
            if c == '&' {
                return self.lex_reference().map(Some);
            }
            if let Some(kind) = self.lex_attribute_content() {
                return Ok(Some(kind));
            }
        }

        if let Some(delim) = AttrDelim::from_char(c) {
            if !(self.state.parse_string_literals() || self.state.in_element_content()) {
                let kind = match delim {
                    AttrDelim::Quot => TokenKind::Quot,
                    AttrDelim::Apos => TokenKind::Apos,
                };
                return Ok(Some(self.single(kind)));
            }
        }

        if self.state.in_element_content() {
            if c == '&' {
                return self.lex_reference().map(Some);
            }
            if let Some(kind) = self.lex_element_content() {
                return Ok(Some(kind));
            }
        }

        if !self.state.in_pragma() && is_ws(c) {
            return Ok(self.lex_whitespace());
        }

        if is_name_start(c) {
            return Ok(Some(self.lex_ncname()));
        }

        if let Some(kind) = self.lex_single_char_operator(c) {
            return Ok(Some(kind));
        }

        Err(self.no_viable_token(c))
    }

    fn end_of_input(&self) -> Result<TokenKind> {
        if self.state.in_pragma() {
            return Err(self.unterminated(
                ConstructKind::Pragma,
                self.pragma_start_or_token_start(),
            ));
        }
        Ok(TokenKind::Eof)
    }

    /// Start of the open pragma, falling back to the current token.
    pub(crate) fn pragma_start_or_token_start(&self) -> CursorSnapshot {
        self.pragma_start.unwrap_or(self.token_start)
    }

    /// Consumes one character and returns `kind`.
    #[inline]
    pub(crate) fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        let start = self.token_start;
        let span = Span::new(start.position, self.cursor.position(), start.line, start.column);
        trace!(kind = %kind, line = span.line, column = span.column, "token");
        Token::new(kind, self.cursor.slice_from(start.position), span)
    }

    /// Span from `from` to the cursor.
    pub(crate) fn span_from(&self, from: CursorSnapshot) -> Span {
        Span::new(from.position, self.cursor.position(), from.line, from.column)
    }

    /// `found` at the cursor starts no token.
    pub(crate) fn no_viable_token(&self, found: char) -> LexError {
        let at = self.cursor.snapshot();
        LexError::NoViableToken {
            found,
            span: Span::new(at.position, at.position + found.len_utf8(), at.line, at.column),
        }
    }

    /// The construct opened at `from` runs into end of input.
    pub(crate) fn unterminated(&self, kind: ConstructKind, from: CursorSnapshot) -> LexError {
        LexError::UnterminatedConstruct {
            kind,
            span: Span::new(from.position, self.cursor.source().len(), from.line, from.column),
        }
    }

    fn report(&self, err: &LexError) {
        debug!(code = %err.code(), line = err.line(), column = err.column(), "{}", err.message());
        let mut builder = DiagnosticBuilder::error(err.message())
            .code(err.code())
            .span(err.span());
        if let Some(help) = err.help() {
            builder = builder.help(help);
        }
        builder.emit(self.handler);
    }

    /// Current mode flags.
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Enters or leaves element content.
    pub fn set_element_content(&mut self, on: bool) {
        self.state.set_element_content(on);
    }

    /// Enters a quoted attribute value.
    pub fn enter_attribute_content(&mut self, delim: AttrDelim) {
        self.state.enter_attribute_content(delim);
    }

    /// Leaves a quoted attribute value.
    pub fn leave_attribute_content(&mut self) {
        self.state.leave_attribute_content();
    }

    /// Makes whitespace significant.
    pub fn set_ws_explicit(&mut self, on: bool) {
        self.state.set_ws_explicit(on);
    }

    /// Controls whether quotes start string literals.
    pub fn set_parse_string_literals(&mut self, on: bool) {
        self.state.set_parse_string_literals(on);
    }

    /// Line of the next character to scan (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Column of the next character to scan (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Byte offset of the next character to scan.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token>;

    /// Yields tokens up to, not including, `Eof`, or up to and including
    /// the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.exhausted = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.exhausted = true;
                Some(Err(err))
            },
        }
    }
}
