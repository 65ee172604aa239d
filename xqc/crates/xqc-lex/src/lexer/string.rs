//! String literals and entity/character references.
//!
//! ```text
//! StringLiteral       ::= '"' (PredefinedEntityRef | CharRef | '""' | [^"&])* '"'
//!                       | "'" (PredefinedEntityRef | CharRef | "''" | [^'&])* "'"
//! PredefinedEntityRef ::= '&' ('lt' | 'gt' | 'amp' | 'quot' | 'apos') ';'
//! CharRef             ::= '&#' [0-9]+ ';' | '&#x' [0-9a-fA-F]+ ';'
//! ```
//!
//! References are validated but left in the token text; turning them into
//! characters is up to the consumer.

use crate::cursor::Cursor;
use crate::error::{ConstructKind, LexError, Result};
use crate::token::TokenKind;
use crate::Lexer;

const PREDEFINED_ENTITIES: [&str; 5] = ["lt", "gt", "amp", "quot", "apos"];

/// Consumes one reference starting at `&`, or nothing.
fn reference(cursor: &mut Cursor<'_>) -> Option<TokenKind> {
    cursor.attempt(|c| {
        if !c.eat('&') {
            return None;
        }
        if c.eat('#') {
            let digits = if c.eat('x') {
                c.eat_while(|ch| ch.is_ascii_hexdigit())
            } else {
                c.eat_while(|ch| ch.is_ascii_digit())
            };
            return (digits > 0 && c.eat(';')).then_some(TokenKind::CharRef);
        }
        let named = PREDEFINED_ENTITIES.iter().any(|name| c.eat_str(name));
        (named && c.eat(';')).then_some(TokenKind::PredefinedEntityRef)
    })
}

impl<'a> Lexer<'a> {
    fn malformed_reference(&self) -> LexError {
        let at = self.cursor.snapshot();
        let mut probe = self.cursor.clone();
        probe.advance();
        probe.eat_while(|c| c == '#' || c.is_ascii_alphanumeric());
        probe.eat(';');
        LexError::MalformedEntityOrCharRef {
            span: xqc_util::Span::new(at.position, probe.position(), at.line, at.column),
        }
    }

    /// Lexes a standalone reference in element or attribute content.
    pub(crate) fn lex_reference(&mut self) -> Result<TokenKind> {
        reference(&mut self.cursor).ok_or_else(|| self.malformed_reference())
    }

    /// Lexes a string literal. The opening quote is the current character.
    pub(crate) fn lex_string_literal(&mut self) -> Result<TokenKind> {
        let Some(delim) = self.cursor.advance() else {
            return Err(self.unterminated(ConstructKind::StringLiteral, self.token_start));
        };

        loop {
            match self.cursor.current() {
                None => {
                    return Err(self.unterminated(ConstructKind::StringLiteral, self.token_start));
                },
                Some(c) if c == delim => {
                    self.cursor.advance();
                    if !self.cursor.eat(delim) {
                        return Ok(TokenKind::StringLiteral);
                    }
                },
                Some('&') => {
                    if reference(&mut self.cursor).is_none() {
                        return Err(self.malformed_reference());
                    }
                },
                Some(_) => {
                    self.cursor.advance();
                },
            }
        }
    }
}
