//! Numeric literal lexing.
//!
//! ```text
//! IntegerLiteral ::= Digits
//! DecimalLiteral ::= ('.' Digits) | (Digits '.' Digit*)
//! DoubleLiteral  ::= (('.' Digits) | (Digits ('.' Digit*)?)) [eE] [+-]? Digits
//! ```
//!
//! The three share every prefix up to the exponent marker. A double is
//! decided by a trial scan of the mantissa that looks for the marker and
//! then rewinds; only after that does the real scan commit to a kind.
//! `..` and `.` are resolved here as well, since they share the leading dot.

use crate::cursor::Cursor;
use crate::error::{LexError, Result};
use crate::token::TokenKind;
use crate::unicode::is_digit;
use crate::Lexer;

/// Consumes a mantissa. Returns `Some(true)` if it contained a dot.
fn mantissa(cursor: &mut Cursor<'_>) -> Option<bool> {
    if cursor.eat('.') {
        (cursor.eat_while(is_digit) > 0).then_some(true)
    } else if cursor.eat_while(is_digit) > 0 {
        Some(cursor.eat('.') && {
            cursor.eat_while(is_digit);
            true
        })
    } else {
        None
    }
}

fn exponent_marker(cursor: &mut Cursor<'_>) -> bool {
    cursor.eat('e') || cursor.eat('E')
}

impl<'a> Lexer<'a> {
    /// Lexes a numeric literal, `..` or `.`.
    ///
    /// Returns `Ok(None)` when the input starts with none of them.
    pub(crate) fn lex_number(&mut self) -> Result<Option<TokenKind>> {
        let starts_number = match self.cursor.la(1) {
            Some('.') => self.cursor.la(2).is_some_and(is_digit),
            Some(c) => is_digit(c),
            None => false,
        };

        if !starts_number {
            if self.cursor.eat_str("..") {
                return Ok(Some(TokenKind::Parent));
            }
            if self.cursor.eat('.') {
                return Ok(Some(TokenKind::SelfDot));
            }
            return Ok(None);
        }

        let is_double = self
            .cursor
            .speculate(|c| mantissa(c).is_some() && exponent_marker(c));

        let has_dot = mantissa(&mut self.cursor).unwrap_or(false);
        if !is_double {
            return Ok(Some(if has_dot {
                TokenKind::DecimalLiteral
            } else {
                TokenKind::IntegerLiteral
            }));
        }

        exponent_marker(&mut self.cursor);
        if !self.cursor.eat('+') {
            self.cursor.eat('-');
        }
        if self.cursor.eat_while(is_digit) == 0 {
            return Err(LexError::MalformedNumber {
                text: self.cursor.slice_from(self.token_start.position).to_string(),
                span: self.span_from(self.token_start),
            });
        }
        Ok(Some(TokenKind::DoubleLiteral))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexError;
    use crate::token::{Token, TokenKind};
    use crate::Lexer;
    use xqc_util::Handler;

    fn lex(source: &str) -> Vec<Token> {
        let handler = Handler::new();
        Lexer::new(source, &handler)
            .tokenize()
            .unwrap_or_else(|err| panic!("{source:?}: {err}"))
    }

    fn single(source: &str) -> (TokenKind, String) {
        let tokens = lex(source);
        assert_eq!(tokens.len(), 1, "{source:?} gave {tokens:?}");
        (tokens[0].kind, tokens[0].text.clone())
    }

    #[test]
    fn test_integer() {
        assert_eq!(single("42"), (TokenKind::IntegerLiteral, "42".into()));
        assert_eq!(single("007"), (TokenKind::IntegerLiteral, "007".into()));
    }

    #[test]
    fn test_decimal() {
        assert_eq!(single("1.5"), (TokenKind::DecimalLiteral, "1.5".into()));
        assert_eq!(single(".5"), (TokenKind::DecimalLiteral, ".5".into()));
        assert_eq!(single("1."), (TokenKind::DecimalLiteral, "1.".into()));
    }

    #[test]
    fn test_double() {
        assert_eq!(single("1.5e10"), (TokenKind::DoubleLiteral, "1.5e10".into()));
        assert_eq!(single("1E-3"), (TokenKind::DoubleLiteral, "1E-3".into()));
        assert_eq!(single(".5e+2"), (TokenKind::DoubleLiteral, ".5e+2".into()));
        assert_eq!(single("2.e7"), (TokenKind::DoubleLiteral, "2.e7".into()));
    }

    #[test]
    fn test_dots() {
        assert_eq!(single("."), (TokenKind::SelfDot, ".".into()));
        assert_eq!(single(".."), (TokenKind::Parent, "..".into()));
        let kinds: Vec<_> = lex("...").iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Parent, TokenKind::SelfDot]);
    }

    #[test]
    fn test_decimal_followed_by_dot() {
        let tokens = lex("1..2");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::DecimalLiteral, TokenKind::DecimalLiteral]
        );
        assert_eq!(tokens[0].text, "1.");
        assert_eq!(tokens[1].text, ".2");
    }

    #[test]
    fn test_integer_then_name() {
        let tokens = lex("3 div 2");
        assert_eq!(tokens[0].kind, TokenKind::IntegerLiteral);
        assert_eq!(tokens[2].kind, TokenKind::IntegerLiteral);
    }

    #[test]
    fn test_non_ascii_digits() {
        assert_eq!(
            single("\u{0661}\u{0662}"),
            (TokenKind::IntegerLiteral, "\u{0661}\u{0662}".into())
        );
    }

    #[test]
    fn test_missing_exponent_digits() {
        let handler = Handler::new();
        let err = Lexer::new("1.5e+x", &handler).tokenize().unwrap_err();
        match err {
            LexError::MalformedNumber { text, span } => {
                assert_eq!(text, "1.5e+");
                assert_eq!((span.start, span.end), (0, 5));
            },
            other => panic!("unexpected {other:?}"),
        }
        assert!(handler.has_errors());
    }

    #[test]
    fn test_exponent_marker_without_mantissa_is_name() {
        let tokens = lex("e5");
        assert_eq!(tokens[0].kind, TokenKind::NcName);
    }
}
