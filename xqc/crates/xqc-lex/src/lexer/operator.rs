//! Operator and punctuation lexing.
//!
//! `<`-initial operators and the dots live with the rules they share a
//! prefix with (`xml` and `number`); this module covers the rest.

use crate::token::TokenKind;
use crate::Lexer;

const DOUBLE_CHAR_OPERATORS: [(&str, TokenKind); 5] = [
    ("//", TokenKind::DSlash),
    ("|=", TokenKind::OrEq),
    ("&=", TokenKind::AndEq),
    ("!=", TokenKind::Neq),
    (">=", TokenKind::GtEq),
];

impl<'a> Lexer<'a> {
    /// Lexes `//`, `|=`, `&=`, `!=` or `>=`.
    pub(crate) fn lex_double_char_operator(&mut self) -> Option<TokenKind> {
        DOUBLE_CHAR_OPERATORS
            .iter()
            .find(|(text, _)| self.cursor.eat_str(text))
            .map(|&(_, kind)| kind)
    }

    /// Lexes a one-character operator or delimiter starting with `c`.
    pub(crate) fn lex_single_char_operator(&mut self, c: char) -> Option<TokenKind> {
        let kind = match c {
            '/' => TokenKind::Slash,
            ':' => TokenKind::Colon,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '*' => TokenKind::Star,
            '?' => TokenKind::Question,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '|' => TokenKind::Union,
            '@' => TokenKind::At,
            '$' => TokenKind::Dollar,
            '=' => TokenKind::Eq,
            '>' => TokenKind::Gt,
            _ => return None,
        };
        Some(self.single(kind))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexError;
    use crate::state::ScanState;
    use crate::token::TokenKind;
    use crate::Lexer;
    use xqc_util::Handler;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let handler = Handler::new();
        Lexer::new(source, &handler)
            .map(|t| t.map(|t| t.kind))
            .collect::<Result<_, _>>()
            .unwrap_or_else(|err| panic!("{source:?}: {err}"))
    }

    #[test]
    fn test_single_char_operators() {
        assert_eq!(
            kinds("/ : , ; * ? + - [ ] ( ) | @ $ = >"),
            vec![
                TokenKind::Slash,
                TokenKind::Colon,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::Star,
                TokenKind::Question,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Union,
                TokenKind::At,
                TokenKind::Dollar,
                TokenKind::Eq,
                TokenKind::Gt,
            ]
        );
    }

    #[test]
    fn test_double_char_operators() {
        assert_eq!(
            kinds("// |= &= != >="),
            vec![
                TokenKind::DSlash,
                TokenKind::OrEq,
                TokenKind::AndEq,
                TokenKind::Neq,
                TokenKind::GtEq,
            ]
        );
    }

    #[test]
    fn test_longest_operator_wins() {
        assert_eq!(
            kinds("///"),
            vec![TokenKind::DSlash, TokenKind::Slash]
        );
        assert_eq!(kinds("a||b").len(), 4);
    }

    #[test]
    fn test_path_expression() {
        assert_eq!(
            kinds("$doc//entry[@id = 3]/*"),
            vec![
                TokenKind::Dollar,
                TokenKind::NcName,
                TokenKind::DSlash,
                TokenKind::NcName,
                TokenKind::LBracket,
                TokenKind::At,
                TokenKind::NcName,
                TokenKind::Eq,
                TokenKind::IntegerLiteral,
                TokenKind::RBracket,
                TokenKind::Slash,
                TokenKind::Star,
            ]
        );
    }

    #[test]
    fn test_assignment_is_colon_then_eq() {
        assert_eq!(kinds(":="), vec![TokenKind::Colon, TokenKind::Eq]);
    }

    #[test]
    fn test_lone_bang_and_ampersand() {
        for (source, found) in [("!", '!'), ("&", '&'), ("#", '#'), ("%", '%')] {
            let handler = Handler::new();
            let err = Lexer::new(source, &handler).tokenize().unwrap_err();
            assert_eq!(
                err,
                LexError::NoViableToken {
                    found,
                    span: xqc_util::Span::new(0, 1, 1, 1),
                }
            );
        }
    }

    #[test]
    fn test_operators_are_content_in_element_content() {
        let handler = Handler::new();
        let mut state = ScanState::default();
        state.set_element_content(true);
        let tokens = Lexer::with_state("a // b != c", &handler, state)
            .tokenize()
            .unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::ElementContent);
    }
}
