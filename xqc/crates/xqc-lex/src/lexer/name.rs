//! Name and keyword lexing.

use crate::keyword::Keyword;
use crate::token::TokenKind;
use crate::unicode::is_name_char;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an NCName. The caller has checked the start character.
    ///
    /// Reserved words come back as [`TokenKind::Keyword`]; the parser
    /// decides where a keyword may still act as a name.
    pub(crate) fn lex_ncname(&mut self) -> TokenKind {
        self.cursor.advance();
        self.cursor.eat_while(is_name_char);

        let text = self.cursor.slice_from(self.token_start.position);
        Keyword::from_ncname(text).map_or(TokenKind::NcName, TokenKind::Keyword)
    }
}

#[cfg(test)]
mod tests {
    use crate::keyword::Keyword;
    use crate::token::{Token, TokenKind};
    use crate::Lexer;
    use xqc_util::Handler;

    fn lex(source: &str) -> Vec<Token> {
        let handler = Handler::new();
        Lexer::new(source, &handler)
            .tokenize()
            .unwrap_or_else(|err| panic!("{source:?}: {err}"))
    }

    fn single(source: &str) -> TokenKind {
        let tokens = lex(source);
        assert_eq!(tokens.len(), 1, "{source:?} gave {tokens:?}");
        assert_eq!(tokens[0].text, source);
        tokens[0].kind
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(single("book"), TokenKind::NcName);
        assert_eq!(single("_private"), TokenKind::NcName);
    }

    #[test]
    fn test_name_with_punctuation() {
        assert_eq!(single("first-name"), TokenKind::NcName);
        assert_eq!(single("v1.2"), TokenKind::NcName);
        assert_eq!(single("a_b-c.d9"), TokenKind::NcName);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(single("for"), TokenKind::Keyword(Keyword::For));
        assert_eq!(single("self"), TokenKind::Keyword(Keyword::SelfAxis));
        assert_eq!(
            single("descendant-or-self"),
            TokenKind::Keyword(Keyword::DescendantOrSelf)
        );
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(single("FOR"), TokenKind::NcName);
        assert_eq!(single("Return"), TokenKind::NcName);
    }

    #[test]
    fn test_keyword_prefix_is_a_name() {
        assert_eq!(single("format"), TokenKind::NcName);
        assert_eq!(single("fortune"), TokenKind::NcName);
    }

    #[test]
    fn test_qname_is_three_tokens() {
        let tokens = lex("xs:integer");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::NcName, TokenKind::Colon, TokenKind::NcName]
        );
        assert_eq!(tokens[2].column, 4);
    }

    #[test]
    fn test_non_ascii_names() {
        assert_eq!(single("\u{00e9}l\u{00e8}ve"), TokenKind::NcName);
        assert_eq!(single("\u{65e5}\u{672c}"), TokenKind::NcName);
        let tokens = lex("\u{00e9}t\u{00e9} x");
        assert_eq!(tokens[1].column, 5);
        assert_eq!(tokens[1].span.start, 6);
    }

    #[test]
    fn test_minus_needs_space_after_name() {
        assert_eq!(single("a-1"), TokenKind::NcName);
        let kinds: Vec<_> = lex("a - 1").iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::NcName, TokenKind::Minus, TokenKind::IntegerLiteral]
        );
    }
}
