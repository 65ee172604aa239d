//! xqc-lex - Lexical Analyzer for XQuery
//!
//! This crate turns XQuery/XPath query text into a stream of tokens for a
//! recursive-descent parser. Besides the expression language it scans the
//! XML-like parts of a query: direct element and attribute constructors,
//! XML comments, CDATA sections, processing instructions and pragmas.
//!
//! # Example Usage
//!
//! ```
//! use xqc_lex::{Keyword, Lexer, TokenKind};
//! use xqc_util::Handler;
//!
//! let handler = Handler::new();
//! let tokens = Lexer::new("for $x in (1, 2.5) return $x", &handler).tokenize()?;
//!
//! assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::For));
//! assert_eq!(tokens[1].kind, TokenKind::Dollar);
//! assert_eq!(tokens[7].kind, TokenKind::DecimalLiteral);
//! assert_eq!(tokens[7].text, "2.5");
//! # Ok::<(), xqc_lex::LexError>(())
//! ```
//!
//! # Modes
//!
//! What a character means depends on where the parser is. Inside element
//! content `1 + 1` is character data, and inside an attribute value the
//! delimiter quote closes the value. The parser switches the scanner
//! between modes with the setters on [`Lexer`]; the scanner switches
//! itself back on `{`, `<` and `</` (see [`ScanState::on_token`]).
//!
//! ```
//! use xqc_lex::{Lexer, TokenKind};
//! use xqc_util::Handler;
//!
//! let handler = Handler::new();
//! let mut lexer = Lexer::new("1 + 1</p>", &handler);
//! lexer.set_element_content(true);
//!
//! assert_eq!(lexer.next_token()?.kind, TokenKind::ElementContent);
//! assert_eq!(lexer.next_token()?.kind, TokenKind::EndTagStart);
//! assert!(!lexer.state().in_element_content());
//! # Ok::<(), xqc_lex::LexError>(())
//! ```
//!
//! # Errors
//!
//! Lexical errors are fatal. Each one is returned as a [`LexError`] and
//! also reported to the [`Handler`](xqc_util::Handler) as a diagnostic, so
//! callers can render it against the source with a caret snippet.
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds and the token value
//! - [`keyword`] - Reserved words
//! - [`lexer`] - Main lexer implementation
//! - [`state`] - Mode flags
//! - [`cursor`] - Character cursor with lookahead and backtracking
//! - [`unicode`] - XML 1.0 character classes
//! - [`error`] - Lexical errors

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod keyword;
pub mod lexer;
pub mod state;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{ConstructKind, LexError, Result};
pub use keyword::Keyword;
pub use lexer::Lexer;
pub use state::{AttrDelim, ScanState};
pub use token::{StringSegment, Token, TokenKind};

static_assertions::assert_impl_all!(Token: Send, Sync, Clone);
static_assertions::assert_impl_all!(LexError: Send, Sync, Clone, std::error::Error);

#[cfg(test)]
mod tests {
    use super::*;
    use xqc_util::Handler;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let handler = Handler::new();
        Lexer::new(source, &handler)
            .map(|t| t.map(|t| t.kind))
            .collect::<Result<_>>()
            .unwrap_or_else(|err| panic!("{source:?}: {err}"))
    }

    fn expect(lexer: &mut Lexer<'_>, kind: TokenKind, text: &str) {
        let token = lexer
            .next_token()
            .unwrap_or_else(|err| panic!("expected {kind}: {err}"));
        assert_eq!((token.kind, token.text.as_str()), (kind, text));
    }

    #[test]
    fn test_flwor_query() {
        let source = r#"
            (: Titles of recent books :)
            for $b in doc("books.xml")//book
            where $b/@year >= 2000
            order by $b/title
            return string($b/title)
        "#;
        let tokens = kinds(source);

        assert!(tokens.contains(&TokenKind::Keyword(Keyword::For)));
        assert!(tokens.contains(&TokenKind::Keyword(Keyword::Where)));
        assert!(tokens.contains(&TokenKind::Keyword(Keyword::Order)));
        assert!(tokens.contains(&TokenKind::Keyword(Keyword::Return)));
        assert!(tokens.contains(&TokenKind::StringLiteral));
        assert!(tokens.contains(&TokenKind::DSlash));
        assert!(tokens.contains(&TokenKind::GtEq));
        assert_eq!(tokens[0], TokenKind::Keyword(Keyword::For));
    }

    #[test]
    fn test_prolog() {
        let source = r#"
            xquery version "3.1";
            declare namespace f = "urn:f";
            declare variable $n as xs:integer := 3;
            declare function f:twice($x) { $x * 2 };
            f:twice($n)
        "#;
        let tokens = kinds(source);

        assert_eq!(tokens[0], TokenKind::Keyword(Keyword::Xquery));
        assert!(tokens.contains(&TokenKind::Keyword(Keyword::Declare)));
        assert!(tokens.contains(&TokenKind::Keyword(Keyword::Namespace)));
        assert!(tokens.contains(&TokenKind::Keyword(Keyword::Function)));
        assert!(tokens.contains(&TokenKind::Semicolon));
        assert!(tokens.contains(&TokenKind::Star));
    }

    #[test]
    fn test_update_expression() {
        let tokens = kinds("insert node <n/> into $doc/root");
        assert_eq!(tokens[0], TokenKind::Keyword(Keyword::Insert));
        assert_eq!(tokens[1], TokenKind::Keyword(Keyword::Node));
        assert!(tokens.contains(&TokenKind::Keyword(Keyword::Into)));
    }

    /// Drives the scanner through a direct constructor the way a parser
    /// would.
    #[test]
    fn test_direct_constructor() {
        let handler = Handler::new();
        let mut lexer = Lexer::new(r#"<a href="x{1}y">t &amp; {$v}</a>"#, &handler);

        expect(&mut lexer, TokenKind::Lt, "<");
        expect(&mut lexer, TokenKind::NcName, "a");
        expect(&mut lexer, TokenKind::NcName, "href");
        expect(&mut lexer, TokenKind::Eq, "=");

        lexer.set_parse_string_literals(false);
        expect(&mut lexer, TokenKind::Quot, "\"");
        lexer.enter_attribute_content(AttrDelim::Quot);
        expect(&mut lexer, TokenKind::AttributeContent, "x");
        expect(&mut lexer, TokenKind::LCurly, "{");
        assert!(!lexer.state().in_attribute_content());

        lexer.set_parse_string_literals(true);
        expect(&mut lexer, TokenKind::IntegerLiteral, "1");
        expect(&mut lexer, TokenKind::RCurly, "}");

        lexer.enter_attribute_content(AttrDelim::Quot);
        lexer.set_parse_string_literals(false);
        expect(&mut lexer, TokenKind::AttributeContent, "y");
        expect(&mut lexer, TokenKind::Quot, "\"");
        lexer.leave_attribute_content();
        lexer.set_parse_string_literals(true);
        expect(&mut lexer, TokenKind::Gt, ">");

        lexer.set_element_content(true);
        expect(&mut lexer, TokenKind::ElementContent, "t ");
        expect(&mut lexer, TokenKind::PredefinedEntityRef, "&amp;");
        expect(&mut lexer, TokenKind::ElementContent, " ");
        expect(&mut lexer, TokenKind::LCurly, "{");
        expect(&mut lexer, TokenKind::Dollar, "$");
        expect(&mut lexer, TokenKind::NcName, "v");
        expect(&mut lexer, TokenKind::RCurly, "}");

        lexer.set_element_content(true);
        expect(&mut lexer, TokenKind::EndTagStart, "</");
        expect(&mut lexer, TokenKind::NcName, "a");
        expect(&mut lexer, TokenKind::Gt, ">");
        assert!(lexer.next_token().unwrap().is_eof());
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_string_literal_segments() {
        let handler = Handler::new();
        let tokens = Lexer::new(r#""a&lt;b""c""#, &handler).tokenize().unwrap();
        let segments = tokens[0].string_segments().unwrap();
        assert_eq!(
            segments,
            vec![
                StringSegment::Text("a"),
                StringSegment::EntityRef("lt"),
                StringSegment::Text("b"),
                StringSegment::EscapedDelimiter('"'),
                StringSegment::Text("c"),
            ]
        );
    }

    #[test]
    fn test_token_texts_cover_source() {
        let source = "let $x := <e a='1'>{ 1.5e0 }</e> (: c :) return $x";
        let handler = Handler::new();
        for token in Lexer::new(source, &handler) {
            let token = token.unwrap();
            assert_eq!(&source[token.span.start..token.span.end], token.text);
        }
    }
}
