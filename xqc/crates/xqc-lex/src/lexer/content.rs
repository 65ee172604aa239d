//! Character data of direct constructors.
//!
//! ```text
//! ElementContent   ::= [^{}<&]+
//! AttributeContent ::= [^{}<&"]+   (quote-delimited value)
//!                    | [^{}<&']+   (apostrophe-delimited value)
//! EscapeQuot       ::= '""'
//! EscapeApos       ::= "''"
//! ```
//!
//! Runs stop at anything that needs its own token: enclosed expressions,
//! tags, references and the closing delimiter.

use crate::state::AttrDelim;
use crate::token::TokenKind;
use crate::Lexer;

#[inline]
fn ends_content_run(c: char) -> bool {
    matches!(c, '{' | '}' | '<' | '&')
}

impl<'a> Lexer<'a> {
    /// Lexes a doubled delimiter inside an attribute value of the same
    /// delimiter.
    pub(crate) fn lex_attribute_escape(&mut self) -> Option<TokenKind> {
        let delim = self.state.attr_delim()?;
        let quote = delim.as_char();
        if self.cursor.la(1) != Some(quote) || self.cursor.la(2) != Some(quote) {
            return None;
        }
        self.cursor.advance();
        self.cursor.advance();
        Some(match delim {
            AttrDelim::Quot => TokenKind::EscapeQuot,
            AttrDelim::Apos => TokenKind::EscapeApos,
        })
    }

    /// Lexes a run of attribute value characters.
    pub(crate) fn lex_attribute_content(&mut self) -> Option<TokenKind> {
        let quote = self.state.attr_delim()?.as_char();
        let run = self
            .cursor
            .eat_while(|c| c != quote && !ends_content_run(c));
        (run > 0).then_some(TokenKind::AttributeContent)
    }

    /// Lexes a run of element character data.
    pub(crate) fn lex_element_content(&mut self) -> Option<TokenKind> {
        let run = self.cursor.eat_while(|c| !ends_content_run(c));
        (run > 0).then_some(TokenKind::ElementContent)
    }
}
