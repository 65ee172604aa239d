//! Comments, pragmas and whitespace.
//!
//! ```text
//! Comment     ::= '(:' (CommentContents | Comment)* ':)'
//! PragmaStart ::= '(#' S?
//! PragmaEnd   ::= (S Char*?)? '#)'
//! ```

use crate::error::{ConstructKind, Result};
use crate::token::TokenKind;
use crate::unicode::is_ws;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a possibly nested `(: ... :)` comment.
    ///
    /// Nesting is tracked with a counter, so depth costs no stack.
    pub(crate) fn skip_expr_comment(&mut self) -> Result<()> {
        self.cursor.eat_str("(:");
        let mut depth = 1usize;
        while depth > 0 {
            if self.cursor.eat_str("(:") {
                depth += 1;
            } else if self.cursor.eat_str(":)") {
                depth -= 1;
            } else if self.cursor.advance().is_none() {
                return Err(self.unterminated(ConstructKind::ExprComment, self.token_start));
            }
        }
        Ok(())
    }

    /// Lexes `(#` and the whitespace after it.
    pub(crate) fn lex_pragma_start(&mut self) -> TokenKind {
        self.cursor.eat_str("(#");
        self.cursor.eat_while(is_ws);
        TokenKind::PragmaStart
    }

    /// Lexes the pragma content and its `#)` terminator. Called inside a
    /// pragma on whitespace or `#`.
    pub(crate) fn lex_pragma_end(&mut self) -> Result<TokenKind> {
        if self.cursor.eat_str("#)") {
            return Ok(TokenKind::PragmaEnd);
        }
        if self.cursor.at('#') {
            return Err(self.no_viable_token('#'));
        }
        self.cursor.eat_while(is_ws);
        if !self.cursor.eat_until("#)") {
            return Err(self.unterminated(
                ConstructKind::Pragma,
                self.pragma_start_or_token_start(),
            ));
        }
        self.cursor.eat_str("#)");
        Ok(TokenKind::PragmaEnd)
    }

    /// Lexes a whitespace run. Returns `None` when whitespace is skipped.
    pub(crate) fn lex_whitespace(&mut self) -> Option<TokenKind> {
        self.cursor.eat_while(is_ws);
        self.state.ws_explicit().then_some(TokenKind::Ws)
    }
}
