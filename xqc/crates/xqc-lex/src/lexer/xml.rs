//! XML constructs and tag punctuation.
//!
//! ```text
//! XmlComment ::= '<!--' ((Char - '-') | ('-' (Char - '-')))* '-->'
//! XmlCdata   ::= '<![CDATA[' (Char* - (Char* ']]>' Char*)) ']]>'
//! XmlPi      ::= '<?' NCName (S (Char* - (Char* '?>' Char*)))? '?>'
//! ```
//!
//! Each construct is one token, delimiters included. The body of a CDATA
//! section or processing instruction ends at the first terminator; a `]`
//! or `?` that does not start one is plain content.

use crate::error::{ConstructKind, Result};
use crate::token::TokenKind;
use crate::unicode::{is_name_char, is_name_start, is_ws};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `<!-- ... -->`.
    pub(crate) fn lex_xml_comment(&mut self) -> Result<TokenKind> {
        self.cursor.eat_str("<!--");
        loop {
            if self.cursor.eat_str("-->") {
                return Ok(TokenKind::XmlComment);
            }
            if self.cursor.starts_with("--") {
                // `--` may only appear as part of the terminator
                self.cursor.advance();
                return Err(self.no_viable_token('-'));
            }
            if self.cursor.advance().is_none() {
                return Err(self.unterminated(ConstructKind::XmlComment, self.token_start));
            }
        }
    }

    /// Lexes `<![CDATA[ ... ]]>`.
    pub(crate) fn lex_cdata(&mut self) -> Result<TokenKind> {
        self.cursor.eat_str("<![CDATA[");
        if !self.cursor.eat_until("]]>") {
            return Err(self.unterminated(ConstructKind::Cdata, self.token_start));
        }
        self.cursor.eat_str("]]>");
        Ok(TokenKind::XmlCdata)
    }

    /// Lexes `<?target ... ?>`. The caller has checked that a name start
    /// character follows `<?`.
    fn lex_processing_instruction(&mut self) -> Result<TokenKind> {
        self.cursor.eat_str("<?");
        self.cursor.advance();
        self.cursor.eat_while(is_name_char);

        if self.cursor.eat_str("?>") {
            return Ok(TokenKind::XmlPi);
        }
        match self.cursor.current() {
            None => Err(self.unterminated(ConstructKind::ProcessingInstruction, self.token_start)),
            Some(c) if is_ws(c) => {
                self.cursor.eat_while(is_ws);
                if !self.cursor.eat_until("?>") {
                    return Err(self.unterminated(ConstructKind::ProcessingInstruction, self.token_start));
                }
                self.cursor.eat_str("?>");
                Ok(TokenKind::XmlPi)
            },
            Some(c) => Err(self.no_viable_token(c)),
        }
    }

    /// Lexes the tokens that start with `<` and are longer than one
    /// character, comments and CDATA aside.
    pub(crate) fn lex_angle(&mut self) -> Result<Option<TokenKind>> {
        if self.cursor.la(2) == Some('?') && self.cursor.la(3).is_some_and(is_name_start) {
            return self.lex_processing_instruction().map(Some);
        }
        let kind = if self.cursor.eat_str("</") {
            TokenKind::EndTagStart
        } else if self.cursor.eat_str("<<") {
            TokenKind::Before
        } else if self.cursor.eat_str("<=") {
            TokenKind::LtEq
        } else {
            return Ok(None);
        };
        Ok(Some(kind))
    }

    /// Lexes a construct terminator or `>>` outside constructor content.
    pub(crate) fn lex_terminator(&mut self) -> Option<TokenKind> {
        const TERMINATORS: [(&str, TokenKind); 4] = [
            ("-->", TokenKind::XmlCommentEnd),
            ("]]>", TokenKind::XmlCdataEnd),
            ("?>", TokenKind::XmlPiEnd),
            (">>", TokenKind::After),
        ];
        TERMINATORS
            .iter()
            .find(|(text, _)| self.cursor.eat_str(text))
            .map(|&(_, kind)| kind)
    }
}
