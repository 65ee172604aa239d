//! Token definitions.
//!
//! A [`Token`] keeps the exact source text it was scanned from, delimiters
//! and escapes included. Logical values (the content of a string literal,
//! the body of a CDATA section) are derived on demand by the accessors
//! below, so concatenating token texts and the skipped gaps between them
//! always reproduces the input.

use std::fmt;

use xqc_util::Span;

use crate::keyword::Keyword;
use crate::unicode::is_ws;

/// The closed set of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input.
    Eof,
    /// Whitespace, only produced while whitespace is explicit.
    Ws,

    // ===== Names =====
    /// A non-colonized name that is not reserved.
    NcName,
    /// A reserved word.
    Keyword(Keyword),

    // ===== Literals =====
    /// `42`
    IntegerLiteral,
    /// `4.2`, `.5`, `4.`
    DecimalLiteral,
    /// `4.2e1`
    DoubleLiteral,
    /// `"a""b"`, `'x'`
    StringLiteral,

    // ===== Direct constructor content =====
    /// Character data between tags.
    ElementContent,
    /// Character data inside a quoted attribute value.
    AttributeContent,
    /// `&lt;` `&gt;` `&amp;` `&quot;` `&apos;`
    PredefinedEntityRef,
    /// `&#38;` or `&#x26;`
    CharRef,
    /// `""` inside a `"`-delimited attribute value.
    EscapeQuot,
    /// `''` inside a `'`-delimited attribute value.
    EscapeApos,
    /// `"`
    Quot,
    /// `'`
    Apos,

    // ===== XML constructs =====
    /// `<!-- ... -->`
    XmlComment,
    /// `<![CDATA[ ... ]]>`
    XmlCdata,
    /// `<?target ... ?>`
    XmlPi,
    /// `(#` with any whitespace that follows it.
    PragmaStart,
    /// Pragma content up to and including `#)`.
    PragmaEnd,
    /// `-->`
    XmlCommentEnd,
    /// `]]>`
    XmlCdataEnd,
    /// `?>`
    XmlPiEnd,

    // ===== Operators and delimiters =====
    /// `{`
    LCurly,
    /// `}`
    RCurly,
    /// `<`
    Lt,
    /// `</`
    EndTagStart,
    /// `<=`
    LtEq,
    /// `<<`
    Before,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `>>`
    After,
    /// `/`
    Slash,
    /// `//`
    DSlash,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `*`
    Star,
    /// `?`
    Question,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `.`
    SelfDot,
    /// `..`
    Parent,
    /// `|`
    Union,
    /// `@`
    At,
    /// `$`
    Dollar,
    /// `&=`
    AndEq,
    /// `|=`
    OrEq,
    /// `=`
    Eq,
    /// `!=`
    Neq,
}

impl TokenKind {
    /// Stable name used by tools, e.g. `IntegerLiteral` or `Keyword`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "Eof",
            TokenKind::Ws => "Ws",
            TokenKind::NcName => "NcName",
            TokenKind::Keyword(_) => "Keyword",
            TokenKind::IntegerLiteral => "IntegerLiteral",
            TokenKind::DecimalLiteral => "DecimalLiteral",
            TokenKind::DoubleLiteral => "DoubleLiteral",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::ElementContent => "ElementContent",
            TokenKind::AttributeContent => "AttributeContent",
            TokenKind::PredefinedEntityRef => "PredefinedEntityRef",
            TokenKind::CharRef => "CharRef",
            TokenKind::EscapeQuot => "EscapeQuot",
            TokenKind::EscapeApos => "EscapeApos",
            TokenKind::Quot => "Quot",
            TokenKind::Apos => "Apos",
            TokenKind::XmlComment => "XmlComment",
            TokenKind::XmlCdata => "XmlCdata",
            TokenKind::XmlPi => "XmlPi",
            TokenKind::PragmaStart => "PragmaStart",
            TokenKind::PragmaEnd => "PragmaEnd",
            TokenKind::XmlCommentEnd => "XmlCommentEnd",
            TokenKind::XmlCdataEnd => "XmlCdataEnd",
            TokenKind::XmlPiEnd => "XmlPiEnd",
            TokenKind::LCurly => "LCurly",
            TokenKind::RCurly => "RCurly",
            TokenKind::Lt => "Lt",
            TokenKind::EndTagStart => "EndTagStart",
            TokenKind::LtEq => "LtEq",
            TokenKind::Before => "Before",
            TokenKind::Gt => "Gt",
            TokenKind::GtEq => "GtEq",
            TokenKind::After => "After",
            TokenKind::Slash => "Slash",
            TokenKind::DSlash => "DSlash",
            TokenKind::Colon => "Colon",
            TokenKind::Comma => "Comma",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Star => "Star",
            TokenKind::Question => "Question",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::LBracket => "LBracket",
            TokenKind::RBracket => "RBracket",
            TokenKind::LParen => "LParen",
            TokenKind::RParen => "RParen",
            TokenKind::SelfDot => "SelfDot",
            TokenKind::Parent => "Parent",
            TokenKind::Union => "Union",
            TokenKind::At => "At",
            TokenKind::Dollar => "Dollar",
            TokenKind::AndEq => "AndEq",
            TokenKind::OrEq => "OrEq",
            TokenKind::Eq => "Eq",
            TokenKind::Neq => "Neq",
        }
    }

    /// Returns true for the numeric and string literal kinds.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral
                | TokenKind::DecimalLiteral
                | TokenKind::DoubleLiteral
                | TokenKind::StringLiteral
        )
    }

    /// Returns true for kinds that only occur inside direct constructors.
    pub fn is_constructor_content(self) -> bool {
        matches!(
            self,
            TokenKind::ElementContent
                | TokenKind::AttributeContent
                | TokenKind::PredefinedEntityRef
                | TokenKind::CharRef
                | TokenKind::EscapeQuot
                | TokenKind::EscapeApos
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(kw) => write!(f, "Keyword({kw})"),
            other => f.write_str(other.name()),
        }
    }
}

/// A piece of string literal content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StringSegment<'a> {
    /// Plain characters.
    Text(&'a str),
    /// A doubled delimiter standing for one delimiter character.
    EscapedDelimiter(char),
    /// Name of a predefined entity, e.g. `lt` for `&lt;`.
    EntityRef(&'a str),
    /// A numeric character reference, verbatim, e.g. `&#x20;`.
    CharRef(&'a str),
}

/// A scanned token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// What was recognised.
    pub kind: TokenKind,
    /// The exact source text.
    pub text: String,
    /// Line of the first character (1-based).
    pub line: u32,
    /// Column of the first character (1-based).
    pub column: u32,
    /// Byte range and position.
    pub span: Span,
}

impl Token {
    /// Creates a token; line and column are taken from `span`.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            line: span.line,
            column: span.column,
            span,
        }
    }

    /// Returns true for the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Content of a string literal: delimiters removed, doubled delimiters
    /// collapsed. References are kept verbatim.
    ///
    /// ```
    /// use xqc_lex::{Token, TokenKind};
    /// use xqc_util::Span;
    ///
    /// let token = Token::new(TokenKind::StringLiteral, r#""a""b""#, Span::DUMMY);
    /// assert_eq!(token.string_content().as_deref(), Some(r#"a"b"#));
    /// ```
    pub fn string_content(&self) -> Option<String> {
        let segments = self.string_segments()?;
        let mut content = String::with_capacity(self.text.len());
        for segment in segments {
            match segment {
                StringSegment::Text(text) | StringSegment::CharRef(text) => content.push_str(text),
                StringSegment::EscapedDelimiter(delim) => content.push(delim),
                StringSegment::EntityRef(name) => {
                    content.push('&');
                    content.push_str(name);
                    content.push(';');
                },
            }
        }
        Some(content)
    }

    /// Splits a string literal into text, escapes and references.
    ///
    /// ```
    /// use xqc_lex::{StringSegment, Token, TokenKind};
    /// use xqc_util::Span;
    ///
    /// let token = Token::new(TokenKind::StringLiteral, "'a&lt;&#10;'", Span::DUMMY);
    /// assert_eq!(
    ///     token.string_segments(),
    ///     Some(vec![
    ///         StringSegment::Text("a"),
    ///         StringSegment::EntityRef("lt"),
    ///         StringSegment::CharRef("&#10;"),
    ///     ])
    /// );
    /// ```
    pub fn string_segments(&self) -> Option<Vec<StringSegment<'_>>> {
        if self.kind != TokenKind::StringLiteral {
            return None;
        }
        let delim = self.text.chars().next()?;
        let inner = self
            .text
            .strip_prefix(delim)?
            .strip_suffix(delim)?;
        Some(split_segments(inner, delim))
    }

    /// Body of a comment, CDATA section, processing instruction or pragma,
    /// without its fixed delimiters.
    ///
    /// For a processing instruction this is the text after the target and
    /// its separating whitespace. For a pragma end token it is the content
    /// after the leading whitespace.
    pub fn construct_body(&self) -> Option<&str> {
        let text = self.text.as_str();
        match self.kind {
            TokenKind::XmlComment => text.strip_prefix("<!--")?.strip_suffix("-->"),
            TokenKind::XmlCdata => text.strip_prefix("<![CDATA[")?.strip_suffix("]]>"),
            TokenKind::XmlPi => {
                let target = self.pi_target()?;
                let rest = text.strip_prefix("<?")?.strip_prefix(target)?;
                Some(rest.strip_suffix("?>")?.trim_start_matches(is_ws))
            },
            TokenKind::PragmaEnd => Some(text.strip_suffix("#)")?.trim_start_matches(is_ws)),
            _ => None,
        }
    }

    /// Target name of a processing instruction.
    ///
    /// ```
    /// use xqc_lex::{Token, TokenKind};
    /// use xqc_util::Span;
    ///
    /// let pi = Token::new(TokenKind::XmlPi, "<?php echo 1 ?>", Span::DUMMY);
    /// assert_eq!(pi.pi_target(), Some("php"));
    /// assert_eq!(pi.construct_body(), Some("echo 1 "));
    /// ```
    pub fn pi_target(&self) -> Option<&str> {
        if self.kind != TokenKind::XmlPi {
            return None;
        }
        let rest = self.text.strip_prefix("<?")?;
        let end = rest
            .find(|c: char| is_ws(c) || c == '?')
            .unwrap_or(rest.len());
        Some(&rest[..end])
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {} {:?}", self.line, self.column, self.kind, self.text)
    }
}

fn split_segments(inner: &str, delim: char) -> Vec<StringSegment<'_>> {
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut rest = inner;
    let mut offset = 0;

    while let Some(c) = rest.chars().next() {
        let consumed = if c == delim && rest[c.len_utf8()..].starts_with(delim) {
            Some((StringSegment::EscapedDelimiter(delim), 2 * c.len_utf8()))
        } else if c == '&' {
            rest.find(';').map(|end| {
                let reference = &rest[..=end];
                if reference.starts_with("&#") {
                    (StringSegment::CharRef(reference), end + 1)
                } else {
                    (StringSegment::EntityRef(&rest[1..end]), end + 1)
                }
            })
        } else {
            None
        };

        match consumed {
            Some((segment, len)) => {
                if text_start < offset {
                    segments.push(StringSegment::Text(&inner[text_start..offset]));
                }
                segments.push(segment);
                offset += len;
                text_start = offset;
            },
            None => offset += c.len_utf8(),
        }
        rest = &inner[offset..];
    }

    if text_start < inner.len() {
        segments.push(StringSegment::Text(&inner[text_start..]));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(kind: TokenKind, text: &str) -> Token {
        Token::new(kind, text, Span::new(0, text.len(), 1, 1))
    }

    #[test]
    fn test_string_content_apos() {
        let t = tok(TokenKind::StringLiteral, "'it''s'");
        assert_eq!(t.string_content().as_deref(), Some("it's"));
    }

    #[test]
    fn test_string_content_other_delimiter_untouched() {
        let t = tok(TokenKind::StringLiteral, r#"'say "hi"'"#);
        assert_eq!(t.string_content().as_deref(), Some(r#"say "hi""#));
    }

    #[test]
    fn test_string_content_empty() {
        let t = tok(TokenKind::StringLiteral, "\"\"");
        assert_eq!(t.string_content().as_deref(), Some(""));
        assert_eq!(t.string_segments(), Some(vec![]));
    }

    #[test]
    fn test_string_content_keeps_references() {
        let t = tok(TokenKind::StringLiteral, "\"a&amp;b&#x41;\"");
        assert_eq!(t.string_content().as_deref(), Some("a&amp;b&#x41;"));
    }

    #[test]
    fn test_segments_mixed() {
        let t = tok(TokenKind::StringLiteral, "\"x\"\"&gt;y\"");
        assert_eq!(
            t.string_segments(),
            Some(vec![
                StringSegment::Text("x"),
                StringSegment::EscapedDelimiter('"'),
                StringSegment::EntityRef("gt"),
                StringSegment::Text("y"),
            ])
        );
    }

    #[test]
    fn test_accessors_reject_other_kinds() {
        let t = tok(TokenKind::NcName, "abc");
        assert_eq!(t.string_content(), None);
        assert_eq!(t.construct_body(), None);
        assert_eq!(t.pi_target(), None);
    }

    #[test]
    fn test_construct_bodies() {
        assert_eq!(
            tok(TokenKind::XmlComment, "<!-- hi - there -->").construct_body(),
            Some(" hi - there ")
        );
        assert_eq!(
            tok(TokenKind::XmlCdata, "<![CDATA[ ]x]]>").construct_body(),
            Some(" ]x")
        );
        assert_eq!(
            tok(TokenKind::PragmaEnd, " exist:timer #)").construct_body(),
            Some("exist:timer ")
        );
        assert_eq!(tok(TokenKind::PragmaEnd, "#)").construct_body(), Some(""));
    }

    #[test]
    fn test_pi_without_content() {
        let pi = tok(TokenKind::XmlPi, "<?target?>");
        assert_eq!(pi.pi_target(), Some("target"));
        assert_eq!(pi.construct_body(), Some(""));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::Keyword(Keyword::Return).to_string(), "Keyword(return)");
        assert_eq!(TokenKind::EndTagStart.to_string(), "EndTagStart");
        assert!(TokenKind::DoubleLiteral.is_literal());
        assert!(!TokenKind::NcName.is_literal());
        assert!(TokenKind::CharRef.is_constructor_content());
    }

    #[test]
    fn test_token_display() {
        let t = Token::new(TokenKind::NcName, "x", Span::new(4, 5, 2, 3));
        assert_eq!(t.to_string(), "2:3 NcName \"x\"");
    }
}
