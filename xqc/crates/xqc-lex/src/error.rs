//! Lexical errors.

use std::fmt;

use thiserror::Error;
use xqc_util::{DiagnosticCode, Span};

/// Constructs that can run into end of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstructKind {
    /// `(: ... :)`
    ExprComment,
    /// `<!-- ... -->`
    XmlComment,
    /// `<![CDATA[ ... ]]>`
    Cdata,
    /// `<? ... ?>`
    ProcessingInstruction,
    /// `(# ... #)`
    Pragma,
    /// `"..."` or `'...'`
    StringLiteral,
}

impl ConstructKind {
    /// What closes the construct, for help messages.
    pub const fn terminator(self) -> &'static str {
        match self {
            ConstructKind::ExprComment => ":)",
            ConstructKind::XmlComment => "-->",
            ConstructKind::Cdata => "]]>",
            ConstructKind::ProcessingInstruction => "?>",
            ConstructKind::Pragma => "#)",
            ConstructKind::StringLiteral => "the opening quote",
        }
    }
}

impl fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConstructKind::ExprComment => "comment",
            ConstructKind::XmlComment => "XML comment",
            ConstructKind::Cdata => "CDATA section",
            ConstructKind::ProcessingInstruction => "processing instruction",
            ConstructKind::Pragma => "pragma",
            ConstructKind::StringLiteral => "string literal",
        })
    }
}

/// A fatal lexical error.
///
/// Every variant carries the span of the offending input; line and column
/// are those of its first character.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// No enabled rule accepts the input at this position.
    #[error("unexpected character {found:?} at {}:{}", .span.line, .span.column)]
    NoViableToken {
        /// The character no rule accepts.
        found: char,
        /// Where it is.
        span: Span,
    },

    /// End of input inside a construct; the span runs from its opening
    /// delimiter to the end of input.
    #[error("unterminated {kind} starting at {}:{}", .span.line, .span.column)]
    UnterminatedConstruct {
        /// What was left open.
        kind: ConstructKind,
        /// From the opening delimiter to end of input.
        span: Span,
    },

    /// An exponent marker that is not followed by digits.
    #[error("malformed number '{text}' at {}:{}: missing exponent digits", .span.line, .span.column)]
    MalformedNumber {
        /// The literal up to the point of failure.
        text: String,
        /// Where the literal starts.
        span: Span,
    },

    /// `&` followed by neither a predefined entity nor a character
    /// reference.
    #[error("malformed entity or character reference at {}:{}", .span.line, .span.column)]
    MalformedEntityOrCharRef {
        /// From the `&` to where scanning stopped.
        span: Span,
    },
}

impl LexError {
    /// Where the error is.
    pub fn span(&self) -> Span {
        match self {
            LexError::NoViableToken { span, .. }
            | LexError::UnterminatedConstruct { span, .. }
            | LexError::MalformedNumber { span, .. }
            | LexError::MalformedEntityOrCharRef { span } => *span,
        }
    }

    /// Line of the error (1-based).
    pub fn line(&self) -> u32 {
        self.span().line
    }

    /// Column of the error (1-based).
    pub fn column(&self) -> u32 {
        self.span().column
    }

    /// Diagnostic code reported for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::NoViableToken { .. } => DiagnosticCode::E_LEXER_NO_VIABLE_TOKEN,
            LexError::UnterminatedConstruct { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_CONSTRUCT,
            LexError::MalformedNumber { .. } => DiagnosticCode::E_LEXER_MALFORMED_NUMBER,
            LexError::MalformedEntityOrCharRef { .. } => DiagnosticCode::E_LEXER_MALFORMED_REFERENCE,
        }
    }

    /// Headline without the position, for diagnostics that print the
    /// position separately.
    pub fn message(&self) -> String {
        match self {
            LexError::NoViableToken { found, .. } => format!("unexpected character {found:?}"),
            LexError::UnterminatedConstruct { kind, .. } => format!("unterminated {kind}"),
            LexError::MalformedNumber { text, .. } => {
                format!("malformed number '{text}': missing exponent digits")
            },
            LexError::MalformedEntityOrCharRef { .. } => {
                "malformed entity or character reference".to_string()
            },
        }
    }

    /// A suggestion for fixing the input, if there is an obvious one.
    pub fn help(&self) -> Option<String> {
        match self {
            LexError::UnterminatedConstruct { kind, .. } => {
                Some(format!("close the {kind} with `{}`", kind.terminator()))
            },
            LexError::MalformedEntityOrCharRef { .. } => Some(
                "use one of &lt; &gt; &amp; &quot; &apos;, or &#N; / &#xH; for a character"
                    .to_string(),
            ),
            LexError::MalformedNumber { .. } => {
                Some("an exponent needs at least one digit, e.g. `1e0`".to_string())
            },
            LexError::NoViableToken { .. } => None,
        }
    }
}

/// Result type for scanning.
pub type Result<T> = std::result::Result<T, LexError>;
