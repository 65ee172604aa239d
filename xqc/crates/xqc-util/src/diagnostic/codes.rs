//! Diagnostic codes for categorizing front-end errors.
//!
//! Codes are grouped by phase: `E1xxx` belongs to the lexer.
//!
//! # Examples
//!
//! ```
//! use xqc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_NO_VIABLE_TOKEN;
//! assert_eq!(code.as_str(), "E1001");
//! assert_eq!(code.to_string(), "E1001");
//! ```

/// Stable identifier attached to a diagnostic
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// Category letter, `E` for errors
    pub prefix: &'static str,
    /// Numeric part, rendered zero-padded to four digits
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Format as `E1001`
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E1001-E1999)
    // =========================================================================

    /// No recognizer accepts the input at the current position
    pub const E_LEXER_NO_VIABLE_TOKEN: Self = Self::new("E", 1001);
    /// End of input inside a comment, CDATA section, PI, pragma or string
    pub const E_LEXER_UNTERMINATED_CONSTRUCT: Self = Self::new("E", 1002);
    /// Exponent marker without exponent digits
    pub const E_LEXER_MALFORMED_NUMBER: Self = Self::new("E", 1003);
    /// `&` that starts neither a predefined entity nor a character reference
    pub const E_LEXER_MALFORMED_REFERENCE: Self = Self::new("E", 1004);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
