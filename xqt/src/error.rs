//! Error handling module for the xqt CLI.
//!
//! Errors of the tool itself. Lexical errors found in checked files are
//! reported as diagnostics and only surface here as a failure count.

use std::path::PathBuf;

use thiserror::Error;
use xqc_lex::LexError;

/// Main error type for the xqt CLI application.
#[derive(Error, Debug)]
pub enum XqtError {
    /// Error when the configuration cannot be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be read.
    #[error("Cannot read {}: {source}", .path.display())]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A file could not be tokenized.
    #[error("Lexical error: {0}")]
    Lex(#[from] LexError),

    /// `check` found files with lexical errors.
    #[error("{0} file(s) failed to check")]
    CheckFailed(usize),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using XqtError.
pub type Result<T> = std::result::Result<T, XqtError>;

#[cfg(test)]
mod tests {
    use super::*;
    use xqc_util::Span;

    #[test]
    fn test_config_error_display() {
        let err = XqtError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_validation_error_display() {
        let err = XqtError::Validation("unknown format: xml".to_string());
        assert_eq!(err.to_string(), "Validation error: unknown format: xml");
    }

    #[test]
    fn test_read_error_display() {
        let err = XqtError::Read {
            path: PathBuf::from("q.xq"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Cannot read q.xq: not found");
    }

    #[test]
    fn test_check_failed_display() {
        assert_eq!(
            XqtError::CheckFailed(2).to_string(),
            "2 file(s) failed to check"
        );
    }

    #[test]
    fn test_lex_error_conversion() {
        let lex_err = LexError::NoViableToken {
            found: '!',
            span: Span::new(0, 1, 1, 1),
        };
        let xqt_err: XqtError = lex_err.into();
        assert!(matches!(xqt_err, XqtError::Lex(_)));
        assert!(xqt_err.to_string().starts_with("Lexical error: "));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let xqt_err: XqtError = io_err.into();
        assert!(matches!(xqt_err, XqtError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let xqt_err: XqtError = json_err.into();
        assert!(matches!(xqt_err, XqtError::Json(_)));
    }
}
