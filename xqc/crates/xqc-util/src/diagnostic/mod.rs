//! Diagnostic module - Error reporting infrastructure.
//!
//! Diagnostics are collected by a [`Handler`] during a session and rendered
//! by whoever owns the session, typically against the [`SourceFile`] they
//! point into.
//!
//! # Examples
//!
//! ```
//! use xqc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use xqc_util::span::{SourceFile, Span};
//!
//! let file = SourceFile::new("q.xq", "1 + #");
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '#'")
//!     .code(DiagnosticCode::E_LEXER_NO_VIABLE_TOKEN)
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! let rendered = handler.take_diagnostics()[0].render(&file);
//! assert!(rendered.starts_with("error[E1001]: unexpected character '#'"));
//! assert!(rendered.contains("--> q.xq:1:5"));
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::span::{SourceFile, Span};
use std::cell::RefCell;
use std::fmt;

/// A lexical error message with its location
///
/// Every diagnostic is an error: the scanner stops at the first one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a diagnostic without code or help
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            code: None,
            helps: Vec::new(),
        }
    }

    /// Render for a terminal
    ///
    /// The layout is the familiar `error[CODE]: message` header, a
    /// `--> file:line:col` locator, the offending line with a caret
    /// underline, and the helps.
    pub fn render(&self, file: &SourceFile) -> String {
        let mut out = match self.code {
            Some(code) => format!("error[{}]: {}\n", code, self.message),
            None => format!("error: {}\n", self.message),
        };

        if self.span != Span::DUMMY {
            out.push_str(&format!(
                "  --> {}:{}:{}\n",
                file.name(),
                self.span.line,
                self.span.column
            ));
            if let Some(snippet) = SourceSnippet::from_span(file, self.span) {
                out.push_str(&snippet.format());
                out.push('\n');
            }
        }

        for help in &self.helps {
            out.push_str(&format!("  = help: {help}\n"));
        }
        out
    }
}

/// Collects diagnostics for one session
///
/// Methods take `&self` so that the handler can be shared by reference
/// with every phase of a session.
#[derive(Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create an empty handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Returns true if any error was recorded
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    /// Number of recorded errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Remove and return everything recorded so far
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("diagnostics", &self.diagnostics.borrow().len())
            .finish()
    }
}
