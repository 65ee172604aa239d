//! xqc-util - Foundation types for the xqc query front end
//!
//! This crate holds the pieces every phase of the front end agrees on:
//!
//! - [`span`] - byte ranges with line/column information, and [`SourceFile`]
//!   for turning those back into source lines
//! - [`diagnostic`] - the diagnostic model and the [`Handler`] that collects
//!   diagnostics for a session
//!
//! The [`Handler`] doubles as the opaque "context" passed into the scanner:
//! the scanner reports every fatal lexical error into it, and higher layers
//! decide how to render or aggregate what was collected.
//!
//! # Example
//!
//! ```
//! use xqc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '#'")
//!     .code(DiagnosticCode::E_LEXER_NO_VIABLE_TOKEN)
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, SourceSnippet};
pub use span::{SourceFile, Span};
