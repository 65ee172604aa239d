//! Common types and utilities for xqt commands.
//!
//! This module provides the output format, source loading and diagnostic
//! rendering shared by `tokens` and `check`.

use std::io::Read;
use std::path::Path;

use xqc_util::{Handler, SourceFile};

use crate::error::{Result, XqtError};

// ============================================================================
// Output Format
// ============================================================================

/// Supported formats for token listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `line:column KIND "text"` line per token
    Text,
    /// A JSON array of token objects
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Parse a format name, failing with a validation error.
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| {
            XqtError::Validation(format!("{}: {}", error_messages::UNKNOWN_FORMAT, s))
        })
    }
}

// ============================================================================
// Sources
// ============================================================================

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// A loaded query.
#[derive(Debug, Clone)]
pub struct Source {
    /// Name used in diagnostics.
    pub name: String,
    /// Query text.
    pub text: String,
}

/// Read a query from `path`, or from standard input for `-`.
pub fn read_source(path: &Path) -> Result<Source> {
    if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| XqtError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        return Ok(Source {
            name: "<stdin>".to_string(),
            text,
        });
    }

    let text = std::fs::read_to_string(path).map_err(|source| XqtError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Source {
        name: path.display().to_string(),
        text,
    })
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Render every diagnostic collected by `handler` against `source`.
pub fn render_diagnostics(source: &Source, handler: &Handler) -> String {
    let file = SourceFile::new(source.name.as_str(), source.text.as_str());
    handler
        .take_diagnostics()
        .iter()
        .map(|diagnostic| diagnostic.render(&file))
        .collect()
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format";

    /// Error when the job count is zero.
    pub const ZERO_JOBS: &str = "Number of jobs must be at least 1";
}
