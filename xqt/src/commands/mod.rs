//! Command modules for the xqt CLI.
//!
//! Each subcommand is implemented in its own file and driven through the
//! [`traits::Command`] trait.

pub mod common;
pub mod traits;

pub mod check;
pub mod tokens;

// Re-export command types
pub use check::{CheckArgs, CheckCommand};
pub use tokens::{TokensArgs, TokensCommand};
