//! Lexer module.
//!
//! The recognizers are split by the kind of input they scan:
//! - `core` - `Lexer` struct, driver and dispatch order
//! - `comment` - expression comments, pragmas and whitespace
//! - `content` - element and attribute character data
//! - `name` - NCNames and keywords
//! - `number` - numeric literals and the dot tokens
//! - `operator` - operators and punctuation
//! - `string` - string literals and references
//! - `xml` - XML comments, CDATA, processing instructions and tags

mod comment;
mod content;
mod core;
mod name;
mod number;
mod operator;
mod string;
mod xml;

pub use core::Lexer;
