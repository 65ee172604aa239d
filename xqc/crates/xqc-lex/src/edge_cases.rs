//! Edge case tests for xqc-lex
