//! Lexical analysis module for the front end.
//!
//! This module contains the tokenizer that turns source text into a lazy
//! stream of tokens for the parser. It handles:
//!
//! - Single and double character punctuation
//! - Integer and fractional literals
//! - Symbols and the reserved words `if` and `def`
//! - Raw text scanning for quoted strings and extern call bodies
//! - Line tracking for error reporting

pub mod lexer;
pub mod tokens;
