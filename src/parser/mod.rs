//! Parser module for building the IR tree.
//!
//! This module contains the recursive-descent parser that pulls tokens
//! from the tokenizer and builds a `Module`. It handles:
//!
//! - Statement dispatch (blocks, extern calls, `if`, `def`, assignments
//!   and calls) through a lookup table keyed by the leading token
//! - Expression parsing by precedence climbing over a binding power table
//! - Name resolution through a stack of symbol tables
//! - Function definitions, registered into the enclosing module
//!
//! Parsing stops at the first error, which is returned to the caller.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
