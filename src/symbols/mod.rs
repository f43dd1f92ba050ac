//! Lexically scoped symbol tables used while parsing.
//!
//! One `SymbolTable` exists per block or function body; the parser keeps
//! them on a `SymbolTableStack`, innermost last, and resolves names from
//! the inside out.

pub mod symbol_table;

#[cfg(test)]
mod tests;
