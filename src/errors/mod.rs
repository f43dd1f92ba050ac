//! Error types and error handling for the front end.
//!
//! This module defines the error value every fallible parsing operation
//! returns. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for tokenizing, parsing and file reading
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
