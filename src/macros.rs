//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance, with or without a payload
//! - `MK_LEXEME!` - Creates a fixed-width lexeme for single and double
//!   character punctuation
//!
//! These macros reduce boilerplate in the tokenizer.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let semi = MK_TOKEN!(TokenKind::Semicolon);
/// let num = MK_TOKEN!(TokenKind::Int, "42");
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr) => {
        Token::new($kind)
    };
    ($kind:expr, $value:expr) => {
        Token::with_value($kind, $value)
    };
}

/// Creates a lexeme for punctuation of a known width starting at `$start`.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$start` - Byte offset the token begins at
/// * `$width` - Number of bytes the token covers
/// * `$lineno` - Line the token sits on
#[macro_export]
macro_rules! MK_LEXEME {
    ($kind:expr, $start:expr, $width:expr, $lineno:expr) => {
        Lexeme {
            token: $crate::MK_TOKEN!($kind),
            start: $start,
            end: $start + $width,
            lineno: $lineno,
        }
    };
}
