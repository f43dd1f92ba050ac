//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn position(offset: usize, line: u32, character: Option<char>) -> Position {
    Position::new(offset, line, character, Rc::new("test.bish".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "!".to_string(),
        },
        position(10, 1, Some('!')),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: "}".to_string(),
            message: "Expected symbol.".to_string(),
        },
        position(42, 3, Some('}')),
    );

    assert_eq!(error.get_position().offset, 42);
    assert_eq!(error.get_position().line, 3);
}

#[test]
fn test_error_display_names_character_and_line() {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: "3".to_string(),
            message: "Expected statement to end with ';'".to_string(),
        },
        position(7, 2, Some('3')),
    );

    assert_eq!(
        error.to_string(),
        "Parsing error: Expected statement to end with ';' (found \"3\") near character '3', line 2"
    );
}

#[test]
fn test_error_display_at_end_of_input() {
    let error = Error::new(
        ErrorImpl::UnterminatedInput {
            construct: "string literal".to_string(),
        },
        position(5, 1, None),
    );

    assert_eq!(
        error.to_string(),
        "Parsing error: unterminated string literal near end of input, line 1"
    );
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        position(0, 1, Some('9')),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_function_already_declared_error() {
    let error = Error::new(
        ErrorImpl::FunctionAlreadyDeclared {
            function: "f".to_string(),
        },
        position(0, 1, Some('f')),
    );

    assert_eq!(error.get_error_name(), "FunctionAlreadyDeclared");
    assert_eq!(error.get_tip().to_string(), "Function `f` already declared");
}

#[test]
fn test_file_read_error() {
    let error = Error::new(
        ErrorImpl::FileReadError {
            path: "missing.bish".to_string(),
            message: "No such file or directory".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "FileReadError");
    assert_eq!(
        error.get_tip().to_string(),
        "Failed to open file at missing.bish"
    );
}

#[test]
fn test_invalid_operator_error() {
    let error = Error::new(
        ErrorImpl::InvalidOperator {
            token: ";".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "InvalidOperator");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "!".to_string(),
        },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: "}".to_string(),
            message: "Expected symbol.".to_string(),
        },
        Position::null(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Unexpected token: `}`, Expected symbol."),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(
        ErrorImpl::NestingTooDeep { limit: 128 },
        position(300, 1, Some('(')),
    );

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(
        error.to_string(),
        "Parsing error: nesting deeper than 128 levels near character '(', line 1"
    );
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
