#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};

pub mod errors;
pub mod ir;
pub mod lexer;
pub mod logger;
pub mod macros;
pub mod parser;
pub mod symbols;

extern crate regex;

pub use parser::parser::{parse_file, parse_source, parse_str, read_source};

/// A location in the caller's source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    /// Byte offset of the offending character
    pub offset: usize,
    /// 1-based line number
    pub line: u32,
    /// The character found there, `None` at the end of the text
    pub character: Option<char>,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(offset: usize, line: u32, character: Option<char>, file: Rc<String>) -> Self {
        Position {
            offset,
            line,
            character,
            file,
        }
    }

    pub fn null() -> Self {
        Position::new(0, 1, None, Rc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.character {
            Some(c) => write!(f, "character '{}', line {}", c, self.line),
            None => write!(f, "end of input, line {}", self.line),
        }
    }
}

/// Finds the line containing `position`, returning its number, its text
/// and the column of `position` inside it.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((line_number, line.to_string(), position - start));
        }

        start = end;
        line_number += 1;
    }

    // The end of the text sits just past the last line.
    if position == source.len() {
        let last = source.rsplit('\n').next().unwrap_or("");
        let line_number = source.matches('\n').count() + 1;
        return Some((line_number, last.to_string(), last.len()));
    }

    None
}

/// Renders an error against the source it came from.
///
/// ```text
/// Error: UnexpectedTokenDetailed (Expected statement to end with ';')
/// -> script.bish
///   |
/// 2 | x = 1
///   | -----^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position.file));

    // There is no source text to point into.
    if let ErrorImpl::FileReadError { message, .. } = error.get_kind() {
        out.push_str(&format!("{}\n", message));
        return out;
    }

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.offset) else {
        out.push_str(&format!("{}\n", error));
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!(
        "{} | {}\n",
        line_string,
        line_text_removed.trim_end()
    ));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

/// Prints a rendered error to standard error.
pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", render_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\n\n    Testing { }\n";

        let (line_number, line, line_pos) = get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = get_line_at_position(source, 34).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "    Testing { }\n");
        assert_eq!(line_pos, 12);
    }

    #[test]
    fn test_get_line_at_end_of_text() {
        let (line_number, line, line_pos) = get_line_at_position("x = 1;\ny = 2", 12).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "y = 2");
        assert_eq!(line_pos, 5);

        assert!(get_line_at_position("abc", 10).is_none());
    }

    #[test]
    fn test_render_error_points_at_offending_character() {
        let source = "x = 1;\n  y = 2 3;";
        let error = parse_str(source).unwrap_err();
        let rendered = render_error(&error, source);

        assert!(rendered.starts_with("Error: UnexpectedTokenDetailed"));
        assert!(rendered.contains("-> <string>"));
        assert!(rendered.contains("2 | y = 2 3;"));
        assert!(rendered.contains("| ------^"));
    }

    #[test]
    fn test_position_display() {
        let position = Position::new(3, 2, Some(';'), Rc::new(String::from("a.bish")));
        assert_eq!(position.to_string(), "character ';', line 2");

        let position = Position::new(3, 5, None, Rc::new(String::from("a.bish")));
        assert_eq!(position.to_string(), "end of input, line 5");
    }
}
