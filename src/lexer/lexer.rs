use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, MK_LEXEME, MK_TOKEN};

use super::tokens::{Token, TokenKind};

lazy_static! {
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+(\\.[0-9]*)?").unwrap();
    static ref SYMBOL_PATTERN: Regex = Regex::new("^[a-zA-Z0-9]*").unwrap();
}

/// A token together with where it sits in the text.
///
/// `start` is the offset after leading whitespace, `end` the offset the
/// cursor moves to once the token is consumed.
#[derive(Debug, Clone)]
pub struct Lexeme {
    pub token: Token,
    pub start: usize,
    pub end: usize,
    pub lineno: u32,
}

/// Pull-based tokenizer over a borrowed source text.
///
/// Tokens are formed on demand: `peek()` looks at the head of the stream
/// without moving the cursor, `next()` consumes it. The cursor offset never
/// moves backwards.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    text: &'a str,
    idx: usize,
    lineno: u32,
    file: Rc<String>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str, file: Option<String>) -> Tokenizer<'a> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("<string>"))
        };

        Tokenizer {
            text,
            idx: 0,
            lineno: 1,
            file: file_name,
        }
    }

    /// Returns the token at the head of the stream without skipping it.
    pub fn peek(&self) -> Token {
        self.lex().token
    }

    /// Consumes the token at the head of the stream and returns it.
    ///
    /// Once the end of the text is reached this keeps returning `EOS`.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Token {
        let lexeme = self.lex();
        self.idx = lexeme.end;
        self.lineno = lexeme.lineno;
        lexeme.token
    }

    /// Returns the text from the cursor up to the first token accepted by
    /// `stop`, or up to the end of the text. The stopping token is not
    /// consumed.
    ///
    /// Characters no token rule accepts are stepped over one at a time.
    pub fn scan_until<P>(&mut self, stop: P) -> &'a str
    where
        P: Fn(&Token) -> bool,
    {
        let start = self.idx;

        loop {
            let lexeme = self.lex();
            self.lineno = lexeme.lineno;

            if lexeme.token.isa(TokenKind::EOS) || stop(&lexeme.token) {
                self.idx = lexeme.start;
                break;
            }

            self.idx = if lexeme.end > lexeme.start {
                lexeme.end
            } else {
                lexeme.start + self.char_width(lexeme.start)
            };
        }

        &self.text[start..self.idx]
    }

    /// Returns the text from the next non-whitespace character up to the
    /// first occurrence of `c` (exclusive), or up to the end of the text.
    pub fn scan_until_char(&mut self, c: char) -> &'a str {
        let (start, lineno) = skip_whitespace(self.text, self.idx, self.lineno);
        let end = self.text[start..]
            .find(c)
            .map_or(self.text.len(), |found| start + found);

        self.idx = end;
        self.lineno = lineno;
        &self.text[start..end]
    }

    /// Where the next token begins, for diagnostics.
    pub fn position(&self) -> Position {
        let (idx, lineno) = skip_whitespace(self.text, self.idx, self.lineno);
        Position::new(
            idx,
            lineno,
            self.text[idx..].chars().next(),
            Rc::clone(&self.file),
        )
    }

    pub fn at_eos(&self) -> bool {
        self.peek().isa(TokenKind::EOS)
    }

    pub fn offset(&self) -> usize {
        self.idx
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    fn char_width(&self, at: usize) -> usize {
        self.text[at..].chars().next().map_or(1, char::len_utf8)
    }

    /// Forms the next token without touching the cursor.
    fn lex(&self) -> Lexeme {
        let (idx, lineno) = skip_whitespace(self.text, self.idx, self.lineno);
        let rest = &self.text[idx..];

        let Some(c) = rest.chars().next() else {
            return MK_LEXEME!(TokenKind::EOS, idx, 0, lineno);
        };

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '@' => TokenKind::At,
            '$' => TokenKind::Dollar,
            '#' => TokenKind::Sharp,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '=' if rest.starts_with("==") => {
                return MK_LEXEME!(TokenKind::DoubleEquals, idx, 2, lineno)
            }
            '=' => TokenKind::Equals,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '"' => TokenKind::Quote,
            c if c.is_ascii_digit() => return read_number(rest, idx, lineno),
            _ => return read_symbol(rest, idx, lineno),
        };

        MK_LEXEME!(kind, idx, 1, lineno)
    }
}

fn is_whitespace(byte: u8) -> bool {
    byte == b' ' || byte == b'\t' || byte == b'\n'
}

fn skip_whitespace(text: &str, mut idx: usize, mut lineno: u32) -> (usize, u32) {
    let bytes = text.as_bytes();
    while idx < bytes.len() && is_whitespace(bytes[idx]) {
        if bytes[idx] == b'\n' {
            lineno += 1;
        }
        idx += 1;
    }
    (idx, lineno)
}

fn read_number(rest: &str, idx: usize, lineno: u32) -> Lexeme {
    let matched = NUMBER_PATTERN.find(rest).map_or("", |m| m.as_str());
    let kind = if matched.contains('.') {
        TokenKind::Fractional
    } else {
        TokenKind::Int
    };

    Lexeme {
        token: MK_TOKEN!(kind, matched),
        start: idx,
        end: idx + matched.len(),
        lineno,
    }
}

// A byte outside every rule yields an empty symbol; the parser reports it.
fn read_symbol(rest: &str, idx: usize, lineno: u32) -> Lexeme {
    let word = SYMBOL_PATTERN.find(rest).map_or("", |m| m.as_str());

    Lexeme {
        token: Token::from_word(word),
        start: idx,
        end: idx + word.len(),
        lineno,
    }
}
