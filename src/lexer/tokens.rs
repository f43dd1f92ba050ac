use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("def", TokenKind::Def);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOS,

    LParen,
    RParen,
    LBrace,
    RBrace,

    At,     // @
    Dollar, // $
    Sharp,  // #
    Semicolon,
    Comma,

    Equals,       // =
    DoubleEquals, // ==

    Plus,
    Minus,
    Star,
    Slash,

    Quote,

    Int,
    Fractional,
    Symbol,

    // Reserved
    If,
    Def,
}

impl TokenKind {
    /// The fixed spelling of a token kind, if it has one.
    pub fn spelling(&self) -> Option<&'static str> {
        let spelling = match self {
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::At => "@",
            TokenKind::Dollar => "$",
            TokenKind::Sharp => "#",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Equals => "=",
            TokenKind::DoubleEquals => "==",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Quote => "\"",
            TokenKind::If => "if",
            TokenKind::Def => "def",
            TokenKind::EOS | TokenKind::Int | TokenKind::Fractional | TokenKind::Symbol => {
                return None
            }
        };

        Some(spelling)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<String>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EOS => write!(f, "end of input"),
            _ => write!(f, "{}", self.value()),
        }
    }
}

impl Token {
    pub fn new(kind: TokenKind) -> Self {
        Token { kind, value: None }
    }

    pub fn with_value(kind: TokenKind, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: Some(value.into()),
        }
    }

    /// Builds the token for a run of alphanumeric characters, checking
    /// the reserved words first.
    pub fn from_word(word: &str) -> Self {
        match RESERVED_LOOKUP.get(word) {
            Some(kind) => Token::new(*kind),
            None => Token::with_value(TokenKind::Symbol, word),
        }
    }

    pub fn isa(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Textual payload of the token. Keywords and punctuation report their
    /// canonical spelling.
    pub fn value(&self) -> &str {
        match &self.value {
            Some(value) => value,
            None => self.kind.spelling().unwrap_or(""),
        }
    }

    pub fn is_binop(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Plus | TokenKind::Minus | TokenKind::Star | TokenKind::Slash
        )
    }

    pub fn is_unop(&self) -> bool {
        self.kind == TokenKind::Minus
    }
}
