use std::collections::HashMap;

use crate::{
    errors::errors::{Error, ErrorImpl},
    ir::{BinaryOperator, Stmt, UnaryOperator},
    lexer::tokens::{Token, TokenKind},
};

use super::{parser::Parser, stmt::*};

/// Precedence of the infix operators. `==` is not in the table; it is
/// handled by `parse_expr` since it does not chain.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Additive,
    Multiplicative,
    /// Above every infix operator: an operand parsed at this level is a
    /// single unary expression.
    Unary,
}

impl BindingPower {
    /// The next tighter level, used for the right operand of a
    /// left-associative operator.
    pub fn tighter(self) -> BindingPower {
        match self {
            BindingPower::Default => BindingPower::Additive,
            BindingPower::Additive => BindingPower::Multiplicative,
            BindingPower::Multiplicative | BindingPower::Unary => BindingPower::Unary,
        }
    }
}

pub type StmtHandler = fn(&mut Parser<'_>) -> Result<Option<Stmt>, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, BinaryOperator::Add);
    parser.led(TokenKind::Minus, BindingPower::Additive, BinaryOperator::Sub);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, BinaryOperator::Mul);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, BinaryOperator::Div);

    // Statements; anything else is an assignment or a call
    parser.stmt(TokenKind::LBrace, parse_block_stmt);
    parser.stmt(TokenKind::At, parse_extern_call_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::Def, parse_fn_def_stmt);
}

/// Resolves an operator token to its binary operation.
pub fn binary_operator(parser: &Parser, token: &Token) -> Result<BinaryOperator, Error> {
    match parser.get_binop_lookup().get(&token.kind) {
        Some(operator) => Ok(*operator),
        None => Err(Error::new(
            ErrorImpl::InvalidOperator {
                token: token.to_string(),
            },
            parser.get_position(),
        )),
    }
}

/// Resolves an operator token to its unary operation.
pub fn unary_operator(parser: &Parser, token: &Token) -> Result<UnaryOperator, Error> {
    match token.kind {
        TokenKind::Minus => Ok(UnaryOperator::Negate),
        _ => Err(Error::new(
            ErrorImpl::InvalidOperator {
                token: token.to_string(),
            },
            parser.get_position(),
        )),
    }
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
pub type BinOpLookup = HashMap<TokenKind, BinaryOperator>;
