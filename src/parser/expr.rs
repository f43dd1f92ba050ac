use crate::{
    errors::errors::{Error, ErrorImpl},
    ir::{Expr, Fractional, Integer, StringLit},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binary_operator, unary_operator, BindingPower},
    parser::Parser,
};

/// `arith (== arith)?`. Comparison does not chain.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_arith(parser)?;

    if parser.peek().isa(TokenKind::DoubleEquals) {
        parser.advance();
        let right = parse_arith(parser)?;
        return Ok(Expr::comparison(left, right));
    }

    Ok(left)
}

/// `term ((+|-) term)*`
pub fn parse_arith(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, BindingPower::Additive)
}

/// `unary ((*|/) unary)*`
pub fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, BindingPower::Multiplicative)
}

/// Precedence climbing over the binary operators registered with at
/// least `min_bp`. All of them are left-associative.
pub fn parse_binary_expr(parser: &mut Parser, min_bp: BindingPower) -> Result<Expr, Error> {
    let mut left = parse_unary(parser)?;

    loop {
        let token = parser.peek();
        let bp = *parser
            .get_bp_lookup()
            .get(&token.kind)
            .unwrap_or(&BindingPower::Default);
        if bp == BindingPower::Default || bp < min_bp {
            break;
        }

        let operator = binary_operator(parser, &token)?;
        parser.advance();

        let right = parse_binary_expr(parser, bp.tighter())?;
        left = Expr::binop(operator, left, right);
    }

    Ok(left)
}

/// `(-)? factor`
pub fn parse_unary(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.peek();

    if token.is_unop() {
        let operator = unary_operator(parser, &token)?;
        parser.advance();
        return Ok(Expr::unary(operator, parse_factor(parser)?));
    }

    parse_factor(parser)
}

/// `'(' expr ')' | atom`
pub fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.peek().isa(TokenKind::LParen) {
        parser.advance();
        parser.enter_nesting()?;
        let expr = parse_expr(parser);
        parser.leave_nesting();
        let expr = expr?;
        parser.expect(TokenKind::RParen, "Unmatched '('")?;
        return Ok(expr);
    }

    parse_atom(parser)
}

/// A variable reference, number or quoted string.
pub fn parse_atom(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.peek();

    match token.kind {
        TokenKind::Symbol => {
            let name = parser.expect_symbol("Expected symbol.")?;
            Ok(Expr::Variable(parser.symbols_mut().lookup_or_create(&name)))
        }
        TokenKind::Int => {
            let text = token.value().to_string();
            let value = text.parse::<i64>().map_err(|_| {
                parser.error(ErrorImpl::NumberParseError {
                    token: text.clone(),
                })
            })?;
            parser.advance();
            Ok(Expr::Integer(Integer { value, text }))
        }
        TokenKind::Fractional => {
            let text = token.value().to_string();
            let value = text.parse::<f64>().map_err(|_| {
                parser.error(ErrorImpl::NumberParseError {
                    token: text.clone(),
                })
            })?;
            parser.advance();
            Ok(Expr::Fractional(Fractional { value, text }))
        }
        TokenKind::Quote => {
            // An unterminated string is reported at its opening quote.
            let opening = parser.get_position();
            parser.advance();
            let value = parser
                .tokenizer()
                .scan_until(|t| t.isa(TokenKind::Quote))
                .to_string();
            if !parser.peek().isa(TokenKind::Quote) {
                return Err(Error::new(
                    ErrorImpl::UnterminatedInput {
                        construct: String::from("string literal"),
                    },
                    opening,
                ));
            }
            parser.advance();
            Ok(Expr::String(StringLit { value }))
        }
        _ => Err(parser.unexpected("Invalid token type for atom.")),
    }
}
