use std::rc::Rc;

use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    ir::{
        Assignment, Block, ExternCall, Function, FunctionCall, IfStatement, InterpolatedString,
        Module, Stmt, Type, VariableRef, MAIN_FUNCTION_NAME,
    },
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_expr, parse_factor},
    parser::Parser,
};

/// Parses the root block into a module whose main function holds its
/// statements. Definitions found on the way are registered into the module.
pub fn parse_module(parser: &mut Parser) -> Result<Module, Error> {
    parser.push_module(Module::new());
    let body = parse_block(parser)?;

    let mut module = parser.pop_module()?;
    module.set_main(Function::new(MAIN_FUNCTION_NAME, vec![], body));

    Ok(module)
}

/// Parses `{ ... }` in a scope of its own.
pub fn parse_block(parser: &mut Parser) -> Result<Block, Error> {
    parser.push_scope();
    let block = parse_block_body(parser);
    parser.pop_scope();
    block
}

/// Parses `{ ... }` in the current scope.
pub fn parse_block_body(parser: &mut Parser) -> Result<Block, Error> {
    parser.expect(TokenKind::LBrace, "Expected block to begin with '{'")?;

    parser.enter_nesting()?;
    let block = parse_statements(parser);
    parser.leave_nesting();
    block
}

fn parse_statements(parser: &mut Parser) -> Result<Block, Error> {
    let mut statements = Vec::new();
    loop {
        skip_comments(parser);
        if parser.peek().isa(TokenKind::RBrace) {
            break;
        }
        if let Some(stmt) = parse_stmt(parser)? {
            statements.push(stmt);
        }
    }

    parser.expect(TokenKind::RBrace, "Expected block to end with '}'")?;

    Ok(Block::new(statements))
}

fn skip_comments(parser: &mut Parser) {
    while parser.peek().isa(TokenKind::Sharp) {
        parser.tokenizer().scan_until_char('\n');
    }
}

/// Parses one statement. Function definitions are registered into the
/// current module and yield no statement.
pub fn parse_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    let handler = parser.get_stmt_lookup().get(&parser.peek().kind).copied();

    match handler {
        Some(handler) => handler(parser),
        None => parse_other_stmt(parser),
    }
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    Ok(Some(Stmt::Block(parse_block(parser)?)))
}

/// `name = expr;`, `name(args);` or an expression starting with a name.
pub fn parse_other_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    if !parser.peek().isa(TokenKind::Symbol) {
        return Err(parser.unexpected("Expected symbol."));
    }

    let stmt = match parser.peek_second().kind {
        TokenKind::Equals => {
            let name = parser.expect_symbol("Expected symbol.")?;
            parse_assignment(parser, name)?
        }
        TokenKind::LParen => {
            let name = parser.expect_symbol("Expected symbol.")?;
            parse_funcall(parser, name)?
        }
        _ => Stmt::Expression(parse_expr(parser)?),
    };

    parser.expect(TokenKind::Semicolon, "Expected statement to end with ';'")?;

    Ok(Some(stmt))
}

/// `@(text $var text ...);`
pub fn parse_extern_call_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    let opening = parser.get_position();
    parser.expect(TokenKind::At, "Expected '@' to begin extern call.")?;
    parser.expect(TokenKind::LParen, "Expected opening '('")?;

    let mut body = InterpolatedString::new();
    loop {
        let text = parser
            .tokenizer()
            .scan_until(|t| t.isa(TokenKind::Dollar) || t.isa(TokenKind::RParen));
        body.push_str(text);

        match parser.peek().kind {
            TokenKind::Dollar => {
                parser.advance();
                body.push_var(parse_var(parser)?);
            }
            TokenKind::RParen => break,
            _ => {
                return Err(Error::new(
                    ErrorImpl::UnterminatedInput {
                        construct: String::from("extern call"),
                    },
                    opening,
                ))
            }
        }
    }

    parser.expect(TokenKind::RParen, "Expected closing ')'")?;
    parser.expect(TokenKind::Semicolon, "Expected statement to end with ';'")?;

    Ok(Some(Stmt::ExternCall(ExternCall { body })))
}

/// `if (expr) { ... }`
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    parser.expect(TokenKind::If, "Expected if statement")?;
    parser.expect(TokenKind::LParen, "Expected opening '('")?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::RParen, "Expected closing ')'")?;
    let body = parse_block(parser)?;

    Ok(Some(Stmt::If(IfStatement { condition, body })))
}

pub fn parse_fn_def_stmt(parser: &mut Parser) -> Result<Option<Stmt>, Error> {
    parser.expect(TokenKind::Def, "Expected def statement")?;
    let position = parser.get_position();

    let function = parse_function_def(parser)?;
    parser.register_function(function, position)?;

    Ok(None)
}

/// `name(arg, ...) { ... }`, after the `def` keyword.
///
/// Parameters get a scope of their own which the body shares.
pub fn parse_function_def(parser: &mut Parser) -> Result<Function, Error> {
    let name = parser.expect_symbol("Expected symbol.")?;
    parser.expect(TokenKind::LParen, "Expected opening '('")?;

    parser.push_scope();
    let function = parse_params_and_body(parser, name);
    parser.pop_scope();
    function
}

fn parse_params_and_body(parser: &mut Parser, name: String) -> Result<Function, Error> {
    let mut args = Vec::new();
    if !parser.peek().isa(TokenKind::RParen) {
        args.push(parse_arg(parser)?);
        while parser.peek().isa(TokenKind::Comma) {
            parser.advance();
            args.push(parse_arg(parser)?);
        }
    }
    parser.expect(TokenKind::RParen, "Expected closing ')'")?;

    let body = parse_block_body(parser)?;

    Ok(Function::new(name, args, body))
}

fn parse_funcall(parser: &mut Parser, name: String) -> Result<Stmt, Error> {
    parser.expect(TokenKind::LParen, "Expected opening '('")?;

    let mut args = Vec::new();
    if !parser.peek().isa(TokenKind::RParen) {
        args.push(parse_factor(parser)?);
        while parser.peek().isa(TokenKind::Comma) {
            parser.advance();
            args.push(parse_factor(parser)?);
        }
    }
    parser.expect(TokenKind::RParen, "Expected closing ')'")?;

    Ok(Stmt::FunctionCall(FunctionCall { name, args }))
}

fn parse_assignment(parser: &mut Parser, name: String) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Equals, "Expected assignment operator")?;

    let variable = parser.symbols_mut().lookup_or_create(&name);
    let value = parse_expr(parser)?;

    let ty = Type::of_literal(&value);
    if ty.is_defined() {
        trace!(name = %name, ty = %ty, "recorded type hint");
        parser.symbols_mut().insert(&name, Rc::clone(&variable), ty);
    }

    Ok(Stmt::Assignment(Assignment { variable, value }))
}

/// A variable reference, resolved through the scope chain.
pub fn parse_var(parser: &mut Parser) -> Result<VariableRef, Error> {
    let name = parser.expect_symbol("Expected variable to be a symbol")?;
    Ok(parser.symbols_mut().lookup_or_create(&name))
}

// Parameters never alias an outer variable.
fn parse_arg(parser: &mut Parser) -> Result<VariableRef, Error> {
    let name = parser.expect_symbol("Expected argument to be a symbol")?;
    Ok(parser.symbols_mut().declare(&name))
}
