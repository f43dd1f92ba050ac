//! Parser implementation for building the IR tree.
//!
//! This module contains the `Parser` context and the public entry points.
//! One `Parser` exists per parse; it owns the tokenizer, the symbol table
//! stack and the module stack, and everything is dropped once the module
//! has been handed back to the caller.
//!
//! It maintains lookup tables for:
//! - Statement handlers, keyed by the token a statement starts with
//! - Binary operators and their binding powers

use std::{collections::HashMap, fs, path::Path, rc::Rc};

use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    ir::{BinaryOperator, Function, Module},
    lexer::{
        lexer::Tokenizer,
        tokens::{Token, TokenKind},
    },
    symbols::symbol_table::SymbolTableStack,
    Position,
};

use super::{
    lookups::{create_token_lookups, BPLookup, BinOpLookup, BindingPower, StmtHandler, StmtLookup},
    stmt::parse_module,
};

/// Deepest nesting of blocks and parenthesised expressions accepted.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The parsing state for one invocation.
pub struct Parser<'a> {
    /// Token source over the (wrapped) program text
    tokenizer: Tokenizer<'a>,
    /// Offset of the caller's text inside the tokenizer's buffer
    origin: usize,
    /// End offset and last line of the caller's text, when the buffer
    /// extends past it
    limit: Option<(usize, u32)>,
    /// Current nesting of blocks and parenthesised expressions
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for binary operators
    binop_lookup: BinOpLookup,
    /// Lookup table for operator binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Active scope chain
    symbols: SymbolTableStack,
    /// Modules being built; the last one receives new definitions
    modules: Vec<Module>,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser over `text`, with empty lookup tables.
    ///
    /// # Arguments
    ///
    /// * `text` - The program text, borrowed for the parser's lifetime
    /// * `file` - Optional file name used in diagnostics
    pub fn new(text: &'a str, file: Option<String>) -> Self {
        Parser {
            tokenizer: Tokenizer::new(text, file),
            origin: 0,
            limit: None,
            depth: 0,
            stmt_lookup: HashMap::new(),
            binop_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            symbols: SymbolTableStack::new(),
            modules: Vec::new(),
        }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&self) -> Token {
        self.tokenizer.peek()
    }

    /// Returns the token after the next one without consuming anything.
    pub fn peek_second(&self) -> Token {
        let mut lookahead = self.tokenizer.clone();
        lookahead.next();
        lookahead.peek()
    }

    /// Consumes the next token and returns it.
    pub fn advance(&mut self) -> Token {
        self.tokenizer.next()
    }

    pub fn tokenizer(&mut self) -> &mut Tokenizer<'a> {
        &mut self.tokenizer
    }

    /// Consumes a token of the expected kind or fails with `message`.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the next token matches, otherwise an
    /// `UnexpectedTokenDetailed` error at the current position.
    pub fn expect(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        if !self.peek().isa(expected_kind) {
            return Err(self.unexpected(message));
        }
        Ok(self.advance())
    }

    /// Consumes a symbol and returns its text.
    ///
    /// A character that no token rule accepts shows up as an empty symbol
    /// and is reported as unrecognised.
    pub fn expect_symbol(&mut self, message: &str) -> Result<String, Error> {
        let token = self.peek();
        if token.isa(TokenKind::Symbol) && token.value().is_empty() {
            return Err(self.unrecognised());
        }
        Ok(self.expect(TokenKind::Symbol, message)?.value().to_string())
    }

    /// Builds an error at the current position.
    pub fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.get_position())
    }

    /// Builds an error for the next token not fitting the grammar.
    pub fn unexpected(&self, message: &str) -> Error {
        let token = self.peek();
        if token.isa(TokenKind::Symbol) && token.value().is_empty() {
            return self.unrecognised();
        }

        self.error(ErrorImpl::UnexpectedTokenDetailed {
            token: token.to_string(),
            message: message.to_string(),
        })
    }

    pub fn unrecognised(&self) -> Error {
        let position = self.get_position();
        let token = position.character.map(String::from).unwrap_or_default();
        Error::new(ErrorImpl::UnrecognisedToken { token }, position)
    }

    /// Returns the position of the next token in the caller's text.
    ///
    /// Anything past the end of the caller's text is reported at its end.
    pub fn get_position(&self) -> Position {
        let mut position = self.tokenizer.position();
        position.offset = position.offset.saturating_sub(self.origin);

        if let Some((end, last_line)) = self.limit {
            if position.offset > end {
                position.offset = end;
                position.line = last_line;
                position.character = None;
            }
        }

        position
    }

    /// Enters one level of nesting, failing once `MAX_NESTING_DEPTH` is
    /// exceeded. Every successful call is paired with `leave_nesting`.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the binary operator lookup table.
    pub fn get_binop_lookup(&self) -> &BinOpLookup {
        &self.binop_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers an infix operator.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `operator` - The operation the token denotes
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, operator: BinaryOperator) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.binop_lookup.insert(kind, operator);
    }

    /// Registers a statement handler for the token a statement starts with.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn symbols(&self) -> &SymbolTableStack {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTableStack {
        &mut self.symbols
    }

    pub fn push_scope(&mut self) {
        self.symbols.push_scope();
    }

    pub fn pop_scope(&mut self) {
        self.symbols.pop_scope();
    }

    pub fn push_module(&mut self, module: Module) {
        self.modules.push(module);
    }

    pub fn pop_module(&mut self) -> Result<Module, Error> {
        self.modules.pop().ok_or_else(|| {
            self.error(ErrorImpl::InternalError {
                message: String::from("module stack is empty"),
            })
        })
    }

    /// Adds a function definition to the current module.
    ///
    /// `position` is where the definition's name appeared, for the
    /// duplicate-definition error.
    pub fn register_function(&mut self, function: Function, position: Position) -> Result<(), Error> {
        let Some(module) = self.modules.last_mut() else {
            return Err(Error::new(
                ErrorImpl::InternalError {
                    message: String::from("no module to register function in"),
                },
                position,
            ));
        };

        if module.get_function(&function.name).is_some() {
            return Err(Error::new(
                ErrorImpl::FunctionAlreadyDeclared {
                    function: function.name,
                },
                position,
            ));
        }

        debug!(name = %function.name, args = function.args.len(), "registered function");
        module.add_function(function);
        Ok(())
    }
}

/// Parses a program given as a string, labelling diagnostics `<string>`.
pub fn parse_str(text: &str) -> Result<Module, Error> {
    parse_source(text, None)
}

/// Parses a program given as a string.
///
/// The text is wrapped in braces so the whole program is one block; that
/// block becomes the body of the module's `bish_main` function. Every
/// token must be consumed.
///
/// # Arguments
///
/// * `text` - The program text
/// * `file` - Optional file name used in diagnostics
///
/// # Returns
///
/// The parsed module, or the first error encountered.
pub fn parse_source(text: &str, file: Option<String>) -> Result<Module, Error> {
    // A comment on the last line must not run into the closing brace.
    let wrapped = if text.rsplit('\n').next().is_some_and(|line| line.contains('#')) {
        format!("{{{}\n}}", text)
    } else {
        format!("{{{}}}", text)
    };

    let mut parser = Parser::new(&wrapped, file);
    parser.origin = 1;
    parser.limit = Some((text.len(), text.matches('\n').count() as u32 + 1));
    create_token_lookups(&mut parser);

    let module = parse_module(&mut parser)?;
    parser.expect(TokenKind::EOS, "Expected end of string.")?;

    debug!(
        file = %parser.tokenizer.file(),
        functions = module.functions().len(),
        "parsed module"
    );

    Ok(module)
}

/// Reads the whole file at `path`, reporting failure as `FileReadError`.
pub fn read_source(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();

    fs::read_to_string(path).map_err(|error| {
        let label = path.to_string_lossy().into_owned();
        Error::new(
            ErrorImpl::FileReadError {
                path: label.clone(),
                message: error.to_string(),
            },
            Position::new(0, 1, None, Rc::new(label)),
        )
    })
}

/// Reads the file at `path` and parses its contents.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Module, Error> {
    let path = path.as_ref();
    let contents = read_source(path)?;

    parse_source(&contents, Some(path.to_string_lossy().into_owned()))
}
