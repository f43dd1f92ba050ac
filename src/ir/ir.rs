use std::{
    rc::Rc,
    slice::{Iter, IterMut},
};

use super::statements::Stmt;

/// Name given to the synthetic function holding the top-level statements.
pub const MAIN_FUNCTION_NAME: &str = "bish_main";

/// A named storage location.
///
/// Every use of the same name inside one resolvable scope shares a single
/// `Variable` through a [`VariableRef`], so identity is `Rc::ptr_eq`, not
/// equality of names. The `id` is unique within one parse.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Variable {
    pub id: usize,
    pub name: String,
}

impl Variable {
    pub fn new(id: usize, name: impl Into<String>) -> Self {
        Variable {
            id,
            name: name.into(),
        }
    }
}

pub type VariableRef = Rc<Variable>;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Block { statements }
    }
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }
    pub fn iter_mut(&mut self) -> IterMut<'_, Stmt> {
        self.statements.iter_mut()
    }
    pub fn len(&self) -> usize {
        self.statements.len()
    }
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub args: Vec<VariableRef>,
    pub body: Block,
}

impl Function {
    pub fn new(name: impl Into<String>, args: Vec<VariableRef>, body: Block) -> Self {
        Function {
            name: name.into(),
            args,
            body,
        }
    }
}

/// Root of a parsed program.
///
/// Owns the synthetic main function and every `def` found while parsing,
/// in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Module {
    main: Option<Function>,
    functions: Vec<Function>,
}

impl Module {
    pub fn new() -> Self {
        Module::default()
    }

    pub fn set_main(&mut self, main: Function) {
        self.main = Some(main);
    }

    pub fn main(&self) -> Option<&Function> {
        self.main.as_ref()
    }

    pub fn add_function(&mut self, function: Function) {
        self.functions.push(function);
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    pub fn get_function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.name == name)
    }
}
