use std::slice::Iter;

use super::{
    expressions::Expr,
    ir::{Block, VariableRef},
};

/// Statement nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(Block),
    If(IfStatement),
    Assignment(Assignment),
    FunctionCall(FunctionCall),
    ExternCall(ExternCall),
    /// An expression evaluated for its own sake, e.g. `a + b;`
    Expression(Expr),
}

/// `if (condition) { ... }`. There is no else branch.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Expr,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub variable: VariableRef,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Expr>,
}

/// `@(...)`: a command line handed to an external executor.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternCall {
    pub body: InterpolatedString,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Str(String),
    Var(VariableRef),
}

/// Literal text interleaved with `$name` variable references, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InterpolatedString {
    segments: Vec<Segment>,
}

impl InterpolatedString {
    pub fn new() -> Self {
        InterpolatedString::default()
    }

    /// Appends literal text. Empty spans are dropped.
    pub fn push_str(&mut self, text: &str) {
        if !text.is_empty() {
            self.segments.push(Segment::Str(text.to_string()));
        }
    }

    pub fn push_var(&mut self, variable: VariableRef) {
        self.segments.push(Segment::Var(variable));
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
