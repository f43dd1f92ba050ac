use std::fmt::Display;

use super::ir::VariableRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
}

/// Expression nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    BinOp(BinOp),
    UnaryOp(UnaryOp),
    Comparison(Comparison),
    Variable(VariableRef),
    Integer(Integer),
    Fractional(Fractional),
    String(StringLit),
}

impl Expr {
    pub fn binop(operator: BinaryOperator, left: Expr, right: Expr) -> Self {
        Expr::BinOp(BinOp {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn unary(operator: UnaryOperator, operand: Expr) -> Self {
        Expr::UnaryOp(UnaryOp {
            operator,
            operand: Box::new(operand),
        })
    }

    pub fn comparison(left: Expr, right: Expr) -> Self {
        Expr::Comparison(Comparison {
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn as_variable(&self) -> Option<&VariableRef> {
        match self {
            Expr::Variable(variable) => Some(variable),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinOp {
    pub operator: BinaryOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOp {
    pub operator: UnaryOperator,
    pub operand: Box<Expr>,
}

/// Equality test between two arithmetic expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

// LITERALS

/// Integer literal, keeping the text it was written as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Integer {
    pub value: i64,
    pub text: String,
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Integer {
            value,
            text: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fractional {
    pub value: f64,
    pub text: String,
}

/// Quoted string literal. The text is taken verbatim; there are no escapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLit {
    pub value: String,
}

impl From<&str> for StringLit {
    fn from(value: &str) -> Self {
        StringLit {
            value: value.to_string(),
        }
    }
}
