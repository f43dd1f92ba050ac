//! Primitive type hints.
//!
//! The parser records a best-effort hint for a variable whenever it is
//! assigned a literal. This is not a type system; later passes own that.

use std::fmt::Display;

use super::expressions::Expr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Type {
    #[default]
    Undefined,
    Integer,
    Fractional,
    String,
    // No literal produces this yet.
    Boolean,
}

impl Type {
    /// The primitive type of `expr` if it is a literal, `Undefined` otherwise.
    pub fn of_literal(expr: &Expr) -> Type {
        match expr {
            Expr::Integer(_) => Type::Integer,
            Expr::Fractional(_) => Type::Fractional,
            Expr::String(_) => Type::String,
            Expr::BinOp(_)
            | Expr::UnaryOp(_)
            | Expr::Comparison(_)
            | Expr::Variable(_) => Type::Undefined,
        }
    }

    pub fn is_defined(&self) -> bool {
        *self != Type::Undefined
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Type::Undefined => "undefined",
            Type::Integer => "integer",
            Type::Fractional => "fractional",
            Type::String => "string",
            Type::Boolean => "boolean",
        };
        write!(f, "{}", name)
    }
}
