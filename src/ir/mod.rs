/// IR (intermediate representation) module
/// Contains the node types the parser builds and hands to later passes
///
/// Submodules:
/// - ir: Modules, functions, blocks and variables
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the statement nodes
/// - types: Primitive type hints recorded during parsing
pub mod expressions;
pub mod ir;
pub mod statements;
pub mod types;

pub use expressions::{BinOp, BinaryOperator, Comparison, Expr, Fractional, Integer, StringLit, UnaryOp, UnaryOperator};
pub use ir::{Block, Function, Module, Variable, VariableRef, MAIN_FUNCTION_NAME};
pub use statements::{Assignment, ExternCall, FunctionCall, IfStatement, InterpolatedString, Segment, Stmt};
pub use types::Type;
