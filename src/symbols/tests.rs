//! Unit tests for the symbol table stack.

use std::rc::Rc;

use super::symbol_table::{SymbolTable, SymbolTableStack};
use crate::ir::{Type, Variable};

#[test]
fn test_table_insert_overwrites() {
    let mut table = SymbolTable::new();
    let x = Rc::new(Variable::new(0, "x"));

    table.insert("x", Rc::clone(&x), Type::Undefined);
    table.insert("x", Rc::clone(&x), Type::Integer);

    assert_eq!(table.len(), 1);
    assert_eq!(table.lookup("x").unwrap().ty, Type::Integer);
    assert!(table.lookup("y").is_none());
}

#[test]
fn test_lookup_or_create_aliases() {
    let mut stack = SymbolTableStack::new();
    stack.push_scope();

    let first = stack.lookup_or_create("x");
    let second = stack.lookup_or_create("x");

    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(stack.lookup("x").unwrap().ty, Type::Undefined);
}

#[test]
fn test_lookup_or_create_reuses_outer_variable() {
    let mut stack = SymbolTableStack::new();
    stack.push_scope();
    let outer = stack.lookup_or_create("x");

    stack.push_scope();
    let inner = stack.lookup_or_create("x");

    assert!(Rc::ptr_eq(&outer, &inner));
}

#[test]
fn test_inner_scope_does_not_leak() {
    let mut stack = SymbolTableStack::new();
    stack.push_scope();
    stack.push_scope();
    let inner = stack.lookup_or_create("x");
    stack.pop_scope();

    assert!(stack.lookup("x").is_none());

    let outer = stack.lookup_or_create("x");
    assert!(!Rc::ptr_eq(&inner, &outer));
    assert_ne!(inner.id, outer.id);
}

#[test]
fn test_declare_shadows() {
    let mut stack = SymbolTableStack::new();
    stack.push_scope();
    let outer = stack.lookup_or_create("a");

    stack.push_scope();
    let param = stack.declare("a");
    assert!(!Rc::ptr_eq(&outer, &param));
    assert!(Rc::ptr_eq(&stack.lookup("a").unwrap().variable, &param));

    stack.pop_scope();
    assert!(Rc::ptr_eq(&stack.lookup("a").unwrap().variable, &outer));
}

#[test]
fn test_type_hint_goes_to_innermost_scope() {
    let mut stack = SymbolTableStack::new();
    stack.push_scope();
    let x = stack.lookup_or_create("x");

    stack.push_scope();
    stack.insert("x", Rc::clone(&x), Type::String);
    assert_eq!(stack.lookup("x").unwrap().ty, Type::String);

    stack.pop_scope();
    assert_eq!(stack.lookup("x").unwrap().ty, Type::Undefined);
}

#[test]
fn test_pop_returns_discarded_scope() {
    let mut stack = SymbolTableStack::new();
    stack.push_scope();
    stack.lookup_or_create("x");
    stack.lookup_or_create("y");

    let table = stack.pop_scope().unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(stack.depth(), 0);
    assert!(stack.pop_scope().is_none());
}

#[test]
fn test_empty_stack_acts_as_one_scope() {
    let mut stack = SymbolTableStack::new();

    let x = stack.lookup_or_create("x");
    assert_eq!(stack.depth(), 1);
    assert!(Rc::ptr_eq(&stack.lookup_or_create("x"), &x));
}

#[test]
fn test_variable_ids_are_unique() {
    let mut stack = SymbolTableStack::new();
    stack.push_scope();

    let a = stack.lookup_or_create("a");
    let b = stack.lookup_or_create("b");
    let c = stack.declare("a");

    assert_eq!(a.id, 0);
    assert_eq!(b.id, 1);
    assert_eq!(c.id, 2);
}
