use std::{collections::HashMap, rc::Rc};

use tracing::trace;

use crate::ir::{Type, Variable, VariableRef};

#[derive(Debug, Clone)]
pub struct SymbolTableEntry {
    pub name: String,
    pub variable: VariableRef,
    pub ty: Type,
}

/// Names declared in exactly one scope.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: HashMap<String, SymbolTableEntry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Adds an entry, replacing any entry of the same name.
    pub fn insert(&mut self, name: &str, variable: VariableRef, ty: Type) {
        self.entries.insert(
            name.to_string(),
            SymbolTableEntry {
                name: name.to_string(),
                variable,
                ty,
            },
        );
    }

    pub fn lookup(&self, name: &str) -> Option<&SymbolTableEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The active scope chain, innermost last.
///
/// Lookups walk from the innermost scope outwards and stop at the first
/// match, so inner declarations shadow outer ones. Popping a scope drops
/// its name bindings; the variables themselves live on in the IR.
#[derive(Debug, Default)]
pub struct SymbolTableStack {
    tables: Vec<SymbolTable>,
    current_id: usize,
}

impl SymbolTableStack {
    pub fn new() -> Self {
        SymbolTableStack::default()
    }

    pub fn push_scope(&mut self) {
        self.tables.push(SymbolTable::new());
        trace!(depth = self.tables.len(), "pushed scope");
    }

    pub fn pop_scope(&mut self) -> Option<SymbolTable> {
        let table = self.tables.pop();
        trace!(depth = self.tables.len(), "popped scope");
        table
    }

    pub fn depth(&self) -> usize {
        self.tables.len()
    }

    /// Adds or overwrites `name` in the innermost scope.
    pub fn insert(&mut self, name: &str, variable: VariableRef, ty: Type) {
        self.innermost().insert(name, variable, ty);
    }

    pub fn lookup(&self, name: &str) -> Option<&SymbolTableEntry> {
        self.tables.iter().rev().find_map(|table| table.lookup(name))
    }

    /// Returns the variable `name` resolves to, declaring it in the
    /// innermost scope with an undefined type if nothing does.
    pub fn lookup_or_create(&mut self, name: &str) -> VariableRef {
        if let Some(entry) = self.lookup(name) {
            return Rc::clone(&entry.variable);
        }

        let variable = self.new_variable(name);
        self.insert(name, Rc::clone(&variable), Type::Undefined);
        variable
    }

    /// Declares a fresh variable in the innermost scope, shadowing any
    /// outer one of the same name.
    pub fn declare(&mut self, name: &str) -> VariableRef {
        let variable = self.new_variable(name);
        self.insert(name, Rc::clone(&variable), Type::Undefined);
        variable
    }

    fn new_variable(&mut self, name: &str) -> VariableRef {
        let id = self.current_id;
        self.current_id += 1;
        Rc::new(Variable::new(id, name))
    }

    // An empty stack acts as a single outermost scope.
    fn innermost(&mut self) -> &mut SymbolTable {
        if self.tables.is_empty() {
            self.tables.push(SymbolTable::new());
        }
        let last = self.tables.len() - 1;
        &mut self.tables[last]
    }
}
