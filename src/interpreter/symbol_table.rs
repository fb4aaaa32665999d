use std::collections::HashMap;

use crate::error::ParseError;

/// Stable handle to a declared variable.
///
/// Ids are dense, assigned in declaration order and never reused, so a handle
/// captured while parsing stays valid after the declaring scope is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarId(usize);

impl VarId {
    /// Position of the variable in declaration order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A declared variable and its current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// The name it was declared with.
    pub name:  String,
    /// Line of the declaration.
    pub line:  usize,
    /// Current value; `0.0` until first assigned.
    pub value: f64,
}

/// Lexically scoped variable table.
///
/// Names live in a stack of scopes, innermost last; the bottom scope is the
/// global scope and is never popped. Values live in a separate append-only
/// store addressed by [`VarId`], so popping a scope only hides names.
#[derive(Debug)]
pub struct SymbolTable {
    variables: Vec<Variable>,
    scopes:    Vec<HashMap<String, VarId>>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Creates a table holding only the empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: Vec::new(),
               scopes:    vec![HashMap::new()], }
    }

    /// Opens a new innermost scope.
    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Closes the innermost scope.
    ///
    /// # Panics
    /// Panics if only the global scope is open; scope pushes and pops are
    /// always paired by block parsing.
    pub fn pop_scope(&mut self) {
        assert!(self.scopes.len() > 1, "attempted to pop the global scope");
        self.scopes.pop();
    }

    /// Number of open scopes, including the global one.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Declares `name` in the innermost scope with value `0.0`.
    ///
    /// Shadowing a name from an outer scope is allowed.
    ///
    /// # Errors
    /// Returns [`ParseError::Redeclaration`] if `name` is already declared in
    /// the innermost scope.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::symbol_table::SymbolTable;
    ///
    /// let mut symbols = SymbolTable::new();
    /// let outer = symbols.declare("x", 1).unwrap();
    /// assert!(symbols.declare("x", 2).is_err());
    ///
    /// symbols.push_scope();
    /// let inner = symbols.declare("x", 3).unwrap();
    /// assert_ne!(inner, outer);
    /// assert_eq!(symbols.resolve("x"), Some(inner));
    ///
    /// symbols.pop_scope();
    /// assert_eq!(symbols.resolve("x"), Some(outer));
    /// ```
    pub fn declare(&mut self, name: &str, line: usize) -> Result<VarId, ParseError> {
        let id = VarId(self.variables.len());
        let scope = self.scopes
                        .last_mut()
                        .expect("the global scope is never popped");

        if scope.contains_key(name) {
            return Err(ParseError::Redeclaration { name: name.to_string(),
                                                   line });
        }

        scope.insert(name.to_string(), id);
        self.variables.push(Variable { name: name.to_string(),
                                       line,
                                       value: 0.0 });
        log::debug!("declared '{name}' as #{} at depth {} (line {line})",
                    id.0,
                    self.scopes.len());
        Ok(id)
    }

    /// Looks `name` up from the innermost scope outwards.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<VarId> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name).copied())
    }

    /// Whether `name` is visible from the current scope.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Whether `name` is declared in the innermost scope itself.
    #[must_use]
    pub fn in_current_scope(&self, name: &str) -> bool {
        self.scopes.last().is_some_and(|scope| scope.contains_key(name))
    }

    /// Current value of a variable.
    #[must_use]
    pub fn get(&self, id: VarId) -> f64 {
        self.variables[id.0].value
    }

    /// Overwrites the value of a variable.
    pub fn set(&mut self, id: VarId, value: f64) {
        self.variables[id.0].value = value;
    }

    /// Full record of a variable.
    #[must_use]
    pub fn variable(&self, id: VarId) -> &Variable {
        &self.variables[id.0]
    }

    /// Number of variables declared so far, across all scopes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// True when nothing has been declared yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense_and_stable() {
        let mut symbols = SymbolTable::new();
        let a = symbols.declare("a", 1).unwrap();
        symbols.push_scope();
        let b = symbols.declare("b", 2).unwrap();
        symbols.pop_scope();
        let c = symbols.declare("c", 3).unwrap();

        assert_eq!([a.index(), b.index(), c.index()], [0, 1, 2]);
        assert_eq!(symbols.len(), 3);
        assert_eq!(symbols.variable(b).name, "b");
        assert_eq!(symbols.variable(c).line, 3);
    }

    #[test]
    fn popped_variables_keep_their_values() {
        let mut symbols = SymbolTable::new();
        let outer = symbols.declare("outer", 1).unwrap();
        symbols.set(outer, 7.0);

        symbols.push_scope();
        let inner = symbols.declare("inner", 2).unwrap();
        symbols.set(inner, 3.0);
        symbols.pop_scope();

        assert_eq!(symbols.resolve("inner"), None);
        assert!(!symbols.contains("inner"));
        assert_eq!(symbols.get(inner), 3.0);
        assert_eq!(symbols.get(outer), 7.0);
        symbols.set(inner, 4.0);
        assert_eq!(symbols.get(outer), 7.0);
    }

    #[test]
    fn redeclaration_only_in_same_scope() {
        let mut symbols = SymbolTable::new();
        symbols.declare("x", 1).unwrap();
        let err = symbols.declare("x", 4).unwrap_err();
        assert!(matches!(err, ParseError::Redeclaration { ref name, line: 4 } if name == "x"));

        symbols.push_scope();
        assert!(!symbols.in_current_scope("x"));
        assert!(symbols.declare("x", 5).is_ok());
        assert!(symbols.in_current_scope("x"));
        assert_eq!(symbols.depth(), 2);
    }

    #[test]
    fn new_variables_start_at_zero() {
        let mut symbols = SymbolTable::new();
        assert!(symbols.is_empty());
        let id = symbols.declare("n", 1).unwrap();
        assert_eq!(symbols.get(id), 0.0);
    }

    #[test]
    #[should_panic(expected = "global scope")]
    fn popping_global_scope_panics() {
        let mut symbols = SymbolTable::new();
        symbols.pop_scope();
    }
}
