//! Scoped symbol table managing variable bindings

mod frame;

pub use frame::ScopeGuard;

use std::fmt;

use indexmap::IndexMap;

use crate::error::ScopeError;

/// Declared type of a binding. The language only has integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    /// 64-bit signed integer, the only value type.
    Int,
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarType::Int => write!(f, "int"),
        }
    }
}

/// A single variable binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// The binding's declared type.
    pub ty: VarType,

    /// The current value.
    pub value: i64,

    /// Label of the scope the binding was declared in
    /// (`"Global"` or `"Scope<k>"`).
    pub scope_label: String,
}

/// The scoped symbol table.
///
/// An ordered stack of name→binding mappings, innermost scope last. The
/// global scope is created on construction and can never be removed. Within
/// one scope names are unique; an inner scope may shadow an outer name, and
/// lookup searches innermost-first so the shadowing binding wins.
///
/// # Example
///
/// ```
/// use sprout::Environment;
///
/// let mut env = Environment::new();
/// env.declare("x", 1).unwrap();
///
/// env.enter_scope();
/// env.declare("x", 2).unwrap(); // Shadows global x
/// assert_eq!(env.lookup("x").unwrap(), 2);
///
/// env.exit_scope().unwrap();
/// assert_eq!(env.lookup("x").unwrap(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Environment {
    /// Active scopes, global first. Never empty.
    scopes: Vec<IndexMap<String, Binding>>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Create an environment holding a single empty global scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![IndexMap::new()],
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Scope Entry/Exit
    // ═══════════════════════════════════════════════════════════════════

    /// Enter a new scope. Never fails.
    pub fn enter_scope(&mut self) {
        self.scopes.push(IndexMap::new());
    }

    /// Exit the current scope, dropping all of its bindings.
    ///
    /// # Errors
    ///
    /// Returns `ScopeError::ExitGlobalScope` if only the global scope
    /// remains; the stack is left unchanged.
    pub fn exit_scope(&mut self) -> Result<(), ScopeError> {
        if self.scopes.len() == 1 {
            return Err(ScopeError::ExitGlobalScope);
        }
        self.scopes.pop();
        Ok(())
    }

    /// Current scope depth (1 = global only).
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Check if we're at global scope.
    pub fn is_global_scope(&self) -> bool {
        self.scopes.len() == 1
    }

    /// Discard all scopes and reinitialize with a single empty global scope.
    pub fn reset(&mut self) {
        self.scopes.clear();
        self.scopes.push(IndexMap::new());
    }

    /// Label for a binding declared at the current depth.
    fn current_label(&self) -> String {
        if self.is_global_scope() {
            "Global".to_string()
        } else {
            format!("Scope{}", self.scopes.len() - 1)
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Declaration and Assignment
    // ═══════════════════════════════════════════════════════════════════

    /// Declare a new variable in the current scope.
    ///
    /// Shadowing a name from an outer scope is allowed.
    ///
    /// # Errors
    ///
    /// Returns `ScopeError::Redeclaration` if the name already exists in the
    /// current (innermost) scope.
    pub fn declare(&mut self, name: &str, value: i64) -> Result<(), ScopeError> {
        if self.contains_in_current_scope(name) {
            return Err(ScopeError::Redeclaration(name.to_string()));
        }
        let label = self.current_label();
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(
                name.to_string(),
                Binding {
                    ty: VarType::Int,
                    value,
                    scope_label: label,
                },
            );
        }
        Ok(())
    }

    /// Look up a variable, innermost scope first.
    ///
    /// # Errors
    ///
    /// Returns `ScopeError::UndeclaredVariable` if the name is not found in
    /// any active scope.
    pub fn lookup(&self, name: &str) -> Result<i64, ScopeError> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
            .map(|binding| binding.value)
            .ok_or_else(|| ScopeError::UndeclaredVariable(name.to_string()))
    }

    /// Assign a new value to an existing variable.
    ///
    /// The binding is mutated in the scope where lookup finds it, which is
    /// not necessarily the current scope.
    ///
    /// # Errors
    ///
    /// Returns `ScopeError::UndeclaredVariable` if the name is not found in
    /// any active scope.
    pub fn assign(&mut self, name: &str, value: i64) -> Result<(), ScopeError> {
        let binding = self
            .scopes
            .iter_mut()
            .rev()
            .find_map(|scope| scope.get_mut(name))
            .ok_or_else(|| ScopeError::UndeclaredVariable(name.to_string()))?;
        binding.value = value;
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Check if a name is bound in any active scope.
    pub fn contains(&self, name: &str) -> bool {
        self.scopes.iter().any(|scope| scope.contains_key(name))
    }

    /// Check if a name is bound in the current (innermost) scope only.
    pub fn contains_in_current_scope(&self, name: &str) -> bool {
        self.scopes
            .last()
            .is_some_and(|scope| scope.contains_key(name))
    }

    /// Iterate over all bindings, innermost scope first, in declaration
    /// order within each scope. This is the symbol-table-dump interface.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &Binding)> {
        self.scopes
            .iter()
            .rev()
            .flat_map(|scope| scope.iter().map(|(name, b)| (name.as_str(), b)))
    }

    /// Total number of bindings across all scopes.
    pub fn len(&self) -> usize {
        self.scopes.iter().map(IndexMap::len).sum()
    }

    /// Check if no variables are declared anywhere.
    pub fn is_empty(&self) -> bool {
        self.scopes.iter().all(IndexMap::is_empty)
    }
}
