//! Lexical environments.
//!
//! An `Environment` is a handle to one scope in a chain that runs from the
//! innermost call frame out to the global scope. Handles are shared: closures
//! keep the scope they were created in alive, and child scopes keep their
//! parent alive.
//!
//! Binding always writes to the handle's own scope; lookup walks outward.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::Value;

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// All scope allocations go through `LocalScope::new()`. Not thread-safe:
/// the interpreter runs on one thread.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether two handles point at the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One scope: its own bindings plus a link to the enclosing scope.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    #[inline]
    pub fn define(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), value);
    }

    /// Look up `name` here, then in each enclosing scope.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow().lookup(name);
        }
        None
    }
}

/// Shared handle to a scope chain.
#[derive(Clone, Default)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// A fresh global environment.
    pub fn new() -> Self {
        Environment::default()
    }

    /// A new innermost scope whose lookups fall back to `outer`.
    pub fn new_enclosed(outer: &Environment) -> Self {
        Environment {
            scope: LocalScope::new(Scope::with_parent(outer.scope.clone())),
        }
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.scope.borrow().lookup(name)
    }

    /// Bind `name` in this scope, shadowing any outer binding.
    pub fn set(&self, name: &str, value: Value) {
        self.scope.borrow_mut().define(name, value);
    }

    /// Whether two handles refer to the same scope.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.scope.ptr_eq(&other.scope)
    }
}

// Scopes can contain closures that capture them; printing bindings would recurse.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.scope.borrow();
        f.debug_struct("Environment")
            .field("bindings", &scope.bindings.len())
            .field("enclosed", &scope.parent.is_some())
            .finish()
    }
}
