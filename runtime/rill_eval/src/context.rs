//! Evaluation context: the engine's view of the caller-supplied environment
//! and the function registry.
//!
//! Name resolution itself is the environment collaborator's job (including
//! unwrapping host-object properties to primitives); the context only
//! carries the binding source and applies the one place nil substitutes for
//! a missing value — an absent identifier resolves to `Nil`, never an
//! error.

use std::collections::HashMap;
use std::hash::BuildHasher;

use rill_value::{EvalError, EvalResult, Value};

use crate::function::{ExprFunction, FunctionRegistry};
use std::sync::Arc;

/// A source of identifier bindings.
pub trait Bindings {
    /// Resolve a name to a value, or `None` when unbound.
    fn resolve(&self, name: &str) -> Option<Value>;
}

/// The empty environment.
impl Bindings for () {
    fn resolve(&self, _name: &str) -> Option<Value> {
        None
    }
}

/// Any string-keyed map of values (covers both `HashMap` and `FxHashMap`).
impl<S: BuildHasher> Bindings for HashMap<String, Value, S> {
    fn resolve(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

/// Per-evaluation context handed to operators and functions.
pub struct EvalContext<'a> {
    bindings: &'a dyn Bindings,
    functions: &'a FunctionRegistry,
}

impl<'a> EvalContext<'a> {
    /// Create a context over an environment and a registry.
    pub fn new(bindings: &'a dyn Bindings, functions: &'a FunctionRegistry) -> Self {
        EvalContext {
            bindings,
            functions,
        }
    }

    /// Look up an identifier. Absent bindings resolve to `Nil`.
    pub fn lookup(&self, name: &str) -> Value {
        self.bindings.resolve(name).unwrap_or(Value::Nil)
    }

    /// Resolve a function by name.
    pub fn function(&self, name: &str) -> Result<Arc<dyn ExprFunction>, EvalError> {
        self.functions.resolve(name)
    }

    /// Resolve and invoke a function in this context.
    ///
    /// This is the path call nodes take: an unresolved name fails before
    /// the function sees any arguments.
    pub fn call(&self, name: &str, args: &[Value]) -> EvalResult {
        let function = self.functions.resolve(name)?;
        function.call(self, args)
    }
}
