//! Host-function extension protocol.
//!
//! A function is a named, variadic operation over values. Built-in and
//! host-added functions implement the same trait and live in the same
//! registry — the evaluator cannot tell them apart, and that uniformity is
//! part of the contract.
//!
//! Registration happens at initialization time, before any evaluation; the
//! registry is read-only afterwards and safely shared by concurrent
//! evaluations.

pub mod helpers;

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use rill_value::{unresolved_function, EvalError, EvalResult, Value};

use crate::context::EvalContext;

/// A named, variadic operation callable from expressions.
///
/// Implementations must validate their own arity and argument kinds (the
/// [`helpers`] module carries the shared extraction code) and fail with a
/// structured error rather than panicking.
pub trait ExprFunction: Send + Sync {
    /// Case-sensitive registry name, e.g. `math.abs`.
    fn name(&self) -> &str;

    /// Invoke with already-resolved argument values.
    fn call(&self, ctx: &EvalContext<'_>, args: &[Value]) -> EvalResult;
}

impl fmt::Debug for dyn ExprFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprFunction({})", self.name())
    }
}

/// Name → function table, populated once at startup.
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    functions: FxHashMap<String, Arc<dyn ExprFunction>>,
}

impl FunctionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the standard builtins.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::builtins::install(&mut registry);
        registry
    }

    /// Register a function under its own name.
    ///
    /// Registration is an initialization-time operation; re-registering a
    /// name replaces the previous entry.
    pub fn register(&mut self, function: Arc<dyn ExprFunction>) {
        let name = function.name().to_string();
        let replaced = self.functions.insert(name.clone(), function).is_some();
        if replaced {
            tracing::debug!(name = %name, "replaced function registration");
        } else {
            tracing::debug!(name = %name, "registered function");
        }
    }

    /// Resolve a name to a function.
    ///
    /// An absent name is an [`rill_value::EvalErrorKind::UnresolvedFunction`]
    /// error — distinct from a resolved-but-misused function, which fails
    /// inside its own `call`.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn ExprFunction>, EvalError> {
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| unresolved_function(name))
    }

    /// Whether a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.functions.keys().collect();
        names.sort();
        f.debug_struct("FunctionRegistry")
            .field("functions", &names)
            .finish()
    }
}
