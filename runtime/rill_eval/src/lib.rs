#![deny(clippy::arithmetic_side_effects)]
//! Rill Eval - operator engine and function host for the Rill expression
//! runtime.
//!
//! This crate implements untyped evaluation over `rill_value::Value`:
//!
//! - `evaluate_binary`: decision-table binary operator dispatch
//! - `evaluate_unary`: unary operator dispatch
//! - `evaluate_logical` / `evaluate_ternary`: short-circuit forms that
//!   take unevaluated operands as closures
//! - `FunctionRegistry`: named host functions, with the standard
//!   builtins (`math.abs`, `math.sqrt`, `math.pow`, `rand`)
//! - `EvalContext`: variable bindings plus a registry, threaded through
//!   function calls
//!
//! # Re-exports
//!
//! Value types and error constructors from `rill_value` are re-exported
//! for convenience, so embedders usually depend on this crate alone.

pub mod builtins;
mod coerce;
mod context;
mod function;
mod logic;
mod operators;
mod unary;

#[cfg(test)]
mod tests;

// Re-export the value model from rill_value
pub use rill_value::{
    BinaryOp, EvalError, EvalErrorKind, EvalResult, Heap, HostObject, LogicalOp, PatternValue,
    UnaryOp, Value, ValueKind,
};

// Re-export error constructors for convenience (canonical path is rill_value::errors::*)
pub use rill_value::{
    arity_mismatch, division_by_zero, illegal_argument, integer_overflow, invalid_pattern,
    logical_type_mismatch, modulo_by_zero, non_boolean_condition, operator_type_mismatch,
    unary_type_mismatch, unresolved_function,
};

pub use coerce::{int_to_float, promote_numeric, Family, NumericPair};
pub use context::{Bindings, EvalContext};
pub use function::helpers::{number_arg, require_arity, string_arg, Number};
pub use function::{ExprFunction, FunctionRegistry};
pub use logic::{evaluate_logical, evaluate_ternary};
pub use operators::{evaluate_binary, evaluate_match};
pub use unary::evaluate_unary;
