//! Rill Value - runtime value model for the Rill expression engine.
//!
//! This crate defines the leaf types everything else depends on:
//!
//! - [`Value`]: the closed tagged union of runtime values
//! - [`ValueKind`]: value tags for decision tables and error messages
//! - [`BinaryOp`] / [`UnaryOp`] / [`LogicalOp`]: the operator vocabulary
//! - [`EvalError`] / [`EvalErrorKind`]: structured evaluation errors
//! - [`Heap`]: the enforced-`Arc` wrapper behind heap-backed variants
//! - [`PatternValue`]: compiled regular expressions, identified by source
//! - [`HostObject`]: the trait behind opaque host references

pub mod errors;
pub mod op;
pub mod value;

pub use errors::{
    arity_mismatch, division_by_zero, illegal_argument, integer_overflow, invalid_pattern,
    logical_type_mismatch, modulo_by_zero, non_boolean_condition, operator_type_mismatch,
    unary_type_mismatch, unresolved_function, EvalError, EvalErrorKind, EvalResult,
};
pub use op::{BinaryOp, LogicalOp, UnaryOp};
pub use value::{Heap, HostObject, PatternValue, Value, ValueKind};
