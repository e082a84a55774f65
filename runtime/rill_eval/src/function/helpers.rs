//! Shared argument-extraction helpers for expression functions.
//!
//! Built-in and host functions validate arguments the same way: positional
//! first, then falling back to the function's declared parameter name in
//! the environment, failing with a structured `IllegalArgument` when
//! neither source yields a usable value.

use rill_value::{arity_mismatch, illegal_argument, EvalError, Value};

use crate::coerce::int_to_float;
use crate::context::EvalContext;

/// A numeric argument, preserving the int/float distinction so functions
/// can honor the "Int in, Int out" rule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Widen to floating-point.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => int_to_float(n),
            Number::Float(f) => f,
        }
    }
}

/// Require an exact argument count.
pub fn require_arity(function: &str, args: &[Value], expected: usize) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(arity_mismatch(function, expected, args.len()))
    }
}

/// Resolve the argument at `index`, falling back to the declared parameter
/// name in the environment when the position is absent.
fn arg_or_binding(args: &[Value], index: usize, param: &str, ctx: &EvalContext<'_>) -> Value {
    match args.get(index) {
        Some(v) => v.clone(),
        None => ctx.lookup(param),
    }
}

/// Extract a numeric argument.
pub fn number_arg(
    function: &str,
    args: &[Value],
    index: usize,
    param: &str,
    ctx: &EvalContext<'_>,
) -> Result<Number, EvalError> {
    match arg_or_binding(args, index, param, ctx) {
        Value::Int(n) => Ok(Number::Int(n)),
        Value::Float(f) => Ok(Number::Float(f)),
        other => Err(illegal_argument(
            function,
            format!("expected a number for `{param}`, got {}", other.type_name()),
        )),
    }
}

/// Extract a string argument.
pub fn string_arg(
    function: &str,
    args: &[Value],
    index: usize,
    param: &str,
    ctx: &EvalContext<'_>,
) -> Result<String, EvalError> {
    match arg_or_binding(args, index, param, ctx) {
        Value::Str(s) => Ok((*s).clone()),
        other => Err(illegal_argument(
            function,
            format!("expected a string for `{param}`, got {}", other.type_name()),
        )),
    }
}
