//! Standard built-in functions.
//!
//! Builtins are ordinary registry entries with no special-cased engine
//! logic; hosts can shadow or extend them at registration time.

use std::sync::Arc;

use rand::Rng;

use rill_value::{integer_overflow, EvalResult, Value};

use crate::context::EvalContext;
use crate::function::helpers::{number_arg, require_arity, Number};
use crate::function::{ExprFunction, FunctionRegistry};

/// Install the standard builtins into a registry.
pub fn install(registry: &mut FunctionRegistry) {
    registry.register(Arc::new(MathAbs));
    registry.register(Arc::new(MathSqrt));
    registry.register(Arc::new(MathPow));
    registry.register(Arc::new(Rand));
}

/// `math.abs(x)` — absolute value, preserving the numeric representation:
/// float in, float out; otherwise integral.
pub struct MathAbs;

impl ExprFunction for MathAbs {
    fn name(&self) -> &str {
        "math.abs"
    }

    fn call(&self, ctx: &EvalContext<'_>, args: &[Value]) -> EvalResult {
        require_arity(self.name(), args, 1)?;
        match number_arg(self.name(), args, 0, "x", ctx)? {
            Number::Float(f) => Ok(Value::Float(f.abs())),
            Number::Int(n) => n
                .checked_abs()
                .map(Value::Int)
                .ok_or_else(|| integer_overflow("absolute value")),
        }
    }
}

/// `math.sqrt(x)` — square root, always floating-point.
pub struct MathSqrt;

impl ExprFunction for MathSqrt {
    fn name(&self) -> &str {
        "math.sqrt"
    }

    fn call(&self, ctx: &EvalContext<'_>, args: &[Value]) -> EvalResult {
        require_arity(self.name(), args, 1)?;
        let x = number_arg(self.name(), args, 0, "x", ctx)?;
        Ok(Value::Float(x.as_f64().sqrt()))
    }
}

/// `math.pow(base, exp)` — exponentiation, always floating-point.
pub struct MathPow;

impl ExprFunction for MathPow {
    fn name(&self) -> &str {
        "math.pow"
    }

    fn call(&self, ctx: &EvalContext<'_>, args: &[Value]) -> EvalResult {
        require_arity(self.name(), args, 2)?;
        let base = number_arg(self.name(), args, 0, "base", ctx)?;
        let exp = number_arg(self.name(), args, 1, "exp", ctx)?;
        Ok(Value::Float(base.as_f64().powf(exp.as_f64())))
    }
}

/// `rand()` — a float in `[0.0, 1.0)`; each call is independent, with no
/// reproducibility guarantee.
pub struct Rand;

impl ExprFunction for Rand {
    fn name(&self) -> &str {
        "rand"
    }

    fn call(&self, _ctx: &EvalContext<'_>, args: &[Value]) -> EvalResult {
        require_arity(self.name(), args, 0)?;
        Ok(Value::Float(rand::thread_rng().gen::<f64>()))
    }
}
