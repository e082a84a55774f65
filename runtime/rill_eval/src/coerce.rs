//! Type-coercion rules: comparability families and numeric promotion.
//!
//! Pure functions over [`Value`] tags. The operator engine consults these
//! tables before computing anything; every legality decision lives either
//! here or in the engine's exhaustive matches, never scattered across
//! per-type methods.

use rill_value::Value;

/// The comparability class of a value.
///
/// `Int` and `Float` share the numeric family; every other variant is its
/// own family. Ordering comparisons require identical families, with nil
/// permitted against anything as the universal minimum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    Nil,
    Bool,
    Numeric,
    Str,
    Pattern,
    Ref,
}

impl Family {
    /// Classify a value.
    pub fn of(value: &Value) -> Family {
        match value {
            Value::Nil => Family::Nil,
            Value::Bool(_) => Family::Bool,
            Value::Int(_) | Value::Float(_) => Family::Numeric,
            Value::Str(_) => Family::Str,
            Value::Pattern(_) => Family::Pattern,
            Value::Ref(_) => Family::Ref,
        }
    }
}

/// A pair of numeric operands promoted to a common representation.
///
/// Two `Int`s stay integral; any `Float` widens both sides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumericPair {
    Int(i64, i64),
    Float(f64, f64),
}

/// Promote two operands to a common numeric representation.
///
/// Returns `None` when either operand is not numeric; the caller then falls
/// through to the non-numeric decision tables.
pub fn promote_numeric(left: &Value, right: &Value) -> Option<NumericPair> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(NumericPair::Int(*a, *b)),
        (Value::Int(a), Value::Float(b)) => Some(NumericPair::Float(int_to_float(*a), *b)),
        (Value::Float(a), Value::Int(b)) => Some(NumericPair::Float(*a, int_to_float(*b))),
        (Value::Float(a), Value::Float(b)) => Some(NumericPair::Float(*a, *b)),
        _ => None,
    }
}

/// Widen an integer to floating-point.
///
/// The single cast site for numeric promotion. Magnitudes beyond 2^53 lose
/// precision, matching the promotion the surface language defines.
#[inline]
#[expect(
    clippy::cast_precision_loss,
    reason = "Int-to-float promotion is defined as IEEE widening"
)]
pub fn int_to_float(n: i64) -> f64 {
    n as f64
}
