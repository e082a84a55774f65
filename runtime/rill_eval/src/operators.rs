//! Binary operator implementations.
//!
//! Direct enum-based dispatch: the type set is fixed, so exhaustive pattern
//! matching is preferred over per-type trait objects — the compiler then
//! guarantees every operator handles every family pairing.
//!
//! Dispatch order encodes operator precedence over the coercion table:
//! `=~` routes to the match engine, `+` checks the string-concatenation
//! overload before anything else, nil participates in equality and ordering
//! against every family, numerics promote, and only then do the per-family
//! tables apply. Anything left over is a cross-family pairing: total
//! equality, type error for everything else.

use std::cmp::Ordering;

use rill_value::{
    division_by_zero, integer_overflow, modulo_by_zero, operator_type_mismatch, BinaryOp,
    EvalResult, Value,
};

use crate::coerce::{promote_numeric, Family, NumericPair};

/// Checked integer arithmetic with overflow handling.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Evaluate a binary operation on two resolved operands.
///
/// This is the engine's main entry point; the external tree-walking driver
/// calls it once per binary node. Logical operators are not `BinaryOp`s —
/// they take thunks and live in [`crate::logic`].
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    if op == BinaryOp::Match {
        return evaluate_match(left, right);
    }
    // `+` overloads to concatenation when either operand is a string; the
    // other side contributes its canonical text. This outranks the nil and
    // numeric rules: `"n=" + 1` and `"v:" + nil` are both concatenations.
    if op == BinaryOp::Add && (left.as_str().is_some() || right.as_str().is_some()) {
        let mut text = left.canonical_text();
        text.push_str(&right.canonical_text());
        return Ok(Value::string(text));
    }
    // Nil equals only nil and orders below every non-nil value, whatever
    // the other family.
    if left.is_nil() || right.is_nil() {
        return eval_nil_binary(&left, &right, op);
    }
    if let Some(pair) = promote_numeric(&left, &right) {
        return match pair {
            NumericPair::Int(a, b) => eval_int_binary(a, b, op),
            NumericPair::Float(a, b) => eval_float_binary(a, b, op),
        };
    }
    match (&left, &right) {
        (Value::Bool(a), Value::Bool(b)) => eval_bool_binary(*a, *b, &left, &right, op),
        (Value::Str(a), Value::Str(b)) => eval_ordered_binary(a.cmp(b), &left, &right, op),
        (Value::Pattern(a), Value::Pattern(b)) => {
            // Pattern identity and order are the source text.
            eval_ordered_binary(a.source().cmp(b.source()), &left, &right, op)
        }
        (Value::Ref(_), Value::Ref(_)) => eval_ref_binary(&left, &right, op),
        _ => eval_cross_family(&left, &right, op),
    }
}

/// Pattern match: `subject =~ pattern`.
///
/// Legal only for a string subject and a pattern matcher, in that order.
/// The result reports a whole-subject match per the pattern's anchoring.
pub fn evaluate_match(subject: Value, matcher: Value) -> EvalResult {
    match (&subject, &matcher) {
        (Value::Str(s), Value::Pattern(p)) => Ok(Value::Bool(p.matches(s))),
        _ => Err(operator_type_mismatch(BinaryOp::Match, &subject, &matcher)),
    }
}

/// Binary operations on integers. Arithmetic is checked; division
/// truncates toward zero and remainder follows the dividend's sign.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked_arith(a.checked_div(b), "division")
            }
        }
        BinaryOp::Mod => {
            if b == 0 {
                Err(modulo_by_zero())
            } else {
                checked_arith(a.checked_rem(b), "remainder")
            }
        }
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::Match => Err(operator_type_mismatch(op, &Value::Int(a), &Value::Int(b))),
    }
}

/// Binary operations on floats. Comparisons use `partial_cmp` for IEEE 754
/// compliance (NaN compares false, -0.0 == 0.0); division by zero follows
/// IEEE semantics rather than erroring.
fn eval_float_binary(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::Float(a + b)),
        BinaryOp::Sub => Ok(Value::Float(a - b)),
        BinaryOp::Mul => Ok(Value::Float(a * b)),
        BinaryOp::Div => Ok(Value::Float(a / b)),
        BinaryOp::Mod => Ok(Value::Float(a % b)),
        BinaryOp::Eq => Ok(Value::Bool(a.partial_cmp(&b) == Some(Ordering::Equal))),
        BinaryOp::NotEq => Ok(Value::Bool(a.partial_cmp(&b) != Some(Ordering::Equal))),
        BinaryOp::Lt => Ok(Value::Bool(a.partial_cmp(&b) == Some(Ordering::Less))),
        BinaryOp::LtEq => Ok(Value::Bool(matches!(
            a.partial_cmp(&b),
            Some(Ordering::Less | Ordering::Equal)
        ))),
        BinaryOp::Gt => Ok(Value::Bool(a.partial_cmp(&b) == Some(Ordering::Greater))),
        BinaryOp::GtEq => Ok(Value::Bool(matches!(
            a.partial_cmp(&b),
            Some(Ordering::Greater | Ordering::Equal)
        ))),
        BinaryOp::Match => Err(operator_type_mismatch(
            op,
            &Value::Float(a),
            &Value::Float(b),
        )),
    }
}

/// Binary operations on booleans: equality only. Short-circuit `&&`/`||`
/// are separate entry points, and booleans have no defined order.
fn eval_bool_binary(a: bool, b: bool, left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        _ => Err(operator_type_mismatch(op, left, right)),
    }
}

/// Equality and ordering over a precomputed total order (strings by
/// content, patterns by source text). Arithmetic on these families is a
/// type error; string `+` was already peeled off as concatenation.
fn eval_ordered_binary(ord: Ordering, left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(ord == Ordering::Equal)),
        BinaryOp::NotEq => Ok(Value::Bool(ord != Ordering::Equal)),
        BinaryOp::Lt => Ok(Value::Bool(ord == Ordering::Less)),
        BinaryOp::LtEq => Ok(Value::Bool(ord != Ordering::Greater)),
        BinaryOp::Gt => Ok(Value::Bool(ord == Ordering::Greater)),
        BinaryOp::GtEq => Ok(Value::Bool(ord != Ordering::Less)),
        _ => Err(operator_type_mismatch(op, left, right)),
    }
}

/// Binary operations involving nil: nil equals only nil and is the
/// universal minimum under ordering, against every family. Arithmetic with
/// nil is a type error (nil-with-string `+` never reaches here).
fn eval_nil_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    let ord = if left.is_nil() && right.is_nil() {
        Ordering::Equal
    } else if left.is_nil() {
        Ordering::Less
    } else {
        Ordering::Greater
    };
    eval_ordered_binary(ord, left, right, op)
}

/// Binary operations on host references: equality by identity or
/// host-delegated comparison; nothing else is defined inside the core.
fn eval_ref_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        _ => Err(operator_type_mismatch(op, left, right)),
    }
}

/// Two different non-nil families: equality is total and false, everything
/// else is a type error.
fn eval_cross_family(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    debug_assert_ne!(Family::of(left), Family::of(right));
    match op {
        BinaryOp::Eq => Ok(Value::Bool(false)),
        BinaryOp::NotEq => Ok(Value::Bool(true)),
        _ => Err(operator_type_mismatch(op, left, right)),
    }
}
