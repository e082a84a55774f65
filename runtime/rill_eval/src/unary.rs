//! Unary operator implementations.
//!
//! Negation is numeric-only, logical not is boolean-only; there is no
//! truthiness coercion anywhere in the engine.

use rill_value::{integer_overflow, unary_type_mismatch, EvalResult, UnaryOp, Value};

/// Evaluate a unary operation on a resolved operand.
pub fn evaluate_unary(operand: Value, op: UnaryOp) -> EvalResult {
    match (&operand, op) {
        (Value::Int(n), UnaryOp::Neg) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        (Value::Float(f), UnaryOp::Neg) => Ok(Value::Float(-f)),
        (Value::Bool(b), UnaryOp::Not) => Ok(Value::Bool(!b)),
        _ => Err(unary_type_mismatch(op, &operand)),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use rill_value::EvalErrorKind;

    mod negation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn int() {
            assert_eq!(
                evaluate_unary(Value::Int(5), UnaryOp::Neg).unwrap(),
                Value::Int(-5)
            );
            assert_eq!(
                evaluate_unary(Value::Int(-5), UnaryOp::Neg).unwrap(),
                Value::Int(5)
            );
        }

        #[test]
        fn int_min_overflow_errors() {
            let err = evaluate_unary(Value::Int(i64::MIN), UnaryOp::Neg).unwrap_err();
            assert_eq!(
                err.kind,
                EvalErrorKind::IntegerOverflow {
                    operation: "negation".to_string()
                }
            );
        }

        #[test]
        fn float() {
            assert_eq!(
                evaluate_unary(Value::Float(3.5), UnaryOp::Neg).unwrap(),
                Value::Float(-3.5)
            );
        }

        #[test]
        fn float_zero_flips_sign() {
            let result = evaluate_unary(Value::Float(0.0), UnaryOp::Neg).unwrap();
            match result {
                Value::Float(f) => assert!(f == 0.0 && f.is_sign_negative()),
                other => panic!("expected float, got {other:?}"),
            }
        }
    }

    mod logical_not {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn flips_booleans() {
            assert_eq!(
                evaluate_unary(Value::Bool(true), UnaryOp::Not).unwrap(),
                Value::Bool(false)
            );
            assert_eq!(
                evaluate_unary(Value::Bool(false), UnaryOp::Not).unwrap(),
                Value::Bool(true)
            );
        }
    }

    mod type_errors {
        use super::*;
        use pretty_assertions::assert_eq;
        use rill_value::ValueKind;

        #[test]
        fn negate_bool_fails() {
            let err = evaluate_unary(Value::Bool(true), UnaryOp::Neg).unwrap_err();
            assert_eq!(
                err.kind,
                EvalErrorKind::UnaryTypeMismatch {
                    op: UnaryOp::Neg,
                    operand: ValueKind::Bool,
                }
            );
        }

        #[test]
        fn negate_string_fails() {
            assert!(evaluate_unary(Value::string("x"), UnaryOp::Neg).is_err());
        }

        #[test]
        fn negate_nil_fails() {
            assert!(evaluate_unary(Value::Nil, UnaryOp::Neg).is_err());
        }

        #[test]
        fn not_on_numerics_fails() {
            // No truthiness: !1 and !0.0 are type errors, not booleans.
            assert!(evaluate_unary(Value::Int(1), UnaryOp::Not).is_err());
            assert!(evaluate_unary(Value::Float(0.0), UnaryOp::Not).is_err());
        }

        #[test]
        fn not_on_nil_fails() {
            let err = evaluate_unary(Value::Nil, UnaryOp::Not).unwrap_err();
            assert_eq!(
                err.kind,
                EvalErrorKind::UnaryTypeMismatch {
                    op: UnaryOp::Not,
                    operand: ValueKind::Nil,
                }
            );
        }
    }
}
