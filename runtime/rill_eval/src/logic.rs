//! Short-circuit logical operators and the ternary conditional.
//!
//! These are the only entry points that receive deferred computations
//! instead of resolved values: the right operand of `&&`/`||` and the two
//! branches of `?:` arrive as `FnOnce` thunks, making the "do not evaluate
//! the other side" contract part of the signature. Thunks are plain inline
//! closures, not concurrency — evaluation stays single-threaded and
//! synchronous.

use rill_value::{logical_type_mismatch, non_boolean_condition, EvalResult, LogicalOp, Value};

/// Evaluate `left && right` or `left || right`.
///
/// The right thunk runs only when the left operand does not already
/// determine the result. Both operands must be exactly boolean; a non-bool
/// left fails immediately without ever invoking the thunk, and a non-bool
/// right fails after it.
pub fn evaluate_logical<F>(op: LogicalOp, left: Value, right: F) -> EvalResult
where
    F: FnOnce() -> EvalResult,
{
    let l = left
        .as_bool()
        .ok_or_else(|| logical_type_mismatch(op, &left))?;
    match (op, l) {
        (LogicalOp::And, false) => Ok(Value::Bool(false)),
        (LogicalOp::Or, true) => Ok(Value::Bool(true)),
        _ => {
            let right = right()?;
            let r = right
                .as_bool()
                .ok_or_else(|| logical_type_mismatch(op, &right))?;
            Ok(Value::Bool(r))
        }
    }
}

/// Evaluate `condition ? then : else`.
///
/// The condition must already be resolved and exactly boolean; exactly one
/// branch thunk runs, and the other must produce no observable effect.
pub fn evaluate_ternary<T, E>(condition: Value, then_branch: T, else_branch: E) -> EvalResult
where
    T: FnOnce() -> EvalResult,
    E: FnOnce() -> EvalResult,
{
    let c = condition
        .as_bool()
        .ok_or_else(|| non_boolean_condition(&condition))?;
    if c {
        then_branch()
    } else {
        else_branch()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use rill_value::{EvalError, EvalErrorKind, ValueKind};
    use std::cell::Cell;

    /// Thunk that records whether it ran.
    fn witness(ran: &Cell<bool>, result: EvalResult) -> impl FnOnce() -> EvalResult + '_ {
        move || {
            ran.set(true);
            result
        }
    }

    fn poison() -> EvalResult {
        Err(EvalError::new("thunk must not run"))
    }

    mod and {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn false_short_circuits() {
            let ran = Cell::new(false);
            let result =
                evaluate_logical(LogicalOp::And, Value::Bool(false), witness(&ran, poison()))
                    .unwrap();
            assert_eq!(result, Value::Bool(false));
            assert!(!ran.get());
        }

        #[test]
        fn true_evaluates_right() {
            let ran = Cell::new(false);
            let result = evaluate_logical(
                LogicalOp::And,
                Value::Bool(true),
                witness(&ran, Ok(Value::Bool(true))),
            )
            .unwrap();
            assert_eq!(result, Value::Bool(true));
            assert!(ran.get());
        }

        #[test]
        fn non_bool_left_fails_without_right() {
            let ran = Cell::new(false);
            let err = evaluate_logical(LogicalOp::And, Value::Int(3), witness(&ran, poison()))
                .unwrap_err();
            assert_eq!(
                err.kind,
                EvalErrorKind::LogicalTypeMismatch {
                    op: LogicalOp::And,
                    operand: ValueKind::Int,
                }
            );
            assert!(!ran.get());
        }

        #[test]
        fn non_bool_right_fails() {
            let err = evaluate_logical(LogicalOp::And, Value::Bool(true), || {
                Ok(Value::string("x"))
            })
            .unwrap_err();
            assert_eq!(
                err.kind,
                EvalErrorKind::LogicalTypeMismatch {
                    op: LogicalOp::And,
                    operand: ValueKind::Str,
                }
            );
        }

        #[test]
        fn right_error_propagates() {
            let err =
                evaluate_logical(LogicalOp::And, Value::Bool(true), || Err(EvalError::new("boom")))
                    .unwrap_err();
            assert_eq!(err.message, "boom");
        }
    }

    mod or {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn true_short_circuits() {
            let ran = Cell::new(false);
            let result =
                evaluate_logical(LogicalOp::Or, Value::Bool(true), witness(&ran, poison()))
                    .unwrap();
            assert_eq!(result, Value::Bool(true));
            assert!(!ran.get());
        }

        #[test]
        fn false_evaluates_right() {
            let result = evaluate_logical(LogicalOp::Or, Value::Bool(false), || {
                Ok(Value::Bool(false))
            })
            .unwrap();
            assert_eq!(result, Value::Bool(false));
        }

        #[test]
        fn non_bool_left_fails_without_right() {
            let ran = Cell::new(false);
            let err = evaluate_logical(LogicalOp::Or, Value::Nil, witness(&ran, poison()))
                .unwrap_err();
            assert!(matches!(
                err.kind,
                EvalErrorKind::LogicalTypeMismatch { .. }
            ));
            assert!(!ran.get());
        }
    }

    mod ternary {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn true_takes_then_only() {
            let else_ran = Cell::new(false);
            let result = evaluate_ternary(
                Value::Bool(true),
                || Ok(Value::Int(1)),
                witness(&else_ran, poison()),
            )
            .unwrap();
            assert_eq!(result, Value::Int(1));
            assert!(!else_ran.get());
        }

        #[test]
        fn false_takes_else_only() {
            let then_ran = Cell::new(false);
            let result = evaluate_ternary(
                Value::Bool(false),
                witness(&then_ran, poison()),
                || Ok(Value::Int(2)),
            )
            .unwrap();
            assert_eq!(result, Value::Int(2));
            assert!(!then_ran.get());
        }

        #[test]
        fn skipped_branch_error_is_unobservable() {
            // The unselected branch would fail if invoked; selection must
            // keep it unevaluated.
            let result =
                evaluate_ternary(Value::Bool(true), || Ok(Value::string("yes")), poison);
            assert_eq!(result.unwrap(), Value::string("yes"));
        }

        #[test]
        fn non_bool_condition_fails_before_branches() {
            let then_ran = Cell::new(false);
            let else_ran = Cell::new(false);
            let err = evaluate_ternary(
                Value::string("true"),
                witness(&then_ran, poison()),
                witness(&else_ran, poison()),
            )
            .unwrap_err();
            assert_eq!(
                err.kind,
                EvalErrorKind::NonBooleanCondition {
                    got: ValueKind::Str
                }
            );
            assert!(!then_ran.get());
            assert!(!else_ran.get());
        }

        #[test]
        fn nil_condition_fails() {
            let err = evaluate_ternary(Value::Nil, poison, poison).unwrap_err();
            assert_eq!(
                err.kind,
                EvalErrorKind::NonBooleanCondition {
                    got: ValueKind::Nil
                }
            );
        }
    }
}
