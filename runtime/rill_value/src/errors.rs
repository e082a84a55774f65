//! Error types for expression evaluation.
//!
//! Every illegal operand combination fails loudly with a structured kind —
//! nothing is silently coerced or recovered. `EvalErrorKind` lets callers
//! and tests match on the category instead of parsing message strings;
//! the `#[cold]` factory functions populate both `kind` and `message`, and
//! factory-created errors always satisfy `message == kind.to_string()`.

use std::fmt;

use crate::op::{BinaryOp, LogicalOp, UnaryOp};
use crate::value::{Value, ValueKind};

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Operator / type
    /// Binary operator applied to an operand-family pairing the coercion
    /// rules reject.
    OperatorTypeMismatch {
        op: BinaryOp,
        left: ValueKind,
        right: ValueKind,
    },
    /// Unary operator applied to an unsupported operand.
    UnaryTypeMismatch { op: UnaryOp, operand: ValueKind },
    /// Logical operator received a non-boolean operand.
    LogicalTypeMismatch { op: LogicalOp, operand: ValueKind },
    /// Ternary condition was not a boolean.
    NonBooleanCondition { got: ValueKind },

    // Arithmetic
    DivisionByZero,
    ModuloByZero,
    IntegerOverflow { operation: String },

    // Functions
    /// Function called with the wrong number of arguments.
    ArityMismatch {
        function: String,
        expected: usize,
        got: usize,
    },
    /// Function argument missing or of an unusable kind.
    IllegalArgument { function: String, message: String },
    /// Call to a name absent from the registry.
    UnresolvedFunction { name: String },

    // Patterns
    /// Pattern source text failed to compile.
    InvalidPattern { source: String, message: String },

    /// Catch-all for errors with no structured category.
    Custom { message: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OperatorTypeMismatch { op, left, right } => {
                write!(
                    f,
                    "operator `{}` cannot be applied to {left} and {right}",
                    op.as_symbol()
                )
            }
            Self::UnaryTypeMismatch { op, operand } => {
                write!(
                    f,
                    "unary `{}` cannot be applied to {operand}",
                    op.as_symbol()
                )
            }
            Self::LogicalTypeMismatch { op, operand } => {
                write!(
                    f,
                    "operator `{}` requires boolean operands, got {operand}",
                    op.as_symbol()
                )
            }
            Self::NonBooleanCondition { got } => {
                write!(f, "ternary condition must be boolean, got {got}")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloByZero => write!(f, "modulo by zero"),
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }
            Self::ArityMismatch {
                function,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "{function} expects {expected} {arg_word}, got {got}")
            }
            Self::IllegalArgument { function, message } => {
                write!(f, "illegal argument to {function}: {message}")
            }
            Self::UnresolvedFunction { name } => {
                write!(f, "unresolved function: {name}")
            }
            Self::InvalidPattern { source, message } => {
                write!(f, "invalid pattern /{source}/: {message}")
            }
            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured category; match on this, not the message.
    pub kind: EvalErrorKind,
    /// Human-readable message. For factory-created errors this equals
    /// `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    /// Create an error with just a message.
    ///
    /// Uses `Custom` kind. Prefer the specific factory functions when a
    /// structured kind exists.
    pub fn new(message: impl Into<String>) -> Self {
        let msg = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: msg.clone(),
            },
            message: msg,
        }
    }

    /// Create an error from a structured kind.
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Operator errors

/// Binary operator rejected its operand pairing.
#[cold]
pub fn operator_type_mismatch(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::OperatorTypeMismatch {
        op,
        left: left.kind(),
        right: right.kind(),
    })
}

/// Unary operator rejected its operand.
#[cold]
pub fn unary_type_mismatch(op: UnaryOp, operand: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnaryTypeMismatch {
        op,
        operand: operand.kind(),
    })
}

/// Logical operator received a non-boolean operand.
#[cold]
pub fn logical_type_mismatch(op: LogicalOp, operand: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::LogicalTypeMismatch {
        op,
        operand: operand.kind(),
    })
}

/// Ternary condition was not a boolean.
#[cold]
pub fn non_boolean_condition(got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NonBooleanCondition { got: got.kind() })
}

// Arithmetic errors

/// Division by zero.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Modulo by zero.
#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

/// Integer overflow.
#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

// Function errors

/// Wrong number of arguments.
#[cold]
pub fn arity_mismatch(function: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        function: function.to_string(),
        expected,
        got,
    })
}

/// Argument missing or of an unusable kind.
#[cold]
pub fn illegal_argument(function: &str, message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IllegalArgument {
        function: function.to_string(),
        message: message.into(),
    })
}

/// Name absent from the function registry.
#[cold]
pub fn unresolved_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnresolvedFunction {
        name: name.to_string(),
    })
}

// Pattern errors

/// Pattern source failed to compile.
#[cold]
pub fn invalid_pattern(source: &str, error: &regex::Error) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidPattern {
        source: source.to_string(),
        message: error.to_string(),
    })
}
