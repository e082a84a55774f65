//! Runtime values for the Rill expression engine.
//!
//! Every datum flowing through an expression is a [`Value`]: a closed tagged
//! union over nil, booleans, 64-bit integers, doubles, strings, compiled
//! regular expression patterns, and opaque host references. Values are
//! immutable once constructed; operators always build new values.
//!
//! Heap-backed variants (`Str`, `Pattern`, `Ref`) allocate through the
//! [`Heap`] wrapper, whose constructor is private to this module — external
//! code must use the factory methods (`Value::string`, `Value::pattern`,
//! `Value::reference`). All heap types use `Arc` internally, so values are
//! safely shared across concurrent evaluations.
//!
//! # Structural equality vs. operator equality
//!
//! `PartialEq for Value` is structural and strict per variant: it is what
//! tests and hosts use to compare results. The expression language's own
//! `==` operator (which promotes `Int` against `Float` inside the numeric
//! family) lives in the operator engine, not here.

mod heap;
mod host;
mod pattern;

use std::fmt;

use crate::errors::{invalid_pattern, EvalError};

pub use heap::Heap;
pub use host::HostObject;
pub use pattern::PatternValue;

/// The tag of a [`Value`], used in decision tables and error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Nil,
    Bool,
    Int,
    Float,
    Str,
    Pattern,
    Ref,
}

impl ValueKind {
    /// Lowercase name used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Nil => "nil",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Str => "string",
            ValueKind::Pattern => "pattern",
            ValueKind::Ref => "ref",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime value in the Rill expression engine.
#[derive(Clone)]
pub enum Value {
    /// Absence of a bound identifier, or the explicit `nil` literal.
    Nil,
    /// Boolean value.
    Bool(bool),
    /// Integral numeric; arithmetic on two `Int`s never becomes floating-point.
    Int(i64),
    /// Floating-point numeric.
    Float(f64),
    /// Owned text.
    Str(Heap<String>),
    /// Compiled regular expression; identity is the source text.
    Pattern(Heap<PatternValue>),
    /// Opaque host object the core never interprets.
    Ref(Heap<dyn HostObject>),
}

// Factory methods (the only way to construct heap-backed variants)

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Compile a pattern value from its source text.
    ///
    /// An invalid regular expression is an
    /// [`InvalidPattern`](crate::errors::EvalErrorKind::InvalidPattern)
    /// error carrying the source and the compiler's diagnostic.
    pub fn pattern(source: impl Into<String>) -> Result<Self, EvalError> {
        let source = source.into();
        let compiled =
            PatternValue::compile(source.as_str()).map_err(|e| invalid_pattern(&source, &e))?;
        Ok(Value::Pattern(Heap::new(compiled)))
    }

    /// Wrap a host object as an opaque reference.
    #[inline]
    pub fn reference(object: impl HostObject) -> Self {
        let shared: std::sync::Arc<dyn HostObject> = std::sync::Arc::new(object);
        Value::Ref(Heap::from_arc(shared))
    }
}

// Accessors

impl Value {
    /// Whether this is the nil value.
    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Try to read an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to read a float. Does not promote integers; promotion is the
    /// coercion layer's concern.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to read a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to read a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to read a pattern.
    pub fn as_pattern(&self) -> Option<&PatternValue> {
        match self {
            Value::Pattern(p) => Some(p),
            _ => None,
        }
    }

    /// The tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Nil => ValueKind::Nil,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::Pattern(_) => ValueKind::Pattern,
            Value::Ref(_) => ValueKind::Ref,
        }
    }

    /// Type name for error messages.
    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Canonical text form, used when `+` overloads to concatenation.
    ///
    /// Numerics use Rust's shortest round-trippable decimal form; patterns
    /// contribute their source text; references delegate to the host's
    /// description.
    pub fn canonical_text(&self) -> String {
        match self {
            Value::Nil => "nil".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Str(s) => (**s).clone(),
            Value::Pattern(p) => p.source().to_string(),
            Value::Ref(r) => r.describe(),
        }
    }
}

// Trait implementations

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "Nil"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(x) => write!(f, "Float({x})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Pattern(p) => write!(f, "{:?}", &**p),
            Value::Ref(r) => write!(f, "Ref({})", r.describe()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "\"{}\"", &**s),
            Value::Pattern(p) => write!(f, "/{}/", p.source()),
            Value::Ref(r) => write!(f, "<ref {}>", r.describe()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            // IEEE equality: NaN != NaN, -0.0 == 0.0
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Pattern(a), Value::Pattern(b)) => a == b,
            (Value::Ref(a), Value::Ref(b)) => {
                Heap::same_allocation(a, b) || a.host_eq(&**b)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::any::Any;

    struct Handle(&'static str);

    impl HostObject for Handle {
        fn describe(&self) -> String {
            self.0.to_string()
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn kinds_and_names() {
        assert_eq!(Value::Nil.kind(), ValueKind::Nil);
        assert_eq!(Value::Int(1).type_name(), "int");
        assert_eq!(Value::string("x").type_name(), "string");
        assert_eq!(Value::pattern("a").unwrap().type_name(), "pattern");
    }

    #[test]
    fn canonical_text_table() {
        assert_eq!(Value::Nil.canonical_text(), "nil");
        assert_eq!(Value::Bool(true).canonical_text(), "true");
        assert_eq!(Value::Bool(false).canonical_text(), "false");
        assert_eq!(Value::Int(-7).canonical_text(), "-7");
        assert_eq!(Value::Float(3.5).canonical_text(), "3.5");
        assert_eq!(Value::string("abc").canonical_text(), "abc");
        assert_eq!(Value::pattern(r"\d+").unwrap().canonical_text(), r"\d+");
        assert_eq!(
            Value::reference(Handle("order-17")).canonical_text(),
            "order-17"
        );
    }

    #[test]
    fn display_forms() {
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::string("hi").to_string(), "\"hi\"");
        assert_eq!(Value::pattern("a+").unwrap().to_string(), "/a+/");
    }

    #[test]
    fn structural_equality_is_strict() {
        assert_eq!(Value::Nil, Value::Nil);
        assert_eq!(Value::Int(3), Value::Int(3));
        assert_ne!(Value::Int(3), Value::Float(3.0));
        assert_ne!(Value::Nil, Value::Int(0));
        assert_ne!(Value::string("1"), Value::Int(1));
    }

    #[test]
    fn pattern_equality_by_source() {
        let a = Value::pattern("a+").unwrap();
        let b = Value::pattern("a+").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_pattern_is_structured() {
        let err = Value::pattern("(unclosed").unwrap_err();
        match err.kind {
            crate::errors::EvalErrorKind::InvalidPattern { source, .. } => {
                assert_eq!(source, "(unclosed");
            }
            other => panic!("expected InvalidPattern, got {other:?}"),
        }
    }

    #[test]
    fn ref_equality_is_identity_by_default() {
        let a = Value::reference(Handle("h"));
        let b = a.clone();
        let c = Value::reference(Handle("h"));
        assert_eq!(a, b);
        // Same description, different allocation, no host_eq override.
        assert_ne!(a, c);
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::Int(5).as_int(), Some(5));
        assert_eq!(Value::Float(5.0).as_int(), None);
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::string("s").as_str(), Some("s"));
        assert!(Value::Nil.is_nil());
        assert!(!Value::Int(0).is_nil());
    }
}
