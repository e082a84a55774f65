//! Opaque host object references.
//!
//! The core never interprets a host object; it only needs equality and a
//! textual description. Everything else (property access, unwrapping to a
//! primitive) happens in the environment collaborator before the value
//! reaches an operator.

use std::any::Any;
use std::fmt;

/// A host-supplied object carried through evaluation unchanged.
///
/// Implementors decide what equality means for their objects via
/// [`HostObject::host_eq`]; the default is "never equal", in which case
/// `Ref` equality falls back to allocation identity (the same handle
/// compared against itself).
pub trait HostObject: Any + Send + Sync {
    /// Textual description used for string concatenation and display.
    fn describe(&self) -> String;

    /// Host-delegated equality against another host object.
    ///
    /// Called only after allocation-identity comparison fails. The default
    /// declines, leaving identity as the sole equality.
    fn host_eq(&self, _other: &dyn HostObject) -> bool {
        false
    }

    /// Downcasting access for hosts that need their concrete type back.
    fn as_any(&self) -> &dyn Any;
}

impl fmt::Debug for dyn HostObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostObject({})", self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Token(u32);

    impl HostObject for Token {
        fn describe(&self) -> String {
            format!("token#{}", self.0)
        }

        fn host_eq(&self, other: &dyn HostObject) -> bool {
            other
                .as_any()
                .downcast_ref::<Token>()
                .is_some_and(|t| t.0 == self.0)
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn describe_and_downcast() {
        let t = Token(7);
        assert_eq!(t.describe(), "token#7");
        assert!(t.host_eq(&Token(7)));
        assert!(!t.host_eq(&Token(8)));
    }
}
