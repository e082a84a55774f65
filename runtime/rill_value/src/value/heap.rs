//! Heap wrapper for enforced shared ownership.
//!
//! `Heap<T>` wraps `Arc<T>` and is the only way to allocate heap-backed
//! values in the value system. The constructor is `pub(super)`, so external
//! code must go through `Value`'s factory methods (`Value::string`,
//! `Value::pattern`, ...). Values are immutable once constructed, and `Arc`
//! makes them safely shareable between concurrent evaluations.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A shared, immutable heap allocation.
///
/// `#[repr(transparent)]` keeps the layout identical to `Arc<T>`; the
/// wrapper only restricts who may allocate.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T> Heap<T> {
    /// Allocate a new shared value. Only visible to the value module.
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Wrap an existing allocation. Unsized coercions (`Arc<T>` to
    /// `Arc<dyn Trait>`) happen on the `Arc` before wrapping.
    #[inline]
    pub(super) fn from_arc(inner: Arc<T>) -> Self {
        Heap(inner)
    }

    /// Whether two handles point at the same allocation.
    ///
    /// Used for `Ref` identity equality; content equality goes through the
    /// inner type's `PartialEq`.
    #[inline]
    pub fn same_allocation(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> AsRef<T> for Heap<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + Eq> Eq for Heap<T> {}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deref_reaches_inner() {
        let h = Heap::new(String::from("abc"));
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn clone_shares_allocation() {
        let a = Heap::new(vec![1, 2, 3]);
        let b = a.clone();
        assert!(Heap::same_allocation(&a, &b));
        assert_eq!(*a, *b);
    }

    #[test]
    fn equality_is_by_content() {
        let a = Heap::new(String::from("x"));
        let b = Heap::new(String::from("x"));
        assert!(!Heap::same_allocation(&a, &b));
        assert_eq!(a, b);
    }
}
