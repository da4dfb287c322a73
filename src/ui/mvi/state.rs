//! Base trait for UI state and the immutable snapshot container.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Marker trait for UI state objects.
///
/// States should be:
/// - Immutable (transitions produce a new snapshot via [`Immutable::with`])
/// - Self-contained (all data needed to derive the view)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Send + Sync + 'static {}

/// Shared, never-mutated snapshot of a state value.
///
/// Cloning is a reference-count bump. A transition goes through [`with`],
/// which clones the value one level deep and leaves the receiver untouched;
/// fields that are themselves `Immutable` are shared with the source, so an
/// unchanged subtree stays reference-identical across transitions.
///
/// [`with`]: Immutable::with
pub struct Immutable<T>(Arc<T>);

impl<T> Immutable<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Reference identity. Two snapshots are `ptr_eq` iff no transition
    /// happened between them.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl<T: Clone> Immutable<T> {
    /// Copy-on-write transition.
    pub fn with(&self, f: impl FnOnce(&mut T)) -> Self {
        let mut next = T::clone(&self.0);
        f(&mut next);
        Self::new(next)
    }

    /// Take the value out, cloning only if the snapshot is still shared.
    pub fn into_inner(self) -> T {
        Arc::try_unwrap(self.0).unwrap_or_else(|shared| T::clone(&shared))
    }
}

impl<T> Clone for Immutable<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Deref for Immutable<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for Immutable<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T: PartialEq> PartialEq for Immutable<T> {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other) || *self.0 == *other.0
    }
}

impl<T: Eq> Eq for Immutable<T> {}

impl<T: fmt::Debug> fmt::Debug for Immutable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: Default> Default for Immutable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for Immutable<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: UiState> UiState for Immutable<T> {}
