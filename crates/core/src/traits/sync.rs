//! Synchronized state abstraction for timers touched from more than one context.
//!
//! Timers carry no internal locking. When a timer is shared, for example
//! between the main loop and an interrupt handler or with a
//! [`TimerRegistry`](crate::registry::TimerRegistry), it is wrapped in a
//! `SharedState` implementation that provides the exclusion.

/// Platform-agnostic synchronized state access.
///
/// This trait abstracts over different synchronization mechanisms:
/// - `EmbassyState<T>` (root crate) using Embassy's critical-section Mutex
/// - `MockState<T>` using RefCell for single-context use and host tests
///
/// # Example
///
/// ```
/// use poll_timer_core::traits::{MockState, SharedState};
///
/// fn bump<S: SharedState<u32>>(state: &S) -> u32 {
///     state.with_mut(|value| {
///         *value += 1;
///         *value
///     })
/// }
///
/// let counter = MockState::new(0u32);
/// assert_eq!(bump(&counter), 1);
/// ```
pub trait SharedState<T> {
    /// Access state immutably.
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R;

    /// Access state mutably.
    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R;
}

// ============================================================================
// Mock Implementation
// ============================================================================

/// Synchronized state using RefCell for a single execution context.
///
/// # Panics
///
/// Panics if borrowing rules are violated (e.g., calling `with_mut` while
/// `with` is active on the same value).
pub struct MockState<T> {
    inner: core::cell::RefCell<T>,
}

impl<T> MockState<T> {
    /// Creates a new `MockState` wrapping the given value.
    pub const fn new(value: T) -> Self {
        Self {
            inner: core::cell::RefCell::new(value),
        }
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

impl<T> From<T> for MockState<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> SharedState<T> for MockState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.inner.borrow())
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut self.inner.borrow_mut())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
