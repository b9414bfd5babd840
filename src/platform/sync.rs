//! Critical-section timer storage for timers touched from interrupts.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};
use poll_timer_core::traits::SharedState;

/// Timer storage guarded by a critical section.
///
/// Needed only when a timer is polled from the main loop and also reset or
/// retuned from an interrupt handler. Every timer operation is O(1), so the
/// critical section stays short.
///
/// ```ignore
/// use poll_timer::platform::{EmbassyClock, EmbassyState};
/// use poll_timer::{TimerConfig, TimerRegistry};
///
/// let mut slot = None;
/// let mut registry: TimerRegistry<'_, _, EmbassyState<_>, 8> = TimerRegistry::new();
/// let (blink, _) = registry
///     .register_new(&mut slot, EmbassyClock, TimerConfig::millis(500))
///     .ok()?;
/// ```
pub struct EmbassyState<T>(Mutex<CriticalSectionRawMutex, RefCell<T>>);

impl<T> EmbassyState<T> {
    /// Usable in `static` items.
    pub const fn new(value: T) -> Self {
        Self(Mutex::new(RefCell::new(value)))
    }
}

impl<T> From<T> for EmbassyState<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> SharedState<T> for EmbassyState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.0.lock(|timer| f(&timer.borrow()))
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        self.0.lock(|timer| f(&mut timer.borrow_mut()))
    }
}
