//! Tick source abstraction for platform-agnostic timing.
//!
//! This module provides the `TickSource` trait that abstracts over the host's
//! free-running tick counters (Embassy, bare SysTick, mock, etc.) so timer
//! logic can be tested on host without embedded dependencies.

use core::cell::Cell;

pub use crate::duration::ClockFamily;

/// One reading of a host tick counter. Counters wrap to zero after `u32::MAX`.
pub type ClockTick = u32;

/// Elapsed ticks from `start` to `now`, correct across one counter wrap.
///
/// When the counter has wrapped (`start > now`) the result is
/// `now + (2^32 - start)`, which is exactly modular subtraction.
#[inline]
pub const fn elapsed_ticks(now: ClockTick, start: ClockTick) -> ClockTick {
    now.wrapping_sub(start)
}

/// Platform-agnostic source of wrapping tick counters.
///
/// Implementations:
/// - `EmbassyClock` (in the root crate) for embedded targets using Embassy
/// - `MockClock` for host testing with controllable time
///
/// # Example
///
/// ```
/// use poll_timer_core::traits::{MockClock, TickSource};
///
/// fn blink_due<T: TickSource>(clock: &T, last_toggle: &mut u32) -> bool {
///     let now = clock.ticks_ms();
///     if clock.elapsed_since(poll_timer_core::traits::ClockFamily::Millis, *last_toggle) >= 500 {
///         *last_toggle = now;
///         return true;
///     }
///     false
/// }
///
/// let clock = MockClock::new();
/// let mut last = 0;
/// assert!(!blink_due(&clock, &mut last));
/// clock.advance_ms(500);
/// assert!(blink_due(&clock, &mut last));
/// ```
pub trait TickSource: Clone {
    /// Current millisecond counter value.
    fn ticks_ms(&self) -> ClockTick;

    /// Current microsecond counter value.
    fn ticks_us(&self) -> ClockTick;

    /// Current value of the counter for `family`.
    #[inline]
    fn ticks(&self, family: ClockFamily) -> ClockTick {
        match family {
            ClockFamily::Millis => self.ticks_ms(),
            ClockFamily::Micros => self.ticks_us(),
        }
    }

    /// Ticks elapsed on `family` since `reference`, wraparound-safe.
    #[inline]
    fn elapsed_since(&self, family: ClockFamily, reference: ClockTick) -> ClockTick {
        elapsed_ticks(self.ticks(family), reference)
    }
}

impl<T: TickSource> TickSource for &T {
    fn ticks_ms(&self) -> ClockTick {
        (**self).ticks_ms()
    }

    fn ticks_us(&self) -> ClockTick {
        (**self).ticks_us()
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock clock for testing with controllable time advancement.
///
/// Time is kept as a 64-bit microsecond count; both counters are derived
/// from it and truncated to 32 bits, so they wrap exactly like hardware
/// counters do.
///
/// # Example
///
/// ```
/// use poll_timer_core::traits::{MockClock, TickSource};
///
/// let clock = MockClock::new();
/// assert_eq!(clock.ticks_us(), 0);
///
/// clock.advance(1000); // Advance 1ms
/// assert_eq!(clock.ticks_us(), 1000);
/// assert_eq!(clock.ticks_ms(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockClock {
    current_us: Cell<u64>,
}

impl MockClock {
    /// Creates a new `MockClock` starting at time 0.
    pub fn new() -> Self {
        Self {
            current_us: Cell::new(0),
        }
    }

    /// Creates a new `MockClock` starting at the specified time.
    pub fn with_initial(us: u64) -> Self {
        Self {
            current_us: Cell::new(us),
        }
    }

    /// Sets the current time in microseconds.
    pub fn set(&self, us: u64) {
        self.current_us.set(us);
    }

    /// Sets the current time in milliseconds.
    pub fn set_ms(&self, ms: u64) {
        self.set(ms.saturating_mul(1_000));
    }

    /// Advances the current time by `us` microseconds.
    pub fn advance(&self, us: u64) {
        self.current_us
            .set(self.current_us.get().saturating_add(us));
    }

    /// Advances the current time by `ms` milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(ms.saturating_mul(1_000));
    }

    /// Raw 64-bit microsecond count, before counter truncation.
    pub fn now_us(&self) -> u64 {
        self.current_us.get()
    }
}

impl TickSource for MockClock {
    fn ticks_ms(&self) -> ClockTick {
        (self.current_us.get() / 1_000) as ClockTick
    }

    fn ticks_us(&self) -> ClockTick {
        self.current_us.get() as ClockTick
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
