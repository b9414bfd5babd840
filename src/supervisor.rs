//! Control loop stall supervision
//!
//! A cooperative loop that stalls (long flash write, blocking driver, debug
//! halt) comes back with every timer overdue at once. [`StallSupervisor`]
//! is polled once per loop iteration; when the gap since the previous poll
//! reaches the configured threshold it resynchronizes every registered timer
//! with [`TimerRegistry::reset_all`] so they resume from a common mark
//! instead of firing in a burst.

use poll_timer_core::traits::{SharedState, TickSource};
use poll_timer_core::{ResetOption, Timer, TimerConfig, TimerRegistry};

use crate::config::BuildConfig;
use crate::{log_info, log_warn};

/// Result of one supervisor poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopHealth {
    /// Loop iteration arrived within the threshold
    Nominal,
    /// A stall was detected and all registered timers were reset
    Recovered {
        /// Gap since the previous poll in milliseconds
        gap_ms: u32,
    },
}

/// Detects loop stalls and resynchronizes registered timers.
pub struct StallSupervisor<C> {
    watch: Timer<C>,
    recoveries: u32,
    longest_gap_ms: u32,
}

impl<C: TickSource> StallSupervisor<C> {
    /// Creates a supervisor that treats a gap of `threshold_ms` as a stall.
    pub fn new(clock: C, threshold_ms: u32) -> Self {
        Self {
            watch: Timer::new(clock, TimerConfig::millis(threshold_ms).unregistered()),
            recoveries: 0,
            longest_gap_ms: 0,
        }
    }

    /// Creates a supervisor using the build-time stall threshold.
    pub fn from_build_config(clock: C, config: &BuildConfig) -> Self {
        Self::new(clock, config.stall_threshold_ms)
    }

    /// Checks the gap since the previous poll, resetting all timers on a stall.
    pub fn poll<T, S, const N: usize>(
        &mut self,
        registry: &TimerRegistry<'_, T, S, N>,
    ) -> LoopHealth
    where
        T: TickSource,
        S: SharedState<Timer<T>>,
    {
        let gap_ms = self.watch.time_since_last_reset();
        let stalled = self.watch.has_triggered();
        self.watch.reset();
        self.longest_gap_ms = self.longest_gap_ms.max(gap_ms);

        if !stalled {
            return LoopHealth::Nominal;
        }

        log_warn!(
            "loop stalled for {} ms (threshold {} ms)",
            gap_ms,
            self.threshold_ms()
        );
        registry.reset_all(None);
        self.recoveries = self.recoveries.saturating_add(1);
        log_info!("resynchronized {} timers", registry.len());

        LoopHealth::Recovered { gap_ms }
    }

    /// Restarts gap measurement without checking, e.g. before known long work.
    pub fn mark(&mut self) {
        self.watch.reset();
    }

    /// Changes the stall threshold; the current gap measurement continues.
    pub fn set_threshold_ms(&mut self, threshold_ms: u32) {
        self.watch.set_duration(threshold_ms, ResetOption::NoReset);
    }

    pub fn threshold_ms(&self) -> u32 {
        self.watch.duration_in_unit()
    }

    /// Number of stalls recovered from.
    pub fn recoveries(&self) -> u32 {
        self.recoveries
    }

    /// Longest gap between polls seen so far.
    pub fn longest_gap_ms(&self) -> u32 {
        self.longest_gap_ms
    }
}
