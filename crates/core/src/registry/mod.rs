//! Timer registry for broadcast resets
//!
//! The registry keeps non-owning references to caller-owned timers in
//! registration order so that every live timer can be resynchronized with a
//! single [`TimerRegistry::reset_all`] call, e.g. after the control loop
//! wakes from a long stall.
//!
//! The registry is an explicit object owned by the application entry point
//! rather than hidden global state; tests build isolated registries freely.
//!
//! # Limitations
//!
//! There is no removal. Timers are expected to live for the whole program,
//! and the fixed capacity `N` bounds how many may ever be registered.
//!
//! # Example
//!
//! ```
//! use poll_timer_core::registry::{Registration, TimerRegistry};
//! use poll_timer_core::timer::{Timer, TimerConfig};
//! use poll_timer_core::traits::{MockClock, MockState, SharedState};
//!
//! let clock = MockClock::new();
//! let blink = MockState::new(Timer::new(&clock, TimerConfig::millis(500)));
//! let report = MockState::new(Timer::new(&clock, TimerConfig::seconds(2)));
//!
//! let mut registry: TimerRegistry<'_, _, _, 4> = TimerRegistry::new();
//! registry.register(&blink).unwrap();
//! registry.register(&report).unwrap();
//!
//! clock.advance_ms(10_000);
//! registry.reset_all(Some(9_000));
//! assert_eq!(blink.with(|t| t.start_time()), 9_000);
//! assert_eq!(report.with(|t| t.start_time()), 9_000);
//! ```

pub mod error;

pub use error::RegistryError;

use core::marker::PhantomData;

use heapless::Vec;

use crate::timer::{Timer, TimerConfig};
use crate::traits::{ClockTick, SharedState, TickSource};

/// Position of a timer in its registry, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(usize);

impl TimerId {
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Outcome of a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// Timer added at the given position
    Added(TimerId),
    /// Timer opted out of registry participation and was not added
    Skipped,
}

/// Insertion-ordered collection of timer back-references.
///
/// `S` is the shared-state wrapper that owns each timer's storage
/// (`MockState` on host, `EmbassyState` on target).
pub struct TimerRegistry<'a, C, S, const N: usize>
where
    S: SharedState<Timer<C>>,
{
    timers: Vec<&'a S, N>,
    _clock: PhantomData<fn() -> C>,
}

impl<'a, C, S, const N: usize> Default for TimerRegistry<'a, C, S, N>
where
    C: TickSource,
    S: SharedState<Timer<C>>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, C, S, const N: usize> TimerRegistry<'a, C, S, N>
where
    C: TickSource,
    S: SharedState<Timer<C>>,
{
    /// Creates an empty registry.
    pub const fn new() -> Self {
        Self {
            timers: Vec::new(),
            _clock: PhantomData,
        }
    }

    /// Appends a timer.
    ///
    /// Timers whose config opted out of registry participation are skipped.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::AlreadyRegistered`] if this exact timer is present
    /// - [`RegistryError::Full`] if all `N` slots are taken
    pub fn register(&mut self, timer: &'a S) -> Result<Registration, RegistryError> {
        if self.timers.iter().any(|t| core::ptr::eq(*t, timer)) {
            return Err(RegistryError::AlreadyRegistered);
        }
        if !timer.with(|t| t.participates_in_registry()) {
            return Ok(Registration::Skipped);
        }

        let id = TimerId(self.timers.len());
        self.timers
            .push(timer)
            .map_err(|_| RegistryError::Full)?;
        Ok(Registration::Added(id))
    }

    /// Builds a timer into caller-owned storage and registers it in one step.
    ///
    /// `slot` is usually a local or static `Option` that outlives the
    /// registry. The returned reference is the timer's shared storage.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::Full`] if the timer participates and all `N` slots
    ///   are taken; the slot is left untouched
    pub fn register_new(
        &mut self,
        slot: &'a mut Option<S>,
        clock: C,
        config: TimerConfig,
    ) -> Result<(&'a S, Registration), RegistryError>
    where
        S: From<Timer<C>>,
    {
        if config.registered && self.timers.is_full() {
            return Err(RegistryError::Full);
        }
        let timer: &'a S = slot.insert(S::from(Timer::new(clock, config)));
        let registration = self.register(timer)?;
        Ok((timer, registration))
    }

    /// Resets every registered timer, in registration order.
    ///
    /// With `Some(start)` every timer gets the identical start mark. With
    /// `None` each timer restarts from its own counter's current tick.
    pub fn reset_all(&self, new_start: Option<ClockTick>) {
        for timer in self.timers.iter() {
            timer.with_mut(|t| match new_start {
                Some(start) => t.reset_to(start),
                None => t.reset(),
            });
        }
    }

    /// Resets every registered timer to the start mark of timer `id`.
    pub fn reset_all_like(&self, id: TimerId) -> Result<(), RegistryError> {
        let start = self
            .get(id)
            .ok_or(RegistryError::UnknownTimer)?
            .with(|t| t.start_time());
        self.reset_all(Some(start));
        Ok(())
    }

    pub fn get(&self, id: TimerId) -> Option<&'a S> {
        self.timers.get(id.0).copied()
    }

    /// Registered timers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (TimerId, &'a S)> + '_ {
        self.timers
            .iter()
            .enumerate()
            .map(|(i, t)| (TimerId(i), *t))
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}
