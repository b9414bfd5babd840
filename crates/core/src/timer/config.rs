//! Timer construction parameters
//!
//! [`TimerConfig`] is the one input every timer is built from. All fields
//! have defaults so callers only name what differs.

use super::state::TimerState;
use crate::duration::TimeUnit;

/// Construction parameters for a [`Timer`](super::Timer).
///
/// # Example
///
/// ```
/// use poll_timer_core::timer::{TimerConfig, TimerState};
/// use poll_timer_core::TimeUnit;
///
/// let config = TimerConfig::seconds(5)
///     .with_initial_state(TimerState::Stopped)
///     .with_stopped_return_value(u32::MAX);
///
/// assert_eq!(config.unit, TimeUnit::Seconds);
/// assert_eq!(config.duration, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    /// Interval length, expressed in `unit`
    pub duration: u32,
    /// Unit durations are given in and time queries report in
    pub unit: TimeUnit,
    /// State right after construction
    pub initial_state: TimerState,
    /// Value time queries return while the timer is stopped
    pub stopped_return_value: u32,
    /// Value `first_trigger` latches once the timer has triggered
    pub first_trigger_response: bool,
    /// Whether a registry accepts this timer for broadcast resets
    pub registered: bool,
    /// Signed adjustment added to every millisecond counter read
    pub ms_offset: i32,
    /// Signed adjustment added to every microsecond counter read
    pub us_offset: i32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            duration: 0,
            unit: TimeUnit::Milliseconds,
            initial_state: TimerState::Running,
            stopped_return_value: 0,
            first_trigger_response: true,
            registered: true,
            ms_offset: 0,
            us_offset: 0,
        }
    }
}

impl TimerConfig {
    /// Config for an interval of `duration` in `unit`.
    pub fn new(duration: u32, unit: TimeUnit) -> Self {
        Self {
            duration,
            unit,
            ..Self::default()
        }
    }

    pub fn micros(duration: u32) -> Self {
        Self::new(duration, TimeUnit::Microseconds)
    }

    pub fn millis(duration: u32) -> Self {
        Self::new(duration, TimeUnit::Milliseconds)
    }

    pub fn seconds(duration: u32) -> Self {
        Self::new(duration, TimeUnit::Seconds)
    }

    pub fn minutes(duration: u32) -> Self {
        Self::new(duration, TimeUnit::Minutes)
    }

    pub fn with_initial_state(mut self, state: TimerState) -> Self {
        self.initial_state = state;
        self
    }

    pub fn with_stopped_return_value(mut self, value: u32) -> Self {
        self.stopped_return_value = value;
        self
    }

    pub fn with_first_trigger_response(mut self, response: bool) -> Self {
        self.first_trigger_response = response;
        self
    }

    /// Keeps the timer out of registry broadcasts.
    pub fn unregistered(mut self) -> Self {
        self.registered = false;
        self
    }

    pub fn with_ms_offset(mut self, offset: i32) -> Self {
        self.ms_offset = offset;
        self
    }

    pub fn with_us_offset(mut self, offset: i32) -> Self {
        self.us_offset = offset;
        self
    }
}
