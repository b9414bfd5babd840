//! Non-blocking interval timer
//!
//! A [`Timer`] answers one question each time it is polled: has the
//! configured duration elapsed since the last mark? It never blocks, so a
//! cooperative control loop can poll many timers every iteration.
//!
//! # Components
//!
//! - [`config`]: construction parameters ([`TimerConfig`])
//! - [`state`]: running/stopped state machine and call options
//!
//! # Trigger flavours
//!
//! - [`Timer::triggered`]: restarts from *now* on trigger ("at least every N")
//! - [`Timer::triggered_on_duration`]: realigns to the last interval
//!   boundary, so a periodic schedule never drifts
//! - [`Timer::first_trigger`]: latches after the first trigger until reset
//!
//! # Example
//!
//! ```
//! use poll_timer_core::traits::MockClock;
//! use poll_timer_core::timer::{Timer, TimerConfig};
//!
//! let clock = MockClock::new();
//! let mut heartbeat = Timer::new(&clock, TimerConfig::millis(500));
//!
//! assert!(!heartbeat.triggered());
//! clock.advance_ms(500);
//! assert!(heartbeat.triggered());
//! assert!(!heartbeat.triggered()); // restarted from now
//! ```

pub mod config;
pub mod state;

pub use config::TimerConfig;
pub use state::{MissedCycles, ResetOption, TimerState};

use crate::duration::{ClockFamily, Duration, TimeUnit};
use crate::traits::time::{elapsed_ticks, ClockTick, TickSource};

/// Polled interval timer over a wrapping tick source.
#[derive(Debug, Clone)]
pub struct Timer<C> {
    clock: C,
    start_mark: ClockTick,
    stop_mark: ClockTick,
    duration: Duration,
    unit: TimeUnit,
    state: TimerState,
    stopped_return_value: u32,
    once_triggered: bool,
    first_trigger_response: bool,
    force_next_trigger: bool,
    missed_cycles: u32,
    last_observed_elapsed: ClockTick,
    ms_offset: i32,
    us_offset: i32,
    speed_compensation: u32,
    registered: bool,
}

impl<C: TickSource> Timer<C> {
    /// Creates a timer whose first interval starts now.
    ///
    /// The timer is not registered anywhere. Hand its shared storage to
    /// [`TimerRegistry::register`](crate::registry::TimerRegistry::register),
    /// or build it with
    /// [`TimerRegistry::register_new`](crate::registry::TimerRegistry::register_new),
    /// for it to take part in broadcast resets.
    pub fn new(clock: C, config: TimerConfig) -> Self {
        let family = config.unit.clock_family();
        let mut timer = Self {
            clock,
            start_mark: 0,
            stop_mark: 0,
            duration: Duration::new(config.duration as u64, config.unit)
                .min(Duration::max_for(family)),
            unit: config.unit,
            state: config.initial_state,
            stopped_return_value: config.stopped_return_value,
            once_triggered: false,
            first_trigger_response: config.first_trigger_response,
            force_next_trigger: false,
            missed_cycles: 0,
            last_observed_elapsed: 0,
            ms_offset: config.ms_offset,
            us_offset: config.us_offset,
            speed_compensation: 0,
            registered: config.registered,
        };
        let now = timer.now();
        timer.start_mark = now;
        timer.stop_mark = now;
        timer
    }

    // ------------------------------------------------------------------
    // Clock access
    // ------------------------------------------------------------------

    #[inline]
    fn family(&self) -> ClockFamily {
        self.unit.clock_family()
    }

    fn offset_for(&self, family: ClockFamily) -> i32 {
        match family {
            ClockFamily::Millis => self.ms_offset,
            ClockFamily::Micros => self.us_offset,
        }
    }

    fn now_in(&self, family: ClockFamily) -> ClockTick {
        self.clock
            .ticks(family)
            .wrapping_add_signed(self.offset_for(family))
    }

    /// Current tick of this timer's counter, offset applied.
    #[inline]
    pub fn now(&self) -> ClockTick {
        self.now_in(self.family())
    }

    /// Ticks since the start mark, wraparound-safe.
    ///
    /// Returns the stopped return value while stopped.
    pub fn elapsed_ticks(&self) -> ClockTick {
        if !self.state.is_running() {
            return self.stopped_return_value;
        }
        self.raw_elapsed()
    }

    #[inline]
    fn raw_elapsed(&self) -> ClockTick {
        elapsed_ticks(self.now(), self.start_mark)
    }

    /// Configured duration in ticks of this timer's counter.
    #[inline]
    pub fn duration_ticks(&self) -> ClockTick {
        self.duration.to_ticks(self.family())
    }

    fn threshold_ticks(&self) -> ClockTick {
        self.duration_ticks().saturating_sub(self.speed_compensation)
    }

    fn ticks_to_unit(&self, ticks: ClockTick) -> u32 {
        // A tick is never coarser than the unit, so the result fits.
        Duration::from_ticks(ticks, self.family()).get(self.unit) as u32
    }

    // ------------------------------------------------------------------
    // Trigger queries
    // ------------------------------------------------------------------

    /// Consumes a pending forced trigger, else compares elapsed time.
    fn check_trigger(&mut self) -> bool {
        if core::mem::take(&mut self.force_next_trigger) {
            return true;
        }
        self.raw_elapsed() >= self.threshold_ticks()
    }

    /// True once the duration has elapsed. Does not restart the interval.
    ///
    /// Always `false` while stopped.
    pub fn has_triggered(&mut self) -> bool {
        self.triggered_with(ResetOption::NoReset)
    }

    /// True once the duration has elapsed; restarts the interval from now.
    pub fn triggered(&mut self) -> bool {
        self.triggered_with(ResetOption::WithReset)
    }

    /// Trigger check with an explicit restart policy.
    ///
    /// Restarting from now absorbs whatever polling delay occurred past the
    /// true boundary. Use [`triggered_on_duration`](Self::triggered_on_duration)
    /// when the schedule must stay phase-locked.
    pub fn triggered_with(&mut self, reset: ResetOption) -> bool {
        if !self.state.is_running() {
            return false;
        }
        let elapsed = self.raw_elapsed();
        let triggered = self.check_trigger();
        if triggered {
            self.last_observed_elapsed = elapsed;
            if reset.resets() {
                self.reset();
            }
        }
        triggered
    }

    /// True while the duration has not yet elapsed.
    ///
    /// Also `false` while stopped, so this is not the negation of
    /// [`triggered`](Self::triggered) for a stopped timer.
    pub fn not_triggered(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }
        !self.check_trigger()
    }

    /// Reports the first trigger since the last reset, then keeps reporting
    /// the latched response until the timer is reset.
    pub fn first_trigger(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }
        if self.once_triggered {
            return self.first_trigger_response;
        }
        if self.check_trigger() {
            self.once_triggered = true;
            return self.first_trigger_response;
        }
        false
    }

    /// Forces the next trigger check to report `true` regardless of elapsed time.
    pub fn trigger_next(&mut self) {
        self.force_next_trigger = true;
    }

    /// Periodic trigger that keeps the schedule aligned to whole intervals.
    ///
    /// On trigger the start mark moves forward by the number of whole
    /// intervals that elapsed, not to now. With [`MissedCycles::ReportAll`]
    /// each of those intervals is reported as one `true` across successive
    /// calls. A zero duration always triggers and never counts as missed.
    pub fn triggered_on_duration(&mut self, missed: MissedCycles) -> bool {
        if !self.state.is_running() {
            return false;
        }
        let elapsed = self.raw_elapsed();
        let duration = self.duration_ticks();
        let forced = core::mem::take(&mut self.force_next_trigger);
        let triggered = forced || elapsed >= duration;

        if triggered {
            self.last_observed_elapsed = elapsed;
            if duration == 0 {
                let now = self.now();
                self.reset_to(now);
            } else {
                let cycles = elapsed / duration;
                if cycles > 0 {
                    // cycles * duration <= elapsed, so this cannot overflow
                    let boundary = self.start_mark.wrapping_add(cycles * duration);
                    self.reset_to(boundary);
                    if missed == MissedCycles::ReportAll {
                        self.missed_cycles = self.missed_cycles.saturating_add(cycles);
                    }
                }
            }
        }

        if missed == MissedCycles::ReportAll && self.missed_cycles > 0 {
            self.missed_cycles -= 1;
            return true;
        }
        triggered
    }

    // ------------------------------------------------------------------
    // Time queries
    // ------------------------------------------------------------------

    /// Time left until the next trigger in the current unit, zero once due.
    pub fn time_until_trigger(&self) -> u32 {
        if !self.state.is_running() {
            return self.stopped_return_value;
        }
        let remaining = self.threshold_ticks().saturating_sub(self.raw_elapsed());
        self.ticks_to_unit(remaining)
    }

    /// Time since the last reset in the current unit.
    pub fn time_since_last_reset(&self) -> u32 {
        if !self.state.is_running() {
            return self.stopped_return_value;
        }
        self.ticks_to_unit(self.raw_elapsed())
    }

    /// Configured duration in the current unit. Reported in every state.
    pub fn duration_in_unit(&self) -> u32 {
        self.ticks_to_unit(self.duration_ticks())
    }

    /// Configured duration in canonical form.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Tick at which the current interval began.
    pub fn start_time(&self) -> ClockTick {
        self.start_mark
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Elapsed time recorded at the most recent trigger, in the current unit.
    pub fn last_observed_elapsed(&self) -> u32 {
        self.ticks_to_unit(self.last_observed_elapsed)
    }

    /// Missed intervals still waiting to be reported.
    pub fn missed_cycles(&self) -> u32 {
        self.missed_cycles
    }

    pub fn stopped_return_value(&self) -> u32 {
        self.stopped_return_value
    }

    pub fn participates_in_registry(&self) -> bool {
        self.registered
    }

    // ------------------------------------------------------------------
    // Duration mutation
    // ------------------------------------------------------------------

    fn clamp_to_counter(&self, duration: Duration) -> Duration {
        duration.min(Duration::max_for(self.family()))
    }

    fn apply_reset(&mut self, reset: ResetOption) {
        if reset.resets() {
            self.reset();
        }
    }

    /// Replaces the duration with `value` in the current unit.
    pub fn set_duration(&mut self, value: u32, reset: ResetOption) {
        self.duration = self.clamp_to_counter(Duration::new(value as u64, self.unit));
        self.apply_reset(reset);
    }

    /// Lengthens the duration, saturating at the largest tick value.
    pub fn add_time(&mut self, value: u32, reset: ResetOption) {
        let added = self
            .duration
            .saturating_add(Duration::new(value as u64, self.unit));
        self.duration = self.clamp_to_counter(added);
        self.apply_reset(reset);
    }

    /// Shortens the duration, saturating at zero.
    pub fn take_time(&mut self, value: u32, reset: ResetOption) {
        self.duration = self
            .duration
            .saturating_sub(Duration::new(value as u64, self.unit));
        self.apply_reset(reset);
    }

    /// Changes the unit values are given and reported in.
    ///
    /// Moving between the microsecond and millisecond counters re-expresses
    /// the marks on the new counter, so elapsed time carries over.
    pub fn switch_unit(&mut self, unit: TimeUnit) {
        let old = self.family();
        let new = unit.clock_family();
        if old != new {
            self.start_mark = self.remap_mark(self.start_mark, old, new);
            self.stop_mark = self.remap_mark(self.stop_mark, old, new);
            self.last_observed_elapsed = Duration::from_ticks(self.last_observed_elapsed, old)
                .to_ticks(new);
        }
        self.unit = unit;
        self.duration = self.clamp_to_counter(self.duration);
    }

    fn remap_mark(&self, mark: ClockTick, old: ClockFamily, new: ClockFamily) -> ClockTick {
        let age = Duration::from_ticks(elapsed_ticks(self.now_in(old), mark), old);
        self.now_in(new).wrapping_sub(age.to_ticks(new))
    }

    pub fn set_stopped_return_value(&mut self, value: u32) {
        self.stopped_return_value = value;
    }

    /// Signed adjustment added to every millisecond counter read.
    pub fn set_ms_offset(&mut self, offset: i32) {
        self.ms_offset = offset;
    }

    /// Signed adjustment added to every microsecond counter read.
    pub fn set_us_offset(&mut self, offset: i32) {
        self.us_offset = offset;
    }

    pub fn ms_offset(&self) -> i32 {
        self.ms_offset
    }

    pub fn us_offset(&self) -> i32 {
        self.us_offset
    }

    /// Ticks trimmed off the trigger threshold to absorb known loop overhead.
    ///
    /// Applies to `triggered`, `not_triggered`, `first_trigger` and
    /// `time_until_trigger`. The periodic trigger keeps the raw duration.
    pub fn set_speed_compensation(&mut self, ticks: u32) {
        self.speed_compensation = ticks;
    }

    pub fn speed_compensation(&self) -> u32 {
        self.speed_compensation
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Restarts the interval from now and clears the first-trigger latch.
    pub fn reset(&mut self) {
        let now = self.now();
        self.reset_to(now);
    }

    /// Restarts the interval from an explicit tick.
    ///
    /// A stopped timer also moves its stop mark, so a later resume only
    /// excludes the time stopped after this reset.
    pub fn reset_to(&mut self, start: ClockTick) {
        self.start_mark = start;
        if !self.state.is_running() {
            self.stop_mark = start;
        }
        self.once_triggered = false;
    }

    /// Resumes a stopped timer.
    ///
    /// With [`ResetOption::NoReset`] the start mark moves forward by the
    /// stopped span, so elapsed time excludes it.
    pub fn start(&mut self, reset: ResetOption) {
        if reset.resets() {
            self.reset();
        } else if !self.state.is_running() {
            let stopped_for = elapsed_ticks(self.now(), self.stop_mark);
            self.start_mark = self.start_mark.wrapping_add(stopped_for);
        }
        self.state = TimerState::Running;
    }

    /// Freezes the timer. Time queries return the stopped return value.
    pub fn stop(&mut self) {
        if self.state.is_running() {
            self.stop_mark = self.now();
            self.state = TimerState::Stopped;
        }
    }

    /// Flips the state without moving the start mark.
    pub fn toggle(&mut self) {
        if self.state.is_running() {
            self.stop_mark = self.now();
        }
        self.state = self.state.toggled();
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn is_stopped(&self) -> bool {
        !self.state.is_running()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockClock;

    fn timer(clock: &MockClock, config: TimerConfig) -> Timer<&MockClock> {
        Timer::new(clock, config)
    }

    #[test]
    fn triggers_after_duration() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(100));

        clock.advance_ms(99);
        assert!(!t.triggered());
        clock.advance_ms(1);
        assert!(t.triggered());
        assert_eq!(t.start_time(), 100);
        assert!(!t.triggered());
    }

    #[test]
    fn triggered_restarts_from_now_not_boundary() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(100));

        clock.advance_ms(130);
        assert!(t.triggered());
        assert_eq!(t.start_time(), 130);
        assert_eq!(t.last_observed_elapsed(), 130);
    }

    #[test]
    fn has_triggered_does_not_reset() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(100));

        clock.advance_ms(150);
        assert!(t.has_triggered());
        assert!(t.has_triggered());
        assert_eq!(t.start_time(), 0);
    }

    #[test]
    fn zero_duration_triggers_continuously() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(0));
        assert!(t.triggered());
        assert!(t.triggered());
        assert!(t.triggered_on_duration(MissedCycles::ReportAll));
        assert_eq!(t.missed_cycles(), 0);
    }

    #[test]
    fn elapsed_survives_counter_wrap() {
        let clock = MockClock::new();
        clock.set_ms(u32::MAX as u64 - 50);
        let mut t = timer(&clock, TimerConfig::millis(100));
        assert_eq!(t.start_time(), u32::MAX - 50);

        clock.advance_ms(60);
        assert_eq!(clock.ticks_ms(), 9);
        assert_eq!(t.elapsed_ticks(), 60);
        assert!(!t.triggered());

        clock.advance_ms(40);
        assert!(t.triggered());
    }

    #[test]
    fn wrap_on_every_start_near_modulus() {
        let clock = MockClock::new();
        for before_wrap in [1u64, 2, 50, 99, 100] {
            clock.set_ms(u32::MAX as u64 + 1 - before_wrap);
            let mut t = timer(&clock, TimerConfig::millis(100));
            clock.advance_ms(120);
            assert_eq!(t.elapsed_ticks(), 120);
            assert!(t.has_triggered());
        }
    }

    #[test]
    fn catch_up_reports_each_missed_interval() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(100));

        clock.advance_ms(350);
        assert!(t.triggered_on_duration(MissedCycles::ReportAll));
        // realigned to the 300 tick boundary, not to now
        assert_eq!(t.start_time(), 300);
        assert_eq!(t.missed_cycles(), 2);

        assert!(t.triggered_on_duration(MissedCycles::ReportAll));
        assert!(t.triggered_on_duration(MissedCycles::ReportAll));
        assert!(!t.triggered_on_duration(MissedCycles::ReportAll));

        clock.advance_ms(50);
        assert!(t.triggered_on_duration(MissedCycles::ReportAll));
        assert_eq!(t.start_time(), 400);
    }

    #[test]
    fn catch_up_discard_drops_surplus() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(100));

        clock.advance_ms(350);
        assert!(t.triggered_on_duration(MissedCycles::Discard));
        assert_eq!(t.start_time(), 300);
        assert_eq!(t.missed_cycles(), 0);
        assert!(!t.triggered_on_duration(MissedCycles::Discard));
    }

    #[test]
    fn catch_up_keeps_phase_over_many_periods() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(100));

        // Poll late by 7ms every period; the schedule must not drift.
        for period in 1..=20u32 {
            clock.set_ms((period * 100 + 7) as u64);
            assert!(t.triggered_on_duration(MissedCycles::Discard));
            assert_eq!(t.start_time(), period * 100);
        }
    }

    #[test]
    fn catch_up_across_wrap() {
        let clock = MockClock::new();
        clock.set_ms(u32::MAX as u64 - 149);
        let mut t = timer(&clock, TimerConfig::millis(100));

        clock.advance_ms(250);
        assert!(t.triggered_on_duration(MissedCycles::ReportAll));
        assert_eq!(t.start_time(), 50);
        assert_eq!(t.time_since_last_reset(), 50);
        assert!(t.triggered_on_duration(MissedCycles::ReportAll));
        assert!(!t.triggered_on_duration(MissedCycles::ReportAll));
    }

    #[test]
    fn stopped_queries_return_sentinel() {
        let clock = MockClock::new();
        let mut t = timer(
            &clock,
            TimerConfig::millis(100).with_stopped_return_value(7777),
        );
        clock.advance_ms(40);
        t.stop();
        clock.advance_ms(500);

        assert_eq!(t.time_since_last_reset(), 7777);
        assert_eq!(t.time_since_last_reset(), 7777);
        assert_eq!(t.time_until_trigger(), 7777);
        assert_eq!(t.time_until_trigger(), 7777);
        // configuration queries still report configured values
        assert_eq!(t.duration_in_unit(), 100);
        assert_eq!(t.start_time(), 0);
    }

    #[test]
    fn stopped_timer_never_triggers() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(10));
        t.stop();
        clock.advance_ms(100);
        assert!(!t.triggered());
        assert!(!t.has_triggered());
        assert!(!t.first_trigger());
        assert!(!t.triggered_on_duration(MissedCycles::ReportAll));
    }

    #[test]
    fn not_triggered_is_false_while_stopped() {
        // Both trigger queries report false for a stopped timer; this
        // asymmetry is part of the contract and must not be "fixed".
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(100));
        assert!(t.not_triggered());

        t.stop();
        assert!(!t.not_triggered());
        assert!(!t.triggered());
    }

    #[test]
    fn not_triggered_flips_at_duration() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(100));
        clock.advance_ms(99);
        assert!(t.not_triggered());
        clock.advance_ms(1);
        assert!(!t.not_triggered());
    }

    #[test]
    fn start_excludes_stopped_span() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(100));
        clock.advance_ms(30);
        t.stop();
        clock.advance_ms(1_000);
        t.start(ResetOption::NoReset);

        assert_eq!(t.start_time(), 1_000);
        assert_eq!(t.time_since_last_reset(), 30);
        assert_eq!(t.time_until_trigger(), 70);
    }

    #[test]
    fn start_with_reset_restarts_from_now() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(100));
        clock.advance_ms(30);
        t.stop();
        clock.advance_ms(1_000);
        t.start(ResetOption::WithReset);

        assert_eq!(t.start_time(), 1_030);
        assert_eq!(t.time_since_last_reset(), 0);
    }

    #[test]
    fn start_on_running_timer_keeps_mark() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(100));
        clock.advance_ms(30);
        t.start(ResetOption::NoReset);
        assert_eq!(t.time_since_last_reset(), 30);
    }

    #[test]
    fn initial_state_stopped() {
        let clock = MockClock::new();
        let t = timer(
            &clock,
            TimerConfig::millis(100).with_initial_state(TimerState::Stopped),
        );
        assert!(t.is_stopped());
        assert!(!t.is_running());
    }

    #[test]
    fn toggle_does_not_adjust_start_mark() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(100));
        clock.advance_ms(20);
        t.toggle();
        assert_eq!(t.state(), TimerState::Stopped);
        clock.advance_ms(50);
        t.toggle();
        assert_eq!(t.state(), TimerState::Running);
        assert_eq!(t.time_since_last_reset(), 70);
    }

    #[test]
    fn first_trigger_latches_until_reset() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(100));

        clock.advance_ms(50);
        assert!(!t.first_trigger());
        clock.advance_ms(50);
        assert!(t.first_trigger());
        assert!(t.first_trigger());
        clock.advance_ms(500);
        assert!(t.first_trigger());

        t.reset();
        assert!(!t.first_trigger());
    }

    #[test]
    fn first_trigger_uses_configured_response() {
        let clock = MockClock::new();
        let mut t = timer(
            &clock,
            TimerConfig::millis(10).with_first_trigger_response(false),
        );
        clock.advance_ms(20);
        assert!(!t.first_trigger());
        assert!(!t.first_trigger());
    }

    #[test]
    fn trigger_next_forces_one_trigger() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::seconds(60));
        t.trigger_next();
        assert!(t.triggered());
        assert!(!t.triggered());
        assert_eq!(t.duration_in_unit(), 60);
    }

    #[test]
    fn trigger_next_is_consumed_by_has_triggered() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(100));
        t.trigger_next();
        assert!(t.has_triggered());
        assert!(!t.has_triggered());
    }

    #[test]
    fn take_time_saturates_at_zero() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(100));
        t.take_time(500, ResetOption::NoReset);
        assert_eq!(t.duration_in_unit(), 0);
        assert!(t.duration().is_zero());
    }

    #[test]
    fn add_time_saturates_at_counter_max() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(u32::MAX - 5));
        t.add_time(100, ResetOption::NoReset);
        assert_eq!(t.duration_ticks(), u32::MAX);
        assert_eq!(t.duration_in_unit(), u32::MAX);
    }

    #[test]
    fn minutes_clamp_to_counter_period() {
        let clock = MockClock::new();
        let t = timer(&clock, TimerConfig::minutes(u32::MAX));
        assert_eq!(t.duration_ticks(), u32::MAX);
    }

    #[test]
    fn duration_mutation_with_reset() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(100));
        clock.advance_ms(80);

        t.add_time(50, ResetOption::NoReset);
        assert_eq!(t.duration_in_unit(), 150);
        assert_eq!(t.start_time(), 0);

        t.take_time(20, ResetOption::WithReset);
        assert_eq!(t.duration_in_unit(), 130);
        assert_eq!(t.start_time(), 80);

        t.set_duration(40, ResetOption::NoReset);
        assert_eq!(t.duration_in_unit(), 40);
    }

    #[test]
    fn queries_report_in_unit() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::seconds(5));
        clock.advance_ms(2_500);
        assert_eq!(t.time_since_last_reset(), 2);
        assert_eq!(t.time_until_trigger(), 2);
        assert_eq!(t.duration_in_unit(), 5);
        assert_eq!(t.duration_ticks(), 5_000);
        assert!(!t.triggered());
    }

    #[test]
    fn microsecond_timer_reads_micro_counter() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::micros(250));
        clock.advance(249);
        assert!(!t.triggered());
        clock.advance(1);
        assert!(t.triggered());
    }

    #[test]
    fn switch_unit_keeps_elapsed_across_counters() {
        let clock = MockClock::new();
        clock.set_ms(5_000);
        let mut t = timer(&clock, TimerConfig::millis(1_000));
        clock.advance_ms(250);

        t.switch_unit(TimeUnit::Microseconds);
        assert_eq!(t.unit(), TimeUnit::Microseconds);
        assert_eq!(t.time_since_last_reset(), 250_000);
        assert_eq!(t.duration_in_unit(), 1_000_000);

        t.switch_unit(TimeUnit::Seconds);
        assert_eq!(t.time_since_last_reset(), 0);
        assert_eq!(t.duration_in_unit(), 1);
        assert_eq!(t.duration_ticks(), 1_000);
    }

    #[test]
    fn offset_shifts_clock_reads() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(100));
        t.set_ms_offset(20);
        assert_eq!(t.elapsed_ticks(), 20);
        assert_eq!(t.time_until_trigger(), 80);

        t.set_ms_offset(-5);
        clock.advance_ms(3);
        assert_eq!(t.now(), u32::MAX - 1);
    }

    #[test]
    fn offset_from_config_applies_at_construction() {
        let clock = MockClock::new();
        clock.set_ms(1_000);
        let t = timer(&clock, TimerConfig::millis(100).with_ms_offset(15));
        assert_eq!(t.start_time(), 1_015);
        assert_eq!(t.ms_offset(), 15);
    }

    #[test]
    fn speed_compensation_lowers_threshold() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(100));
        t.set_speed_compensation(10);
        assert_eq!(t.time_until_trigger(), 90);

        clock.advance_ms(90);
        assert!(t.has_triggered());
        assert!(!t.triggered_on_duration(MissedCycles::Discard));
    }

    #[test]
    fn reset_to_sets_start_mark() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(100));
        clock.advance_ms(500);
        t.reset_to(450);
        assert_eq!(t.start_time(), 450);
        assert_eq!(t.time_since_last_reset(), 50);
    }

    #[test]
    fn stopped_return_value_is_mutable() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(100));
        t.stop();
        assert_eq!(t.time_until_trigger(), 0);
        t.set_stopped_return_value(42);
        assert_eq!(t.stopped_return_value(), 42);
        assert_eq!(t.time_until_trigger(), 42);
    }

    #[test]
    fn reset_while_stopped_then_resume_excludes_only_later_pause() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(1_000));
        clock.advance_ms(100);
        t.stop();
        clock.advance_ms(400);
        t.reset();
        clock.advance_ms(100);
        t.start(ResetOption::NoReset);

        assert_eq!(t.start_time(), 600);
        assert_eq!(t.time_since_last_reset(), 0);
        assert_eq!(t.time_until_trigger(), 1_000);
        assert!(!t.triggered());

        clock.advance_ms(1_000);
        assert!(t.triggered());
    }

    #[test]
    fn reset_to_while_stopped_then_resume() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(1_000));
        clock.advance_ms(100);
        t.stop();
        clock.advance_ms(400);
        t.reset_to(450);
        clock.advance_ms(100);
        t.start(ResetOption::NoReset);

        assert_eq!(t.time_since_last_reset(), 0);
        assert!(!t.triggered());
    }

    #[test]
    fn elapsed_ticks_reports_sentinel_while_stopped() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(100).with_stopped_return_value(7));
        clock.advance_ms(30);
        t.stop();

        assert_eq!(t.elapsed_ticks(), 7);
        clock.advance_ms(30);
        assert_eq!(t.elapsed_ticks(), 7);

        t.start(ResetOption::NoReset);
        assert_eq!(t.elapsed_ticks(), 30);
    }

    #[test]
    fn trigger_next_in_periodic_trigger_keeps_phase() {
        let clock = MockClock::new();
        let mut t = timer(&clock, TimerConfig::millis(100));
        clock.advance_ms(40);
        t.trigger_next();

        assert!(t.triggered_on_duration(MissedCycles::ReportAll));
        assert_eq!(t.start_time(), 0);
        assert_eq!(t.missed_cycles(), 0);
        assert!(!t.triggered_on_duration(MissedCycles::ReportAll));

        clock.advance_ms(60);
        assert!(t.triggered_on_duration(MissedCycles::ReportAll));
        assert_eq!(t.start_time(), 100);
    }

    #[test]
    fn switch_unit_while_stopped_keeps_paused_elapsed() {
        let clock = MockClock::new();
        clock.set_ms(5_000);
        let mut t = timer(&clock, TimerConfig::millis(1_000));
        clock.advance_ms(200);
        t.stop();
        clock.advance_ms(300);

        t.switch_unit(TimeUnit::Microseconds);
        assert_eq!(t.time_since_last_reset(), 0);
        clock.advance_ms(100);
        t.start(ResetOption::NoReset);

        assert_eq!(t.time_since_last_reset(), 200_000);
        assert_eq!(t.time_until_trigger(), 800_000);
    }
}
