//! Canonical duration representation
//!
//! A [`Duration`] holds one span of time as a fixed-point count of
//! microseconds. Every unit-specific view ([`TimeUnit`]) is a pure conversion
//! on read or write, so the same span can be presented in microseconds,
//! milliseconds, seconds, or minutes without any stored aliasing.
//!
//! # Precision
//!
//! - Writing and reading back through the same unit is lossless.
//! - Reading through a coarser unit truncates (e.g. 1_999 ms reads as 1 s).
//! - Values saturate at `u64::MAX` microseconds instead of wrapping.

use core::fmt;

/// Microseconds in one millisecond
pub const MICROS_PER_MILLI: u64 = 1_000;

/// Microseconds in one second
pub const MICROS_PER_SECOND: u64 = 1_000_000;

/// Microseconds in one minute
pub const MICROS_PER_MINUTE: u64 = 60 * MICROS_PER_SECOND;

/// Unit a timer interprets and reports values in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeUnit {
    Microseconds,
    #[default]
    Milliseconds,
    Seconds,
    Minutes,
}

impl TimeUnit {
    /// Number of canonical microseconds in one unit.
    #[inline]
    pub const fn micros_per_unit(self) -> u64 {
        match self {
            TimeUnit::Microseconds => 1,
            TimeUnit::Milliseconds => MICROS_PER_MILLI,
            TimeUnit::Seconds => MICROS_PER_SECOND,
            TimeUnit::Minutes => MICROS_PER_MINUTE,
        }
    }

    /// Hardware counter this unit is measured against.
    ///
    /// Only microsecond timers read the microsecond counter; everything
    /// coarser reads the millisecond counter so it wraps less often.
    #[inline]
    pub const fn clock_family(self) -> ClockFamily {
        match self {
            TimeUnit::Microseconds => ClockFamily::Micros,
            _ => ClockFamily::Millis,
        }
    }

    /// Human-readable unit name.
    pub const fn name(self) -> &'static str {
        match self {
            TimeUnit::Microseconds => "Microseconds",
            TimeUnit::Milliseconds => "Milliseconds",
            TimeUnit::Seconds => "Seconds",
            TimeUnit::Minutes => "Minutes",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Host tick counter a timer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockFamily {
    /// Millisecond-resolution counter
    Millis,
    /// Microsecond-resolution counter
    Micros,
}

impl ClockFamily {
    /// Number of canonical microseconds in one tick of this counter.
    #[inline]
    pub const fn micros_per_tick(self) -> u64 {
        match self {
            ClockFamily::Millis => MICROS_PER_MILLI,
            ClockFamily::Micros => 1,
        }
    }
}

/// A span of time stored in a single canonical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration {
    micros: u64,
}

impl Duration {
    /// Zero-length duration. Timers with this duration trigger continuously.
    pub const ZERO: Self = Self { micros: 0 };

    /// Creates a duration of `value` expressed in `unit`.
    #[inline]
    pub const fn new(value: u64, unit: TimeUnit) -> Self {
        Self {
            micros: value.saturating_mul(unit.micros_per_unit()),
        }
    }

    pub const fn from_micros(micros: u64) -> Self {
        Self { micros }
    }

    pub const fn from_millis(millis: u64) -> Self {
        Self::new(millis, TimeUnit::Milliseconds)
    }

    pub const fn from_secs(secs: u64) -> Self {
        Self::new(secs, TimeUnit::Seconds)
    }

    pub const fn from_minutes(minutes: u64) -> Self {
        Self::new(minutes, TimeUnit::Minutes)
    }

    /// Creates a duration from a tick count of the given counter.
    #[inline]
    pub const fn from_ticks(ticks: u32, family: ClockFamily) -> Self {
        Self {
            micros: ticks as u64 * family.micros_per_tick(),
        }
    }

    /// Overwrites this duration with `value` expressed in `unit`.
    pub fn set(&mut self, value: u64, unit: TimeUnit) {
        *self = Self::new(value, unit);
    }

    /// Reads this duration through the view of `unit`, truncating.
    #[inline]
    pub const fn get(self, unit: TimeUnit) -> u64 {
        self.micros / unit.micros_per_unit()
    }

    pub const fn as_micros(self) -> u64 {
        self.micros
    }

    pub const fn as_millis(self) -> u64 {
        self.get(TimeUnit::Milliseconds)
    }

    pub const fn as_secs(self) -> u64 {
        self.get(TimeUnit::Seconds)
    }

    pub const fn as_minutes(self) -> u64 {
        self.get(TimeUnit::Minutes)
    }

    /// Seconds as a float, keeping the sub-second fraction.
    pub fn as_secs_f32(self) -> f32 {
        self.micros as f32 / MICROS_PER_SECOND as f32
    }

    /// Tick count on the given counter, clamped to the largest tick value.
    #[inline]
    pub const fn to_ticks(self, family: ClockFamily) -> u32 {
        let ticks = self.micros / family.micros_per_tick();
        if ticks > u32::MAX as u64 {
            u32::MAX
        } else {
            ticks as u32
        }
    }

    /// Largest duration that still fits in one tick counter period.
    #[inline]
    pub const fn max_for(family: ClockFamily) -> Self {
        Self::from_ticks(u32::MAX, family)
    }

    pub const fn is_zero(self) -> bool {
        self.micros == 0
    }

    pub const fn saturating_add(self, other: Self) -> Self {
        Self {
            micros: self.micros.saturating_add(other.micros),
        }
    }

    pub const fn saturating_sub(self, other: Self) -> Self {
        Self {
            micros: self.micros.saturating_sub(other.micros),
        }
    }
}

impl From<core::time::Duration> for Duration {
    fn from(value: core::time::Duration) -> Self {
        let micros = value.as_micros();
        Self {
            micros: if micros > u64::MAX as u128 {
                u64::MAX
            } else {
                micros as u64
            },
        }
    }
}

impl From<Duration> for core::time::Duration {
    fn from(value: Duration) -> Self {
        core::time::Duration::from_micros(value.micros)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
