//! Build-time configuration
//!
//! Defaults can be provided at build time via environment variables, which
//! `build.rs` always defines:
//! - `POLL_TIMER_STALL_MS` - loop gap treated as a stall (default 1000)
//! - `POLL_TIMER_MS_OFFSET` - millisecond tick offset (default 0)
//! - `POLL_TIMER_US_OFFSET` - microsecond tick offset (default 0)
//!
//! Values that fail to parse fall back to the defaults.

use poll_timer_core::TimerConfig;

/// Stall threshold used when the build-time value is missing or invalid
pub const DEFAULT_STALL_THRESHOLD_MS: u32 = 1_000;

/// Settings baked in at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildConfig {
    /// Loop gap in milliseconds after which timers are resynchronized
    pub stall_threshold_ms: u32,
    /// Millisecond tick offset applied to timers built through this config
    pub ms_offset: i32,
    /// Microsecond tick offset applied to timers built through this config
    pub us_offset: i32,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            stall_threshold_ms: DEFAULT_STALL_THRESHOLD_MS,
            ms_offset: 0,
            us_offset: 0,
        }
    }
}

impl BuildConfig {
    /// Loads the values injected by `build.rs`.
    pub fn from_env() -> Self {
        Self::parse(
            env!("POLL_TIMER_STALL_MS"),
            env!("POLL_TIMER_MS_OFFSET"),
            env!("POLL_TIMER_US_OFFSET"),
        )
    }

    /// Parses raw setting strings, substituting defaults for bad values.
    pub fn parse(stall_ms: &str, ms_offset: &str, us_offset: &str) -> Self {
        let defaults = Self::default();
        let config = Self {
            stall_threshold_ms: stall_ms
                .trim()
                .parse()
                .unwrap_or(defaults.stall_threshold_ms),
            ms_offset: ms_offset.trim().parse().unwrap_or(defaults.ms_offset),
            us_offset: us_offset.trim().parse().unwrap_or(defaults.us_offset),
        };
        crate::log_debug!(
            "build config: stall {} ms, offsets {} ms / {} us",
            config.stall_threshold_ms,
            config.ms_offset,
            config.us_offset
        );
        config
    }

    /// Applies the build-time tick offsets to a timer config.
    pub fn apply(&self, timer: TimerConfig) -> TimerConfig {
        timer
            .with_ms_offset(self.ms_offset)
            .with_us_offset(self.us_offset)
    }
}
