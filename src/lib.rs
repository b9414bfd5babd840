#![cfg_attr(not(test), no_std)]

//! poll_timer - Non-blocking interval timers for cooperative control loops
//!
//! Code polls timer objects every loop iteration instead of sleeping, so the
//! loop never stalls. The timer logic lives in the pure `poll_timer_core`
//! crate and is re-exported here. This crate adds the platform glue and the
//! loop-level services around it.
//!
//! # Modules
//!
//! - [`platform`]: Embassy clock and shared state (`embassy` feature)
//! - [`config`]: build-time defaults injected by `build.rs`
//! - [`supervisor`]: stall detection driving broadcast resets
//! - `logging`: `log_*!` macros (defmt on target, stdout in host tests)

pub mod config;
pub mod logging;
pub mod platform;
pub mod supervisor;

pub use poll_timer_core::traits;
pub use poll_timer_core::{
    duration, registry, timer, Duration, MissedCycles, Registration, RegistryError, ResetOption,
    TimeUnit, Timer, TimerConfig, TimerId, TimerRegistry, TimerState,
};

pub use config::BuildConfig;
pub use supervisor::{LoopHealth, StallSupervisor};
