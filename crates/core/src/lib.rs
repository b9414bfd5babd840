//! poll_timer_core - Pure no_std interval timer logic
//!
//! This crate contains the platform-agnostic timer algorithms and types
//! that can be tested on host without any feature flags or embassy
//! dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Never blocks**: every operation is O(1) and returns immediately
//! - **Trait abstractions**: clocks and synchronization injected via traits
//!
//! # Modules
//!
//! - [`duration`]: Canonical duration and time units
//! - [`traits`]: Tick source and shared-state abstractions with mocks
//! - [`timer`]: The polled timer, its config and state machine
//! - [`registry`]: Injectable registry for broadcast resets

#![no_std]

pub mod duration;
pub mod registry;
pub mod timer;
pub mod traits;

pub use duration::{Duration, TimeUnit};
pub use registry::{Registration, RegistryError, TimerId, TimerRegistry};
pub use timer::{MissedCycles, ResetOption, Timer, TimerConfig, TimerState};
