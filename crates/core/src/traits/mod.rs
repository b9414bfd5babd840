//! Platform seams for the timer core.
//!
//! - [`time`]: wrapping tick counters (`TickSource`) and `MockClock`
//! - [`sync`]: shared-state access (`SharedState`) and `MockState`
//!
//! Mock implementations are always available for host testing. Embassy
//! implementations live in the root crate behind the `embassy` feature.

pub mod sync;
pub mod time;

pub use sync::{MockState, SharedState};
pub use time::{elapsed_ticks, ClockFamily, ClockTick, MockClock, TickSource};
