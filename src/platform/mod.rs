//! Platform implementations of the core traits
//!
//! - [`time`]: `EmbassyClock`, a `TickSource` over the Embassy time driver
//! - [`sync`]: `EmbassyState<T>`, a `SharedState` over a critical-section mutex
//!
//! Both require the `embassy` feature. On host, use the mocks from
//! `poll_timer_core::traits`.

#[cfg(feature = "embassy")]
pub mod sync;
#[cfg(feature = "embassy")]
pub mod time;

#[cfg(feature = "embassy")]
pub use sync::EmbassyState;
#[cfg(feature = "embassy")]
pub use time::EmbassyClock;
