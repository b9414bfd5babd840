//! Embassy-based tick source implementation.

use poll_timer_core::traits::{ClockTick, TickSource};

/// Tick source backed by the Embassy time driver.
///
/// Embassy keeps a 64-bit monotonic count. Truncating it to 32 bits gives
/// counters that wrap at 2^32, the behavior the timer arithmetic is built
/// around.
///
/// # Example
///
/// ```ignore
/// use poll_timer::platform::EmbassyClock;
/// use poll_timer::{Timer, TimerConfig};
///
/// let mut led = Timer::new(EmbassyClock, TimerConfig::millis(250));
/// loop {
///     if led.triggered() {
///         // toggle LED
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl TickSource for EmbassyClock {
    fn ticks_ms(&self) -> ClockTick {
        embassy_time::Instant::now().as_millis() as ClockTick
    }

    fn ticks_us(&self) -> ClockTick {
        embassy_time::Instant::now().as_micros() as ClockTick
    }
}
