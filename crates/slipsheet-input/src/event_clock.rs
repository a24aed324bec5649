//! Wall-clock timestamp source for hosts without native event timestamps.

use slipsheet_core::Clock;
use web_time::Instant;

/// Monotonic clock producing pointer-event timestamps in milliseconds.
///
/// WASM-compatible via `web-time`. Hosts whose input events already carry
/// timestamps should prefer those; this exists for shells and simulators that
/// synthesize events.
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds since this clock was created, fraction preserved.
    pub fn timestamp_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed_millis(&self, since: Instant) -> u64 {
        since.elapsed().as_millis() as u64
    }
}
