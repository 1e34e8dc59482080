//! Time sources for the toast scheduler
//!
//! The store reads time through [`Clock`] so countdown accounting can run
//! against a controllable source in tests instead of wall time.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Monotonic time source.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// The process monotonic clock.
#[derive(Debug, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// `now()` is a fixed epoch plus the accumulated [`advance`](Self::advance)
/// calls, so timer expiry becomes a pure function of the test script.
#[derive(Debug)]
pub struct ManualClock {
    epoch: Instant,
    offset_micros: AtomicU64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            offset_micros: AtomicU64::new(0),
        }
    }

    /// Move the clock forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        self.offset_micros
            .fetch_add(delta.as_micros() as u64, Ordering::SeqCst);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.epoch + Duration::from_micros(self.offset_micros.load(Ordering::SeqCst))
    }
}
