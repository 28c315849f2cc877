//! Elapsed-time measurement for quiz sessions.
//!
//! [`QuizGame`](crate::game::QuizGame) reads time through the [`Clock`] trait
//! so tests can drive it with a [`ManualClock`] instead of the wall clock.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock: Send + Sync {
    /// Time since an arbitrary fixed origin. Never goes backwards.
    fn now(&self) -> Duration;
}

/// Clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same reading, so a test can keep one handle and give
/// another to the game.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_nanos: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward. The reading saturates at `u64::MAX` nanoseconds.
    pub fn advance(&self, by: Duration) {
        let step = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        let _ = self
            .now_nanos
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |now| {
                Some(now.saturating_add(step))
            });
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.now_nanos.load(Ordering::Relaxed))
    }
}

/// Start/stop elapsed-time counter read against a [`Clock`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Stopwatch {
    started_at: Option<Duration>,
    accumulated: Duration,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting. No-op if already running.
    pub fn start(&mut self, clock: &dyn Clock) {
        if self.started_at.is_none() {
            self.started_at = Some(clock.now());
        }
    }

    /// Stop counting and keep the time measured so far.
    pub fn stop(&mut self, clock: &dyn Clock) {
        if let Some(started_at) = self.started_at.take() {
            self.accumulated += clock.now().saturating_sub(started_at);
        }
    }

    /// Stop and zero the counter.
    pub fn reset(&mut self) {
        self.started_at = None;
        self.accumulated = Duration::ZERO;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Total measured time, including the current run if running.
    pub fn elapsed(&self, clock: &dyn Clock) -> Duration {
        match self.started_at {
            Some(started_at) => self.accumulated + clock.now().saturating_sub(started_at),
            None => self.accumulated,
        }
    }
}
