//! Post-hoc execution time checks.
//!
//! The harness measures wall-clock time around a solution call and compares
//! it against a ceiling once the call has returned. A solution that never
//! returns is never stopped; only completed runs can be flagged as slow.

use std::time::{Duration, Instant};

/// Runs `f` and returns its result together with the elapsed wall-clock time.
pub fn measure<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// A completed run that took longer than the allowed ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeout {
    /// Measured execution time.
    pub elapsed: Duration,
    /// Ceiling that was exceeded.
    pub limit: Duration,
}

/// Elapsed-time ceiling applied after each run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingGuard {
    limit: Duration,
}

impl TimingGuard {
    /// Creates a guard with the given ceiling.
    #[must_use]
    pub const fn new(limit: Duration) -> Self {
        Self { limit }
    }

    /// The configured ceiling.
    #[must_use]
    pub const fn limit(&self) -> Duration {
        self.limit
    }

    /// Checks an elapsed interval. Only strictly longer runs fail.
    ///
    /// # Errors
    ///
    /// Returns [`Timeout`] when `elapsed` exceeds the ceiling.
    pub fn check(&self, elapsed: Duration) -> Result<(), Timeout> {
        if elapsed > self.limit {
            tracing::debug!(
                elapsed_secs = elapsed.as_secs_f64(),
                limit_secs = self.limit.as_secs_f64(),
                "solution exceeded time limit"
            );
            return Err(Timeout {
                elapsed,
                limit: self.limit,
            });
        }
        Ok(())
    }

    /// Checks the interval between two sampled instants.
    ///
    /// # Errors
    ///
    /// Returns [`Timeout`] when the interval exceeds the ceiling.
    pub fn check_between(&self, start: Instant, end: Instant) -> Result<(), Timeout> {
        self.check(end.saturating_duration_since(start))
    }
}
