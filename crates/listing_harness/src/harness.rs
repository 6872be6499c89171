//! The [`Harness`] value shared by both testers.
//!
//! A harness owns an immutable [`HarnessConfig`] and a color choice for
//! diagnostics. It is cheap to copy and holds no state between runs, so the
//! same harness can check any number of cases in sequence.
//!
//! Every tester comes in two flavors:
//!
//! - `check_*` returns `Result<(), Failure>` for callers that embed the
//!   harness in their own runner;
//! - `test_*` reports the first failure on stderr and exits the process with
//!   status 1. Nothing after a failed `test_*` call runs.

use std::process;

use termcolor::ColorChoice;

use crate::config::HarnessConfig;
use crate::failure::Failure;
use crate::report::Report;
use crate::timing::TimingGuard;

/// Fail-fast test harness.
#[derive(Debug, Clone, Copy)]
pub struct Harness {
    config: HarnessConfig,
    color: ColorChoice,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new(HarnessConfig::default())
    }
}

impl Harness {
    /// Creates a harness with the given limits.
    #[must_use]
    pub const fn new(config: HarnessConfig) -> Self {
        Self {
            config,
            color: ColorChoice::Auto,
        }
    }

    /// Sets how diagnostic headers are colored.
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// The limits in effect.
    #[must_use]
    pub const fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub(crate) const fn timing_guard(&self) -> TimingGuard {
        TimingGuard::new(self.config.max_execution_time)
    }

    /// Builds the display report for a failure under this harness's limits.
    #[must_use]
    pub fn report(&self, failure: &Failure) -> Report {
        Report::from_failure(failure, self.config.max_display_length)
    }

    /// Reports `failure` on stderr and terminates the process with status 1.
    pub fn fail(&self, failure: &Failure) -> ! {
        tracing::debug!(%failure, "test failed, terminating");
        // The exit status is the failure signal; a broken stderr must not
        // turn it into a panic.
        let _ = self.report(failure).emit(self.color);
        process::exit(1)
    }

    /// Unwraps a check result, terminating the process on failure.
    pub(crate) fn enforce(&self, result: Result<(), Failure>) {
        if let Err(failure) = result {
            self.fail(&failure);
        }
    }
}
