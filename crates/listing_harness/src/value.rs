//! Testing of pure functions.
//!
//! A function solution maps one input value to one output value. The test
//! passes if and only if the returned value equals the expected one.
//!
//! ```
//! use listing_harness::Harness;
//!
//! let harness = Harness::default();
//! assert!(harness.check_function(|x: &i32| x * 2, &21, &42).is_ok());
//! assert!(harness.check_function(|x: &i32| x * 2, &21, &43).is_err());
//! ```

use crate::failure::Failure;
use crate::harness::Harness;
use crate::render::Render;
use crate::timing::measure;

impl Harness {
    /// Runs `function` on `input` and compares the result with `expected`.
    ///
    /// # Errors
    ///
    /// - [`Failure::Timeout`] if the call exceeded the time limit;
    /// - [`Failure::ValueMismatch`] if the result differs from `expected`.
    pub fn check_function<In, Out, F>(
        &self,
        function: F,
        input: &In,
        expected: &Out,
    ) -> Result<(), Failure>
    where
        In: Render + ?Sized,
        Out: PartialEq + Render,
        F: FnOnce(&In) -> Out,
    {
        let (actual, elapsed) = measure(|| function(input));
        tracing::debug!(elapsed_secs = elapsed.as_secs_f64(), "function finished");

        self.timing_guard()
            .check(elapsed)
            .map_err(|timeout| Failure::Timeout {
                input: input.render(),
                elapsed: timeout.elapsed,
                limit: timeout.limit,
            })?;

        if actual != *expected {
            let failure = Failure::ValueMismatch {
                input: input.render(),
                expected: expected.render(),
                actual: actual.render(),
            };
            tracing::debug!(%failure, "function output mismatch");
            return Err(failure);
        }

        tracing::debug!("function test passed");
        Ok(())
    }

    /// Like [`Harness::check_function`], but reports a failure on stderr and
    /// exits the process with status 1.
    pub fn test_function<In, Out, F>(&self, function: F, input: &In, expected: &Out)
    where
        In: Render + ?Sized,
        Out: PartialEq + Render,
        F: FnOnce(&In) -> Out,
    {
        self.enforce(self.check_function(function, input, expected));
    }
}

/// Tests a function with the default limits.
///
/// Input and output types must be renderable, and the output type must be
/// comparable with `==`. On failure the input, expected and actual values are
/// printed to stderr and the process exits with status 1.
pub fn test_function<In, Out, F>(function: F, input: &In, expected: &Out)
where
    In: Render + ?Sized,
    Out: PartialEq + Render,
    F: FnOnce(&In) -> Out,
{
    Harness::default().test_function(function, input, expected);
}
