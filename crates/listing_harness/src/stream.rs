//! Testing of stream solutions.
//!
//! A stream solution reads its input from a [`BufRead`] and writes its answer
//! to a [`Write`], like a program talking to stdin and stdout:
//!
//! ```
//! use std::io::{BufRead, Write};
//! use listing_harness::Harness;
//!
//! let sum = |input: &mut dyn BufRead, output: &mut dyn Write| -> std::io::Result<()> {
//!     let mut line = String::new();
//!     input.read_line(&mut line)?;
//!     let total: i64 = line.split_whitespace().filter_map(|t| t.parse::<i64>().ok()).sum();
//!     writeln!(output, "{total}")
//! };
//!
//! assert!(Harness::default().check_token_sequence(sum, "1 2 3\n", "6").is_ok());
//! ```
//!
//! Output is compared with [`compare_token_sequence`].

use std::io::{self, BufRead, Cursor, Write};

use crate::failure::Failure;
use crate::harness::Harness;
use crate::timing::measure;
use crate::tokens::compare_token_sequence;

impl Harness {
    /// Runs a stream solution on `input` and compares its output with
    /// `expected`.
    ///
    /// The solution always runs to completion; the time limit is checked
    /// afterwards and takes precedence over the output comparison.
    ///
    /// # Errors
    ///
    /// - [`Failure::Timeout`] if the run exceeded the time limit;
    /// - [`Failure::Solution`] if the solution returned an I/O error;
    /// - [`Failure::StreamMismatch`] at the first differing token.
    pub fn check_token_sequence<S>(
        &self,
        solution: S,
        input: &str,
        expected: &str,
    ) -> Result<(), Failure>
    where
        S: FnOnce(&mut dyn BufRead, &mut dyn Write) -> io::Result<()>,
    {
        let mut reader = Cursor::new(input.as_bytes());
        let mut output: Vec<u8> = Vec::new();

        let (outcome, elapsed) = measure(|| solution(&mut reader, &mut output));
        tracing::debug!(
            elapsed_secs = elapsed.as_secs_f64(),
            output_bytes = output.len(),
            "stream solution finished"
        );

        self.timing_guard()
            .check(elapsed)
            .map_err(|timeout| Failure::Timeout {
                input: input.to_string(),
                elapsed: timeout.elapsed,
                limit: timeout.limit,
            })?;

        outcome.map_err(|source| Failure::Solution {
            input: input.to_string(),
            source,
        })?;

        let actual = String::from_utf8_lossy(&output);
        compare_token_sequence(&actual, expected).map_err(|mismatch| {
            tracing::debug!(%mismatch, "stream output mismatch");
            Failure::StreamMismatch {
                input: input.to_string(),
                expected: expected.to_string(),
                actual: actual.into_owned(),
                mismatch,
            }
        })?;

        tracing::debug!("stream test passed");
        Ok(())
    }

    /// Like [`Harness::check_token_sequence`], but reports a failure on
    /// stderr and exits the process with status 1.
    pub fn test_token_sequence<S>(&self, solution: S, input: &str, expected: &str)
    where
        S: FnOnce(&mut dyn BufRead, &mut dyn Write) -> io::Result<()>,
    {
        self.enforce(self.check_token_sequence(solution, input, expected));
    }
}

/// Tests a stream solution with the default limits.
///
/// Each non-whitespace token of the output must match the expected output
/// exactly; trailing whitespace in a line and trailing newlines are ignored.
/// On failure the input, expected and actual output are printed to stderr and
/// the process exits with status 1.
pub fn test_token_sequence<S>(solution: S, input: &str, expected: &str)
where
    S: FnOnce(&mut dyn BufRead, &mut dyn Write) -> io::Result<()>,
{
    Harness::default().test_token_sequence(solution, input, expected);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HarnessConfig;
    use std::io::Read;
    use std::time::Duration;

    fn echo(input: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<()> {
        let mut buf = String::new();
        input.read_to_string(&mut buf)?;
        output.write_all(buf.as_bytes())
    }

    fn emit(text: &'static str) -> impl FnOnce(&mut dyn BufRead, &mut dyn Write) -> io::Result<()> {
        move |_input, output| output.write_all(text.as_bytes())
    }

    #[test]
    fn echo_matches_its_input() {
        let input = "3\n1 2 3\nhello world\n";
        assert!(Harness::default().check_token_sequence(echo, input, input).is_ok());
    }

    #[test]
    fn whitespace_differences_pass() {
        let harness = Harness::default();
        assert!(harness.check_token_sequence(emit("1  2\n  3  \n"), "", "1 2\n3").is_ok());
    }

    #[test]
    fn token_divergence_fails_with_full_values() {
        let err = Harness::default()
            .check_token_sequence(emit("1 2 4"), "in", "1 2 3")
            .unwrap_err();
        match err {
            Failure::StreamMismatch {
                input,
                expected,
                actual,
                mismatch,
            } => {
                assert_eq!(input, "in");
                assert_eq!(expected, "1 2 3");
                assert_eq!(actual, "1 2 4");
                assert_eq!(mismatch.token, 3);
            }
            other => panic!("unexpected failure: {other:?}"),
        }
    }

    #[test]
    fn solution_reads_line_by_line() {
        let doubler = |input: &mut dyn BufRead, output: &mut dyn Write| -> io::Result<()> {
            for line in input.lines() {
                let n: i64 = line?.trim().parse().map_err(io::Error::other)?;
                writeln!(output, "{}", n * 2)?;
            }
            Ok(())
        };
        let result = Harness::default().check_token_sequence(doubler, "1\n2\n3\n", "2\n4\n6\n");
        assert!(result.is_ok());
    }

    #[test]
    fn io_error_is_a_failure() {
        let broken =
            |_: &mut dyn BufRead, _: &mut dyn Write| -> io::Result<()> { Err(io::Error::other("no answer")) };
        let err = Harness::default()
            .check_token_sequence(broken, "x", "")
            .unwrap_err();
        assert!(matches!(err, Failure::Solution { .. }));
    }

    #[test]
    fn slow_run_is_flagged_even_when_output_matches() {
        let harness = Harness::new(
            HarnessConfig::new().with_max_execution_time(Duration::from_millis(10)),
        );
        let slow = |input: &mut dyn BufRead, output: &mut dyn Write| {
            std::thread::sleep(Duration::from_millis(60));
            echo(input, output)
        };
        let err = harness.check_token_sequence(slow, "7", "7").unwrap_err();
        assert!(err.is_timeout());
        assert_eq!(err.input(), "7");
    }

    #[test]
    fn non_utf8_output_is_compared_lossily() {
        let raw = |_: &mut dyn BufRead, output: &mut dyn Write| output.write_all(b"ok \xff");
        let err = Harness::default()
            .check_token_sequence(raw, "", "ok")
            .unwrap_err();
        match err {
            Failure::StreamMismatch { actual, .. } => assert_eq!(actual, "ok \u{fffd}"),
            other => panic!("unexpected failure: {other:?}"),
        }
    }

    #[test]
    fn repeated_runs_are_independent() {
        let harness = Harness::default();
        for _ in 0..2 {
            assert!(harness.check_token_sequence(echo, "5 6", "5 6").is_ok());
        }
    }

    #[test]
    fn passing_test_returns() {
        test_token_sequence(echo, "1", "1");
        Harness::default().test_token_sequence(echo, "a b", "a   b\n");
    }
}
