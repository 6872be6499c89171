//! Typed description of a failed test run.

use std::io;
use std::time::Duration;

use thiserror::Error;

use crate::tokens::TokenMismatch;

/// A failure detected by one of the testers.
///
/// All strings are kept in full; truncation only happens when a
/// [`Report`](crate::Report) is built for display.
#[derive(Debug, Error)]
pub enum Failure {
    /// The solution completed, but took longer than the configured ceiling.
    #[error("solution ran for {elapsed:?}, limit is {limit:?}")]
    Timeout {
        input: String,
        elapsed: Duration,
        limit: Duration,
    },

    /// Stream output differs from the expected output.
    #[error("output mismatch at {mismatch}")]
    StreamMismatch {
        input: String,
        expected: String,
        actual: String,
        mismatch: TokenMismatch,
    },

    /// Returned value differs from the expected value.
    #[error("expected {expected}, got {actual}")]
    ValueMismatch {
        input: String,
        expected: String,
        actual: String,
    },

    /// A stream solution returned an I/O error.
    #[error("solution failed: {source}")]
    Solution {
        input: String,
        #[source]
        source: io::Error,
    },
}

impl Failure {
    /// The rendered input of the failing test.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::Timeout { input, .. }
            | Self::StreamMismatch { input, .. }
            | Self::ValueMismatch { input, .. }
            | Self::Solution { input, .. } => input,
        }
    }

    /// Returns true for [`Failure::Timeout`].
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Returns true for either kind of output mismatch.
    #[must_use]
    pub const fn is_mismatch(&self) -> bool {
        matches!(
            self,
            Self::StreamMismatch { .. } | Self::ValueMismatch { .. }
        )
    }
}
