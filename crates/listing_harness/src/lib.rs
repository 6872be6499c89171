#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Listing Harness
//!
//! A fail-fast harness for checking small solutions, as found in tested code
//! listings and competitive programming exercises, against expected output.
//!
//! ## Architecture
//!
//! - **Stream tester** ([`test_token_sequence`]): runs a solution that reads
//!   from a [`BufRead`](std::io::BufRead) and writes to a
//!   [`Write`](std::io::Write), then compares the output token by token,
//!   ignoring extra whitespace and trailing blank lines.
//! - **Function tester** ([`test_function`]): runs a pure function and
//!   compares its result with `==`.
//! - **Truncation** ([`truncate`]): shortens long values in diagnostics.
//! - **Timing** ([`timing`]): flags runs that took longer than the limit once
//!   they have finished. A running solution is never interrupted.
//!
//! On the first failure the input, expected output and actual output are
//! printed to stderr and the process exits with status 1. Callers that need to
//! keep going use the `check_*` methods on [`Harness`], which return a typed
//! [`Failure`] instead.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::io::{BufRead, Write};
//! use listing_harness::{test_function, test_token_sequence};
//!
//! fn solve(input: &mut dyn BufRead, output: &mut dyn Write) -> std::io::Result<()> {
//!     let mut line = String::new();
//!     input.read_line(&mut line)?;
//!     let n: u64 = line.trim().parse().map_err(std::io::Error::other)?;
//!     writeln!(output, "{}", n * n)
//! }
//!
//! test_token_sequence(solve, "12\n", "144");
//! test_function(|v: &Vec<i32>| v.iter().rev().copied().collect::<Vec<_>>(), &vec![1, 2], &vec![2, 1]);
//! ```
//!
//! ## Limits
//!
//! Values longer than [`MAX_REPORTED_STRING_LEN`] characters are truncated in
//! diagnostics and runs longer than [`MAX_EXECUTION_TIME`] fail. Both can be
//! changed per harness through [`HarnessConfig`].

pub mod config;
pub mod failure;
pub mod harness;
pub mod render;
pub mod report;
pub mod stream;
pub mod timing;
pub mod tokens;
pub mod truncate;
pub mod value;

pub use config::{ConfigError, HarnessConfig, MAX_EXECUTION_TIME, MAX_REPORTED_STRING_LEN};
pub use failure::Failure;
pub use harness::Harness;
pub use render::Render;
pub use report::Report;
pub use stream::test_token_sequence;
pub use timing::{Timeout, TimingGuard, measure};
pub use tokens::{TokenMismatch, compare_token_sequence};
pub use truncate::{truncate_in_place, truncated};
pub use value::test_function;

pub use termcolor::ColorChoice;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        ColorChoice, Failure, Harness, HarnessConfig, Render, test_function, test_token_sequence,
    };
}
