//! Failure diagnostics written to standard error.
//!
//! A mismatch is reported in three sections:
//!
//! ```text
//! Failed on test:
//! <input>
//! Expected output:
//! <expected>
//! Actual output:
//! <actual>
//! ```
//!
//! A timeout prints the input followed by `Execution time was <secs>s`.
//! Every value is truncated to the configured display length first.

use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::failure::Failure;
use crate::truncate::truncated;

/// Display-ready diagnostic for one failed test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Output differs from the expected output.
    Mismatch {
        input: String,
        expected: String,
        actual: String,
    },
    /// Run exceeded the time ceiling.
    Timeout { input: String, elapsed: Duration },
    /// Stream solution reported an I/O error.
    SolutionError { input: String, message: String },
}

impl Report {
    /// Builds a report from a failure, truncating every value to `max_len`.
    #[must_use]
    pub fn from_failure(failure: &Failure, max_len: usize) -> Self {
        let input = truncated(failure.input(), max_len);
        match failure {
            Failure::Timeout { elapsed, .. } => Self::Timeout {
                input,
                elapsed: *elapsed,
            },
            Failure::StreamMismatch {
                expected, actual, ..
            }
            | Failure::ValueMismatch {
                expected, actual, ..
            } => Self::Mismatch {
                input,
                expected: truncated(expected, max_len),
                actual: truncated(actual, max_len),
            },
            Failure::Solution { source, .. } => Self::SolutionError {
                input,
                message: source.to_string(),
            },
        }
    }

    /// Writes the report, coloring section headers if `out` supports it.
    ///
    /// # Errors
    ///
    /// Propagates write errors from `out`.
    pub fn write_to<W: WriteColor>(&self, out: &mut W) -> io::Result<()> {
        let mut failed = ColorSpec::new();
        failed.set_fg(Some(Color::Red)).set_bold(true);
        let mut header = ColorSpec::new();
        header.set_bold(true);

        write_header(out, &failed, "Failed on test:")?;
        match self {
            Self::Mismatch {
                input,
                expected,
                actual,
            } => {
                writeln!(out, "{input}")?;
                write_header(out, &header, "Expected output:")?;
                writeln!(out, "{expected}")?;
                write_header(out, &header, "Actual output:")?;
                writeln!(out, "{actual}")?;
            }
            Self::Timeout { input, elapsed } => {
                writeln!(out, "{input}")?;
                writeln!(out, "Execution time was {:.3}s", elapsed.as_secs_f64())?;
            }
            Self::SolutionError { input, message } => {
                writeln!(out, "{input}")?;
                writeln!(out, "Solution error: {message}")?;
            }
        }
        out.flush()
    }

    /// Renders the report without colors.
    #[must_use]
    pub fn to_plain_string(&self) -> String {
        let mut out = NoColor::new(Vec::new());
        // Writing into a Vec cannot fail.
        let _ = self.write_to(&mut out);
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }

    /// Writes the report to standard error and flushes it.
    ///
    /// `ColorChoice::Auto` falls back to plain text when stderr is not a
    /// terminal.
    ///
    /// # Errors
    ///
    /// Propagates write errors on stderr.
    pub fn emit(&self, choice: ColorChoice) -> io::Result<()> {
        let choice = match choice {
            ColorChoice::Auto if !io::stderr().is_terminal() => ColorChoice::Never,
            other => other,
        };
        let mut stderr = StandardStream::stderr(choice);
        self.write_to(&mut stderr)
    }
}

fn write_header<W: WriteColor>(out: &mut W, spec: &ColorSpec, text: &str) -> io::Result<()> {
    out.set_color(spec)?;
    write!(out, "{text}")?;
    out.reset()?;
    writeln!(out)
}
