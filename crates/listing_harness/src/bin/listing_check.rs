#![forbid(unsafe_code)]

//! # listing-check
//!
//! Checks an external program against an input/expected-output pair.
//!
//! The program receives the input file on stdin; whatever it prints on stdout
//! is compared token by token with the expected file. The exit status is 0 on
//! success and 1 on the first mismatch or timeout, with diagnostics on stderr.
//!
//! ## Usage
//!
//! ```bash
//! listing-check --input 01.in --expected 01.out -- ./solution
//! listing-check -i 01.in -e 01.out --max-time 2 -- python3 sol.py
//! listing-check -i 01.in -e 01.out --config harness.toml -vv -- ./solution
//! ```

use std::fs;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use listing_harness::{ColorChoice, Harness, HarnessConfig};
use tracing_subscriber::EnvFilter;

/// Check a program's output against an expected answer.
#[derive(Parser, Debug)]
#[command(
    name = "listing-check",
    author,
    version,
    about = "Check a program's output against an expected answer",
    long_about = "Runs COMMAND with the input file on stdin and compares its stdout \
                  with the expected file, ignoring extra whitespace and trailing blank \
                  lines. Exits with status 1 on the first mismatch or timeout."
)]
struct Cli {
    /// File fed to the program on stdin
    #[arg(long, short = 'i', value_name = "FILE")]
    input: PathBuf,

    /// File holding the expected output
    #[arg(long, short = 'e', value_name = "FILE")]
    expected: PathBuf,

    /// TOML file with harness limits
    #[arg(long, short = 'c', value_name = "FILE", env = "LISTING_CONFIG")]
    config: Option<PathBuf>,

    /// Execution time limit in seconds (checked after the program exits)
    #[arg(long, value_name = "SECS", env = "LISTING_MAX_TIME")]
    max_time: Option<f64>,

    /// Truncate reported values to this many characters
    #[arg(long, value_name = "CHARS", env = "LISTING_MAX_DISPLAY")]
    max_display: Option<usize>,

    /// When to color diagnostic headers
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// Enable verbose logging
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Program to run, followed by its arguments
    #[arg(
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "COMMAND"
    )]
    command: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => Self::Auto,
            ColorMode::Always => Self::Always,
            ColorMode::Never => Self::Never,
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Config file first, then command-line overrides.
fn resolve_config(cli: &Cli) -> Result<HarnessConfig> {
    let mut config = match &cli.config {
        Some(path) => HarnessConfig::load(path)?,
        None => HarnessConfig::default(),
    };
    if let Some(secs) = cli.max_time {
        config = config.with_max_execution_seconds(secs)?;
    }
    if let Some(len) = cli.max_display {
        config = config.with_max_display_length(len);
    }
    Ok(config)
}

/// Runs `command` as a stream solution.
///
/// Stdin is fed from a separate thread so a program that writes before it has
/// read everything cannot deadlock on a full pipe.
fn run_command(
    command: &[String],
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> io::Result<()> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command"))?;

    let mut stdin_bytes = Vec::new();
    input.read_to_end(&mut stdin_bytes)?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| io::Error::new(e.kind(), format!("failed to start {program}: {e}")))?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| io::Error::other("child stdin is not piped"))?;
    let feeder = thread::spawn(move || stdin.write_all(&stdin_bytes));

    let finished = child.wait_with_output()?;

    match feeder.join() {
        // A program may legitimately exit without reading all of its input.
        Ok(Err(e)) if e.kind() != io::ErrorKind::BrokenPipe => return Err(e),
        Err(_) => return Err(io::Error::other("stdin feeder thread panicked")),
        _ => {}
    }

    if !finished.status.success() {
        tracing::warn!(status = %finished.status, program = %program, "solution exited unsuccessfully");
    }

    output.write_all(&finished.stdout)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = resolve_config(&cli)?;
    let input = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read input file {}", cli.input.display()))?;
    let expected = fs::read_to_string(&cli.expected)
        .with_context(|| format!("failed to read expected file {}", cli.expected.display()))?;

    tracing::info!(
        command = ?cli.command,
        max_time_secs = config.max_execution_time.as_secs_f64(),
        "checking solution"
    );

    let harness = Harness::new(config).with_color(cli.color.into());
    harness.test_token_sequence(
        |input, output| run_command(&cli.command, input, output),
        &input,
        &expected,
    );

    tracing::info!("solution passed");
    Ok(())
}
