//! Harness configuration.
//!
//! [`HarnessConfig`] holds the two process-wide limits of the harness: how
//! many characters of a value are shown in diagnostics, and how long a single
//! solution run may take before it counts as a timeout. Both default to the
//! classic listing values and can be overridden in code or from a TOML file:
//!
//! ```toml
//! max_display_length = 80
//! max_execution_seconds = 2.5
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Values longer than this many characters are truncated in diagnostics.
pub const MAX_REPORTED_STRING_LEN: usize = 50;

/// Maximum allowed execution time of one solution run.
///
/// A run exceeding this is reported only after it finishes; the harness never
/// interrupts a running solution.
pub const MAX_EXECUTION_TIME: Duration = Duration::from_secs(10);

/// Errors produced while loading a [`HarnessConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has wrongly typed keys.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The execution ceiling is negative, NaN or infinite.
    #[error("invalid execution time limit: {0}s")]
    InvalidTime(f64),
}

/// Limits applied by the harness to every test run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Diagnostic strings longer than this are truncated.
    pub max_display_length: usize,
    /// Runs slower than this are reported as timeouts.
    pub max_execution_time: Duration,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            max_display_length: MAX_REPORTED_STRING_LEN,
            max_execution_time: MAX_EXECUTION_TIME,
        }
    }
}

/// On-disk shape of the config; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    max_display_length: Option<usize>,
    max_execution_seconds: Option<f64>,
}

impl HarnessConfig {
    /// Creates a config with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the diagnostic truncation length.
    #[must_use]
    pub const fn with_max_display_length(mut self, len: usize) -> Self {
        self.max_display_length = len;
        self
    }

    /// Sets the execution time ceiling.
    #[must_use]
    pub const fn with_max_execution_time(mut self, limit: Duration) -> Self {
        self.max_execution_time = limit;
        self
    }

    /// Sets the execution time ceiling from fractional seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTime`] for negative or non-finite values.
    pub fn with_max_execution_seconds(self, secs: f64) -> Result<Self, ConfigError> {
        let limit = seconds_to_duration(secs)?;
        Ok(self.with_max_execution_time(limit))
    }

    /// Parses a config from TOML text. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::InvalidTime`] for an unusable time limit.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(text)?;
        let mut config = Self::default();
        if let Some(len) = file.max_display_length {
            config.max_display_length = len;
        }
        if let Some(secs) = file.max_execution_seconds {
            config = config.with_max_execution_seconds(secs)?;
        }
        Ok(config)
    }

    /// Loads a config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`HarnessConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

fn seconds_to_duration(secs: f64) -> Result<Duration, ConfigError> {
    Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidTime(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_listing_constants() {
        let config = HarnessConfig::default();
        assert_eq!(config.max_display_length, 50);
        assert_eq!(config.max_execution_time, Duration::from_secs_f64(10.0));
    }

    #[test]
    fn builder_overrides_limits() {
        let config = HarnessConfig::new()
            .with_max_display_length(8)
            .with_max_execution_time(Duration::from_millis(250));
        assert_eq!(config.max_display_length, 8);
        assert_eq!(config.max_execution_time, Duration::from_millis(250));
    }

    #[test]
    fn toml_partial_keeps_defaults() {
        let config = HarnessConfig::from_toml_str("max_display_length = 12").unwrap();
        assert_eq!(config.max_display_length, 12);
        assert_eq!(config.max_execution_time, MAX_EXECUTION_TIME);
    }

    #[test]
    fn toml_fractional_seconds() {
        let config = HarnessConfig::from_toml_str("max_execution_seconds = 2.5").unwrap();
        assert_eq!(config.max_execution_time, Duration::from_millis(2500));
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(
            HarnessConfig::from_toml_str("").unwrap(),
            HarnessConfig::default()
        );
    }

    #[test]
    fn negative_seconds_rejected() {
        let err = HarnessConfig::from_toml_str("max_execution_seconds = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTime(s) if s == -1.0));
    }

    #[test]
    fn non_finite_seconds_rejected() {
        assert!(HarnessConfig::new().with_max_execution_seconds(f64::NAN).is_err());
        assert!(
            HarnessConfig::new()
                .with_max_execution_seconds(f64::INFINITY)
                .is_err()
        );
    }

    #[test]
    fn unknown_key_rejected() {
        let err = HarnessConfig::from_toml_str("max_len = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = HarnessConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
