//! # Configuration
//!
//! Startup configuration for the simulated backend, read once from the
//! environment:
//!
//! * `LATENCY_MS` - base delay in milliseconds added to every response
//!   (default `50`).
//! * `ERROR_PCT` - percentage of requests answered with a 500 (default `0`).
//!
//! An empty variable counts as unset and falls back to the default. A
//! variable that is set but does not parse as an integer in range is a hard
//! startup error rather than a silent fallback, so a typo in a load-test
//! setup cannot quietly change the simulated behavior.

use std::env;

/// Environment variable holding the base delay in milliseconds.
pub const LATENCY_MS_VAR: &str = "LATENCY_MS";

/// Environment variable holding the failure percentage.
pub const ERROR_PCT_VAR: &str = "ERROR_PCT";

const DEFAULT_LATENCY_MS: u64 = 50;
const DEFAULT_ERROR_PCT: FailurePercent = FailurePercent(0);

/// Immutable runtime configuration, shared read-only by all requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Base delay added to every response, in milliseconds.
    pub base_delay_ms: u64,
    /// Share of requests answered with the failure status.
    pub failure_percent: FailurePercent,
}

impl Config {
    /// Load the configuration from the process environment.
    pub fn load() -> Result<Self, Error> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_delay_ms = match raw_value(&lookup, LATENCY_MS_VAR) {
            Some(raw) => raw.parse().map_err(|_| Error::Malformed {
                var: LATENCY_MS_VAR,
                value: raw,
            })?,
            None => DEFAULT_LATENCY_MS,
        };

        let failure_percent = match raw_value(&lookup, ERROR_PCT_VAR) {
            Some(raw) => {
                let value: i64 = raw.parse().map_err(|_| Error::Malformed {
                    var: ERROR_PCT_VAR,
                    value: raw,
                })?;
                FailurePercent::try_from(value)?
            }
            None => DEFAULT_ERROR_PCT,
        };

        Ok(Config {
            base_delay_ms,
            failure_percent,
        })
    }
}

fn raw_value<F>(lookup: &F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var).filter(|value| !value.is_empty())
}

/// A failure probability expressed as an integer percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailurePercent(u8);

impl FailurePercent {
    /// Create a `FailurePercent`, rejecting values above 100.
    pub fn new(value: u8) -> Result<Self, Error> {
        Self::try_from(i64::from(value))
    }

    /// The percentage as an integer in `0..=100`.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for FailurePercent {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Error> {
        if (0..=100).contains(&value) {
            Ok(FailurePercent(value as u8))
        } else {
            Err(Error::OutOfRange {
                var: ERROR_PCT_VAR,
                value,
            })
        }
    }
}

/// Errors raised while loading the configuration.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// A variable is set but does not parse as an integer.
    Malformed {
        /// Name of the offending variable.
        var: &'static str,
        /// The raw value found in the environment.
        value: String,
    },
    /// A variable parses but falls outside its allowed range.
    OutOfRange {
        /// Name of the offending variable.
        var: &'static str,
        /// The parsed value.
        value: i64,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Malformed { var, value } => {
                write!(f, "{}: `{}` is not a valid integer", var, value)
            }
            Error::OutOfRange { var, value } => {
                write!(f, "{}: {} is outside 0..=100", var, value)
            }
        }
    }
}

impl std::error::Error for Error {}
