//! Session configuration.

use std::ops::RangeInclusive;

use crate::error::ConfigError;
use crate::number::MAX_PRECISION;

/// Largest magnitude allowed for the guessing range, so every secret is
/// exactly representable as an `f64` guess.
pub const MAX_SECRET: i64 = 1 << 53;

/// Precision used by the calculator unless overridden.
pub const CALCULATOR_PRECISION: usize = 6;

/// Precision used by the unit converter unless overridden.
pub const CONVERTER_PRECISION: usize = 2;

/// How the final outcome is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// One human-readable line.
    #[default]
    Text,
    /// One JSON object on a single line.
    Json,
}

/// Options controlling a single session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub(crate) precision: Option<usize>,
    pub(crate) max_attempts: Option<usize>,
    pub(crate) format: ReportFormat,
    pub(crate) range: RangeInclusive<i64>,
    pub(crate) seed: Option<u64>,
}

impl SessionOptions {
    /// Options with unbounded retries, text reports, the program's default
    /// precision, and a guessing range of `1..=10`.
    pub fn new() -> Self {
        Self {
            precision: None,
            max_attempts: None,
            format: ReportFormat::Text,
            range: 1..=10,
            seed: None,
        }
    }

    /// Number of fractional digits kept in reported results.
    pub fn precision(mut self, precision: usize) -> Result<Self, ConfigError> {
        if precision > MAX_PRECISION {
            return Err(ConfigError::PrecisionTooLarge {
                precision,
                max: MAX_PRECISION,
            });
        }
        self.precision = Some(precision);
        Ok(self)
    }

    /// Bound the number of attempts for each numeric input.
    ///
    /// `None` retries until valid input arrives or the input ends.
    pub fn max_attempts(mut self, max_attempts: Option<usize>) -> Result<Self, ConfigError> {
        if max_attempts == Some(0) {
            return Err(ConfigError::ZeroAttempts);
        }
        self.max_attempts = max_attempts;
        Ok(self)
    }

    pub fn format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Inclusive range the secret number of the guessing game is drawn from.
    pub fn range(mut self, low: i64, high: i64) -> Result<Self, ConfigError> {
        if low > high {
            return Err(ConfigError::EmptyRange { low, high });
        }
        if low < -MAX_SECRET || high > MAX_SECRET {
            return Err(ConfigError::RangeTooWide { limit: MAX_SECRET });
        }
        self.range = low..=high;
        Ok(self)
    }

    /// Seed the guessing game's random number generator.
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn guess_range(&self) -> &RangeInclusive<i64> {
        &self.range
    }

    pub(crate) fn precision_or(&self, default: usize) -> usize {
        self.precision.unwrap_or(default)
    }

    /// Whether another attempt is allowed after `attempts` failed ones.
    pub(crate) fn allows_retry(&self, attempts: usize) -> bool {
        self.max_attempts.map_or(true, |max| attempts < max)
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::new()
    }
}
