//! Error types for numeric sessions.

use serde::Serialize;
use thiserror::Error;

/// Why a token could not be turned into an operand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    /// The token is not a decimal number.
    #[error("invalid argument: '{0}' is not a number")]
    InvalidArgument(String),
    /// The token is a number, but not one an `f64` can represent.
    #[error("out of range: '{0}' cannot be represented")]
    OutOfRange(String),
}

/// Why a computation produced no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComputeError {
    /// The divisor of a division was zero.
    #[error("cannot divide by zero")]
    DivisionByZero,
    /// The operation does not apply to the requested computation.
    #[error("invalid operation")]
    InvalidOperation,
    /// The result overflowed to infinity.
    #[error("result is too large to represent")]
    NonFiniteResult,
}

/// Rejected session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("guessing range is empty: {low} is greater than {high}")]
    EmptyRange { low: i64, high: i64 },
    #[error("guessing range must stay within -{limit}..={limit}")]
    RangeTooWide { limit: i64 },
    #[error("max attempts must be at least 1")]
    ZeroAttempts,
    #[error("precision {precision} is larger than the maximum of {max}")]
    PrecisionTooLarge { precision: usize, max: usize },
}

/// Errors that abort a session instead of ending it with an outcome.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
    /// The session already reported its outcome and cannot run again.
    #[error("session has already finished")]
    Finished,
}

/// Failure classes reported to the user when a session ends unsuccessfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidNumericInput,
    OutOfRangeNumericInput,
    InvalidDiscriminator,
    DivisionByZero,
    NonFiniteResult,
    InputClosed,
}

impl From<&NumberError> for ErrorKind {
    fn from(err: &NumberError) -> Self {
        match err {
            NumberError::InvalidArgument(_) => ErrorKind::InvalidNumericInput,
            NumberError::OutOfRange(_) => ErrorKind::OutOfRangeNumericInput,
        }
    }
}

impl From<ComputeError> for ErrorKind {
    fn from(err: ComputeError) -> Self {
        match err {
            ComputeError::DivisionByZero => ErrorKind::DivisionByZero,
            ComputeError::InvalidOperation => ErrorKind::InvalidDiscriminator,
            ComputeError::NonFiniteResult => ErrorKind::NonFiniteResult,
        }
    }
}
