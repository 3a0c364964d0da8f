//! The single result a session ends with.

use std::fmt;

use serde::Serialize;

use crate::error::ErrorKind;
use crate::number::format_result;

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// A value was computed.
    Success {
        /// Line describing the inputs and the result.
        summary: String,
        value: f64,
        /// Fractional digits used when rendering `value`.
        precision: usize,
    },
    /// The session was abandoned.
    Failure { kind: ErrorKind, message: String },
}

impl Outcome {
    pub fn success(summary: impl Into<String>, value: f64, precision: usize) -> Self {
        Outcome::Success {
            summary: summary.into(),
            value,
            precision,
        }
    }

    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        Outcome::Failure {
            kind,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { kind, .. } => Some(*kind),
        }
    }

    /// The computed value rendered with the outcome's precision.
    pub fn formatted_value(&self) -> Option<String> {
        match self {
            Outcome::Success {
                value, precision, ..
            } => Some(format_result(*value, *precision)),
            Outcome::Failure { .. } => None,
        }
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success { summary, .. } => write!(f, "{}", summary),
            Outcome::Failure { message, .. } => write!(f, "{}", message),
        }
    }
}
