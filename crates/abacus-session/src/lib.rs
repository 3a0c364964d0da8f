//! Interactive numeric sessions.
//!
//! A session prompts for input on a text stream, validates numeric tokens
//! (re-prompting on bad input), selects an operation from a fixed set of
//! keywords, computes one result and reports it. The calculator, the unit
//! converter and the number guessing game are all built on the same loop.

mod error;
mod guess;
mod input;
mod number;
mod operation;
mod options;
mod outcome;
mod session;

pub use error::{ComputeError, ConfigError, Error, ErrorKind, NumberError};
pub use guess::{Guesser, Hint};
pub use input::TokenReader;
pub use number::{format_result, parse_number, MAX_PRECISION};
pub use operation::{compute_result, convert, Operation, CM_PER_INCH, LBS_PER_KG};
pub use options::{
    ReportFormat, SessionOptions, CALCULATOR_PRECISION, CONVERTER_PRECISION, MAX_SECRET,
};
pub use outcome::Outcome;
pub use session::{Program, Session, SessionState};

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, Error>;
