//! The interactive session: prompt, read, validate, compute, report.

use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{ComputeError, Error, ErrorKind};
use crate::guess::{Guesser, Hint};
use crate::input::TokenReader;
use crate::number::{format_result, parse_number};
use crate::operation::{compute_result, convert, Operation};
use crate::options::{ReportFormat, SessionOptions, CALCULATOR_PRECISION, CONVERTER_PRECISION};
use crate::outcome::Outcome;

/// The programs a session can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    /// Two operands, then `add`, `sub`, `mul` or `div`.
    Calculator,
    /// Source unit, target unit, then an amount.
    Converter,
    /// Guesses until the secret number is found.
    Guesser,
}

/// Where a session is in its prompt/compute/report cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Reading numeric input.
    AwaitingOperands,
    /// Reading the keyword(s) selecting the operation.
    AwaitingDiscriminator,
    /// All input is in; the result is being computed.
    Computing,
    /// The outcome has been written. Terminal.
    Reporting(Outcome),
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Reporting(_))
    }
}

/// Ends the current program early, either with an outcome for the user or
/// with a fault that aborts the session.
enum Halt {
    Outcome(Outcome),
    Fault(Error),
}

impl From<Error> for Halt {
    fn from(err: Error) -> Self {
        Halt::Fault(err)
    }
}

impl From<std::io::Error> for Halt {
    fn from(err: std::io::Error) -> Self {
        Halt::Fault(Error::Io(err))
    }
}

type Step<T> = std::result::Result<T, Halt>;

/// One run of a program over an input and an output stream.
///
/// Numeric input that fails to parse is re-prompted, up to the configured
/// number of attempts. An unknown operation keyword ends the session at once.
pub struct Session<R, W> {
    input: TokenReader<R>,
    output: W,
    options: SessionOptions,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, options: SessionOptions) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
            options,
            state: SessionState::AwaitingOperands,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The outcome, once the session has reported one.
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.state {
            SessionState::Reporting(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Give back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run `program` to completion and report its outcome.
    ///
    /// Failures the user caused (bad input, division by zero) are returned as
    /// an [`Outcome::Failure`]. `Err` is reserved for I/O and encoding faults,
    /// and for running a session that has already finished.
    pub fn run(&mut self, program: Program) -> crate::Result<Outcome> {
        if self.state.is_terminal() {
            return Err(Error::Finished);
        }

        tracing::debug!(?program, "starting session");
        let result = match program {
            Program::Calculator => self.calculate(),
            Program::Converter => self.convert(),
            Program::Guesser => self.play(),
        };
        let outcome = match result {
            Ok(outcome) | Err(Halt::Outcome(outcome)) => outcome,
            Err(Halt::Fault(err)) => return Err(err),
        };

        self.report(&outcome)?;
        self.transition(SessionState::Reporting(outcome.clone()));
        Ok(outcome)
    }

    fn calculate(&mut self) -> Step<Outcome> {
        let precision = self.options.precision_or(CALCULATOR_PRECISION);

        self.transition(SessionState::AwaitingOperands);
        let a = self.read_number("Please enter the first number: ", "first number")?;
        let b = self.read_number("Please enter the second number: ", "second number")?;

        self.transition(SessionState::AwaitingDiscriminator);
        self.prompt("Enter an operation (add, sub, mul, div): ")?;
        let token = self.read_token("operation")?;
        let op = Operation::parse(&token);
        if !op.is_valid() {
            return Ok(Outcome::failure(
                ErrorKind::InvalidDiscriminator,
                format!("You entered an invalid operation: {}", token),
            ));
        }

        self.transition(SessionState::Computing);
        Ok(match compute_result(a, b, op) {
            Ok(value) => Outcome::success(
                format!(
                    "Result: {} {} {} = {}",
                    format_result(a, precision),
                    op,
                    format_result(b, precision),
                    format_result(value, precision)
                ),
                value,
                precision,
            ),
            Err(err) => compute_failure(err),
        })
    }

    fn convert(&mut self) -> Step<Outcome> {
        let precision = self.options.precision_or(CONVERTER_PRECISION);

        self.transition(SessionState::AwaitingDiscriminator);
        self.prompt("Enter first unit: ")?;
        let from = self.read_token("first unit")?;
        self.prompt("Enter second unit: ")?;
        let to = self.read_token("second unit")?;
        let op = Operation::from_units(&from, &to);
        if !op.is_valid() {
            return Ok(Outcome::failure(
                ErrorKind::InvalidDiscriminator,
                format!("Invalid units entered: {} to {}", from, to),
            ));
        }
        writeln!(self.output, "You have chosen to convert {} to {}", from, to)?;

        self.transition(SessionState::AwaitingOperands);
        let amount = self.read_number("Enter an amount: ", "amount")?;

        self.transition(SessionState::Computing);
        Ok(match convert(amount, op) {
            Ok(value) => Outcome::success(
                format!(
                    "{} {} is equivalent to: {} {}",
                    format_result(amount, precision),
                    from,
                    format_result(value, precision),
                    to
                ),
                value,
                precision,
            ),
            Err(err) => compute_failure(err),
        })
    }

    fn play(&mut self) -> Step<Outcome> {
        let range = self.options.guess_range().clone();
        let mut rng = match self.options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut guesser = Guesser::new(range.clone(), &mut rng);

        writeln!(
            self.output,
            "Guess the correct number between {}-{}!",
            range.start(),
            range.end()
        )?;

        self.transition(SessionState::AwaitingOperands);
        loop {
            let guess = self.read_number("Guess a number: ", "guess")?;
            match guesser.guess(guess) {
                Hint::Correct => break,
                hint => {
                    tracing::debug!(guess, ?hint, tries = guesser.tries(), "wrong guess");
                    writeln!(self.output, "{}", hint)?;
                }
            }
        }

        self.transition(SessionState::Computing);
        let tries = guesser.tries();
        Ok(Outcome::success(
            format!("You won! It took you {} tries!", tries),
            f64::from(tries),
            0,
        ))
    }

    /// Prompt for a number until one parses, the input ends, or the attempt
    /// limit is reached. The session stays in its current state meanwhile.
    fn read_number(&mut self, prompt: &str, what: &str) -> Step<f64> {
        let mut attempts = 0;
        loop {
            self.prompt(prompt)?;
            let token = self.read_token(what)?;
            match parse_number(&token) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    attempts += 1;
                    tracing::debug!(%token, attempts, "rejected numeric input");
                    if !self.options.allows_retry(attempts) {
                        return Err(Halt::Outcome(Outcome::failure(
                            ErrorKind::from(&err),
                            format!("Could not read the {}: {}", what, err),
                        )));
                    }
                    writeln!(self.output, "Error: {}. Please try again.", err)?;
                }
            }
        }
    }

    fn read_token(&mut self, what: &str) -> Step<String> {
        match self.input.next_token()? {
            Some(token) => Ok(token),
            None => Err(Halt::Outcome(Outcome::failure(
                ErrorKind::InputClosed,
                format!("Input ended before the {} was entered.", what),
            ))),
        }
    }

    fn prompt(&mut self, text: &str) -> std::io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    fn report(&mut self, outcome: &Outcome) -> crate::Result<()> {
        if outcome.is_success() {
            tracing::info!(%outcome, "session succeeded");
        } else {
            tracing::info!(kind = ?outcome.kind(), %outcome, "session failed");
        }

        match self.options.format {
            ReportFormat::Text => writeln!(self.output, "{}", outcome)?,
            ReportFormat::Json => writeln!(self.output, "{}", outcome.to_json()?)?,
        }
        self.output.flush()?;
        Ok(())
    }

    fn transition(&mut self, next: SessionState) {
        if self.state != next {
            tracing::debug!(from = ?self.state, to = ?next, "session transition");
            self.state = next;
        }
    }
}

fn compute_failure(err: ComputeError) -> Outcome {
    let message = match err {
        ComputeError::DivisionByZero => "Cannot divide by zero".to_string(),
        ComputeError::InvalidOperation => "You entered an invalid operation".to_string(),
        ComputeError::NonFiniteResult => "The result is too large to represent".to_string(),
    };
    Outcome::failure(ErrorKind::from(err), message)
}
