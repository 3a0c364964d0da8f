//! abacus CLI - a console calculator, unit converter and number guessing game.
//!
//! Each invocation runs one session on stdin/stdout. The process exits with 0
//! when the session produced a result and 1 when it ended in a failure.

use std::io;
use std::process;

use abacus_session::{Program, ReportFormat, Session, SessionOptions};
use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "abacus")]
#[command(about = "Console calculator, unit converter and number guessing game")]
#[command(version)]
struct Args {
    /// Log session transitions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add, subtract, multiply or divide two numbers
    Calc {
        /// Fractional digits kept in the result
        #[arg(short, long, value_name = "DIGITS")]
        precision: Option<usize>,

        #[command(flatten)]
        input: InputArgs,
    },
    /// Convert between inches and cm, or between kg and lbs
    Convert {
        /// Fractional digits kept in the result
        #[arg(short, long, value_name = "DIGITS")]
        precision: Option<usize>,

        #[command(flatten)]
        input: InputArgs,
    },
    /// Guess a secret number, with higher/lower hints
    Guess {
        /// Smallest possible secret
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        min: i64,

        /// Largest possible secret
        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        max: i64,

        /// Seed for the secret number (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(clap::Args, Debug)]
struct InputArgs {
    /// Give up after this many invalid numbers for one input (default: keep asking)
    #[arg(long, value_name = "N")]
    max_attempts: Option<usize>,

    /// Print the outcome as a JSON object
    #[arg(long)]
    json: bool,
}

impl InputArgs {
    fn apply(&self, options: SessionOptions) -> anyhow::Result<SessionOptions> {
        let format = if self.json {
            ReportFormat::Json
        } else {
            ReportFormat::Text
        };
        Ok(options.max_attempts(self.max_attempts)?.format(format))
    }
}

impl Command {
    /// Build the program and options for this subcommand
    fn into_session(self) -> anyhow::Result<(Program, SessionOptions)> {
        let mut options = SessionOptions::new();

        let program = match self {
            Command::Calc { precision, input } => {
                if let Some(precision) = precision {
                    options = options.precision(precision)?;
                }
                options = input.apply(options)?;
                Program::Calculator
            }
            Command::Convert { precision, input } => {
                if let Some(precision) = precision {
                    options = options.precision(precision)?;
                }
                options = input.apply(options)?;
                Program::Converter
            }
            Command::Guess {
                min,
                max,
                seed,
                input,
            } => {
                options = input.apply(options.range(min, max)?.seed(seed))?;
                Program::Guesser
            }
        };

        Ok((program, options))
    }
}

fn intro(program: Program) -> &'static str {
    match program {
        Program::Calculator => {
            "Welcome to the calculator. It can add, subtract, multiply or divide two numbers."
        }
        Program::Converter => {
            "Welcome to the unit converter. You can convert inches - cm, cm - inches, kg - lbs and lbs - kg."
        }
        Program::Guesser => "Welcome to the higher-lower game.",
    }
}

fn run(command: Command) -> anyhow::Result<i32> {
    let (program, options) = command.into_session()?;

    println!("{}", intro(program));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), options);
    let outcome = session.run(program).context("session aborted")?;

    Ok(outcome.exit_code())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args.command) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("abacus: {:#}", e);
            process::exit(1);
        }
    }
}
