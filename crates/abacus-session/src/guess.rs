//! The higher/lower number guessing game.

use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;

use rand::Rng;

/// Feedback for a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    Lower,
    Higher,
    Correct,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::Lower => write!(f, "Try a lower number!"),
            Hint::Higher => write!(f, "Try a higher number!"),
            Hint::Correct => write!(f, "Correct!"),
        }
    }
}

/// A secret number and the count of guesses made against it.
#[derive(Debug, Clone)]
pub struct Guesser {
    secret: i64,
    tries: u32,
}

impl Guesser {
    /// Draw a secret uniformly from `range`.
    ///
    /// Guesses are compared as `f64`, so secrets should stay within
    /// `±2^53`, which `SessionOptions::range` enforces.
    pub fn new<R: Rng>(range: RangeInclusive<i64>, rng: &mut R) -> Self {
        Self::with_secret(rng.gen_range(range))
    }

    pub fn with_secret(secret: i64) -> Self {
        Self { secret, tries: 0 }
    }

    /// Judge a guess. Every call counts as one try.
    pub fn guess(&mut self, value: f64) -> Hint {
        self.tries += 1;
        match value.partial_cmp(&(self.secret as f64)) {
            Some(Ordering::Greater) => Hint::Lower,
            Some(Ordering::Equal) => Hint::Correct,
            _ => Hint::Higher,
        }
    }

    pub fn tries(&self) -> u32 {
        self.tries
    }

    pub fn secret(&self) -> i64 {
        self.secret
    }
}
