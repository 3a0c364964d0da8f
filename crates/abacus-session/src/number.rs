//! Parsing operands out of user tokens and formatting results back to text.

use crate::error::NumberError;

/// Largest number of fractional digits a result is rendered with.
pub const MAX_PRECISION: usize = 64;

/// Parse a whole token as a finite decimal number.
///
/// Only digits, a sign, a decimal point and an exponent marker are accepted,
/// so `inf`, `nan` and tokens with trailing text are rejected as invalid.
/// Numerals that overflow to infinity, or that underflow to zero although
/// their mantissa is non-zero, are reported as out of range.
pub fn parse_number(token: &str) -> Result<f64, NumberError> {
    let invalid = || NumberError::InvalidArgument(token.to_string());

    let numeric_chars = token
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !numeric_chars {
        return Err(invalid());
    }

    let value: f64 = token.parse().map_err(|_| invalid())?;

    if value.is_infinite() || (value == 0.0 && has_nonzero_mantissa(token)) {
        return Err(NumberError::OutOfRange(token.to_string()));
    }

    Ok(value)
}

fn has_nonzero_mantissa(token: &str) -> bool {
    token
        .split(['e', 'E'])
        .next()
        .is_some_and(|mantissa| mantissa.bytes().any(|b| matches!(b, b'1'..=b'9')))
}

/// Format `value` with `precision` fractional digits, then drop trailing
/// zeros and a dangling decimal point.
///
/// Rounding is half-to-even on the exact binary value, which is what the
/// standard `{:.N}` formatting does. Negative zero renders as `"0"`.
/// Precision is capped at [`MAX_PRECISION`].
pub fn format_result(value: f64, precision: usize) -> String {
    let precision = precision.min(MAX_PRECISION);
    let mut text = format!("{value:.precision$}");

    if text.contains('.') {
        let len = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(len);
    }

    if text == "-0" {
        text.remove(0);
    }
    text
}
