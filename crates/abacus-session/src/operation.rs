//! The operation discriminator and the computations it selects.

use std::fmt;

use crate::error::ComputeError;

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Pounds per kilogram.
pub const LBS_PER_KG: f64 = 2.20462;

/// The closed set of actions a session can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    InchesToCm,
    CmToInches,
    KgToLbs,
    LbsToKg,
    /// No accepted keyword matched.
    Invalid,
}

impl Operation {
    /// Every valid operation, in declaration order.
    pub const ALL: [Operation; 8] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::InchesToCm,
        Operation::CmToInches,
        Operation::KgToLbs,
        Operation::LbsToKg,
    ];

    /// Match an arithmetic keyword exactly (`add`, `sub`, `mul`, `div`).
    pub fn parse(token: &str) -> Self {
        match token {
            "add" => Operation::Add,
            "sub" => Operation::Subtract,
            "mul" => Operation::Multiply,
            "div" => Operation::Divide,
            _ => Operation::Invalid,
        }
    }

    /// Match a source and target unit exactly.
    pub fn from_units(from: &str, to: &str) -> Self {
        match (from, to) {
            ("inches", "cm") => Operation::InchesToCm,
            ("cm", "inches") => Operation::CmToInches,
            ("kg", "lbs") => Operation::KgToLbs,
            ("lbs", "kg") => Operation::LbsToKg,
            _ => Operation::Invalid,
        }
    }

    pub fn is_valid(self) -> bool {
        self != Operation::Invalid
    }

    /// Whether this is one of the unit conversions.
    pub fn is_conversion(self) -> bool {
        self.units().is_some()
    }

    /// The source and target unit names of a conversion.
    pub fn units(self) -> Option<(&'static str, &'static str)> {
        match self {
            Operation::InchesToCm => Some(("inches", "cm")),
            Operation::CmToInches => Some(("cm", "inches")),
            Operation::KgToLbs => Some(("kg", "lbs")),
            Operation::LbsToKg => Some(("lbs", "kg")),
            _ => None,
        }
    }

    /// The infix symbol of an arithmetic operation.
    pub fn symbol(self) -> Option<char> {
        match self {
            Operation::Add => Some('+'),
            Operation::Subtract => Some('-'),
            Operation::Multiply => Some('*'),
            Operation::Divide => Some('/'),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.symbol(), self.units()) {
            (Some(symbol), _) => write!(f, "{}", symbol),
            (_, Some((from, to))) => write!(f, "{} to {}", from, to),
            _ => write!(f, "invalid"),
        }
    }
}

/// Apply `op` to the operands.
///
/// Conversions only use `a`. A result that overflows to infinity is an
/// error rather than a value.
pub fn compute_result(a: f64, b: f64, op: Operation) -> Result<f64, ComputeError> {
    let value = match op {
        Operation::Add => a + b,
        Operation::Subtract => a - b,
        Operation::Multiply => a * b,
        Operation::Divide if b == 0.0 => return Err(ComputeError::DivisionByZero),
        Operation::Divide => a / b,
        Operation::Invalid => return Err(ComputeError::InvalidOperation),
        conversion => return convert(a, conversion),
    };
    finite(value)
}

/// Convert `value` between the units of a conversion operation.
pub fn convert(value: f64, op: Operation) -> Result<f64, ComputeError> {
    let converted = match op {
        Operation::InchesToCm => value * CM_PER_INCH,
        Operation::CmToInches => value / CM_PER_INCH,
        Operation::KgToLbs => value * LBS_PER_KG,
        Operation::LbsToKg => value / LBS_PER_KG,
        _ => return Err(ComputeError::InvalidOperation),
    };
    finite(converted)
}

fn finite(value: f64) -> Result<f64, ComputeError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ComputeError::NonFiniteResult)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(Operation::parse("add"), Operation::Add);
        assert_eq!(Operation::parse("sub"), Operation::Subtract);
        assert_eq!(Operation::parse("mul"), Operation::Multiply);
        assert_eq!(Operation::parse("div"), Operation::Divide);
    }

    #[test]
    fn test_parse_is_exact() {
        for token in ["ADD", "Add", " add", "add ", "ad", "addition", "", "xyz", "+"] {
            assert_eq!(Operation::parse(token), Operation::Invalid, "token {:?}", token);
        }
    }

    #[test]
    fn test_from_units() {
        assert_eq!(Operation::from_units("inches", "cm"), Operation::InchesToCm);
        assert_eq!(Operation::from_units("cm", "inches"), Operation::CmToInches);
        assert_eq!(Operation::from_units("kg", "lbs"), Operation::KgToLbs);
        assert_eq!(Operation::from_units("lbs", "kg"), Operation::LbsToKg);
        assert_eq!(Operation::from_units("cm", "cm"), Operation::Invalid);
        assert_eq!(Operation::from_units("inches", "kg"), Operation::Invalid);
        assert_eq!(Operation::from_units("Inches", "cm"), Operation::Invalid);
    }

    #[test]
    fn test_arithmetic() {
        let pairs = [(5.0, 3.0), (-2.5, 4.0), (0.1, 0.2), (1e10, -3.0)];
        for (a, b) in pairs {
            assert_eq!(compute_result(a, b, Operation::Add), Ok(a + b));
            assert_eq!(compute_result(a, b, Operation::Subtract), Ok(a - b));
            assert_eq!(compute_result(a, b, Operation::Multiply), Ok(a * b));
            assert_eq!(compute_result(a, b, Operation::Divide), Ok(a / b));
        }
    }

    #[test]
    fn test_divide_by_zero() {
        for a in [0.0, 1.0, -7.5, f64::MAX] {
            assert_eq!(
                compute_result(a, 0.0, Operation::Divide),
                Err(ComputeError::DivisionByZero)
            );
            assert_eq!(
                compute_result(a, -0.0, Operation::Divide),
                Err(ComputeError::DivisionByZero)
            );
        }
    }

    #[test]
    fn test_invalid_never_computes() {
        assert_eq!(
            compute_result(1.0, 2.0, Operation::Invalid),
            Err(ComputeError::InvalidOperation)
        );
        assert_eq!(convert(1.0, Operation::Add), Err(ComputeError::InvalidOperation));
    }

    #[test]
    fn test_overflow_is_an_error() {
        assert_eq!(
            compute_result(1e308, 1e308, Operation::Multiply),
            Err(ComputeError::NonFiniteResult)
        );
        assert_eq!(
            compute_result(f64::MAX, f64::MAX, Operation::Add),
            Err(ComputeError::NonFiniteResult)
        );
        assert_eq!(
            compute_result(1e308, 1e-308, Operation::Divide),
            Err(ComputeError::NonFiniteResult)
        );
        assert_eq!(
            convert(f64::MAX, Operation::KgToLbs),
            Err(ComputeError::NonFiniteResult)
        );
        assert_eq!(
            compute_result(f64::MAX, 1.0, Operation::Multiply),
            Ok(f64::MAX)
        );
    }

    #[test]
    fn test_conversion_constants() {
        assert_eq!(convert(10.0, Operation::InchesToCm), Ok(25.4));
        assert_eq!(convert(1.0, Operation::KgToLbs), Ok(2.20462));
        assert_eq!(compute_result(10.0, 99.0, Operation::InchesToCm), Ok(25.4));
    }

    #[test]
    fn test_conversion_round_trip() {
        let pairs = [
            (Operation::InchesToCm, Operation::CmToInches),
            (Operation::KgToLbs, Operation::LbsToKg),
        ];
        for (there, back) in pairs {
            for x in [0.0, 1.0, 10.0, 3.75, -12.5, 1234.5678] {
                let y = convert(x, there).and_then(|v| convert(v, back)).unwrap();
                assert!(close(x, y), "{} -> {:?} -> {:?} gave {}", x, there, back, y);
                let y = convert(x, back).and_then(|v| convert(v, there)).unwrap();
                assert!(close(x, y));
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Operation::Add.to_string(), "+");
        assert_eq!(Operation::KgToLbs.to_string(), "kg to lbs");
        assert_eq!(Operation::Invalid.to_string(), "invalid");
        assert!(Operation::ALL.iter().all(|op| op.is_valid()));
        assert_eq!(Operation::ALL.iter().filter(|op| op.is_conversion()).count(), 4);
    }
}
