//! Operator tokens and their arithmetic.

use std::fmt;

/// An arithmetic operation the keypad can apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// `a % b` is `b` percent of `a`.
    Percent,
    Power,
    Square,
    Sqrt,
    Reciprocal,
}

impl Operator {
    /// Display glyph used in expression traces.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Percent => "%",
            Self::Power => "^",
            Self::Square => "sqr",
            Self::Sqrt => "√",
            Self::Reciprocal => "1/",
        }
    }

    /// Whether the operator takes a single operand.
    pub fn is_unary(self) -> bool {
        matches!(self, Self::Square | Self::Sqrt | Self::Reciprocal)
    }

    /// Apply the operator. Unary operators ignore `rhs`.
    ///
    /// Plain `f64` arithmetic: undefined results come back as infinities
    /// or NaN rather than failing.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
            Self::Percent => lhs * rhs / 100.0,
            Self::Power => lhs.powf(rhs),
            Self::Square => lhs * lhs,
            Self::Sqrt => lhs.sqrt(),
            Self::Reciprocal => 1.0 / lhs,
        }
    }

    /// Error message for a non-finite result produced by this operator.
    pub fn failure_message(self, rhs: f64) -> &'static str {
        match self {
            Self::Divide if rhs == 0.0 => "Cannot divide by zero",
            Self::Reciprocal => "Cannot divide by zero",
            Self::Sqrt => "Invalid input",
            _ => "Result is undefined",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_arithmetic() {
        assert_eq!(Operator::Add.apply(7.0, 3.0), 10.0);
        assert_eq!(Operator::Subtract.apply(7.0, 3.0), 4.0);
        assert_eq!(Operator::Multiply.apply(7.0, 3.0), 21.0);
        assert_eq!(Operator::Divide.apply(9.0, 3.0), 3.0);
        assert_eq!(Operator::Percent.apply(200.0, 15.0), 30.0);
        assert_eq!(Operator::Power.apply(2.0, 10.0), 1024.0);
    }

    #[test]
    fn test_unary_arithmetic() {
        assert_eq!(Operator::Square.apply(4.0, 0.0), 16.0);
        assert_eq!(Operator::Sqrt.apply(9.0, 0.0), 3.0);
        assert_eq!(Operator::Reciprocal.apply(4.0, 0.0), 0.25);
    }

    #[test]
    fn test_undefined_results_do_not_panic() {
        assert_eq!(Operator::Divide.apply(5.0, 0.0), f64::INFINITY);
        assert!(Operator::Sqrt.apply(-4.0, 0.0).is_nan());
        assert_eq!(Operator::Reciprocal.apply(0.0, 0.0), f64::INFINITY);
    }

    #[test]
    fn test_unary_classification() {
        assert!(Operator::Sqrt.is_unary());
        assert!(Operator::Square.is_unary());
        assert!(Operator::Reciprocal.is_unary());
        assert!(!Operator::Divide.is_unary());
        assert!(!Operator::Percent.is_unary());
    }

    #[test]
    fn test_display_uses_symbol() {
        assert_eq!(Operator::Multiply.to_string(), "×");
        assert_eq!(format!("{}9", Operator::Sqrt), "√9");
    }
}
