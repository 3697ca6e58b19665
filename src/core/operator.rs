//! Binary operators and their arithmetic.
//!
//! Arithmetic is a pure function returning an explicit `Result`, so an
//! exceptional outcome such as division by zero is never confused with a
//! numeric result.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four binary operations a calculator key can select.
///
/// # Example
///
/// ```rust
/// use abacus::core::Operator;
///
/// assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
/// assert!(Operator::Divide.apply(1.0, 0.0).is_err());
/// assert_eq!("multiply".parse::<Operator>(), Ok(Operator::Multiply));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Exceptional arithmetic outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Returned when an operator identifier is not recognised.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown operator '{0}', expected one of add, subtract, multiply, divide")]
pub struct UnknownOperator(pub String);

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Apply the operation to `a` and `b`.
    ///
    /// A zero divisor (of either sign) yields `ArithmeticError::DivisionByZero`.
    /// Overflow is not an error: it produces an infinite result.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, ArithmeticError> {
        match self {
            Operator::Add => Ok(a + b),
            Operator::Subtract => Ok(a - b),
            Operator::Multiply => Ok(a * b),
            Operator::Divide if b == 0.0 => Err(ArithmeticError::DivisionByZero),
            Operator::Divide => Ok(a / b),
        }
    }

    /// Identifier used by dispatchers and serialized forms.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
            Operator::Divide => "divide",
        }
    }

    /// Key legend.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '−',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOperator(s.to_string()))
    }
}
