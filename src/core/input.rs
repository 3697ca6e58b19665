//! Typed key presses.

use super::operator::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single decimal digit key, `0` through `9`.
///
/// # Example
///
/// ```rust
/// use abacus::core::Digit;
///
/// let seven = Digit::try_from('7').unwrap();
/// assert_eq!(seven.as_char(), '7');
/// assert!(Digit::try_from('x').is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Digit(u8);

/// Returned when a character is not a decimal digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("'{0}' is not a decimal digit")]
pub struct InvalidDigit(pub char);

impl Digit {
    pub const ZERO: Digit = Digit(0);

    /// Digit for a numeric value, `None` above 9.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Digit(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = InvalidDigit;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Digit(d as u8))
            .ok_or(InvalidDigit(c))
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> char {
        digit.as_char()
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One button press, already mapped to its transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Input {
    Clear,
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Equals,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Clear => write!(f, "C"),
            Input::Digit(d) => write!(f, "{d}"),
            Input::Decimal => write!(f, "."),
            Input::Operator(op) => write!(f, "{op}"),
            Input::Equals => write!(f, "="),
        }
    }
}
