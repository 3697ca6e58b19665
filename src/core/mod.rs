//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - Interaction state and its derived phase
//! - Typed key presses and operators
//! - Transition functions from one state to the next
//! - Number formatting and operand parsing
//! - An immutable press log
//!
//! Nothing in this module renders or logs, following the
//! "pure core, imperative shell" philosophy.

mod history;
mod input;
mod number;
mod operator;
mod state;
pub mod transition;

pub use history::{PressRecord, SessionHistory};
pub use input::{Digit, Input, InvalidDigit};
pub use number::{
    format_number, format_number_with, parse_operand, DEFAULT_SIGNIFICANT_DIGITS,
    MAX_SIGNIFICANT_DIGITS,
};
pub use operator::{ArithmeticError, Operator, UnknownOperator};
pub use state::{InteractionState, Phase, StateViolation, CLEARED_OPERAND};
pub use transition::TransitionResult;
