//! Pure transition functions.
//!
//! Each function reads a state and returns the state that follows a key
//! press. Nothing is mutated in place and nothing is rendered here; the
//! calculator shell decides what to do with the result.
//!
//! # Example
//!
//! ```rust
//! use abacus::config::CalculatorConfig;
//! use abacus::core::{transition, Digit, Input, InteractionState, Operator};
//!
//! let config = CalculatorConfig::default();
//! let keys = [
//!     Input::Digit(Digit::new(2).unwrap()),
//!     Input::Operator(Operator::Add),
//!     Input::Digit(Digit::new(3).unwrap()),
//!     Input::Operator(Operator::Multiply),
//!     Input::Digit(Digit::new(4).unwrap()),
//!     Input::Equals,
//! ];
//!
//! let state = keys.iter().fold(InteractionState::new(), |state, input| {
//!     transition::apply(&state, *input, &config).unwrap_or(state)
//! });
//!
//! // Left to right, no precedence: (2 + 3) × 4
//! assert_eq!(state.current_operand(), "20");
//! ```

use super::input::{Digit, Input};
use super::number::{format_number_with, parse_operand};
use super::operator::{ArithmeticError, Operator};
use super::state::{InteractionState, CLEARED_OPERAND};
use crate::config::CalculatorConfig;

/// Outcome of a transition.
#[derive(Clone, Debug, PartialEq)]
pub enum TransitionResult {
    /// The press produced a different state.
    Applied(InteractionState),

    /// The press left the state exactly as it was.
    Skipped,
}

impl TransitionResult {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// The new state, or `current` when the press was skipped.
    pub fn unwrap_or(self, current: InteractionState) -> InteractionState {
        match self {
            Self::Applied(next) => next,
            Self::Skipped => current,
        }
    }
}

fn settle(before: &InteractionState, after: InteractionState) -> TransitionResult {
    if after == *before {
        TransitionResult::Skipped
    } else {
        TransitionResult::Applied(after)
    }
}

/// Run the transition bound to `input`.
pub fn apply(
    state: &InteractionState,
    input: Input,
    config: &CalculatorConfig,
) -> TransitionResult {
    match input {
        Input::Clear => clear(state),
        Input::Digit(digit) => input_digit(state, digit),
        Input::Decimal => input_decimal(state),
        Input::Operator(op) => choose_operator(state, op, config),
        Input::Equals => compute(state, config),
    }
}

/// Reset every field to its initial value.
pub fn clear(state: &InteractionState) -> TransitionResult {
    settle(state, InteractionState::new())
}

/// Type a digit.
///
/// In overwrite mode the digit replaces the buffer. Otherwise it is
/// appended, except that a lone `"0"` is replaced so no leading zero forms.
pub fn input_digit(state: &InteractionState, digit: Digit) -> TransitionResult {
    let mut next = state.clone();
    if state.overwrite || state.current_operand == CLEARED_OPERAND {
        next.current_operand = digit.as_char().to_string();
    } else {
        next.current_operand.push(digit.as_char());
    }
    next.overwrite = false;
    settle(state, next)
}

/// Type a decimal point. A buffer that already has one is left alone.
pub fn input_decimal(state: &InteractionState) -> TransitionResult {
    let mut next = state.clone();
    if state.overwrite {
        next.current_operand = "0.".to_string();
        next.overwrite = false;
    } else if !state.current_operand.contains('.') {
        next.current_operand.push('.');
    }
    settle(state, next)
}

/// Select the pending operator.
///
/// Pressing an operator right after another one only swaps it. Pressing one
/// after a right operand was typed first collapses the pending operation,
/// and the result becomes the new left operand.
pub fn choose_operator(
    state: &InteractionState,
    op: Operator,
    config: &CalculatorConfig,
) -> TransitionResult {
    if state.operator.is_some() && state.overwrite {
        let mut next = state.clone();
        next.operator = Some(op);
        return settle(state, next);
    }

    let mut next = if state.operator.is_some() {
        compute(state, config).unwrap_or(state.clone())
    } else {
        state.clone()
    };
    next.previous_operand = Some(next.current_operand.clone());
    next.operator = Some(op);
    next.overwrite = true;
    settle(state, next)
}

/// Evaluate the pending operation.
///
/// Skipped when no operator is pending or either operand has no numeric
/// value. Division by zero puts the configured message on the display.
pub fn compute(state: &InteractionState, config: &CalculatorConfig) -> TransitionResult {
    let Some(operator) = state.operator else {
        return TransitionResult::Skipped;
    };
    let left = state.previous_operand.as_deref().and_then(parse_operand);
    let right = parse_operand(&state.current_operand);
    let (Some(a), Some(b)) = (left, right) else {
        return TransitionResult::Skipped;
    };

    let display = match operator.apply(a, b) {
        Ok(value) => format_number_with(value, config.significant_digits),
        Err(ArithmeticError::DivisionByZero) => config.division_by_zero_message.clone(),
    };

    TransitionResult::Applied(InteractionState {
        previous_operand: None,
        current_operand: display,
        operator: None,
        overwrite: true,
    })
}
