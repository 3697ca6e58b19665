//! Calculator interaction state.
//!
//! `InteractionState` is the single store a calculator session mutates.
//! `Phase` is the coarse state machine position derived from it.

use super::number::parse_operand;
use super::operator::Operator;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Buffer value after a clear.
pub const CLEARED_OPERAND: &str = "0";

/// The four fields a calculator session carries between key presses.
///
/// Fields are read through getters; new values are produced only by the
/// transition functions in [`crate::core::transition`].
///
/// # Example
///
/// ```rust
/// use abacus::core::{InteractionState, Phase};
///
/// let state = InteractionState::new();
/// assert_eq!(state.current_operand(), "0");
/// assert_eq!(state.previous_operand(), None);
/// assert_eq!(state.operator(), None);
/// assert!(state.overwrite());
/// assert_eq!(state.phase(), Phase::Ready);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct InteractionState {
    pub(crate) previous_operand: Option<String>,
    pub(crate) current_operand: String,
    pub(crate) operator: Option<Operator>,
    pub(crate) overwrite: bool,
}

/// Position of the machine: whether an operator is pending and whether the
/// next digit replaces the buffer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// No operator pending, next digit starts a new number.
    Ready,
    /// No operator pending, digits extend the buffer.
    Entering,
    /// Operator pending, next digit starts the right operand.
    AwaitingOperand,
    /// Operator pending, digits extend the right operand.
    EnteringOperand,
}

/// Broken state invariants, reported when a state comes from outside the
/// transition functions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateViolation {
    #[error("current operand is empty")]
    EmptyOperand,

    #[error("operand '{operand}' contains more than one decimal point")]
    MultipleDecimalPoints { operand: String },

    #[error("previous operand '{operand}' is set without a pending operator")]
    OperandWithoutOperator { operand: String },
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionState {
    /// The cleared state.
    pub fn new() -> Self {
        Self {
            previous_operand: None,
            current_operand: CLEARED_OPERAND.to_string(),
            operator: None,
            overwrite: true,
        }
    }

    /// Assemble a state from raw parts without checking it.
    ///
    /// Call [`InteractionState::validate`] before trusting the result.
    pub fn from_parts(
        previous_operand: Option<String>,
        current_operand: impl Into<String>,
        operator: Option<Operator>,
        overwrite: bool,
    ) -> Self {
        Self {
            previous_operand,
            current_operand: current_operand.into(),
            operator,
            overwrite,
        }
    }

    pub fn previous_operand(&self) -> Option<&str> {
        self.previous_operand.as_deref()
    }

    /// The buffer shown on the display.
    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    pub fn phase(&self) -> Phase {
        match (self.operator.is_some(), self.overwrite) {
            (false, true) => Phase::Ready,
            (false, false) => Phase::Entering,
            (true, true) => Phase::AwaitingOperand,
            (true, false) => Phase::EnteringOperand,
        }
    }

    /// True when the display holds text that is not a number, such as the
    /// division by zero message or `NaN`.
    pub fn is_error(&self) -> bool {
        parse_operand(&self.current_operand).is_none()
    }

    /// Check the structural invariants.
    pub fn validate(&self) -> Result<(), StateViolation> {
        if self.current_operand.is_empty() {
            return Err(StateViolation::EmptyOperand);
        }
        if self.current_operand.matches('.').count() > 1 {
            return Err(StateViolation::MultipleDecimalPoints {
                operand: self.current_operand.clone(),
            });
        }
        if let (None, Some(previous)) = (self.operator, &self.previous_operand) {
            return Err(StateViolation::OperandWithoutOperator {
                operand: previous.clone(),
            });
        }
        Ok(())
    }
}

impl Phase {
    pub fn name(&self) -> &str {
        match self {
            Self::Ready => "Ready",
            Self::Entering => "Entering",
            Self::AwaitingOperand => "AwaitingOperand",
            Self::EnteringOperand => "EnteringOperand",
        }
    }

    /// True while an operator waits for its right operand.
    pub fn has_pending_operator(&self) -> bool {
        matches!(self, Self::AwaitingOperand | Self::EnteringOperand)
    }
}
