//! Mapping UI actions to key presses.
//!
//! A keypad front end tags each button with an action identifier and, for
//! digit and operator keys, a payload. `dispatch` turns that pair into an
//! [`Input`] so malformed buttons are rejected before they reach a
//! calculator.

use crate::core::{Digit, Input, Operator};
use thiserror::Error;

/// Errors for actions that do not name a valid key press.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("Unknown action '{0}'")]
    UnknownAction(String),

    #[error("Action '{action}' requires a payload")]
    MissingPayload { action: String },

    #[error("Invalid digit payload '{0}'")]
    InvalidDigit(String),

    #[error("Unknown operator '{0}'")]
    UnknownOperator(String),
}

/// Map an action identifier and its payload to a key press.
///
/// Recognised actions are `digit`, `decimal`, `operator`, `equal` and
/// `clear`. Payloads on actions that take none are ignored.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Digit, Input, Operator};
/// use abacus::dispatch::{dispatch, DispatchError};
///
/// assert_eq!(dispatch("digit", Some("7")), Ok(Input::Digit(Digit::new(7).unwrap())));
/// assert_eq!(dispatch("operator", Some("divide")), Ok(Input::Operator(Operator::Divide)));
/// assert_eq!(dispatch("equal", None), Ok(Input::Equals));
/// assert!(matches!(dispatch("sqrt", None), Err(DispatchError::UnknownAction(_))));
/// ```
pub fn dispatch(action: &str, payload: Option<&str>) -> Result<Input, DispatchError> {
    match action {
        "digit" => parse_digit(require_payload(action, payload)?).map(Input::Digit),
        "operator" => {
            let name = require_payload(action, payload)?;
            name.parse::<Operator>()
                .map(Input::Operator)
                .map_err(|_| DispatchError::UnknownOperator(name.to_string()))
        }
        "decimal" => Ok(Input::Decimal),
        "equal" => Ok(Input::Equals),
        "clear" => Ok(Input::Clear),
        other => Err(DispatchError::UnknownAction(other.to_string())),
    }
}

fn require_payload<'a>(action: &str, payload: Option<&'a str>) -> Result<&'a str, DispatchError> {
    payload.ok_or_else(|| DispatchError::MissingPayload {
        action: action.to_string(),
    })
}

fn parse_digit(payload: &str) -> Result<Digit, DispatchError> {
    let mut chars = payload.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            Digit::try_from(c).map_err(|_| DispatchError::InvalidDigit(payload.to_string()))
        }
        _ => Err(DispatchError::InvalidDigit(payload.to_string())),
    }
}
