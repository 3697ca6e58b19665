//! Session press log.
//!
//! An immutable, in-memory record of the keys pressed in one calculator
//! session and the phases they moved between. It is a diagnostic trace only:
//! nothing here replays or reverts a press.

use super::input::Input;
use super::state::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single key press.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Digit, Input, Phase, PressRecord};
/// use chrono::Utc;
///
/// let press = PressRecord {
///     input: Input::Digit(Digit::new(4).unwrap()),
///     from: Phase::Ready,
///     to: Phase::Entering,
///     display: "4".to_string(),
///     applied: true,
///     timestamp: Utc::now(),
/// };
/// assert!(press.changed_phase());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PressRecord {
    /// The key that was pressed
    pub input: Input,
    /// Phase before the press
    pub from: Phase,
    /// Phase after the press
    pub to: Phase,
    /// Display text after the press
    pub display: String,
    /// Whether the press changed the state
    pub applied: bool,
    /// When the press happened
    pub timestamp: DateTime<Utc>,
}

impl PressRecord {
    pub fn changed_phase(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered log of key presses.
///
/// `record` returns a new history with the press appended and leaves the
/// original untouched.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Input, Operator, Phase, PressRecord, SessionHistory};
/// use chrono::Utc;
///
/// let history = SessionHistory::new();
/// let history = history.record(PressRecord {
///     input: Input::Operator(Operator::Add),
///     from: Phase::Ready,
///     to: Phase::AwaitingOperand,
///     display: "0".to_string(),
///     applied: true,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.get_path(), vec![Phase::Ready, Phase::AwaitingOperand]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionHistory {
    presses: Vec<PressRecord>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self {
            presses: Vec::new(),
        }
    }

    /// Record a press, returning a new history.
    pub fn record(&self, press: PressRecord) -> Self {
        let mut presses = self.presses.clone();
        presses.push(press);
        Self { presses }
    }

    /// Phases visited: the starting phase, then the phase after each press.
    pub fn get_path(&self) -> Vec<Phase> {
        let mut path = Vec::with_capacity(self.presses.len() + 1);
        if let Some(first) = self.presses.first() {
            path.push(first.from);
        }
        path.extend(self.presses.iter().map(|press| press.to));
        path
    }

    /// Time between the first and last press, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.presses.first(), self.presses.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn presses(&self) -> &[PressRecord] {
        &self.presses
    }

    pub fn last(&self) -> Option<&PressRecord> {
        self.presses.last()
    }

    pub fn len(&self) -> usize {
        self.presses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Digit, Operator};

    fn press(input: Input, from: Phase, to: Phase, display: &str) -> PressRecord {
        PressRecord {
            input,
            from,
            to,
            display: display.to_string(),
            applied: true,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = SessionHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = SessionHistory::new();
        let digit = Input::Digit(Digit::new(1).unwrap());
        let new_history = history.record(press(digit, Phase::Ready, Phase::Entering, "1"));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_phase_sequence() {
        let history = SessionHistory::new()
            .record(press(
                Input::Digit(Digit::new(3).unwrap()),
                Phase::Ready,
                Phase::Entering,
                "3",
            ))
            .record(press(
                Input::Operator(Operator::Add),
                Phase::Entering,
                Phase::AwaitingOperand,
                "3",
            ))
            .record(press(
                Input::Digit(Digit::new(4).unwrap()),
                Phase::AwaitingOperand,
                Phase::EnteringOperand,
                "4",
            ));

        assert_eq!(
            history.get_path(),
            vec![
                Phase::Ready,
                Phase::Entering,
                Phase::AwaitingOperand,
                Phase::EnteringOperand
            ]
        );
        assert_eq!(history.last().map(|p| p.display.as_str()), Some("4"));
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let mut first = press(Input::Clear, Phase::Ready, Phase::Ready, "0");
        first.timestamp = start;
        let mut second = press(Input::Equals, Phase::Ready, Phase::Ready, "0");
        second.timestamp = start + chrono::Duration::milliseconds(250);

        let history = SessionHistory::new().record(first).record(second);
        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = SessionHistory::new().record(press(
            Input::Decimal,
            Phase::Ready,
            Phase::Entering,
            "0.",
        ));
        let json = serde_json::to_string(&history).unwrap();
        let deserialized: SessionHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history, deserialized);
    }
}
