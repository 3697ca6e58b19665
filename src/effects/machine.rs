//! Calculator session that runs transitions and drives a display.

use crate::builder::CalculatorBuilder;
use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::config::CalculatorConfig;
use crate::core::transition::{self, TransitionResult};
use crate::core::{Digit, Input, InteractionState, Operator, PressRecord, SessionHistory};
use crate::effects::render::Renderer;
use chrono::Utc;

/// One live calculator: a state, its configuration and its display.
///
/// Each press runs one pure transition to completion. The display is
/// re-rendered only when the press changed the state.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Digit, Operator};
/// use abacus::effects::{Calculator, RecordingRenderer};
///
/// let mut calc = Calculator::new(RecordingRenderer::new());
/// calc.input_digit(Digit::new(5).unwrap());
/// calc.choose_operator(Operator::Add);
/// calc.choose_operator(Operator::Subtract);
/// calc.input_digit(Digit::new(2).unwrap());
/// calc.compute();
///
/// assert_eq!(calc.display(), "3");
/// assert_eq!(calc.renderer().current(), Some("3"));
/// ```
pub struct Calculator<R: Renderer> {
    state: InteractionState,
    config: CalculatorConfig,
    renderer: R,
    history: Option<SessionHistory>,
}

impl<R: Renderer> Calculator<R> {
    /// Start a cleared calculator with the default configuration and paint
    /// the initial display.
    pub fn new(renderer: R) -> Self {
        Self::from_parts(renderer, CalculatorConfig::default(), InteractionState::new())
    }

    pub fn builder() -> CalculatorBuilder<R> {
        CalculatorBuilder::new()
    }

    pub(crate) fn from_parts(
        renderer: R,
        config: CalculatorConfig,
        state: InteractionState,
    ) -> Self {
        let history = config.record_history.then(SessionHistory::new);
        let mut calculator = Self {
            state,
            config,
            renderer,
            history,
        };
        calculator.paint();
        calculator
    }

    /// Handle one key press. Returns true when the display was re-rendered.
    pub fn press(&mut self, input: Input) -> bool {
        let from = self.state.phase();
        let was_error = self.state.is_error();

        let applied = match transition::apply(&self.state, input, &self.config) {
            TransitionResult::Applied(next) => {
                self.state = next;
                self.paint();
                true
            }
            TransitionResult::Skipped => false,
        };

        let to = self.state.phase();
        tracing::debug!(
            input = %input,
            from = from.name(),
            to = to.name(),
            display = self.state.current_operand(),
            applied,
            "key press"
        );
        if applied && !was_error && self.state.is_error() {
            tracing::warn!(
                display = self.state.current_operand(),
                "calculation produced an error display"
            );
        }

        if let Some(history) = self.history.take() {
            self.history = Some(history.record(PressRecord {
                input,
                from,
                to,
                display: self.state.current_operand().to_string(),
                applied,
                timestamp: Utc::now(),
            }));
        }

        applied
    }

    pub fn clear(&mut self) -> bool {
        self.press(Input::Clear)
    }

    pub fn input_digit(&mut self, digit: Digit) -> bool {
        self.press(Input::Digit(digit))
    }

    pub fn input_decimal(&mut self) -> bool {
        self.press(Input::Decimal)
    }

    pub fn choose_operator(&mut self, op: Operator) -> bool {
        self.press(Input::Operator(op))
    }

    pub fn compute(&mut self) -> bool {
        self.press(Input::Equals)
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Text currently on the display.
    pub fn display(&self) -> &str {
        self.state.current_operand()
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Press log, present only when `record_history` is enabled.
    pub fn history(&self) -> Option<&SessionHistory> {
        self.history.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Snapshot the session state and configuration. The press log is not
    /// included.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(self.state.clone(), self.config.clone())
    }

    /// Resume from a checkpoint and repaint the display.
    ///
    /// The checkpoint is validated first; on error the session is untouched.
    pub fn restore(&mut self, checkpoint: Checkpoint) -> Result<(), CheckpointError> {
        checkpoint.validate()?;
        let phase = checkpoint.state.phase();
        tracing::info!(
            checkpoint = %checkpoint.id,
            phase = phase.name(),
            "restoring calculator from checkpoint"
        );

        self.history = match (checkpoint.config.record_history, self.history.take()) {
            (true, existing) => Some(existing.unwrap_or_default()),
            (false, _) => None,
        };
        self.state = checkpoint.state;
        self.config = checkpoint.config;
        self.paint();
        Ok(())
    }

    fn paint(&mut self) {
        self.renderer.render(self.state.current_operand());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::render::RecordingRenderer;

    fn digit(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    #[test]
    fn initial_paint_shows_zero() {
        let calc = Calculator::new(RecordingRenderer::new());
        assert_eq!(calc.renderer().frames(), ["0"]);
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn applied_presses_render() {
        let mut calc = Calculator::new(RecordingRenderer::new());
        assert!(calc.input_digit(digit(1)));
        assert!(calc.input_digit(digit(2)));
        assert!(calc.input_decimal());
        assert_eq!(calc.renderer().frames(), ["0", "1", "12", "12."]);
    }

    #[test]
    fn skipped_presses_do_not_render() {
        let mut calc = Calculator::new(RecordingRenderer::new());
        calc.input_digit(digit(7));
        assert!(!calc.compute());
        calc.input_decimal();
        assert!(!calc.input_decimal());
        assert_eq!(calc.renderer().frames(), ["0", "7", "7."]);
    }

    #[test]
    fn division_by_zero_renders_message() {
        let mut calc = Calculator::new(RecordingRenderer::new());
        calc.input_digit(digit(9));
        calc.choose_operator(Operator::Divide);
        calc.input_digit(digit(0));
        assert!(calc.compute());
        assert_eq!(calc.renderer().current(), Some("Cannot divide by 0"));
        assert_eq!(calc.state().operator(), None);
        assert_eq!(calc.state().previous_operand(), None);
    }

    #[test]
    fn clear_returns_to_initial_state() {
        let mut calc = Calculator::new(RecordingRenderer::new());
        calc.input_digit(digit(3));
        calc.choose_operator(Operator::Multiply);
        calc.input_digit(digit(3));
        assert!(calc.clear());
        assert_eq!(calc.state(), &InteractionState::new());
        assert_eq!(calc.renderer().current(), Some("0"));
    }

    #[test]
    fn history_disabled_by_default() {
        let mut calc = Calculator::new(RecordingRenderer::new());
        calc.input_digit(digit(1));
        assert!(calc.history().is_none());
    }

    #[test]
    fn history_records_every_press() {
        let config = CalculatorConfig {
            record_history: true,
            ..CalculatorConfig::default()
        };
        let mut calc =
            Calculator::from_parts(RecordingRenderer::new(), config, InteractionState::new());
        calc.input_digit(digit(4));
        calc.choose_operator(Operator::Add);
        calc.compute();

        let history = calc.history().unwrap();
        assert_eq!(history.len(), 3);
        assert!(history.presses().iter().all(|p| p.applied));
        assert_eq!(history.last().map(|p| p.display.as_str()), Some("8"));
    }

    #[test]
    fn history_marks_skipped_presses() {
        let config = CalculatorConfig {
            record_history: true,
            ..CalculatorConfig::default()
        };
        let mut calc =
            Calculator::from_parts(RecordingRenderer::new(), config, InteractionState::new());
        calc.compute();
        let history = calc.history().unwrap();
        assert_eq!(history.len(), 1);
        assert!(!history.presses()[0].applied);
    }

    #[test]
    fn restore_replaces_state_and_repaints() {
        let mut source = Calculator::new(RecordingRenderer::new());
        source.input_digit(digit(6));
        source.choose_operator(Operator::Subtract);
        let checkpoint = source.checkpoint();

        let mut target = Calculator::new(RecordingRenderer::new());
        target.restore(checkpoint).unwrap();
        assert_eq!(target.state(), source.state());
        assert_eq!(target.renderer().frames(), ["0", "6"]);

        target.input_digit(digit(2));
        target.compute();
        assert_eq!(target.display(), "4");
    }

    #[test]
    fn restore_rejects_invalid_state() {
        let mut calc = Calculator::new(RecordingRenderer::new());
        let broken = Checkpoint::new(
            InteractionState::from_parts(None, "", None, true),
            CalculatorConfig::default(),
        );
        assert!(calc.restore(broken).is_err());
        assert_eq!(calc.state(), &InteractionState::new());
        assert_eq!(calc.renderer().frames().len(), 1);
    }
}
