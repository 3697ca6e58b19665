//! Builder for constructing calculators.

use crate::builder::error::BuildError;
use crate::config::CalculatorConfig;
use crate::core::InteractionState;
use crate::effects::{Calculator, Renderer};

/// Builder for constructing calculators with a fluent API.
///
/// # Example
///
/// ```rust
/// use abacus::builder::CalculatorBuilder;
/// use abacus::core::{Digit, Operator};
/// use abacus::effects::RecordingRenderer;
///
/// let mut calc = CalculatorBuilder::new()
///     .renderer(RecordingRenderer::new())
///     .significant_digits(4)
///     .record_history(true)
///     .build()
///     .unwrap();
///
/// calc.input_digit(Digit::new(2).unwrap());
/// calc.choose_operator(Operator::Divide);
/// calc.input_digit(Digit::new(3).unwrap());
/// calc.compute();
///
/// assert_eq!(calc.display(), "0.6667");
/// assert_eq!(calc.history().map(|h| h.len()), Some(4));
/// ```
pub struct CalculatorBuilder<R: Renderer> {
    renderer: Option<R>,
    config: CalculatorConfig,
    initial: Option<InteractionState>,
}

impl<R: Renderer> CalculatorBuilder<R> {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            renderer: None,
            config: CalculatorConfig::default(),
            initial: None,
        }
    }

    /// Set the display surface (required).
    pub fn renderer(mut self, renderer: R) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn significant_digits(mut self, digits: usize) -> Self {
        self.config.significant_digits = digits;
        self
    }

    pub fn division_by_zero_message(mut self, message: impl Into<String>) -> Self {
        self.config.division_by_zero_message = message.into();
        self
    }

    pub fn record_history(mut self, enabled: bool) -> Self {
        self.config.record_history = enabled;
        self
    }

    /// Start from a given state instead of the cleared one.
    pub fn initial(mut self, state: InteractionState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Build the calculator and paint its initial display.
    /// Returns an error if the renderer is missing or anything fails validation.
    pub fn build(self) -> Result<Calculator<R>, BuildError> {
        let renderer = self.renderer.ok_or(BuildError::MissingRenderer)?;
        self.config.validate()?;

        let state = self.initial.unwrap_or_default();
        state.validate()?;

        Ok(Calculator::from_parts(renderer, self.config, state))
    }
}

impl<R: Renderer> Default for CalculatorBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}
