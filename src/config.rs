//! Calculator configuration.

use crate::core::{parse_operand, DEFAULT_SIGNIFICANT_DIGITS, MAX_SIGNIFICANT_DIGITS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display text after a division by zero.
pub const DIVISION_BY_ZERO_MESSAGE: &str = "Cannot divide by 0";

/// Settings for one calculator session.
///
/// Missing fields fall back to their defaults when loading from JSON.
///
/// # Example
///
/// ```rust
/// use abacus::config::CalculatorConfig;
///
/// let config = CalculatorConfig::from_json(r#"{ "significant_digits": 8 }"#).unwrap();
/// assert_eq!(config.significant_digits, 8);
/// assert_eq!(config.division_by_zero_message, "Cannot divide by 0");
/// assert!(!config.record_history);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Significant digits kept in computed results
    pub significant_digits: usize,

    /// Display text when dividing by zero
    pub division_by_zero_message: String,

    /// Keep an in-memory log of key presses
    pub record_history: bool,
}

/// Errors in a calculator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Significant digits must be between 1 and {max}, got {found}")]
    InvalidPrecision { found: usize, max: usize },

    #[error("Division by zero message '{0}' must be non-numeric text with at most one '.'")]
    InvalidDivisionMessage(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
            division_by_zero_message: DIVISION_BY_ZERO_MESSAGE.to_string(),
            record_history: false,
        }
    }
}

impl CalculatorConfig {
    /// Load and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_SIGNIFICANT_DIGITS).contains(&self.significant_digits) {
            return Err(ConfigError::InvalidPrecision {
                found: self.significant_digits,
                max: MAX_SIGNIFICANT_DIGITS,
            });
        }

        // The message lands in the display buffer, so it has to read as an
        // error there and keep the single decimal point invariant.
        let message = &self.division_by_zero_message;
        if message.is_empty()
            || parse_operand(message).is_some()
            || message.matches('.').count() > 1
        {
            return Err(ConfigError::InvalidDivisionMessage(message.clone()));
        }

        Ok(())
    }
}
