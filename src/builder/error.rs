//! Build errors for the calculator builder.

use crate::config::ConfigError;
use crate::core::StateViolation;
use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Renderer not specified. Call .renderer(renderer) before .build()")]
    MissingRenderer,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Invalid initial state: {0}")]
    InvalidInitialState(#[from] StateViolation),
}
