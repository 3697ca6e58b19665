//! Abacus: a pure functional keypad calculator
//!
//! Abacus follows the "pure core, imperative shell" philosophy. Every key
//! press is a pure transition from one interaction state to the next, while
//! rendering and logging live in a thin shell around it.
//!
//! # Core Concepts
//!
//! - **Interaction state**: pending operand, pending operator, input buffer
//!   and overwrite flag
//! - **Transitions**: digit, decimal, operator, equals and clear as pure
//!   functions over that state
//! - **Renderer**: the display surface a calculator writes its buffer to
//! - **Calculator**: one session binding a state to a renderer
//!
//! # Example
//!
//! ```rust
//! use abacus::dispatch::dispatch;
//! use abacus::effects::{Calculator, RecordingRenderer};
//!
//! let mut calc = Calculator::new(RecordingRenderer::new());
//! let buttons = [
//!     ("digit", Some("8")),
//!     ("operator", Some("divide")),
//!     ("digit", Some("0")),
//!     ("equal", None),
//! ];
//! for (action, payload) in buttons {
//!     calc.press(dispatch(action, payload).unwrap());
//! }
//!
//! assert_eq!(calc.display(), "Cannot divide by 0");
//! assert_eq!(calc.state().operator(), None);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod effects;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder};
pub use config::CalculatorConfig;
pub use crate::core::{Digit, Input, InteractionState, Operator, Phase};
pub use effects::{Calculator, RecordingRenderer, Renderer};
