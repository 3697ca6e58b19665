//! Builder API for ergonomic calculator construction.
//!
//! `CalculatorBuilder` gathers a renderer, configuration and an optional
//! starting state, validating all of them before a session starts.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::CalculatorBuilder;
