//! The imperative shell around the pure core.
//!
//! This module owns the side effects of a calculator session: holding the
//! live state, rendering the display and logging key presses.
//!
//! # Key Concepts
//!
//! - **Renderer**: the display surface a calculator writes its buffer to
//! - **Calculator**: one session that runs a transition per press and
//!   repaints when the state changed

mod machine;
mod render;

pub use machine::Calculator;
pub use render::{FnRenderer, RecordingRenderer, Renderer};
