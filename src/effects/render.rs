//! Display surfaces.

/// A surface that shows the calculator buffer.
///
/// The calculator calls `render` once when it starts and again after every
/// press that changed its state. The text is shown verbatim.
pub trait Renderer {
    fn render(&mut self, text: &str);
}

/// Renderer that keeps every frame it was given.
///
/// # Example
///
/// ```rust
/// use abacus::effects::{RecordingRenderer, Renderer};
///
/// let mut display = RecordingRenderer::new();
/// display.render("0");
/// display.render("7");
/// assert_eq!(display.current(), Some("7"));
/// assert_eq!(display.frames().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingRenderer {
    frames: Vec<String>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently on the display.
    pub fn current(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, text: &str) {
        self.frames.push(text.to_string());
    }
}

/// Adapts a closure into a [`Renderer`].
///
/// # Example
///
/// ```rust
/// use abacus::effects::{FnRenderer, Renderer};
///
/// let mut shown = String::new();
/// {
///     let mut display = FnRenderer(|text: &str| shown = text.to_string());
///     display.render("42");
/// }
/// assert_eq!(shown, "42");
/// ```
pub struct FnRenderer<F>(pub F);

impl<F: FnMut(&str)> Renderer for FnRenderer<F> {
    fn render(&mut self, text: &str) {
        (self.0)(text)
    }
}
