use crate::math::{Color, Line};

/// Window dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDimensions {
    pub width: u32,
    pub height: u32,
}

impl WindowDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Drawing surface abstraction - anything cells can draw onto
///
/// Methods take `&self` so a single surface can be shared by every cell
/// of a maze; implementations use interior mutability.
pub trait WindowContext {
    /// Get surface dimensions in pixels
    fn dimensions(&self) -> WindowDimensions;

    /// Queue a line stroke in the given color
    fn draw_line(&self, line: &Line, color: Color);

    /// Flush pending drawing and make it visible
    fn redraw(&self);
}
