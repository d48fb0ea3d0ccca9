use std::cell::{Cell, RefCell};

use super::canvas::{Canvas, DrawOp};
use super::window::{WindowContext, WindowDimensions};
use crate::error::Result;
use crate::math::{Color, Line};

/// Headless drawing surface backed by a CPU canvas
///
/// Starts cleared to white, like the window's background.
pub struct OffscreenSurface {
    canvas: RefCell<Canvas>,
    redraws: Cell<usize>,
}

impl OffscreenSurface {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let mut canvas = Canvas::new(width, height)?.draw(DrawOp::Clear(Color::WHITE));
        canvas.execute_ops();

        Ok(Self {
            canvas: RefCell::new(canvas),
            redraws: Cell::new(0),
        })
    }

    /// Number of `redraw` calls so far
    pub fn redraw_count(&self) -> usize {
        self.redraws.get()
    }

    /// RGBA value at (x, y) as of the last redraw
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.canvas.borrow().pixel(x, y)
    }

    /// Number of pixels matching `color` as of the last redraw
    pub fn count_pixels(&self, color: Color) -> usize {
        let rgba = color.to_rgba();
        self.canvas
            .borrow()
            .pixels()
            .chunks_exact(4)
            .filter(|pixel| pixel[..] == rgba[..])
            .count()
    }
}

impl WindowContext for OffscreenSurface {
    fn dimensions(&self) -> WindowDimensions {
        let (width, height) = self.canvas.borrow().dimensions();
        WindowDimensions::new(width, height)
    }

    fn draw_line(&self, line: &Line, color: Color) {
        line.draw(&mut self.canvas.borrow_mut(), color);
    }

    fn redraw(&self) {
        self.canvas.borrow_mut().execute_ops();
        self.redraws.set(self.redraws.get() + 1);
    }
}
