use super::{Color, Point};
use crate::core::canvas::{Canvas, DrawOp};

/// Stroke width for every line drawn in the maze
pub const LINE_WIDTH: u32 = 2;

/// Straight segment between two points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
}

impl Line {
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Queue a single stroke from p1 to p2 on the canvas
    pub fn draw(&self, canvas: &mut Canvas, color: Color) {
        canvas.push(DrawOp::Line {
            from: self.p1,
            to: self.p2,
            width: LINE_WIDTH,
            color,
        });
    }
}
