use crate::error::{MazeError, Result};
use crate::math::{Color, Point};

/// Largest canvas side, matching the usual GPU 2D texture limit
pub const MAX_CANVAS_DIMENSION: u32 = 16384;

/// 2D drawing operations for canvas
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Fill entire canvas with color
    Clear(Color),

    /// Stroke a line from `from` to `to`, `width` pixels thick
    Line { from: Point, to: Point, width: u32, color: Color },
}

/// Canvas state - RGBA pixel buffer with pending draw operations
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: Vec<u8>,
    operations: Vec<DrawOp>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create new canvas with dimensions, fully transparent
    ///
    /// Both sides must be in `1..=MAX_CANVAS_DIMENSION`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if !(1..=MAX_CANVAS_DIMENSION).contains(&width)
            || !(1..=MAX_CANVAS_DIMENSION).contains(&height)
        {
            return Err(MazeError::InvalidCanvasSize { width, height });
        }

        Ok(Self {
            pixels: vec![0; width as usize * height as usize * 4],
            operations: Vec::new(),
            width,
            height,
        })
    }

    /// Add draw operation - functional style
    pub fn draw(mut self, op: DrawOp) -> Self {
        self.operations.push(op);
        self
    }

    /// Add draw operation in place
    pub fn push(&mut self, op: DrawOp) {
        self.operations.push(op);
    }

    /// Operations queued since the last `execute_ops`
    pub fn pending(&self) -> &[DrawOp] {
        &self.operations
    }

    /// Rasterize all pending operations in order
    pub fn execute_ops(&mut self) {
        let operations = std::mem::take(&mut self.operations);
        for op in &operations {
            self.execute_op(op);
        }
    }

    fn execute_op(&mut self, op: &DrawOp) {
        match op {
            DrawOp::Clear(color) => self.clear(*color),
            DrawOp::Line { from, to, width, color } => self.draw_line(*from, *to, *width, *color),
        }
    }

    fn clear(&mut self, color: Color) {
        let rgba = color.to_rgba();
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&rgba);
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Set single pixel, ignoring anything outside the canvas
    fn set_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }

        let idx = self.index(x as u32, y as u32);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_rgba());
    }

    /// Square pen of side `width` centered on (x, y)
    fn stamp(&mut self, x: i64, y: i64, width: u32, color: Color) {
        let width = width.max(1) as i64;
        let start = -(width / 2);
        for dy in start..start + width {
            for dx in start..start + width {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Draw line using Bresenham's algorithm, clipped to the canvas first
    fn draw_line(&mut self, from: Point, to: Point, width: u32, color: Color) {
        let pad = width.max(1) as i64;
        let min = (-pad, -pad);
        let max = (self.width as i64 - 1 + pad, self.height as i64 - 1 + pad);
        let Some(((mut x, mut y), (x2, y2))) = clip_segment(from, to, min, max) else {
            return;
        };

        let dx = (x2 - x).abs();
        let dy = -(y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.stamp(x, y, width, color);

            if x == x2 && y == y2 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// RGBA value at (x, y), if inside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y);
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(rgba)
    }

    /// Get pixel buffer
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get canvas dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Liang-Barsky clip of `from`-`to` against the box `min..=max`
///
/// Returns the rounded endpoints of the visible part, or `None` if the
/// segment misses the box entirely.
fn clip_segment(
    from: Point,
    to: Point,
    min: (i64, i64),
    max: (i64, i64),
) -> Option<((i64, i64), (i64, i64))> {
    let (x0, y0) = (from.x as f64, from.y as f64);
    let (dx, dy) = (to.x as f64 - x0, to.y as f64 - y0);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);

    let edges = [
        (-dx, x0 - min.0 as f64),
        (dx, max.0 as f64 - x0),
        (-dy, y0 - min.1 as f64),
        (dy, max.1 as f64 - y0),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64| ((x0 + t * dx).round() as i64, (y0 + t * dy).round() as i64);
    Some((at(t0), at(t1)))
}
