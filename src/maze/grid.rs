use std::thread;
use std::time::Duration;

use log::{debug, info, trace};

use super::cell::Cell;
use crate::core::WindowContext;
use crate::error::{MazeError, Result};
use crate::math::Point;

/// Pause after each cell is painted during the initial render
pub const DEFAULT_ANIMATE_DELAY: Duration = Duration::from_millis(20);

/// Row-major grid of adjacent, non-overlapping cells
pub struct Maze<'w> {
    origin: Point,
    num_rows: i32,
    num_cols: i32,
    cell_size_x: i32,
    cell_size_y: i32,
    animate_delay: Duration,
    cells: Vec<Vec<Cell<'w>>>,
    window: Option<&'w dyn WindowContext>,
}

impl<'w> Maze<'w> {
    /// Lay out and draw a `num_rows` x `num_cols` grid starting at `origin`
    ///
    /// With a window attached, each cell is drawn and shown one at a time,
    /// pausing [`DEFAULT_ANIMATE_DELAY`] between cells.
    pub fn new(
        origin: Point,
        num_rows: i32,
        num_cols: i32,
        cell_size_x: i32,
        cell_size_y: i32,
        window: Option<&'w dyn WindowContext>,
    ) -> Result<Self> {
        Self::with_delay(
            origin,
            num_rows,
            num_cols,
            cell_size_x,
            cell_size_y,
            DEFAULT_ANIMATE_DELAY,
            window,
        )
    }

    fn with_delay(
        origin: Point,
        num_rows: i32,
        num_cols: i32,
        cell_size_x: i32,
        cell_size_y: i32,
        animate_delay: Duration,
        window: Option<&'w dyn WindowContext>,
    ) -> Result<Self> {
        if num_rows < 1 || num_cols < 1 {
            return Err(MazeError::InvalidDimensions {
                rows: num_rows,
                cols: num_cols,
            });
        }

        // Cells interpolate between the origin and the far corner, so
        // checking the far corner covers every cell coordinate
        let far_x = num_cols
            .checked_mul(cell_size_x)
            .and_then(|width| origin.x.checked_add(width));
        let far_y = num_rows
            .checked_mul(cell_size_y)
            .and_then(|height| origin.y.checked_add(height));
        if far_x.is_none() || far_y.is_none() {
            return Err(MazeError::LayoutOutOfRange {
                x: origin.x,
                y: origin.y,
                rows: num_rows,
                cols: num_cols,
                cell_size_x,
                cell_size_y,
            });
        }

        if let Some(window) = window {
            let size = window.dimensions();
            debug!("Drawing onto a {}x{} surface", size.width, size.height);
        }

        let mut maze = Self {
            origin,
            num_rows,
            num_cols,
            cell_size_x,
            cell_size_y,
            animate_delay,
            cells: Vec::with_capacity(num_rows as usize),
            window,
        };
        maze.create_cells();

        info!(
            "Maze created: {}x{} cells of {}x{} at ({}, {})",
            num_rows, num_cols, cell_size_x, cell_size_y, origin.x, origin.y
        );

        Ok(maze)
    }

    fn create_cells(&mut self) {
        for row in 0..self.num_rows {
            let cells = (0..self.num_cols)
                .map(|col| {
                    let x1 = self.origin.x + self.cell_size_x * col;
                    let y1 = self.origin.y + self.cell_size_y * row;
                    Cell::new(x1, y1, x1 + self.cell_size_x, y1 + self.cell_size_y, self.window)
                })
                .collect();
            self.cells.push(cells);
        }

        for row in 0..self.cells.len() {
            for col in 0..self.cells[row].len() {
                self.draw_cell(row, col);
            }
        }
    }

    fn draw_cell(&self, row: usize, col: usize) {
        trace!("Drawing cell ({}, {})", row, col);
        self.cells[row][col].draw();
        self.animate();
    }

    fn animate(&self) {
        let Some(window) = self.window else {
            return;
        };

        window.redraw();
        thread::sleep(self.animate_delay);
    }

    pub fn num_rows(&self) -> i32 {
        self.num_rows
    }

    pub fn num_cols(&self) -> i32 {
        self.num_cols
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Cell width and height in pixels
    pub fn cell_size(&self) -> (i32, i32) {
        (self.cell_size_x, self.cell_size_y)
    }

    pub fn animate_delay(&self) -> Duration {
        self.animate_delay
    }

    /// All cells, indexed `[row][col]`
    pub fn cells(&self) -> &[Vec<Cell<'w>>] {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell<'w>> {
        self.cells.get(row)?.get(col)
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell<'w>> {
        self.cells.get_mut(row)?.get_mut(col)
    }
}

/// Builder for a maze with defaults for everything but its shape
pub struct MazeBuilder {
    origin: Point,
    num_rows: i32,
    num_cols: i32,
    cell_size_x: i32,
    cell_size_y: i32,
    animate_delay: Duration,
}

impl MazeBuilder {
    /// Create new builder: origin (0, 0), 20x20 cells, default delay
    pub fn new(num_rows: i32, num_cols: i32) -> Self {
        Self {
            origin: Point::new(0, 0),
            num_rows,
            num_cols,
            cell_size_x: 20,
            cell_size_y: 20,
            animate_delay: DEFAULT_ANIMATE_DELAY,
        }
    }

    /// Set top-left corner of the grid
    pub fn origin(mut self, x: i32, y: i32) -> Self {
        self.origin = Point::new(x, y);
        self
    }

    /// Set cell width and height
    pub fn cell_size(mut self, x: i32, y: i32) -> Self {
        self.cell_size_x = x;
        self.cell_size_y = y;
        self
    }

    /// Set pause between cells while animating
    pub fn animate_delay(mut self, delay: Duration) -> Self {
        self.animate_delay = delay;
        self
    }

    /// Build the maze, drawing it onto `window` if given
    pub fn build<'w>(self, window: Option<&'w dyn WindowContext>) -> Result<Maze<'w>> {
        Maze::with_delay(
            self.origin,
            self.num_rows,
            self.num_cols,
            self.cell_size_x,
            self.cell_size_y,
            self.animate_delay,
            window,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maze_create_cells() {
        let maze = Maze::new(Point::new(0, 0), 10, 12, 10, 10, None).unwrap();
        assert_eq!(maze.cells().len(), 10);
        assert!(maze.cells().iter().all(|row| row.len() == 12));
    }

    #[test]
    fn test_maze_create_cells_invalid() {
        let result = Maze::new(Point::new(0, 0), -1, 0, 10, 10, None);
        assert!(matches!(
            result,
            Err(MazeError::InvalidDimensions { rows: -1, cols: 0 })
        ));
    }

    #[test]
    fn test_maze_rejects_zero_rows_or_cols() {
        assert!(Maze::new(Point::new(0, 0), 0, 5, 10, 10, None).is_err());
        assert!(Maze::new(Point::new(0, 0), 5, 0, 10, 10, None).is_err());
        assert!(Maze::new(Point::new(0, 0), 1, 1, 10, 10, None).is_ok());
    }

    #[test]
    fn test_maze_rejects_layout_past_i32() {
        let result = Maze::new(Point::new(0, 0), 1, 2, 1_500_000_000, 10, None);
        assert!(matches!(
            result,
            Err(MazeError::LayoutOutOfRange { cols: 2, cell_size_x: 1_500_000_000, .. })
        ));

        assert!(Maze::new(Point::new(0, i32::MAX - 5), 1, 1, 10, 10, None).is_err());
        assert!(Maze::new(Point::new(0, 0), 3, 1, 10, -800_000_000, None).is_err());
        assert!(Maze::new(Point::new(0, i32::MAX - 10), 1, 1, 10, 10, None).is_ok());
    }

    #[test]
    fn test_cell_layout() {
        let maze = Maze::new(Point::new(0, 0), 3, 4, 10, 10, None).unwrap();

        let first = maze.cell(0, 0).unwrap();
        assert_eq!((first.x1(), first.y1(), first.x2(), first.y2()), (0, 0, 10, 10));

        let other = maze.cell(1, 2).unwrap();
        assert_eq!((other.x1(), other.y1(), other.x2(), other.y2()), (20, 10, 30, 20));
    }

    #[test]
    fn test_cell_out_of_range() {
        let maze = Maze::new(Point::new(0, 0), 2, 2, 10, 10, None).unwrap();
        assert!(maze.cell(2, 0).is_none());
        assert!(maze.cell(0, 2).is_none());
    }

    #[test]
    fn test_builder_defaults() {
        let maze = MazeBuilder::new(2, 3).build(None).unwrap();
        assert_eq!(maze.origin(), Point::new(0, 0));
        assert_eq!(maze.cell_size(), (20, 20));
        assert_eq!(maze.animate_delay(), DEFAULT_ANIMATE_DELAY);
        assert_eq!((maze.num_rows(), maze.num_cols()), (2, 3));
    }
}
