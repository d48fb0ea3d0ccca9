use crate::core::WindowContext;
use crate::math::{Color, Line, Point};

/// Color of a standing wall
pub const WALL_COLOR: Color = Color::BLACK;
/// Color of a broken wall - same as the background so it disappears
pub const OPEN_WALL_COLOR: Color = Color::WHITE;
/// Color of a move along the path
pub const PATH_COLOR: Color = Color::RED;
/// Color of a move that backtracks
pub const RETREAT_COLOR: Color = Color::GRAY;

/// Which walls a cell has
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Default for Walls {
    fn default() -> Self {
        Self {
            top: true,
            bottom: true,
            left: true,
            right: true,
        }
    }
}

/// Which walls to draw as opened (background color)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Breaks {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

/// One rectangular unit of the maze
///
/// Holds an optional, non-owning handle to the surface it draws onto.
/// Without one every draw call is a no-op.
#[derive(Clone)]
pub struct Cell<'w> {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    walls: Walls,
    window: Option<&'w dyn WindowContext>,
}

impl<'w> Cell<'w> {
    /// Cell with all four walls
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32, window: Option<&'w dyn WindowContext>) -> Self {
        Self::with_walls(x1, y1, x2, y2, window, Walls::default())
    }

    /// Cell with an explicit wall configuration; corners are normalized so x1 <= x2, y1 <= y2
    pub fn with_walls(
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        window: Option<&'w dyn WindowContext>,
        walls: Walls,
    ) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
            walls,
            window,
        }
    }

    pub fn x1(&self) -> i32 {
        self.x1
    }

    pub fn y1(&self) -> i32 {
        self.y1
    }

    pub fn x2(&self) -> i32 {
        self.x2
    }

    pub fn y2(&self) -> i32 {
        self.y2
    }

    pub fn walls(&self) -> Walls {
        self.walls
    }

    pub fn walls_mut(&mut self) -> &mut Walls {
        &mut self.walls
    }

    pub fn has_window(&self) -> bool {
        self.window.is_some()
    }

    /// Center point, truncating integer division
    pub fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Draw every present wall in the wall color
    pub fn draw(&self) {
        self.draw_with_breaks(Breaks::default());
    }

    /// Draw every present wall; broken ones in the background color
    pub fn draw_with_breaks(&self, breaks: Breaks) {
        let Some(window) = self.window else {
            return;
        };

        let top_left = Point::new(self.x1, self.y1);
        let bottom_right = Point::new(self.x2, self.y2);
        let bottom_left = Point::new(self.x1, self.y2);
        let top_right = Point::new(self.x2, self.y1);

        let sides = [
            (self.walls.top, breaks.top, Line::new(top_left, top_right)),
            (self.walls.bottom, breaks.bottom, Line::new(bottom_left, bottom_right)),
            (self.walls.right, breaks.right, Line::new(top_right, bottom_right)),
            (self.walls.left, breaks.left, Line::new(top_left, bottom_left)),
        ];

        for (present, broken, line) in sides {
            if present {
                window.draw_line(&line, if broken { OPEN_WALL_COLOR } else { WALL_COLOR });
            }
        }
    }

    /// Draw a line from this cell's center to `to_cell`'s center
    pub fn draw_move(&self, to_cell: &Cell<'_>, undo: bool) {
        let Some(window) = self.window else {
            return;
        };

        let color = if undo { RETREAT_COLOR } else { PATH_COLOR };
        window.draw_line(&Line::new(self.center(), to_cell.center()), color);
    }
}

impl std::fmt::Debug for Cell<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("x1", &self.x1)
            .field("y1", &self.y1)
            .field("x2", &self.x2)
            .field("y2", &self.y2)
            .field("walls", &self.walls)
            .field("window", &self.window.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_default_all_present() {
        let cell = Cell::new(0, 0, 10, 10, None);
        assert_eq!(cell.walls(), Walls { top: true, bottom: true, left: true, right: true });
    }

    #[test]
    fn breaks_default_none() {
        let breaks = Breaks::default();
        assert!(!breaks.top && !breaks.bottom && !breaks.left && !breaks.right);
    }

    #[test]
    fn center_truncates() {
        let cell = Cell::new(80, 160, 574, 378, None);
        assert_eq!(cell.center(), Point::new(327, 269));

        let odd = Cell::new(0, 0, 5, 3, None);
        assert_eq!(odd.center(), Point::new(2, 1));
    }

    #[test]
    fn corners_are_normalized() {
        let cell = Cell::new(30, 40, 10, 20, None);
        assert_eq!((cell.x1(), cell.y1(), cell.x2(), cell.y2()), (10, 20, 30, 40));
    }

    #[test]
    fn headless_draw_is_noop() {
        let a = Cell::new(0, 0, 10, 10, None);
        let b = Cell::new(10, 0, 20, 10, None);
        assert!(!a.has_window());
        a.draw();
        a.draw_with_breaks(Breaks { top: true, ..Breaks::default() });
        a.draw_move(&b, false);
        a.draw_move(&b, true);
    }

    #[test]
    fn walls_mutable_after_construction() {
        let mut cell = Cell::new(0, 0, 10, 10, None);
        cell.walls_mut().left = false;
        assert!(!cell.walls().left);
        assert!(cell.walls().right);
    }
}
