pub mod cell;
pub mod grid;

pub use cell::{
    Breaks, Cell, Walls, OPEN_WALL_COLOR, PATH_COLOR, RETREAT_COLOR, WALL_COLOR,
};
pub use grid::{Maze, MazeBuilder, DEFAULT_ANIMATE_DELAY};
