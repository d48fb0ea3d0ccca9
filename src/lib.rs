pub mod cli;
pub mod core;
pub mod error;
pub mod headless;
pub mod math;
pub mod maze;
pub mod window;

pub use error::{MazeError, Result};
pub use headless::{run_headless, HeadlessSummary};
pub use maze::{Cell, Maze, MazeBuilder};
pub use window::Window;
