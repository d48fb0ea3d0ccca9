// cli.rs - Command-line interface configuration
use std::time::Duration;

use clap::Parser;

use crate::maze::MazeBuilder;

#[derive(Parser, Debug, Clone)]
#[command(name = "maze")]
#[command(about = "Draws a grid of walled cells, one cell at a time", long_about = None)]
pub struct Cli {
    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// X coordinate of the grid's top-left corner
    #[arg(long, default_value_t = 10, allow_hyphen_values = true)]
    pub origin_x: i32,

    /// Y coordinate of the grid's top-left corner
    #[arg(long, default_value_t = 10, allow_hyphen_values = true)]
    pub origin_y: i32,

    /// Number of rows
    #[arg(long, default_value_t = 15, allow_hyphen_values = true)]
    pub rows: i32,

    /// Number of columns
    #[arg(long, default_value_t = 15, allow_hyphen_values = true)]
    pub cols: i32,

    /// Cell width in pixels
    #[arg(long, default_value_t = 20)]
    pub cell_width: i32,

    /// Cell height in pixels
    #[arg(long, default_value_t = 20)]
    pub cell_height: i32,

    /// Pause after drawing each cell, in milliseconds
    #[arg(long = "delay-ms", default_value_t = 20)]
    pub delay_ms: u64,

    /// Draw onto an in-memory canvas instead of opening a window
    #[arg(long, default_value = "false")]
    pub headless: bool,
}

impl Cli {
    /// Maze configuration described by these arguments
    pub fn maze_builder(&self) -> MazeBuilder {
        MazeBuilder::new(self.rows, self.cols)
            .origin(self.origin_x, self.origin_y)
            .cell_size(self.cell_width, self.cell_height)
            .animate_delay(Duration::from_millis(self.delay_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point;

    #[test]
    fn defaults_match_fixed_program_parameters() {
        let cli = Cli::parse_from(["maze"]);
        assert_eq!((cli.width, cli.height), (800, 600));
        assert_eq!((cli.origin_x, cli.origin_y), (10, 10));
        assert_eq!((cli.rows, cli.cols), (15, 15));
        assert_eq!((cli.cell_width, cli.cell_height), (20, 20));
        assert_eq!(cli.delay_ms, 20);
        assert!(!cli.headless);
    }

    #[test]
    fn builder_reflects_arguments() {
        let cli = Cli::parse_from([
            "maze",
            "--rows",
            "3",
            "--cols",
            "4",
            "--origin-x",
            "5",
            "--cell-width",
            "12",
            "--delay-ms",
            "0",
            "--headless",
        ]);
        assert!(cli.headless);

        let maze = cli.maze_builder().build(None).unwrap();
        assert_eq!((maze.num_rows(), maze.num_cols()), (3, 4));
        assert_eq!(maze.origin(), Point::new(5, 10));
        assert_eq!(maze.cell_size(), (12, 20));
        assert_eq!(maze.animate_delay(), Duration::ZERO);
    }

    #[test]
    fn negative_rows_reach_validation() {
        let cli = Cli::parse_from(["maze", "--rows", "-1", "--cols", "0"]);
        assert!(cli.maze_builder().build(None).is_err());
    }
}
