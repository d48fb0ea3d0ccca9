// headless.rs - Render the configured maze onto an in-memory canvas
use log::info;

use crate::cli::Cli;
use crate::core::{OffscreenSurface, WindowContext, WindowDimensions};
use crate::error::Result;
use crate::maze::WALL_COLOR;

/// What a headless run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessSummary {
    pub dimensions: WindowDimensions,
    pub cells: usize,
    pub redraws: usize,
    pub wall_pixels: usize,
}

/// Build the maze described by `cli` on an offscreen surface
pub fn run_headless(cli: &Cli) -> Result<HeadlessSummary> {
    let surface = OffscreenSurface::new(cli.width, cli.height)?;
    let maze = cli
        .maze_builder()
        .build(Some(&surface as &dyn WindowContext))?;

    let summary = HeadlessSummary {
        dimensions: surface.dimensions(),
        cells: maze.cells().iter().map(Vec::len).sum(),
        redraws: surface.redraw_count(),
        wall_pixels: surface.count_pixels(WALL_COLOR),
    };

    info!(
        "Headless render on {}x{}: {} cells, {} redraws, {} wall pixels",
        summary.dimensions.width,
        summary.dimensions.height,
        summary.cells,
        summary.redraws,
        summary.wall_pixels
    );

    Ok(summary)
}
