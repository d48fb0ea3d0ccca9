use anyhow::{Context, Result};
use clap::Parser;

use maze_canvas::cli::Cli;
use maze_canvas::core::WindowContext;
use maze_canvas::{run_headless, Window};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.headless {
        run_headless(&cli).context("Headless render failed")?;
        return Ok(());
    }

    let window = Window::new(cli.width, cli.height).context("Failed to open window")?;
    let _maze = cli
        .maze_builder()
        .build(Some(&window as &dyn WindowContext))
        .context("Failed to build maze")?;

    println!("Maze - close the window or press Escape to quit");
    window.wait_for_close();

    Ok(())
}
