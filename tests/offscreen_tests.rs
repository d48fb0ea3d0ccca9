use std::time::{Duration, Instant};

use maze_canvas::core::{OffscreenSurface, WindowContext};
use maze_canvas::math::Color;
use maze_canvas::maze::{Breaks, Cell, MazeBuilder};

const BLACK: [u8; 4] = [0, 0, 0, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];
const RED: [u8; 4] = [255, 0, 0, 255];
const GRAY: [u8; 4] = [190, 190, 190, 255];

fn build_two_by_two(surface: &OffscreenSurface) -> maze_canvas::Maze<'_> {
    MazeBuilder::new(2, 2)
        .origin(10, 10)
        .cell_size(20, 20)
        .animate_delay(Duration::ZERO)
        .build(Some(surface as &dyn WindowContext))
        .unwrap()
}

#[test]
fn test_maze_walls_rasterize_black_on_white() {
    let surface = OffscreenSurface::new(60, 60).unwrap();
    let _maze = build_two_by_two(&surface);

    assert_eq!(surface.redraw_count(), 4);

    // Outer border and the shared interior walls
    assert_eq!(surface.pixel(10, 25), Some(BLACK));
    assert_eq!(surface.pixel(50, 25), Some(BLACK));
    assert_eq!(surface.pixel(25, 10), Some(BLACK));
    assert_eq!(surface.pixel(30, 45), Some(BLACK));
    assert_eq!(surface.pixel(45, 30), Some(BLACK));

    // Cell interiors and everything outside the grid stay background
    assert_eq!(surface.pixel(20, 20), Some(WHITE));
    assert_eq!(surface.pixel(40, 40), Some(WHITE));
    assert_eq!(surface.pixel(2, 2), Some(WHITE));
    assert_eq!(surface.pixel(55, 55), Some(WHITE));
}

#[test]
fn test_moves_rasterize_in_path_and_retreat_colors() {
    let surface = OffscreenSurface::new(60, 60).unwrap();
    let maze = build_two_by_two(&surface);

    let start = maze.cell(0, 0).unwrap();
    let right = maze.cell(0, 1).unwrap();
    let below_right = maze.cell(1, 1).unwrap();

    start.draw_move(right, false);
    right.draw_move(below_right, true);
    surface.redraw();

    assert_eq!(surface.pixel(25, 20), Some(RED));
    assert_eq!(surface.pixel(40, 35), Some(GRAY));
    assert!(surface.count_pixels(Color::RED) > 0);
}

#[test]
fn test_breaking_a_wall_erases_it() {
    let surface = OffscreenSurface::new(40, 40).unwrap();
    let cell = Cell::new(10, 10, 30, 30, Some(&surface));

    cell.draw();
    surface.redraw();
    assert_eq!(surface.pixel(20, 10), Some(BLACK));

    cell.draw_with_breaks(Breaks {
        top: true,
        ..Breaks::default()
    });
    surface.redraw();

    assert_eq!(surface.pixel(20, 10), Some(WHITE));
    assert_eq!(surface.pixel(10, 20), Some(BLACK));
    assert_eq!(surface.pixel(30, 20), Some(BLACK));
    assert_eq!(surface.pixel(20, 30), Some(BLACK));
}

#[test]
fn test_lines_outside_surface_are_clipped() {
    let surface = OffscreenSurface::new(20, 20).unwrap();
    let _maze = MazeBuilder::new(3, 3)
        .origin(-5, -5)
        .cell_size(15, 15)
        .animate_delay(Duration::ZERO)
        .build(Some(&surface as &dyn WindowContext))
        .unwrap();

    assert_eq!(surface.redraw_count(), 9);
    assert_eq!(surface.pixel(10, 3), Some(BLACK));
    assert_eq!(surface.pixel(3, 3), Some(WHITE));
}

#[test]
fn test_huge_cell_on_small_surface_renders_quickly() {
    let surface = OffscreenSurface::new(20, 20).unwrap();
    let start = Instant::now();
    let _maze = MazeBuilder::new(1, 1)
        .cell_size(200_000_000, 10)
        .animate_delay(Duration::ZERO)
        .build(Some(&surface as &dyn WindowContext))
        .unwrap();

    assert!(start.elapsed() < Duration::from_secs(1));
    assert_eq!(surface.redraw_count(), 1);
    // Top and bottom walls run across the whole surface, the far right wall is off it
    assert_eq!(surface.pixel(15, 0), Some(BLACK));
    assert_eq!(surface.pixel(15, 10), Some(BLACK));
    assert_eq!(surface.pixel(0, 5), Some(BLACK));
    assert_eq!(surface.pixel(15, 5), Some(WHITE));
}
