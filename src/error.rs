use thiserror::Error;

pub type Result<T> = std::result::Result<T, MazeError>;

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("maze must have at least one row and one column (got {rows} rows, {cols} cols)")]
    InvalidDimensions { rows: i32, cols: i32 },

    #[error("maze of {rows}x{cols} cells sized {cell_size_x}x{cell_size_y} at ({x}, {y}) does not fit in i32 coordinates")]
    LayoutOutOfRange {
        x: i32,
        y: i32,
        rows: i32,
        cols: i32,
        cell_size_x: i32,
        cell_size_y: i32,
    },

    #[error("canvas must be 1..=16384 pixels per side (got {width}x{height})")]
    InvalidCanvasSize { width: u32, height: u32 },

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    CreateWindow(#[from] winit::error::OsError),

    #[error("surface setup failed: {0}")]
    Surface(String),

    #[error("window closed before it finished initializing")]
    WindowClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_message_names_both_counts() {
        let err = MazeError::InvalidDimensions { rows: -1, cols: 0 };
        let message = err.to_string();
        assert!(message.contains("-1 rows"));
        assert!(message.contains("0 cols"));
    }

    #[test]
    fn invalid_canvas_size_message_names_both_sides() {
        let err = MazeError::InvalidCanvasSize {
            width: 70_000,
            height: 0,
        };
        assert!(err.to_string().contains("70000x0"));
    }
}
