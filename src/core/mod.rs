pub mod canvas;
pub mod gpu_context;
pub mod lifecycle;
pub mod offscreen;
pub mod surface_renderer;
pub mod window;

pub use canvas::{Canvas, DrawOp, MAX_CANVAS_DIMENSION};
pub use gpu_context::GpuContext;
pub use lifecycle::{Lifecycle, WindowState};
pub use offscreen::OffscreenSurface;
pub use surface_renderer::SurfaceRenderer;
pub use window::{WindowContext, WindowDimensions};
