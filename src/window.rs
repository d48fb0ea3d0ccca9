use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window as WinitWindow, WindowId};

use crate::core::{
    Canvas, DrawOp, Lifecycle, SurfaceRenderer, WindowContext, WindowDimensions, WindowState,
};
use crate::error::{MazeError, Result};
use crate::maze::OPEN_WALL_COLOR;
use crate::math::{Color, Line};

const WINDOW_TITLE: &str = "Maze";
/// How long `wait_for_close` blocks on the event queue per iteration
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Event handler state driven by `pump_app_events`
struct App {
    width: u32,
    height: u32,
    window: Option<Arc<WinitWindow>>,
    renderer: Option<SurfaceRenderer>,
    canvas: Canvas,
    lifecycle: Rc<Lifecycle>,
    init_error: Option<MazeError>,
}

impl App {
    fn new(canvas: Canvas, lifecycle: Rc<Lifecycle>) -> Self {
        let (width, height) = canvas.dimensions();
        Self {
            width,
            height,
            window: None,
            renderer: None,
            canvas,
            lifecycle,
            init_error: None,
        }
    }

    fn present(&mut self) {
        if let Some(renderer) = &mut self.renderer {
            if let Err(e) = renderer.render_pixels(self.canvas.pixels()) {
                error!("Render error: {}", e);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = WinitWindow::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(self.width, self.height))
            .with_resizable(false);

        let window = match event_loop.create_window(attributes) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.init_error = Some(e.into());
                event_loop.exit();
                return;
            }
        };

        match SurfaceRenderer::new(window.clone(), self.width, self.height) {
            Ok(renderer) => self.renderer = Some(renderer),
            Err(e) => {
                self.init_error = Some(e);
                event_loop.exit();
                return;
            }
        }

        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                info!("Close requested");
                self.lifecycle.close();
            }
            WindowEvent::Resized(size) => {
                debug!("Window resized to {}x{}", size.width, size.height);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.present(),
            _ => {}
        }
    }
}

/// On-screen drawing surface: a winit window showing a CPU canvas
///
/// Single-threaded. Events are pumped only from `redraw` and
/// `wait_for_close`, never in the background.
pub struct Window {
    event_loop: RefCell<EventLoop<()>>,
    app: RefCell<App>,
    lifecycle: Rc<Lifecycle>,
    dimensions: WindowDimensions,
}

impl Window {
    /// Open a `width` x `height` window with a white background
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let canvas = Canvas::new(width, height)?.draw(DrawOp::Clear(OPEN_WALL_COLOR));
        let mut event_loop = EventLoop::new()?;
        let lifecycle = Rc::new(Lifecycle::new());
        let mut app = App::new(canvas, lifecycle.clone());

        // The window is only created once the platform delivers `resumed`
        while app.renderer.is_none() {
            let status = event_loop.pump_app_events(Some(FRAME_INTERVAL), &mut app);
            if let Some(e) = app.init_error.take() {
                return Err(e);
            }
            if let PumpStatus::Exit(_) = status {
                return Err(MazeError::WindowClosed);
            }
        }

        info!("Window created: {}x{}", width, height);

        let window = Self {
            event_loop: RefCell::new(event_loop),
            app: RefCell::new(app),
            lifecycle,
            dimensions: WindowDimensions::new(width, height),
        };
        window.redraw();

        Ok(window)
    }

    pub fn state(&self) -> WindowState {
        self.lifecycle.state()
    }

    /// Block until the user closes the window or `close` is called
    pub fn wait_for_close(&self) {
        let frames = self.lifecycle.wait_until_closed(|| self.pump(FRAME_INTERVAL));
        debug!("Wait loop ended after {} frames", frames);
    }

    /// Stop the `wait_for_close` loop
    pub fn close(&self) {
        self.lifecycle.close();
    }

    /// Rasterize pending lines, handle pending events, then present
    fn pump(&self, timeout: Duration) {
        let mut app = self.app.borrow_mut();
        app.canvas.execute_ops();

        let status = self
            .event_loop
            .borrow_mut()
            .pump_app_events(Some(timeout), &mut *app);
        if let PumpStatus::Exit(_) = status {
            self.lifecycle.close();
        }

        app.present();
    }
}

impl WindowContext for Window {
    fn dimensions(&self) -> WindowDimensions {
        self.dimensions
    }

    fn draw_line(&self, line: &Line, color: Color) {
        line.draw(&mut self.app.borrow_mut().canvas, color);
    }

    fn redraw(&self) {
        self.pump(Duration::ZERO);
    }
}
