use std::cell::Cell;

/// Open/closed state of a window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Running,
    Closed,
}

/// Close flag shared between a window's event handler and its wait loop
///
/// Both sides read and write the same state, so a close request always
/// ends `wait_until_closed`.
#[derive(Debug)]
pub struct Lifecycle {
    state: Cell<WindowState>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            state: Cell::new(WindowState::Running),
        }
    }

    pub fn state(&self) -> WindowState {
        self.state.get()
    }

    pub fn is_closed(&self) -> bool {
        self.state.get() == WindowState::Closed
    }

    /// Transition to `Closed`; idempotent
    pub fn close(&self) {
        self.state.set(WindowState::Closed);
    }

    /// Run `step` until the state becomes `Closed`
    ///
    /// Returns immediately if already closed. Returns the number of steps run.
    pub fn wait_until_closed(&self, mut step: impl FnMut()) -> usize {
        let mut steps = 0;
        while self.state.get() == WindowState::Running {
            step();
            steps += 1;
        }
        steps
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_starts_running() {
        let lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.state(), WindowState::Running);
        assert!(!lifecycle.is_closed());
    }

    #[test]
    fn close_ends_wait_loop() {
        let lifecycle = Lifecycle::new();
        let steps = lifecycle.wait_until_closed(|| {
            // Simulates the close handler firing during an event pump
            lifecycle.close();
        });

        assert_eq!(steps, 1);
        assert!(lifecycle.is_closed());
    }

    #[test]
    fn wait_runs_until_close() {
        let lifecycle = Lifecycle::new();
        let mut pumps = 0;
        let steps = lifecycle.wait_until_closed(|| {
            pumps += 1;
            if pumps == 5 {
                lifecycle.close();
            }
        });

        assert_eq!(steps, 5);
        assert_eq!(pumps, 5);
    }

    #[test]
    fn wait_after_close_returns_immediately() {
        let lifecycle = Lifecycle::new();
        lifecycle.close();
        lifecycle.close();

        let steps = lifecycle.wait_until_closed(|| panic!("should not step"));
        assert_eq!(steps, 0);
    }
}
