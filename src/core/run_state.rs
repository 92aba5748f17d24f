use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Lifecycle of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Running,
    Stopped,
}

/// Shared run flag of the dashboard.
///
/// Cloned into everything that may end the session (quit key, exit button,
/// signal handler). Stopping is one-way and idempotent.
#[derive(Debug, Clone)]
pub struct RunState {
    running: Arc<AtomicBool>,
}

impl RunState {
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn state(&self) -> AppState {
        if self.is_running() {
            AppState::Running
        } else {
            AppState::Stopped
        }
    }

    /// Request shutdown. Returns `true` only for the call that performed the transition.
    pub fn stop(&self) -> bool {
        self.running.swap(false, Ordering::AcqRel)
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}
