//! Terminal dashboard.
//!
//! A fixed grid of widgets refreshed by a background sampler and driven by
//! a foreground render/input loop, built on crossterm and ratatui.

mod app;
mod input;
mod render;
mod sampler;
mod surface;
mod terminal;
mod theme;
pub mod widgets;

pub use app::{default_widgets, run_dashboard, DashboardApp};
pub use input::{ButtonMask, DashEvent, InputDispatcher};
pub use render::{Renderer, CURSOR_MARKER};
pub use sampler::{sample_all, Sampler, TickReport};
pub use surface::Surface;
pub use terminal::TerminalSession;
pub use theme::Palette;
