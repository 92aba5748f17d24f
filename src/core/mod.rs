// Core dashboard logic: configuration, geometry, run state and metrics

pub mod config;
pub mod geometry;
pub mod run_state;
pub mod system_monitor;

// Re-export commonly used items
pub use config::DashboardConfig;
pub use geometry::BoundingBox;
pub use run_state::{AppState, RunState};
