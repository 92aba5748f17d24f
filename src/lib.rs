// griddash library - public API

// Re-export error types
pub mod error;
pub use error::{DashError, Result};

// Module declarations
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::DashboardConfig;

use std::fs::{self, OpenOptions};

/// Initialize logging.
///
/// The terminal belongs to the dashboard, so records go to the configured
/// log file. `RUST_LOG` overrides the configured level. If no log file can
/// be opened, logging stays off.
pub fn init_logging(config: &DashboardConfig) {
    let file = config.log_path().and_then(|path| {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        OpenOptions::new().create(true).append(true).open(&path).ok()
    });
    let Some(file) = file else {
        return;
    };

    let mut builder = env_logger::Builder::new();
    builder.parse_filters(&config.log_level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.target(env_logger::Target::Pipe(Box::new(file)));

    // A logger may already be installed (tests, embedding binaries)
    let _ = builder.try_init();
}
