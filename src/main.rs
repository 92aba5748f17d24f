use anyhow::{Context, Result};

use griddash::ui::dashboard::run_dashboard;
use griddash::DashboardConfig;

fn main() -> Result<()> {
    let config = DashboardConfig::load().context("Failed to load configuration")?;
    griddash::init_logging(&config);

    log::info!("Starting griddash {}", env!("CARGO_PKG_VERSION"));
    run_dashboard(config).context("Dashboard terminated with an error")?;
    log::info!("griddash exited cleanly");

    Ok(())
}
