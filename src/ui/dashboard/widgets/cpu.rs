use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use crate::core::geometry::BoundingBox;
use crate::core::system_monitor::{clamp_percent, MetricsProvider};
use crate::error::Result;
use crate::ui::dashboard::surface::Surface;
use crate::ui::dashboard::theme::Palette;

use super::{draw_frame, draw_usage, DashWidget};

/// Published CPU state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CpuReading {
    pub percent: f32,
}

/// Global CPU usage gauge
pub struct CpuMonitor {
    bounds: BoundingBox,
    provider: Arc<dyn MetricsProvider>,
    window: Duration,
    reading: RwLock<CpuReading>,
}

impl CpuMonitor {
    pub fn new(bounds: BoundingBox, provider: Arc<dyn MetricsProvider>, window: Duration) -> Self {
        Self {
            bounds,
            provider,
            window,
            reading: RwLock::new(CpuReading::default()),
        }
    }

    pub fn reading(&self) -> CpuReading {
        *self.reading.read()
    }
}

impl DashWidget for CpuMonitor {
    fn name(&self) -> &str {
        "cpu"
    }

    fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    fn draw(&self, surface: &mut Surface<'_>, palette: &Palette) {
        let reading = self.reading();

        draw_frame(surface, self.bounds, "CPU", palette);
        draw_usage(surface, self.bounds, reading.percent, palette);
    }

    fn update(&self) -> Result<()> {
        // Sample without holding the lock; the render loop keeps reading the old value
        let percent = self.provider.sample_cpu_percent(self.window)?;

        *self.reading.write() = CpuReading {
            percent: clamp_percent(percent),
        };
        Ok(())
    }
}
