use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::geometry::BoundingBox;
use crate::core::system_monitor::{bytes_to_mb, clamp_percent, MemorySample, MetricsProvider};
use crate::error::Result;
use crate::ui::dashboard::surface::Surface;
use crate::ui::dashboard::theme::Palette;

use super::{draw_frame, draw_usage, DashWidget};

/// Published memory state. Always replaced as a whole.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemoryReading {
    pub percent: f32,
    pub used_mb: u64,
    pub total_mb: u64,
}

impl From<MemorySample> for MemoryReading {
    fn from(sample: MemorySample) -> Self {
        Self {
            percent: clamp_percent(sample.percent),
            used_mb: bytes_to_mb(sample.used_bytes),
            total_mb: bytes_to_mb(sample.total_bytes),
        }
    }
}

/// Physical memory gauge with used/total figures
pub struct Memory {
    bounds: BoundingBox,
    provider: Arc<dyn MetricsProvider>,
    reading: RwLock<MemoryReading>,
}

impl Memory {
    pub fn new(bounds: BoundingBox, provider: Arc<dyn MetricsProvider>) -> Self {
        Self {
            bounds,
            provider,
            reading: RwLock::new(MemoryReading::default()),
        }
    }

    pub fn reading(&self) -> MemoryReading {
        *self.reading.read()
    }
}

impl DashWidget for Memory {
    fn name(&self) -> &str {
        "memory"
    }

    fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    fn draw(&self, surface: &mut Surface<'_>, palette: &Palette) {
        // One snapshot for every line so used and total always belong together
        let reading = self.reading();

        draw_frame(surface, self.bounds, "Memory", palette);
        draw_usage(surface, self.bounds, reading.percent, palette);
        surface.put_str_inside(
            self.bounds,
            self.bounds.x.saturating_add(2),
            self.bounds.y.saturating_add(3),
            &format!("{}M/{}M", reading.used_mb, reading.total_mb),
            palette.default,
        );
    }

    fn update(&self) -> Result<()> {
        let reading = MemoryReading::from(self.provider.sample_memory()?);
        *self.reading.write() = reading;
        Ok(())
    }
}
