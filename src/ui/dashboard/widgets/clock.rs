use chrono::{DateTime, Local};
use parking_lot::RwLock;

use crate::core::geometry::BoundingBox;
use crate::error::Result;
use crate::ui::dashboard::surface::Surface;
use crate::ui::dashboard::theme::Palette;

use super::{draw_frame, DashWidget};

/// Display format of the clock widget
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wall-clock time display
pub struct Clock {
    bounds: BoundingBox,
    time_text: RwLock<String>,
}

impl Clock {
    pub fn new(bounds: BoundingBox) -> Self {
        Self {
            bounds,
            time_text: RwLock::new(format_time(&Local::now())),
        }
    }

    /// Currently displayed time string
    pub fn time_text(&self) -> String {
        self.time_text.read().clone()
    }

    /// Publish the display string for `time`.
    pub fn set_time(&self, time: &DateTime<Local>) {
        *self.time_text.write() = format_time(time);
    }
}

fn format_time(time: &DateTime<Local>) -> String {
    time.format(TIME_FORMAT).to_string()
}

impl DashWidget for Clock {
    fn name(&self) -> &str {
        "clock"
    }

    fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    fn draw(&self, surface: &mut Surface<'_>, palette: &Palette) {
        draw_frame(surface, self.bounds, "Clock", palette);

        let text = self.time_text();
        surface.put_str_inside(
            self.bounds,
            self.bounds.x.saturating_add(2),
            self.bounds.y.saturating_add(1),
            &text,
            palette.default,
        );
    }

    fn update(&self) -> Result<()> {
        self.set_time(&Local::now());
        Ok(())
    }
}
