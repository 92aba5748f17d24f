//! Dashboard widgets.
//!
//! Every widget shares one capability set ([`DashWidget`]) and keeps its
//! display state behind its own lock. The sampler thread calls
//! [`DashWidget::update`] while the render loop calls [`DashWidget::draw`]
//! and [`DashWidget::on_click`], so each of those takes `&self` and the
//! widget is shared as `Arc<dyn DashWidget>`.

mod button;
mod clock;
mod cpu;
mod memory;

pub use button::{Button, ButtonAction};
pub use clock::Clock;
pub use cpu::{CpuMonitor, CpuReading};
pub use memory::{Memory, MemoryReading};

use std::sync::Arc;

use ratatui::style::Style;

use crate::core::geometry::BoundingBox;
use crate::error::Result;

use super::surface::Surface;
use super::theme::Palette;

/// Percent at or above which a usage bar switches to the alert style.
pub const ALERT_THRESHOLD: f32 = 70.0;

/// Columns the usage bar leaves free inside the widget box.
pub const BAR_MARGIN: u16 = 6;

/// Glyph for a filled bar cell.
pub const BAR_FILLED: &str = "█";

/// Glyph for an empty bar cell.
pub const BAR_EMPTY: &str = "░";

/// Shared handle type for widgets owned by the app and read by the sampler.
pub type SharedWidget = Arc<dyn DashWidget>;

/// Capability set of every dashboard widget
pub trait DashWidget: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Fixed position and size
    fn bounds(&self) -> BoundingBox;

    /// Draw border and content inside `bounds()`.
    fn draw(&self, surface: &mut Surface<'_>, palette: &Palette);

    /// Refresh display state from the widget's data source.
    ///
    /// May block. On error the previously published state must stay intact.
    fn update(&self) -> Result<()> {
        Ok(())
    }

    /// Handle a primary click inside `bounds()`. Must not block.
    fn on_click(&self) {}

    /// Hit test against the widget's bounding box
    fn is_inside(&self, px: u16, py: u16) -> bool {
        self.bounds().contains(px, py)
    }
}

/// Draw the widget border with `title` set into the top edge.
pub fn draw_frame(surface: &mut Surface<'_>, bounds: BoundingBox, title: &str, palette: &Palette) {
    surface.draw_box(bounds, palette.default);
    // The title sits on the top edge, between the corners
    surface.put_str_until(
        bounds.x.saturating_add(2),
        bounds.y,
        &format!(" {} ", title),
        palette.default,
        bounds.right(),
    );
}

/// Number of filled cells in a bar of `width` cells at `percent`.
pub fn filled_cells(width: u16, percent: f32) -> u16 {
    let percent = f64::from(crate::core::system_monitor::clamp_percent(percent));
    let filled = (f64::from(width) * percent / 100.0).floor() as u16;
    filled.min(width)
}

/// Whether `percent` is in the alert band.
pub fn is_alert(percent: f32) -> bool {
    percent >= ALERT_THRESHOLD
}

/// Style of a usage bar at `percent`.
pub fn bar_style(percent: f32, palette: &Palette) -> Style {
    if is_alert(percent) {
        palette.alert
    } else {
        palette.normal
    }
}

/// Bar string for `percent` over `width` cells.
pub fn render_bar(width: u16, percent: f32) -> String {
    let filled = usize::from(filled_cells(width, percent));
    let empty = usize::from(width) - filled;
    format!("{}{}", BAR_FILLED.repeat(filled), BAR_EMPTY.repeat(empty))
}

/// Draw the percentage line and usage bar shared by the CPU and memory widgets.
pub(crate) fn draw_usage(
    surface: &mut Surface<'_>,
    bounds: BoundingBox,
    percent: f32,
    palette: &Palette,
) {
    let x = bounds.x.saturating_add(2);
    surface.put_str_inside(
        bounds,
        x,
        bounds.y.saturating_add(1),
        &format!("{:5.1}%", percent),
        palette.default,
    );

    let bar_width = bounds.width.saturating_sub(BAR_MARGIN);
    surface.put_str_inside(
        bounds,
        x,
        bounds.y.saturating_add(2),
        &render_bar(bar_width, percent),
        bar_style(percent, palette),
    );
}
