use std::sync::atomic::{AtomicBool, Ordering};

use unicode_width::UnicodeWidthStr;

use crate::core::geometry::BoundingBox;
use crate::ui::dashboard::surface::Surface;
use crate::ui::dashboard::theme::Palette;

use super::DashWidget;

/// Callback invoked when a button is clicked.
///
/// Anything the action needs is captured when the button is built.
pub type ButtonAction = Box<dyn Fn() + Send + Sync>;

/// Clickable labelled button
pub struct Button {
    bounds: BoundingBox,
    label: String,
    action: ButtonAction,
    // Stays set after the first click
    pressed: AtomicBool,
}

impl Button {
    pub fn new(bounds: BoundingBox, label: impl Into<String>, action: ButtonAction) -> Self {
        Self {
            bounds,
            label: label.into(),
            action,
            pressed: AtomicBool::new(false),
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed.load(Ordering::Acquire)
    }

    /// Top-left cell of the label, centered between the borders.
    ///
    /// A label wider than the box starts just right of the left border.
    fn label_origin(&self) -> (u16, u16) {
        let label_width = u16::try_from(self.label.width()).unwrap_or(u16::MAX);
        let x = self
            .bounds
            .x
            .saturating_add(1)
            .saturating_add(self.bounds.inner_width().saturating_sub(label_width) / 2);
        let y = self.bounds.y.saturating_add(self.bounds.height / 2);
        (x, y)
    }
}

impl DashWidget for Button {
    fn name(&self) -> &str {
        &self.label
    }

    fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    fn draw(&self, surface: &mut Surface<'_>, palette: &Palette) {
        surface.draw_box(self.bounds, palette.default);

        let style = if self.is_pressed() {
            palette.pressed
        } else {
            palette.default
        };
        let (x, y) = self.label_origin();
        surface.put_str_inside(self.bounds, x, y, &self.label, style);
    }

    fn on_click(&self) {
        self.pressed.store(true, Ordering::Release);
        (self.action)();
    }
}
