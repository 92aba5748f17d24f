use ratatui::{
    widgets::{Block, Clear},
    Frame,
};

use super::app::DashboardApp;
use super::surface::Surface;
use super::theme::Palette;

/// Glyph marking the last known pointer position
pub const CURSOR_MARKER: &str = "X";

/// Draws one dashboard frame
#[derive(Debug, Clone)]
pub struct Renderer {
    palette: Palette,
    quit_key: char,
}

impl Renderer {
    pub fn new(quit_key: char) -> Self {
        Self {
            palette: Palette::new(),
            quit_key,
        }
    }

    /// Status line text for the current pointer position
    pub fn status_line(&self, mouse: (u16, u16)) -> String {
        format!(
            " Mouse: ({},{}) | Press {} to quit ",
            mouse.0, mouse.1, self.quit_key
        )
    }

    /// Clear, draw the border, every widget in order, the cursor marker and
    /// the status line. Anything outside the frame is clipped.
    pub fn render(&self, frame: &mut Frame, app: &DashboardApp) {
        let area = frame.area();
        frame.render_widget(Clear, area);
        frame.render_widget(Block::bordered(), area);

        let mut surface = Surface::new(frame.buffer_mut());

        for widget in app.widgets() {
            widget.draw(&mut surface, &self.palette);
        }

        let (mx, my) = app.mouse_position();
        surface.put_str(mx, my, CURSOR_MARKER, self.palette.cursor);

        if area.height > 0 {
            let status = self.status_line((mx, my));
            surface.put_str(area.x, area.bottom() - 1, &status, self.palette.status);
        }
    }
}
