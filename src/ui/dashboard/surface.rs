use ratatui::{buffer::Buffer, style::Style};

use crate::core::geometry::BoundingBox;

/// Box-drawing glyphs for widget borders.
pub const TOP_LEFT: &str = "┌";
pub const TOP_RIGHT: &str = "┐";
pub const BOTTOM_LEFT: &str = "└";
pub const BOTTOM_RIGHT: &str = "┘";
pub const HORIZONTAL: &str = "─";
pub const VERTICAL: &str = "│";

/// Clipping write target over a frame buffer.
///
/// Every write is checked against the buffer area, so a widget positioned
/// partly or wholly off-screen (e.g. after the terminal shrinks) degrades to
/// a partial draw instead of a panic.
pub struct Surface<'a> {
    buf: &'a mut Buffer,
}

impl<'a> Surface<'a> {
    pub fn new(buf: &'a mut Buffer) -> Self {
        Self { buf }
    }

    /// Write `text` starting at column `x`, row `y`, truncated at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: Style) {
        self.put_str_until(x, y, text, style, u16::MAX);
    }

    /// Like [`Surface::put_str`], but also stops before column `limit`.
    pub fn put_str_until(&mut self, x: u16, y: u16, text: &str, style: Style, limit: u16) {
        let area = self.buf.area;
        let right = area.right().min(limit);
        if y < area.top() || y >= area.bottom() || x < area.left() || x >= right {
            return;
        }

        self.buf.set_stringn(x, y, text, usize::from(right - x), style);
    }

    /// Write `text` strictly inside the border of `bounds`.
    ///
    /// Rows on or outside the top and bottom border are skipped, as is a start
    /// column on or left of the left border. Text is cut before the right border.
    pub fn put_str_inside(&mut self, bounds: BoundingBox, x: u16, y: u16, text: &str, style: Style) {
        if y <= bounds.y || y >= bounds.bottom() || x <= bounds.x {
            return;
        }
        self.put_str_until(x, y, text, style, bounds.right());
    }

    /// Write a single glyph; positions outside the buffer are ignored.
    pub fn put_symbol(&mut self, x: u16, y: u16, symbol: &str, style: Style) {
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_symbol(symbol).set_style(style);
        }
    }

    /// Draw a single-line box around `bounds`.
    pub fn draw_box(&mut self, bounds: BoundingBox, style: Style) {
        let (left, top) = (bounds.x, bounds.y);
        let (right, bottom) = (bounds.right(), bounds.bottom());

        for x in left..=right {
            self.put_symbol(x, top, HORIZONTAL, style);
            self.put_symbol(x, bottom, HORIZONTAL, style);
        }
        for y in top..=bottom {
            self.put_symbol(left, y, VERTICAL, style);
            self.put_symbol(right, y, VERTICAL, style);
        }

        self.put_symbol(left, top, TOP_LEFT, style);
        self.put_symbol(right, top, TOP_RIGHT, style);
        self.put_symbol(left, bottom, BOTTOM_LEFT, style);
        self.put_symbol(right, bottom, BOTTOM_RIGHT, style);
    }
}
