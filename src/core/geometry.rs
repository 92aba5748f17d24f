use crate::error::{DashError, Result};

/// Fixed rectangle occupied by a widget, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl BoundingBox {
    /// Create a bounding box; both dimensions must be non-zero.
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(DashError::invalid_geometry(format!(
                "box at ({}, {}) has empty size {}x{}",
                x, y, width, height
            )));
        }

        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Half-open hit test: the right and bottom edges are outside.
    pub fn contains(&self, px: u16, py: u16) -> bool {
        let (px, py) = (u32::from(px), u32::from(py));
        let (x, y) = (u32::from(self.x), u32::from(self.y));

        x <= px && px < x + u32::from(self.width) && y <= py && py < y + u32::from(self.height)
    }

    /// Last column inside the box.
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width - 1)
    }

    /// Last row inside the box.
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height - 1)
    }

    /// Number of columns between the left and right border.
    pub fn inner_width(&self) -> u16 {
        self.width.saturating_sub(2)
    }
}
