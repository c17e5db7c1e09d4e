//! Page geometry types.

use serde::{Deserialize, Serialize};

/// Page dimensions in points (1 point = 1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    /// Page width in points
    pub width: f32,

    /// Page height in points
    pub height: f32,
}

impl PageSize {
    /// Create a page size with the given dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Standard Letter size (8.5 x 11 inches).
    pub fn letter() -> Self {
        Self::new(612.0, 792.0) // 8.5 * 72, 11 * 72
    }

    /// Standard A4 size (210 x 297 mm).
    pub fn a4() -> Self {
        Self::new(595.0, 842.0) // 210mm * 2.834, 297mm * 2.834
    }

    /// The rectangle covering the whole page.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Check if the page is in landscape orientation.
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::letter()
    }
}

/// An axis-aligned region on a page, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
}

impl Rect {
    /// Create a rectangle from its corners.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Check if the rectangle has no area.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}
