//! Monospace page geometry for plain-text documents.

use crate::model::{PageSize, Rect};

/// Fixed grid on which the lines of a text page are laid out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLayout {
    /// Page dimensions
    pub page_size: PageSize,

    /// Left margin in points
    pub margin_left: f32,

    /// Top margin in points
    pub margin_top: f32,

    /// Horizontal advance of one character in points
    pub char_advance: f32,

    /// Distance between baselines in points
    pub line_height: f32,
}

impl TextLayout {
    /// Create a layout with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page size.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set character advance and line height.
    pub fn with_cell(mut self, char_advance: f32, line_height: f32) -> Self {
        self.char_advance = char_advance;
        self.line_height = line_height;
        self
    }

    /// Set margins.
    pub fn with_margins(mut self, left: f32, top: f32) -> Self {
        self.margin_left = left;
        self.margin_top = top;
        self
    }

    /// Region covered by `len` characters starting at `column` on `line`.
    pub fn span_rect(&self, line: usize, column: usize, len: usize) -> Rect {
        let x0 = self.margin_left + column as f32 * self.char_advance;
        let y0 = self.margin_top + line as f32 * self.line_height;
        Rect::new(
            x0,
            y0,
            x0 + len as f32 * self.char_advance,
            y0 + self.line_height,
        )
    }
}

impl Default for TextLayout {
    fn default() -> Self {
        // 10pt Courier on Letter paper with one-inch margins
        Self {
            page_size: PageSize::letter(),
            margin_left: 72.0,
            margin_top: 72.0,
            char_advance: 6.0,
            line_height: 12.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_rect() {
        let layout = TextLayout::default();
        let rect = layout.span_rect(2, 4, 3);
        assert_eq!(rect, Rect::new(96.0, 96.0, 114.0, 108.0));
        assert_eq!(rect.width(), 18.0);
    }

    #[test]
    fn test_layout_builder() {
        let layout = TextLayout::new()
            .with_page_size(PageSize::a4())
            .with_cell(5.0, 10.0)
            .with_margins(0.0, 0.0);
        assert_eq!(layout.span_rect(1, 1, 1), Rect::new(5.0, 10.0, 10.0, 20.0));
        assert_eq!(layout.page_size, PageSize::a4());
    }
}
