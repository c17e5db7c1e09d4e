//! Visual annotation types.

use super::{MarkKind, Rect};
use serde::{Deserialize, Serialize};

/// RGB colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a colour from components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// How a mark is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkShape {
    /// A line along the bottom edge of the region
    Underline,
    /// An outline around the region
    Rectangle,
}

/// Appearance of one kind of mark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkStyle {
    /// Drawing shape
    pub shape: MarkShape,

    /// Stroke colour
    pub color: Color,

    /// Stroke width in points
    pub width: f32,
}

impl MarkStyle {
    /// Create an underline style.
    pub fn underline(color: Color, width: f32) -> Self {
        Self {
            shape: MarkShape::Underline,
            color,
            width,
        }
    }

    /// Create a rectangle outline style.
    pub fn rectangle(color: Color, width: f32) -> Self {
        Self {
            shape: MarkShape::Rectangle,
            color,
            width,
        }
    }
}

/// Styles for each kind of mark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkStyles {
    /// Whole-line marks
    pub line: MarkStyle,

    /// Word marks
    pub word: MarkStyle,

    /// Whole-page marks
    pub page: MarkStyle,
}

impl MarkStyles {
    /// Create the default style set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the whole-line style.
    pub fn with_line(mut self, style: MarkStyle) -> Self {
        self.line = style;
        self
    }

    /// Set the word style.
    pub fn with_word(mut self, style: MarkStyle) -> Self {
        self.word = style;
        self
    }

    /// Set the whole-page style.
    pub fn with_page(mut self, style: MarkStyle) -> Self {
        self.page = style;
        self
    }

    /// Get the style for a mark kind.
    pub fn for_kind(&self, kind: MarkKind) -> MarkStyle {
        match kind {
            MarkKind::WholeLine => self.line,
            MarkKind::Word => self.word,
            MarkKind::WholePage => self.page,
        }
    }
}

impl Default for MarkStyles {
    fn default() -> Self {
        Self {
            line: MarkStyle::underline(Color::BLACK, 1.0),
            word: MarkStyle::underline(Color::RED, 1.5),
            page: MarkStyle::rectangle(Color::BLACK, 1.0),
        }
    }
}

/// A mark drawn on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Page index (0-based)
    pub page: usize,

    /// Why the mark exists
    pub kind: MarkKind,

    /// Marked region
    pub rect: Rect,

    /// Appearance
    pub style: MarkStyle,
}
