//! Document-level types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two compared documents something belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentId {
    /// The first (original) document
    A,
    /// The second (revised) document
    B,
}

impl DocumentId {
    /// Get the other document.
    pub fn other(self) -> Self {
        match self {
            DocumentId::A => DocumentId::B,
            DocumentId::B => DocumentId::A,
        }
    }

    /// Short label used in logs and reports.
    pub fn label(self) -> &'static str {
        match self {
            DocumentId::A => "A",
            DocumentId::B => "B",
        }
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The extracted text of a single page, as lines in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// Lines in vertical reading order
    pub lines: Vec<String>,
}

impl PageText {
    /// Create an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page from any sequence of lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a page by splitting text on line breaks.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Add a line to the bottom of the page.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Check if the page has no extractable text.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the number of lines on the page.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get plain text content of the page.
    pub fn plain_text(&self) -> String {
        self.lines.join("\n")
    }
}
