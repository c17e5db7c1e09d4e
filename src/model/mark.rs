//! Mark requests produced by the diff engine.

use super::DocumentId;
use serde::{Deserialize, Serialize};

/// What a mark stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkKind {
    /// A whole line present in only one document
    WholeLine,
    /// A single word changed inside a modified line
    Word,
    /// A trailing page the other document lacks
    WholePage,
}

/// A request to mark every occurrence of `span` on one page of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkRequest {
    /// Document to mark
    pub target: DocumentId,

    /// Page index (0-based)
    pub page: usize,

    /// Literal text to locate on the page
    pub span: String,

    /// Line or word mark
    pub kind: MarkKind,
}

impl MarkRequest {
    /// Request a whole-line mark.
    pub fn whole_line(target: DocumentId, page: usize, span: impl Into<String>) -> Self {
        Self {
            target,
            page,
            span: span.into(),
            kind: MarkKind::WholeLine,
        }
    }

    /// Request a word mark.
    pub fn word(target: DocumentId, page: usize, span: impl Into<String>) -> Self {
        Self {
            target,
            page,
            span: span.into(),
            kind: MarkKind::Word,
        }
    }
}

/// One step of work for the marking side of a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkAction {
    /// Locate a span and mark every occurrence
    Span(MarkRequest),
    /// Mark an entire page
    WholePage(usize),
}

impl MarkAction {
    /// Page the action applies to.
    pub fn page(&self) -> usize {
        match self {
            MarkAction::Span(request) => request.page,
            MarkAction::WholePage(page) => *page,
        }
    }
}

impl From<MarkRequest> for MarkAction {
    fn from(request: MarkRequest) -> Self {
        MarkAction::Span(request)
    }
}
