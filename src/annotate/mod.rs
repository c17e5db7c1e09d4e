//! Collaborator interfaces and mark application.
//!
//! The diff engine never touches a rendered page directly. A document taking
//! part in a comparison is seen through four small traits:
//!
//! - [`TextExtractor`] yields the page lines the diff runs on,
//! - [`TextLocator`] finds where a piece of text sits on a page,
//! - [`MarkingSink`] draws a mark over a region,
//! - [`Persist`] writes the accumulated marks out.
//!
//! [`apply_actions`] drives the last two for a stream of
//! [`MarkAction`](crate::model::MarkAction)s.

mod layer;
mod resolver;

pub use layer::AnnotationLayer;
pub use resolver::apply_actions;
pub(crate) use resolver::apply_action;

use crate::error::Result;
use crate::model::{MarkKind, PageText, Rect};
use std::path::Path;

/// Produces the text of a document as pages of lines.
pub trait TextExtractor {
    /// Extract every page in order.
    ///
    /// A page without extractable text is an empty [`PageText`], not an error.
    fn extract_pages(&self) -> Result<Vec<PageText>>;
}

/// Finds the on-page regions of a piece of text.
pub trait TextLocator {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Return the region of every occurrence of `text` on `page` (0-based).
    ///
    /// Matching is exact and case-sensitive. No occurrence is an empty
    /// vector; a page outside the document is an error.
    fn locate(&self, page: usize, text: &str) -> Result<Vec<Rect>>;
}

/// Receives visual marks.
pub trait MarkingSink {
    /// Mark a located region. Repeated or overlapping marks are allowed.
    fn mark(&mut self, page: usize, region: Rect, kind: MarkKind) -> Result<()>;

    /// Mark an entire page.
    fn mark_whole_page(&mut self, page: usize) -> Result<()>;
}

/// Writes a document's marks to an output artifact.
pub trait Persist {
    /// Save to `path`.
    fn save(&self, path: &Path) -> Result<()>;
}

/// A document that can take part in a comparison.
pub trait ComparableDocument: TextExtractor + TextLocator + MarkingSink {}

impl<T: TextExtractor + TextLocator + MarkingSink + ?Sized> ComparableDocument for T {}
