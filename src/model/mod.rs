//! Data model shared by the diff engine and the document adapters.
//!
//! Documents are seen through their extracted text ([`PageText`]); the diff
//! engine produces [`MarkRequest`]s which adapters resolve to [`Rect`]s and
//! record as [`Annotation`]s.

mod annotation;
mod document;
mod mark;
mod page;

pub use annotation::{Annotation, Color, MarkShape, MarkStyle, MarkStyles};
pub use document::{DocumentId, PageText};
pub use mark::{MarkAction, MarkKind, MarkRequest};
pub use page::{PageSize, Rect};
