//! Serializable record of one document's marks.

use crate::annotate::AnnotationLayer;
use crate::model::{Annotation, MarkKind, PageSize};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The output artifact written for each compared document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationReport {
    /// Input the annotations belong to
    pub source: Option<PathBuf>,

    /// When the report was produced
    pub generated_at: DateTime<Utc>,

    /// Number of pages in the source
    pub page_count: usize,

    /// Page dimensions
    pub page_size: PageSize,

    /// All marks, page by page in the order they were applied
    pub annotations: Vec<Annotation>,
}

impl AnnotationReport {
    /// Build a report from an annotation layer.
    pub fn from_layer(source: Option<PathBuf>, layer: &AnnotationLayer) -> Self {
        Self {
            source,
            generated_at: Utc::now(),
            page_count: layer.page_count(),
            page_size: layer.page_size(),
            annotations: layer.iter().cloned().collect(),
        }
    }

    /// Get the annotations of one page.
    pub fn page(&self, page: usize) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter().filter(move |a| a.page == page)
    }

    /// Count annotations of one kind.
    pub fn count_kind(&self, kind: MarkKind) -> usize {
        self.annotations.iter().filter(|a| a.kind == kind).count()
    }
}
