//! Append-only per-page annotation storage.

use crate::error::{Error, Result};
use crate::model::{Annotation, MarkKind, MarkStyles, PageSize, Rect};

/// Marks accumulated for one document, page by page.
#[derive(Debug, Clone)]
pub struct AnnotationLayer {
    pages: Vec<Vec<Annotation>>,
    page_size: PageSize,
    styles: MarkStyles,
}

impl AnnotationLayer {
    /// Create an empty layer for a document with `page_count` pages.
    pub fn new(page_count: usize, page_size: PageSize) -> Self {
        Self {
            pages: vec![Vec::new(); page_count],
            page_size,
            styles: MarkStyles::default(),
        }
    }

    /// Set the styles used for new annotations.
    pub fn with_styles(mut self, styles: MarkStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Get the number of pages covered.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get the page size.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Get the styles in use.
    pub fn styles(&self) -> &MarkStyles {
        &self.styles
    }

    /// Append a mark over `rect` on `page`.
    pub fn push(&mut self, page: usize, rect: Rect, kind: MarkKind) -> Result<()> {
        let page_count = self.pages.len();
        let style = self.styles.for_kind(kind);
        let annotations = self
            .pages
            .get_mut(page)
            .ok_or_else(|| Error::page_out_of_range(page, page_count))?;

        annotations.push(Annotation {
            page,
            kind,
            rect,
            style,
        });
        Ok(())
    }

    /// Append a mark covering the whole of `page`.
    pub fn push_whole_page(&mut self, page: usize) -> Result<()> {
        let rect = self.page_size.rect();
        self.push(page, rect, MarkKind::WholePage)
    }

    /// Get the annotations of one page in the order they were added.
    pub fn page(&self, page: usize) -> &[Annotation] {
        self.pages.get(page).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over all annotations, page by page.
    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.pages.iter().flatten()
    }

    /// Total number of annotations.
    pub fn len(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }

    /// Check if nothing has been marked.
    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(Vec::is_empty)
    }

    /// Count annotations of one kind.
    pub fn count_kind(&self, kind: MarkKind) -> usize {
        self.iter().filter(|a| a.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, MarkShape};

    #[test]
    fn test_push_keeps_order() {
        let mut layer = AnnotationLayer::new(2, PageSize::letter());
        layer
            .push(1, Rect::new(0.0, 0.0, 10.0, 10.0), MarkKind::Word)
            .unwrap();
        layer
            .push(1, Rect::new(20.0, 0.0, 30.0, 10.0), MarkKind::WholeLine)
            .unwrap();

        assert!(layer.page(0).is_empty());
        assert_eq!(layer.page(1).len(), 2);
        assert_eq!(layer.page(1)[0].kind, MarkKind::Word);
        assert_eq!(layer.page(1)[1].kind, MarkKind::WholeLine);
        assert_eq!(layer.len(), 2);
    }

    #[test]
    fn test_styles_follow_kind() {
        let mut layer = AnnotationLayer::new(1, PageSize::letter());
        layer
            .push(0, Rect::new(0.0, 0.0, 5.0, 5.0), MarkKind::Word)
            .unwrap();
        layer.push_whole_page(0).unwrap();

        let annotations = layer.page(0);
        assert_eq!(annotations[0].style.color, Color::RED);
        assert_eq!(annotations[1].style.shape, MarkShape::Rectangle);
        assert_eq!(annotations[1].rect, PageSize::letter().rect());
    }

    #[test]
    fn test_page_out_of_range() {
        let mut layer = AnnotationLayer::new(1, PageSize::letter());
        let result = layer.push_whole_page(1);
        assert!(matches!(result, Err(Error::PageOutOfRange(2, 1))));
        assert!(layer.is_empty());
        assert!(layer.page(5).is_empty());
    }

    #[test]
    fn test_count_kind() {
        let mut layer = AnnotationLayer::new(3, PageSize::a4());
        layer.push_whole_page(2).unwrap();
        layer
            .push(0, Rect::new(0.0, 0.0, 1.0, 1.0), MarkKind::Word)
            .unwrap();
        assert_eq!(layer.count_kind(MarkKind::WholePage), 1);
        assert_eq!(layer.count_kind(MarkKind::Word), 1);
        assert_eq!(layer.count_kind(MarkKind::WholeLine), 0);
    }
}
