//! PDF documents through pdfium.
//!
//! [`PdfFile`] implements every collaborator trait in [`crate::annotate`]
//! directly on a PDF: page text comes from pdfium's text layer, changed spans
//! are found with pdfium's text search, and marks become underline and square
//! annotations that are saved back into a copy of the document.
//!
//! Requires the `pdf` feature and a pdfium shared library at run time. See
//! [`bind_pdfium`] for how the library is found.
//!
//! pdfium documents cannot cross threads, so comparisons run through
//! [`Comparator::compare_sequential`].

use crate::annotate::{AnnotationLayer, MarkingSink, Persist, TextExtractor, TextLocator};
use crate::error::{Error, Result};
use crate::model::{Color, MarkKind, MarkShape, MarkStyles, PageSize, PageText, Rect};
use crate::options::CompareConfig;
use crate::pipeline::{Comparator, CompareReport};
use crate::render::AnnotationReport;
use pdfium_render::prelude::{
    PdfColor, PdfDocument, PdfPageAnnotationCommon, PdfPageIndex, PdfQuadPoints, PdfRect,
    PdfSearchDirection, PdfSearchOptions, Pdfium, PdfiumError,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit pdfium library file.
pub const LIBRARY_PATH_ENV: &str = "PDFIUM_LIB_PATH";

impl From<PdfiumError> for Error {
    fn from(err: PdfiumError) -> Self {
        Error::Pdf(err.to_string())
    }
}

/// Bind to the pdfium shared library.
///
/// Looks in order at `PDFIUM_LIB_PATH`, the working directory, then the
/// system library path.
pub fn bind_pdfium() -> Result<Pdfium> {
    if let Some(path) = std::env::var_os(LIBRARY_PATH_ENV) {
        let path = PathBuf::from(path);
        log::debug!("Binding pdfium from {}", path.display());
        return Pdfium::bind_to_library(&path)
            .map(Pdfium::new)
            .map_err(|e| Error::Pdf(format!("cannot bind pdfium at {}: {}", path.display(), e)));
    }

    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map(Pdfium::new)
        .map_err(|e| Error::Pdf(format!("pdfium library not found: {}", e)))
}

/// A PDF opened for comparison, with the marks drawn on it so far.
pub struct PdfFile<'a> {
    source: PathBuf,
    document: PdfDocument<'a>,
    page_count: usize,
    layer: AnnotationLayer,
}

impl<'a> PdfFile<'a> {
    /// Open a PDF with the default mark styles.
    pub fn open<P: AsRef<Path>>(pdfium: &'a Pdfium, path: P) -> Result<Self> {
        Self::open_with_styles(pdfium, path, MarkStyles::default())
    }

    /// Open a PDF with custom mark styles.
    pub fn open_with_styles<P: AsRef<Path>>(
        pdfium: &'a Pdfium,
        path: P,
        styles: MarkStyles,
    ) -> Result<Self> {
        let path = path.as_ref();
        fs::metadata(path)?;

        let document = pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| Error::Decode {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let page_count = document.pages().len() as usize;
        let page_size = document
            .pages()
            .get(0)
            .map(|page| PageSize::new(page.width().value, page.height().value))
            .unwrap_or_default();
        log::debug!("Loaded {} with {} pages", path.display(), page_count);

        Ok(Self {
            source: path.to_path_buf(),
            document,
            page_count,
            layer: AnnotationLayer::new(page_count, page_size).with_styles(styles),
        })
    }

    /// Path the document was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Get the marks applied so far.
    pub fn annotations(&self) -> &AnnotationLayer {
        &self.layer
    }

    /// Summarize the marks applied so far.
    pub fn report(&self) -> AnnotationReport {
        AnnotationReport::from_layer(Some(self.source.clone()), &self.layer)
    }

    fn page_index(&self, page: usize) -> Result<PdfPageIndex> {
        if page >= self.page_count {
            return Err(Error::page_out_of_range(page, self.page_count));
        }
        Ok(page as PdfPageIndex)
    }
}

impl TextExtractor for PdfFile<'_> {
    fn extract_pages(&self) -> Result<Vec<PageText>> {
        self.document
            .pages()
            .iter()
            .map(|page| -> Result<PageText> { Ok(PageText::from_text(&page.text()?.all())) })
            .collect()
    }
}

impl TextLocator for PdfFile<'_> {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn locate(&self, page: usize, text: &str) -> Result<Vec<Rect>> {
        let index = self.page_index(page)?;
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let pdf_page = self.document.pages().get(index)?;
        let height = pdf_page.height().value;
        let page_text = pdf_page.text()?;
        let search = page_text.search(text, &PdfSearchOptions::new().match_case(true))?;

        let mut regions = Vec::new();
        for segments in search.iter(PdfSearchDirection::SearchForward) {
            for segment in segments.iter() {
                let rect = from_pdf_rect(&segment.bounds(), height);
                if !rect.is_empty() {
                    regions.push(rect);
                }
            }
        }
        Ok(regions)
    }
}

impl MarkingSink for PdfFile<'_> {
    fn mark(&mut self, page: usize, region: Rect, kind: MarkKind) -> Result<()> {
        let index = self.page_index(page)?;
        self.layer.push(page, region, kind)?;

        let style = self.layer.styles().for_kind(kind);
        let mut pdf_page = self.document.pages().get(index)?;
        let bounds = to_pdf_rect(&region, pdf_page.height().value);
        let color = pdf_color(style.color);

        match style.shape {
            MarkShape::Underline => {
                let mut annotation = pdf_page.annotations_mut().create_underline_annotation()?;
                annotation.set_bounds(bounds)?;
                annotation.set_stroke_color(color)?;
                annotation
                    .attachment_points_mut()
                    .create_attachment_point_at_end(PdfQuadPoints::from_rect(&bounds))?;
            }
            MarkShape::Rectangle => {
                let mut annotation = pdf_page.annotations_mut().create_square_annotation()?;
                annotation.set_bounds(bounds)?;
                annotation.set_stroke_color(color)?;
            }
        }
        Ok(())
    }

    fn mark_whole_page(&mut self, page: usize) -> Result<()> {
        let index = self.page_index(page)?;
        let pdf_page = self.document.pages().get(index)?;
        let rect = Rect::new(0.0, 0.0, pdf_page.width().value, pdf_page.height().value);
        drop(pdf_page);
        self.mark(page, rect, MarkKind::WholePage)
    }
}

impl Persist for PdfFile<'_> {
    fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        self.document.save_to_file(path)?;
        log::debug!("Saved {} annotations to {}", self.layer.len(), path.display());
        Ok(())
    }
}

/// Compare two PDFs and write annotated copies, binding pdfium first.
pub fn compare_files(config: &CompareConfig) -> Result<CompareReport> {
    let pdfium = bind_pdfium()?;
    compare_files_with(&pdfium, config)
}

/// Compare two PDFs with an already bound pdfium.
pub fn compare_files_with(pdfium: &Pdfium, config: &CompareConfig) -> Result<CompareReport> {
    let mut a = PdfFile::open_with_styles(pdfium, &config.input_a, config.text.styles)?;
    let mut b = PdfFile::open_with_styles(pdfium, &config.input_b, config.text.styles)?;

    if config.compare.parallel {
        log::debug!("PDF documents are marked sequentially");
    }
    let report = Comparator::new(config.compare.clone()).compare_sequential(&mut a, &mut b)?;

    a.save(&config.output_a)?;
    b.save(&config.output_b)?;
    Ok(report)
}

/// Extract the pages of a PDF.
pub fn extract_pages<P: AsRef<Path>>(path: P) -> Result<Vec<PageText>> {
    let pdfium = bind_pdfium()?;
    let pages = PdfFile::open(&pdfium, path)?.extract_pages();
    pages
}

/// Convert a top-left origin rect to PDF user space on a page of `height`.
fn to_pdf_rect(rect: &Rect, height: f32) -> PdfRect {
    PdfRect::new_from_values(height - rect.y1, rect.x0, height - rect.y0, rect.x1)
}

fn from_pdf_rect(rect: &PdfRect, height: f32) -> Rect {
    Rect::new(
        rect.left().value,
        height - rect.top().value,
        rect.right().value,
        height - rect.bottom().value,
    )
}

fn pdf_color(color: Color) -> PdfColor {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    PdfColor::new(channel(color.r), channel(color.g), channel(color.b), 255)
}
