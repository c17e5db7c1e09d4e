//! # pagediff
//!
//! Page-by-page comparison of two versions of a document.
//!
//! This library diffs the extracted text of two documents page by page and
//! marks what changed on each copy: lines that exist in only one version are
//! marked whole, and lines modified in place are refined to the individual
//! words that differ. Every changed span is located on its page again and
//! every occurrence found there is marked.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pagediff::{compare_files, CompareConfig};
//!
//! fn main() -> pagediff::Result<()> {
//!     let config = CompareConfig::new("before.txt", "after.txt")
//!         .with_outputs("before.marks.json", "after.marks.json");
//!
//!     let report = compare_files(&config)?;
//!     println!("{} regions marked", report.total().regions_marked);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Page alignment** ([`align`]): pages are paired by index; surplus pages
//!   of the longer document are marked whole
//! - **Line diff** ([`diff`]): LCS alignment over the lines of each page pair
//! - **Word refinement**: lines replaced at the same position are diffed word
//!   by word
//! - **Mark resolution** ([`annotate`]): each changed span is located on the
//!   page through a [`TextLocator`] and marked through a [`MarkingSink`]
//!
//! Documents plug in through the traits in [`annotate`]. With the `pdf`
//! feature, `pdf::PdfFile` compares PDFs directly and writes annotated copies.
//! The crate always ships a plain-text implementation ([`text::TextDocument`])
//! that reads form-feed separated pages and writes marks as JSON.

pub mod align;
pub mod annotate;
pub mod diff;
pub mod error;
pub mod model;
pub mod options;
#[cfg(feature = "pdf")]
pub mod pdf;
pub mod pipeline;
pub mod render;
pub mod text;

// Re-export commonly used types
pub use align::{align_pages, PageInstruction};
pub use annotate::{
    AnnotationLayer, ComparableDocument, MarkingSink, Persist, TextExtractor, TextLocator,
};
pub use error::{Error, Result};
pub use model::{
    Annotation, Color, DocumentId, MarkAction, MarkKind, MarkRequest, MarkShape, MarkStyle,
    MarkStyles, PageSize, PageText, Rect,
};
pub use options::{is_pdf_path, CompareConfig, CompareOptions, Granularity};
pub use pipeline::{Comparator, CompareReport, DiffStats, MarkPlan};
pub use render::{AnnotationReport, JsonFormat};
pub use text::{TextDocument, TextLayout, TextOptions};

use std::path::Path;

/// Compare two documents on disk and write both outputs.
///
/// Two PDF inputs are compared through pdfium and written as annotated PDFs,
/// which needs the `pdf` feature. Anything else is read as paged text and
/// written as JSON annotation reports.
///
/// # Arguments
///
/// * `config` - Inputs, outputs and options
///
/// # Example
///
/// ```no_run
/// use pagediff::{compare_files, CompareConfig, CompareOptions};
///
/// let config = CompareConfig::new("v1.txt", "v2.txt")
///     .with_compare_options(CompareOptions::new().line_only());
/// let report = compare_files(&config).unwrap();
/// assert_eq!(report.page_count_a, report.page_count_b);
/// ```
pub fn compare_files(config: &CompareConfig) -> Result<CompareReport> {
    if config.is_pdf() {
        return compare_pdf_files(config);
    }

    let mut a = TextDocument::open_with_options(&config.input_a, &config.text)?;
    let mut b = TextDocument::open_with_options(&config.input_b, &config.text)?;

    let report = Comparator::new(config.compare.clone()).compare(&mut a, &mut b)?;

    a.save(&config.output_a)?;
    b.save(&config.output_b)?;
    Ok(report)
}

#[cfg(feature = "pdf")]
fn compare_pdf_files(config: &CompareConfig) -> Result<CompareReport> {
    pdf::compare_files(config)
}

#[cfg(not(feature = "pdf"))]
fn compare_pdf_files(config: &CompareConfig) -> Result<CompareReport> {
    Err(Error::UnsupportedFormat(format!(
        "{} and {} are PDFs; build with the `pdf` feature to compare them",
        config.input_a.display(),
        config.input_b.display()
    )))
}

/// Extract the pages of a document on disk.
///
/// PDFs go through pdfium when the `pdf` feature is enabled. Everything else
/// is read as paged text.
pub fn extract_file<P: AsRef<Path>>(path: P, options: &TextOptions) -> Result<Vec<PageText>> {
    let path = path.as_ref();
    #[cfg(feature = "pdf")]
    {
        if is_pdf_path(path) {
            return pdf::extract_pages(path);
        }
    }
    TextDocument::open_with_options(path, options)?.extract_pages()
}

/// Compare two texts in memory and return the mark requests, page by page.
///
/// Useful for previewing what would be marked without locating anything.
///
/// # Example
///
/// ```
/// use pagediff::{diff_texts, Granularity, MarkAction};
///
/// let plan = diff_texts("The cat sat", "The dog sat", Granularity::Word);
/// assert_eq!(plan.a.len(), 1);
/// assert!(matches!(&plan.a[0], MarkAction::Span(r) if r.span == "cat"));
/// ```
pub fn diff_texts(text_a: &str, text_b: &str, granularity: Granularity) -> MarkPlan {
    let a = TextDocument::from_text(text_a);
    let b = TextDocument::from_text(text_b);
    Comparator::new(CompareOptions::new().with_granularity(granularity)).plan(a.pages(), b.pages())
}

/// Builder for comparing documents.
///
/// # Example
///
/// ```no_run
/// use pagediff::PageDiff;
///
/// let report = PageDiff::new()
///     .sequential()
///     .compact_json()
///     .compare_files("v1.txt", "v2.txt", "v1.json", "v2.json")?;
/// # Ok::<(), pagediff::Error>(())
/// ```
pub struct PageDiff {
    compare_options: CompareOptions,
    text_options: TextOptions,
}

impl PageDiff {
    /// Create a new PageDiff builder.
    pub fn new() -> Self {
        Self {
            compare_options: CompareOptions::default(),
            text_options: TextOptions::default(),
        }
    }

    /// Mark modified lines whole instead of refining them to words.
    pub fn line_only(mut self) -> Self {
        self.compare_options = self.compare_options.line_only();
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.compare_options = self.compare_options.sequential();
        self
    }

    /// Set mark styles.
    pub fn with_styles(mut self, styles: MarkStyles) -> Self {
        self.text_options = self.text_options.with_styles(styles);
        self
    }

    /// Set the page geometry used to locate text.
    pub fn with_layout(mut self, layout: TextLayout) -> Self {
        self.text_options = self.text_options.with_layout(layout);
        self
    }

    /// Collapse runs of spaces and tabs when loading.
    pub fn collapse_whitespace(mut self) -> Self {
        self.text_options = self.text_options.with_collapse_whitespace(true);
        self
    }

    /// Write compact JSON reports.
    pub fn compact_json(mut self) -> Self {
        self.text_options = self.text_options.with_json_format(JsonFormat::Compact);
        self
    }

    /// Build the equivalent configuration for a pair of files.
    pub fn config<P: AsRef<Path>>(&self, input_a: P, input_b: P, output_a: P, output_b: P) -> CompareConfig {
        CompareConfig::new(input_a.as_ref(), input_b.as_ref())
            .with_outputs(output_a.as_ref(), output_b.as_ref())
            .with_compare_options(self.compare_options.clone())
            .with_text_options(self.text_options.clone())
    }

    /// Compare two files and write both reports.
    pub fn compare_files<P: AsRef<Path>>(
        &self,
        input_a: P,
        input_b: P,
        output_a: P,
        output_b: P,
    ) -> Result<CompareReport> {
        compare_files(&self.config(input_a, input_b, output_a, output_b))
    }

    /// Compare two in-memory texts and return the marked documents.
    pub fn compare_texts(
        &self,
        text_a: &str,
        text_b: &str,
    ) -> Result<(CompareReport, TextDocument, TextDocument)> {
        let mut a = TextDocument::from_text_with_options(text_a, &self.text_options);
        let mut b = TextDocument::from_text_with_options(text_b, &self.text_options);
        let report = Comparator::new(self.compare_options.clone()).compare(&mut a, &mut b)?;
        Ok((report, a, b))
    }
}

impl Default for PageDiff {
    fn default() -> Self {
        Self::new()
    }
}
