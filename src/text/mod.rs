//! Plain-text paged documents.
//!
//! A [`TextDocument`] is the reference implementation of every collaborator
//! trait in [`crate::annotate`]. Input is UTF-8 text with pages separated by
//! form feeds (`\x0C`), which is what `pdftotext` and similar tools emit.
//! Lines are laid out on a monospace grid ([`TextLayout`]) so that located
//! text maps to page coordinates, and marks are kept in an
//! [`AnnotationLayer`] that is saved as a JSON [`AnnotationReport`].
//!
//! # Example
//!
//! ```
//! use pagediff::text::TextDocument;
//! use pagediff::annotate::TextLocator;
//!
//! let doc = TextDocument::from_text("first page\x0cthe second page\nthe end");
//! assert_eq!(doc.page_count(), 2);
//! assert_eq!(doc.locate(1, "the").unwrap().len(), 2);
//! ```

mod layout;

pub use layout::TextLayout;

use crate::annotate::{AnnotationLayer, MarkingSink, Persist, TextExtractor, TextLocator};
use crate::error::{Error, Result};
use crate::model::{MarkKind, MarkStyles, PageText, Rect};
use crate::render::{to_json, AnnotationReport, JsonFormat};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Page separator in text input.
pub const PAGE_BREAK: char = '\x0C';

/// Options for loading and saving text documents.
#[derive(Debug, Clone)]
pub struct TextOptions {
    /// Apply Unicode NFC normalization to every line
    pub normalize_unicode: bool,

    /// Replace runs of spaces and tabs with a single space
    pub collapse_whitespace: bool,

    /// Page geometry
    pub layout: TextLayout,

    /// Appearance of marks
    pub styles: MarkStyles,

    /// Format of the saved report
    pub json_format: JsonFormat,
}

impl TextOptions {
    /// Create new text options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode_normalization(mut self, enabled: bool) -> Self {
        self.normalize_unicode = enabled;
        self
    }

    /// Enable or disable whitespace collapsing.
    pub fn with_collapse_whitespace(mut self, enabled: bool) -> Self {
        self.collapse_whitespace = enabled;
        self
    }

    /// Set page geometry.
    pub fn with_layout(mut self, layout: TextLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set mark styles.
    pub fn with_styles(mut self, styles: MarkStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Set report format.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            normalize_unicode: true,
            collapse_whitespace: false,
            layout: TextLayout::default(),
            styles: MarkStyles::default(),
            json_format: JsonFormat::Pretty,
        }
    }
}

/// A paged plain-text document with its accumulated marks.
#[derive(Debug, Clone)]
pub struct TextDocument {
    source: Option<PathBuf>,
    pages: Vec<PageText>,
    layout: TextLayout,
    json_format: JsonFormat,
    layer: AnnotationLayer,
}

impl TextDocument {
    /// Open a text file with default options.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, &TextOptions::default())
    }

    /// Open a text file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: &TextOptions) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        let mut doc = Self::from_bytes_at(&data, path, options)?;
        doc.source = Some(path.to_path_buf());
        log::debug!("Loaded {} with {} pages", path.display(), doc.pages.len());
        Ok(doc)
    }

    /// Decode a document from bytes.
    pub fn from_bytes(data: &[u8], options: &TextOptions) -> Result<Self> {
        Self::from_bytes_at(data, Path::new("<memory>"), options)
    }

    /// Create a document from text with default options.
    pub fn from_text(text: &str) -> Self {
        Self::from_text_with_options(text, &TextOptions::default())
    }

    /// Create a document from text with custom options.
    pub fn from_text_with_options(text: &str, options: &TextOptions) -> Self {
        let pages = split_pages(text, &LineNormalizer::new(options));
        Self::from_pages_with_options(pages, options)
    }

    /// Create a document from already extracted pages.
    ///
    /// No normalization is applied.
    pub fn from_pages_with_options(pages: Vec<PageText>, options: &TextOptions) -> Self {
        let layer = AnnotationLayer::new(pages.len(), options.layout.page_size)
            .with_styles(options.styles);
        Self {
            source: None,
            pages,
            layout: options.layout,
            json_format: options.json_format,
            layer,
        }
    }

    fn from_bytes_at(data: &[u8], path: &Path, options: &TextOptions) -> Result<Self> {
        if data.starts_with(b"%PDF-") {
            return Err(Error::UnsupportedFormat(format!(
                "{} is a PDF; build with the `pdf` feature or extract its text first",
                path.display()
            )));
        }

        let text = std::str::from_utf8(data).map_err(|e| Error::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_text_with_options(text, options))
    }

    /// Path the document was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Get the pages.
    pub fn pages(&self) -> &[PageText] {
        &self.pages
    }

    /// Get the marks applied so far.
    pub fn annotations(&self) -> &AnnotationLayer {
        &self.layer
    }

    /// Build the report that [`Persist::save`] writes.
    pub fn report(&self) -> AnnotationReport {
        AnnotationReport::from_layer(self.source.clone(), &self.layer)
    }
}

impl TextExtractor for TextDocument {
    fn extract_pages(&self) -> Result<Vec<PageText>> {
        Ok(self.pages.clone())
    }
}

impl TextLocator for TextDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn locate(&self, page: usize, text: &str) -> Result<Vec<Rect>> {
        let lines = &self
            .pages
            .get(page)
            .ok_or_else(|| Error::page_out_of_range(page, self.pages.len()))?
            .lines;

        if text.is_empty() {
            return Ok(Vec::new());
        }

        let mut regions = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            for (offset, matched) in line.match_indices(text) {
                let column = line[..offset].chars().count();
                regions.push(self.layout.span_rect(row, column, matched.chars().count()));
            }
        }
        Ok(regions)
    }
}

impl MarkingSink for TextDocument {
    fn mark(&mut self, page: usize, region: Rect, kind: MarkKind) -> Result<()> {
        self.layer.push(page, region, kind)
    }

    fn mark_whole_page(&mut self, page: usize) -> Result<()> {
        self.layer.push_whole_page(page)
    }
}

impl Persist for TextDocument {
    fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = to_json(&self.report(), self.json_format)?;
        fs::write(path, json)?;
        log::debug!("Saved {} annotations to {}", self.layer.len(), path.display());
        Ok(())
    }
}

/// Runs of two or more spaces or tabs.
fn whitespace_run() -> &'static Regex {
    static WHITESPACE_RUN: OnceLock<Regex> = OnceLock::new();
    WHITESPACE_RUN.get_or_init(|| Regex::new(r"[ \t]{2,}").unwrap())
}

/// Per-line text normalization applied at load time.
struct LineNormalizer {
    nfc: bool,
    whitespace: Option<&'static Regex>,
}

impl LineNormalizer {
    fn new(options: &TextOptions) -> Self {
        Self {
            nfc: options.normalize_unicode,
            whitespace: options.collapse_whitespace.then(whitespace_run),
        }
    }

    fn apply(&self, line: &str) -> String {
        let mut result = if self.nfc {
            line.nfc().collect()
        } else {
            line.to_string()
        };

        if let Some(ref re) = self.whitespace {
            result = re.replace_all(&result, " ").into_owned();
        }
        result
    }
}

fn split_pages(text: &str, normalizer: &LineNormalizer) -> Vec<PageText> {
    let body = text.strip_suffix(PAGE_BREAK).unwrap_or(text);
    body.split(PAGE_BREAK)
        .map(|page| PageText::from_lines(page.lines().map(|line| normalizer.apply(line))))
        .collect()
}
