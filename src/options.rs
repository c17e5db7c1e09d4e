//! Comparison options and configuration.

use crate::text::TextOptions;
use std::path::{Path, PathBuf};

/// Default output path for the annotated copy of document A.
pub const DEFAULT_OUTPUT_A: &str = "output_diff_1.json";

/// Default output path for the annotated copy of document B.
pub const DEFAULT_OUTPUT_B: &str = "output_diff_2.json";

/// Default output path for document A when both inputs are PDFs.
pub const DEFAULT_PDF_OUTPUT_A: &str = "output_diff_1.pdf";

/// Default output path for document B when both inputs are PDFs.
pub const DEFAULT_PDF_OUTPUT_B: &str = "output_diff_2.pdf";

/// Check if a path names a PDF file, by extension.
pub fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

fn default_outputs(pdf: bool) -> (&'static str, &'static str) {
    if pdf {
        (DEFAULT_PDF_OUTPUT_A, DEFAULT_PDF_OUTPUT_B)
    } else {
        (DEFAULT_OUTPUT_A, DEFAULT_OUTPUT_B)
    }
}

/// Options controlling how two documents are compared.
#[derive(Debug, Clone)]
pub struct CompareOptions {
    /// Finest level at which changed lines are marked
    pub granularity: Granularity,

    /// Resolve and apply marks for both documents in parallel
    pub parallel: bool,
}

impl CompareOptions {
    /// Create new compare options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set granularity.
    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Mark modified lines as whole lines instead of refining to words.
    pub fn line_only(mut self) -> Self {
        self.granularity = Granularity::Line;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            granularity: Granularity::Word,
            parallel: true,
        }
    }
}

/// How far modified lines are refined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    /// Every changed line is marked whole
    Line,
    /// Lines replaced at the same position are refined to changed words
    #[default]
    Word,
}

/// Everything needed to compare two documents on disk.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// First (original) document
    pub input_a: PathBuf,

    /// Second (revised) document
    pub input_b: PathBuf,

    /// Where the annotations of document A are written
    pub output_a: PathBuf,

    /// Where the annotations of document B are written
    pub output_b: PathBuf,

    /// Diff options
    pub compare: CompareOptions,

    /// Loading and persistence options for both documents
    pub text: TextOptions,
}

impl CompareConfig {
    /// Create a configuration with the default output paths.
    ///
    /// Two PDF inputs default to annotated PDF outputs, anything else to
    /// JSON reports.
    pub fn new(input_a: impl Into<PathBuf>, input_b: impl Into<PathBuf>) -> Self {
        let input_a = input_a.into();
        let input_b = input_b.into();
        let (output_a, output_b) = default_outputs(is_pdf_path(&input_a) && is_pdf_path(&input_b));
        Self {
            input_a,
            input_b,
            output_a: PathBuf::from(output_a),
            output_b: PathBuf::from(output_b),
            compare: CompareOptions::default(),
            text: TextOptions::default(),
        }
    }

    /// Check if both inputs are PDFs.
    pub fn is_pdf(&self) -> bool {
        is_pdf_path(&self.input_a) && is_pdf_path(&self.input_b)
    }

    /// Set both output paths.
    pub fn with_outputs(mut self, output_a: impl Into<PathBuf>, output_b: impl Into<PathBuf>) -> Self {
        self.output_a = output_a.into();
        self.output_b = output_b.into();
        self
    }

    /// Place both outputs in a directory, keeping the default file names.
    pub fn with_output_dir(self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let (name_a, name_b) = default_outputs(self.is_pdf());
        let output_a = dir.join(name_a);
        let output_b = dir.join(name_b);
        self.with_outputs(output_a, output_b)
    }

    /// Set compare options.
    pub fn with_compare_options(mut self, options: CompareOptions) -> Self {
        self.compare = options;
        self
    }

    /// Set text loading options.
    pub fn with_text_options(mut self, options: TextOptions) -> Self {
        self.text = options;
        self
    }
}
