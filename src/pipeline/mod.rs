//! Comparison pipeline: extraction, page alignment, diffing and marking.
//!
//! ```no_run
//! use pagediff::pipeline::Comparator;
//! use pagediff::text::TextDocument;
//! use pagediff::annotate::Persist;
//! use pagediff::CompareOptions;
//! use std::path::Path;
//!
//! fn main() -> pagediff::Result<()> {
//!     let mut a = TextDocument::open("before.txt")?;
//!     let mut b = TextDocument::open("after.txt")?;
//!
//!     let report = Comparator::new(CompareOptions::default()).compare(&mut a, &mut b)?;
//!     println!("{} regions marked", report.total().regions_marked);
//!
//!     a.save(Path::new("before.json"))?;
//!     b.save(Path::new("after.json"))?;
//!     Ok(())
//! }
//! ```

mod stats;

pub use stats::{CompareReport, DiffStats};

use crate::align::{align_pages, PageInstruction};
use crate::annotate::{apply_action, apply_actions, ComparableDocument};
use crate::diff::diff_lines;
use crate::error::Result;
use crate::model::{DocumentId, MarkAction, PageText};
use crate::options::{CompareOptions, Granularity};

/// Mark actions for both documents, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkPlan {
    /// Actions for document A
    pub a: Vec<MarkAction>,

    /// Actions for document B
    pub b: Vec<MarkAction>,

    /// Pages present in both documents
    pub pages_diffed: usize,
}

impl MarkPlan {
    /// Get the actions of one document.
    pub fn actions(&self, id: DocumentId) -> &[MarkAction] {
        match id {
            DocumentId::A => &self.a,
            DocumentId::B => &self.b,
        }
    }

    /// Check if nothing needs marking.
    pub fn is_empty(&self) -> bool {
        self.a.is_empty() && self.b.is_empty()
    }

    fn push(&mut self, id: DocumentId, action: MarkAction) {
        match id {
            DocumentId::A => self.a.push(action),
            DocumentId::B => self.b.push(action),
        }
    }
}

/// Compute the mark actions one page instruction produces.
pub fn plan_page(instruction: &PageInstruction<'_>, granularity: Granularity) -> MarkPlan {
    let mut plan = MarkPlan::default();
    match instruction {
        PageInstruction::DiffPage { index, a, b } => {
            log::debug!(
                "Page {}: diffing {} vs {} lines",
                index,
                a.line_count(),
                b.line_count()
            );
            for request in diff_lines(*index, &a.lines, &b.lines, granularity) {
                plan.push(request.target, MarkAction::Span(request));
            }
            plan.pages_diffed = 1;
        }
        PageInstruction::MarkWholePage { target, index } => {
            log::debug!("Page {}: only in document {}, marking whole page", index, target);
            plan.push(*target, MarkAction::WholePage(*index));
        }
    }
    plan
}

/// Drives a comparison between two documents.
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    options: CompareOptions,
}

impl Comparator {
    /// Create a comparator.
    pub fn new(options: CompareOptions) -> Self {
        Self { options }
    }

    /// Get the options.
    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// Compute every mark action for two extracted documents without
    /// touching either document.
    pub fn plan(&self, pages_a: &[PageText], pages_b: &[PageText]) -> MarkPlan {
        let mut plan = MarkPlan::default();
        for instruction in align_pages(pages_a, pages_b) {
            let page = plan_page(&instruction, self.options.granularity);
            plan.a.extend(page.a);
            plan.b.extend(page.b);
            plan.pages_diffed += page.pages_diffed;
        }
        plan
    }

    /// Compare two documents and mark their differences in place.
    ///
    /// Extraction or marking failures abort the comparison; text that cannot
    /// be located is skipped and counted in the report. With
    /// [`CompareOptions::parallel`] the two documents are marked concurrently.
    pub fn compare<A, B>(&self, a: &mut A, b: &mut B) -> Result<CompareReport>
    where
        A: ComparableDocument + Send + ?Sized,
        B: ComparableDocument + Send + ?Sized,
    {
        if !self.options.parallel {
            return self.compare_sequential(a, b);
        }

        let (pages_a, pages_b) = extract_both(a, b)?;
        let plan = self.plan(&pages_a, &pages_b);
        let (stats_a, stats_b) = rayon::join(
            || apply_actions(a, DocumentId::A, &plan.a),
            || apply_actions(b, DocumentId::B, &plan.b),
        );

        Ok(finish(&pages_a, &pages_b, stats_a?, stats_b?))
    }

    /// Compare two documents on the current thread, page by page.
    ///
    /// Produces the same marks and report as [`Comparator::compare`] and
    /// accepts documents that cannot be sent across threads.
    pub fn compare_sequential<A, B>(&self, a: &mut A, b: &mut B) -> Result<CompareReport>
    where
        A: ComparableDocument + ?Sized,
        B: ComparableDocument + ?Sized,
    {
        let (pages_a, pages_b) = extract_both(a, b)?;
        let (stats_a, stats_b) = self.apply_sequential(a, b, &pages_a, &pages_b)?;
        Ok(finish(&pages_a, &pages_b, stats_a, stats_b))
    }

    /// Process page by page, marking A then B before moving on.
    fn apply_sequential<A, B>(
        &self,
        a: &mut A,
        b: &mut B,
        pages_a: &[PageText],
        pages_b: &[PageText],
    ) -> Result<(DiffStats, DiffStats)>
    where
        A: ComparableDocument + ?Sized,
        B: ComparableDocument + ?Sized,
    {
        let mut stats_a = DiffStats::new();
        let mut stats_b = DiffStats::new();

        for instruction in align_pages(pages_a, pages_b) {
            let plan = plan_page(&instruction, self.options.granularity);
            for action in &plan.a {
                apply_action(a, DocumentId::A, action, &mut stats_a)?;
            }
            for action in &plan.b {
                apply_action(b, DocumentId::B, action, &mut stats_b)?;
            }
        }

        Ok((stats_a, stats_b))
    }
}

fn extract_both<A, B>(a: &A, b: &B) -> Result<(Vec<PageText>, Vec<PageText>)>
where
    A: ComparableDocument + ?Sized,
    B: ComparableDocument + ?Sized,
{
    let pages_a = a.extract_pages()?;
    let pages_b = b.extract_pages()?;

    if pages_a.len() != pages_b.len() {
        log::info!(
            "Page counts differ ({} vs {}), trailing pages will be marked whole",
            pages_a.len(),
            pages_b.len()
        );
    }
    Ok((pages_a, pages_b))
}

fn finish(
    pages_a: &[PageText],
    pages_b: &[PageText],
    mut stats_a: DiffStats,
    mut stats_b: DiffStats,
) -> CompareReport {
    let pages_diffed = pages_a.len().min(pages_b.len()) as u32;
    stats_a.pages_diffed = pages_diffed;
    stats_b.pages_diffed = pages_diffed;

    let report = CompareReport {
        page_count_a: pages_a.len() as u32,
        page_count_b: pages_b.len() as u32,
        a: stats_a,
        b: stats_b,
    };

    let total = report.total();
    log::info!(
        "Compared {} pages: {} line and {} word requests, {} regions marked, {} unlocated, {} whole pages",
        pages_diffed,
        total.line_requests,
        total.word_requests,
        total.regions_marked,
        total.unlocated_spans,
        total.whole_pages_marked
    );

    report
}
