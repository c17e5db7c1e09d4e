//! Comparison report with per-document statistics.

use crate::model::{DocumentId, MarkKind};
use serde::{Deserialize, Serialize};

/// Statistics collected while marking one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Pages diffed against the other document
    pub pages_diffed: u32,

    /// Trailing pages marked whole
    pub whole_pages_marked: u32,

    /// Whole-line mark requests
    pub line_requests: u32,

    /// Word mark requests
    pub word_requests: u32,

    /// Regions marked for line and word requests
    pub regions_marked: u32,

    /// Requests whose text was not found on the page
    pub unlocated_spans: u32,
}

impl DiffStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment whole-page mark count.
    pub fn add_whole_page(&mut self) {
        self.whole_pages_marked += 1;
    }

    /// Record a span request and how many regions it resolved to.
    pub fn add_request(&mut self, kind: MarkKind, regions: usize) {
        match kind {
            MarkKind::WholeLine => self.line_requests += 1,
            MarkKind::Word => self.word_requests += 1,
            MarkKind::WholePage => {}
        }

        if regions == 0 {
            self.unlocated_spans += 1;
        } else {
            self.regions_marked += regions as u32;
        }
    }

    /// Total span requests (line and word).
    pub fn requests(&self) -> u32 {
        self.line_requests + self.word_requests
    }

    /// Check if nothing was marked or requested.
    pub fn is_clean(&self) -> bool {
        self.requests() == 0 && self.whole_pages_marked == 0
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &DiffStats) {
        self.pages_diffed += other.pages_diffed;
        self.whole_pages_marked += other.whole_pages_marked;
        self.line_requests += other.line_requests;
        self.word_requests += other.word_requests;
        self.regions_marked += other.regions_marked;
        self.unlocated_spans += other.unlocated_spans;
    }
}

/// Outcome of comparing two documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareReport {
    /// Pages in document A
    pub page_count_a: u32,

    /// Pages in document B
    pub page_count_b: u32,

    /// Statistics for document A
    pub a: DiffStats,

    /// Statistics for document B
    pub b: DiffStats,
}

impl CompareReport {
    /// Get the statistics of one document.
    pub fn stats(&self, id: DocumentId) -> &DiffStats {
        match id {
            DocumentId::A => &self.a,
            DocumentId::B => &self.b,
        }
    }

    /// Statistics of both documents combined.
    pub fn total(&self) -> DiffStats {
        let mut total = self.a.clone();
        total.merge(&self.b);
        total
    }

    /// Check if the documents have different page counts.
    pub fn has_page_count_mismatch(&self) -> bool {
        self.page_count_a != self.page_count_b
    }

    /// Check if no difference was found.
    pub fn is_identical(&self) -> bool {
        self.a.is_clean() && self.b.is_clean()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_request() {
        let mut stats = DiffStats::new();
        stats.add_request(MarkKind::Word, 4);
        stats.add_request(MarkKind::WholeLine, 0);

        assert_eq!(stats.word_requests, 1);
        assert_eq!(stats.line_requests, 1);
        assert_eq!(stats.regions_marked, 4);
        assert_eq!(stats.unlocated_spans, 1);
        assert_eq!(stats.requests(), 2);
    }

    #[test]
    fn test_diff_stats_merge() {
        let mut stats1 = DiffStats::new();
        stats1.word_requests = 5;
        stats1.regions_marked = 2;

        let stats2 = DiffStats {
            word_requests: 3,
            regions_marked: 1,
            whole_pages_marked: 4,
            ..Default::default()
        };

        stats1.merge(&stats2);

        assert_eq!(stats1.word_requests, 8);
        assert_eq!(stats1.regions_marked, 3);
        assert_eq!(stats1.whole_pages_marked, 4);
    }

    #[test]
    fn test_report_identical() {
        let mut report = CompareReport {
            page_count_a: 2,
            page_count_b: 2,
            ..Default::default()
        };
        report.a.pages_diffed = 2;
        report.b.pages_diffed = 2;
        assert!(report.is_identical());
        assert!(!report.has_page_count_mismatch());

        report.b.add_whole_page();
        assert!(!report.is_identical());
        assert_eq!(report.total().whole_pages_marked, 1);
        assert_eq!(report.stats(DocumentId::B).whole_pages_marked, 1);
    }
}
