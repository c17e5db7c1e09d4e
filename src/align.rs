//! Page alignment between the two documents.

use crate::model::{DocumentId, PageText};

/// What to do with one page position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageInstruction<'a> {
    /// Both documents have this page; diff their lines
    DiffPage {
        /// Page index (0-based)
        index: usize,
        /// Page of document A
        a: &'a PageText,
        /// Page of document B
        b: &'a PageText,
    },

    /// Only the longer document has this page; mark it whole
    MarkWholePage {
        /// Document owning the trailing page
        target: DocumentId,
        /// Page index (0-based)
        index: usize,
    },
}

impl PageInstruction<'_> {
    /// Page index this instruction covers.
    pub fn index(&self) -> usize {
        match self {
            PageInstruction::DiffPage { index, .. } => *index,
            PageInstruction::MarkWholePage { index, .. } => *index,
        }
    }
}

/// Pair up pages by index.
///
/// Returns one instruction per position up to the longer document's page
/// count. Different page counts are a normal case: the surplus pages of the
/// longer document become [`PageInstruction::MarkWholePage`].
pub fn align_pages<'a>(pages_a: &'a [PageText], pages_b: &'a [PageText]) -> Vec<PageInstruction<'a>> {
    let total = pages_a.len().max(pages_b.len());

    (0..total)
        .map(|index| match (pages_a.get(index), pages_b.get(index)) {
            (Some(a), Some(b)) => PageInstruction::DiffPage { index, a, b },
            (Some(_), None) => PageInstruction::MarkWholePage {
                target: DocumentId::A,
                index,
            },
            (None, _) => PageInstruction::MarkWholePage {
                target: DocumentId::B,
                index,
            },
        })
        .collect()
}
