//! Resolution of mark requests to regions and their application.

use super::{MarkingSink, TextLocator};
use crate::error::Result;
use crate::model::{DocumentId, MarkAction, MarkRequest};
use crate::pipeline::DiffStats;

/// Apply a document's mark actions in order and collect statistics.
///
/// Each span request marks *every* occurrence of its text on the page, not
/// only the one the diff referred to; text that cannot be found is skipped
/// with a warning. Whole-page actions go straight to the sink.
pub fn apply_actions<D>(doc: &mut D, id: DocumentId, actions: &[MarkAction]) -> Result<DiffStats>
where
    D: TextLocator + MarkingSink + ?Sized,
{
    let mut stats = DiffStats::new();
    for action in actions {
        apply_action(doc, id, action, &mut stats)?;
    }
    Ok(stats)
}

pub(crate) fn apply_action<D>(
    doc: &mut D,
    id: DocumentId,
    action: &MarkAction,
    stats: &mut DiffStats,
) -> Result<()>
where
    D: TextLocator + MarkingSink + ?Sized,
{
    match action {
        MarkAction::WholePage(page) => {
            doc.mark_whole_page(*page)?;
            stats.add_whole_page();
        }
        MarkAction::Span(request) => {
            let regions = resolve(doc, id, request)?;
            stats.add_request(request.kind, regions);
        }
    }
    Ok(())
}

fn resolve<D>(doc: &mut D, id: DocumentId, request: &MarkRequest) -> Result<usize>
where
    D: TextLocator + MarkingSink + ?Sized,
{
    let regions = doc.locate(request.page, &request.span)?;
    if regions.is_empty() {
        log::warn!(
            "Document {} page {}: {:?} not found, mark skipped",
            id,
            request.page,
            request.span
        );
        return Ok(0);
    }

    if regions.len() > 1 {
        log::debug!(
            "Document {} page {}: {:?} occurs {} times, marking all",
            id,
            request.page,
            request.span,
            regions.len()
        );
    }

    for region in &regions {
        doc.mark(request.page, *region, request.kind)?;
    }
    Ok(regions.len())
}
