//! Line-level diff of one aligned page pair.

use super::lcs::{opcodes, Opcode};
use super::tokenize::is_blank;
use super::word::{diff_words, similarity};
use crate::model::{DocumentId, MarkRequest};
use crate::options::Granularity;

/// Compare the lines of two aligned pages and return the mark requests.
///
/// Lines only in A or only in B are requested whole. Lines replaced at the
/// same aligned position are paired with their most similar counterpart and
/// refined word by word when `granularity` is [`Granularity::Word`];
/// replaced lines without a partner on the other side are requested whole.
pub fn diff_lines<S: AsRef<str>>(
    page: usize,
    lines_a: &[S],
    lines_b: &[S],
    granularity: Granularity,
) -> Vec<MarkRequest> {
    let a: Vec<&str> = lines_a.iter().map(|line| line.as_ref()).collect();
    let b: Vec<&str> = lines_b.iter().map(|line| line.as_ref()).collect();

    let mut requests = Vec::new();
    for op in opcodes(&a, &b) {
        match op {
            Opcode::Equal { .. } => {}
            Opcode::Delete { a: range } => {
                push_lines(&mut requests, DocumentId::A, page, &a[range]);
            }
            Opcode::Insert { b: range } => {
                push_lines(&mut requests, DocumentId::B, page, &b[range]);
            }
            Opcode::Replace { a: ra, b: rb } => match granularity {
                Granularity::Line => {
                    push_lines(&mut requests, DocumentId::A, page, &a[ra]);
                    push_lines(&mut requests, DocumentId::B, page, &b[rb]);
                }
                Granularity::Word => {
                    refine_replace(&mut requests, page, &a[ra], &b[rb]);
                }
            },
        }
    }
    requests
}

/// Lines of a replace block sharing less than this share of words are not
/// treated as edits of each other.
const PAIRING_CUTOFF: f32 = 0.5;

/// Refine a replace block to word marks where lines pair up.
///
/// A single line replaced by a single line is always a modification. In a
/// larger block the most similar pair is refined first and the lines on
/// either side of it are paired recursively; lines without a partner above
/// [`PAIRING_CUTOFF`] are requested whole.
fn refine_replace(requests: &mut Vec<MarkRequest>, page: usize, removed: &[&str], added: &[&str]) {
    if let ([line_a], [line_b]) = (removed, added) {
        requests.extend(diff_words(page, line_a, line_b));
        return;
    }

    log::debug!(
        "Page {}: replace block of {} vs {} lines, pairing by similarity",
        page,
        removed.len(),
        added.len()
    );
    pair_similar(requests, page, removed, added);
}

fn pair_similar(requests: &mut Vec<MarkRequest>, page: usize, removed: &[&str], added: &[&str]) {
    let mut best: Option<(usize, usize, f32)> = None;
    for (i, line_a) in removed.iter().enumerate() {
        for (j, line_b) in added.iter().enumerate() {
            let ratio = similarity(line_a, line_b);
            if ratio >= PAIRING_CUTOFF && best.map_or(true, |(_, _, top)| ratio > top) {
                best = Some((i, j, ratio));
            }
        }
    }

    let Some((i, j, _)) = best else {
        push_lines(requests, DocumentId::A, page, removed);
        push_lines(requests, DocumentId::B, page, added);
        return;
    };

    pair_similar(requests, page, &removed[..i], &added[..j]);
    requests.extend(diff_words(page, removed[i], added[j]));
    pair_similar(requests, page, &removed[i + 1..], &added[j + 1..]);
}

fn push_lines(requests: &mut Vec<MarkRequest>, target: DocumentId, page: usize, lines: &[&str]) {
    requests.extend(
        lines
            .iter()
            .filter(|line| !is_blank(line))
            .map(|line| MarkRequest::whole_line(target, page, *line)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MarkKind;

    #[test]
    fn test_identical_pages() {
        let lines = vec!["Title", "", "Body text here", "Footer"];
        assert!(diff_lines(0, &lines, &lines, Granularity::Word).is_empty());
    }

    #[test]
    fn test_pure_deletion() {
        let a = vec!["one", "two", "three"];
        let b = vec!["one", "three"];
        let requests = diff_lines(1, &a, &b, Granularity::Word);
        assert_eq!(
            requests,
            vec![MarkRequest::whole_line(DocumentId::A, 1, "two")]
        );
    }

    #[test]
    fn test_pure_insertion() {
        let a = vec!["one", "three"];
        let b = vec!["one", "two", "three", "four"];
        let requests = diff_lines(0, &a, &b, Granularity::Word);
        assert_eq!(
            requests,
            vec![
                MarkRequest::whole_line(DocumentId::B, 0, "two"),
                MarkRequest::whole_line(DocumentId::B, 0, "four"),
            ]
        );
    }

    #[test]
    fn test_modified_line_escalates_to_words() {
        let a = vec!["Header", "The cat sat", "Footer"];
        let b = vec!["Header", "The dog sat", "Footer"];
        let requests = diff_lines(0, &a, &b, Granularity::Word);
        assert_eq!(
            requests,
            vec![
                MarkRequest::word(DocumentId::A, 0, "cat"),
                MarkRequest::word(DocumentId::B, 0, "dog"),
            ]
        );
    }

    #[test]
    fn test_line_granularity_marks_whole_lines() {
        let a = vec!["The cat sat"];
        let b = vec!["The dog sat"];
        let requests = diff_lines(0, &a, &b, Granularity::Line);
        assert_eq!(
            requests,
            vec![
                MarkRequest::whole_line(DocumentId::A, 0, "The cat sat"),
                MarkRequest::whole_line(DocumentId::B, 0, "The dog sat"),
            ]
        );
    }

    #[test]
    fn test_unequal_replace_pairs_similar_lines() {
        let a = vec!["intro", "alpha beta", "end"];
        let b = vec!["intro", "alpha gamma", "brand new line", "end"];
        let requests = diff_lines(0, &a, &b, Granularity::Word);
        assert_eq!(
            requests,
            vec![
                MarkRequest::word(DocumentId::A, 0, "beta"),
                MarkRequest::word(DocumentId::B, 0, "gamma"),
                MarkRequest::whole_line(DocumentId::B, 0, "brand new line"),
            ]
        );
    }

    #[test]
    fn test_added_line_above_modified_line() {
        let a = vec!["new intro line", "The cat sat"];
        let b = vec!["The dog sat"];
        let requests = diff_lines(0, &a, &b, Granularity::Word);
        assert_eq!(
            requests,
            vec![
                MarkRequest::whole_line(DocumentId::A, 0, "new intro line"),
                MarkRequest::word(DocumentId::A, 0, "cat"),
                MarkRequest::word(DocumentId::B, 0, "dog"),
            ]
        );
    }

    #[test]
    fn test_inserted_line_below_modified_line() {
        let a = vec!["The cat sat"];
        let b = vec!["The dog sat", "on the mat"];
        let requests = diff_lines(0, &a, &b, Granularity::Word);
        assert_eq!(
            requests,
            vec![
                MarkRequest::word(DocumentId::A, 0, "cat"),
                MarkRequest::word(DocumentId::B, 0, "dog"),
                MarkRequest::whole_line(DocumentId::B, 0, "on the mat"),
            ]
        );
    }

    #[test]
    fn test_whitespace_change_next_to_deleted_line() {
        let a = vec!["x", "a  b"];
        let b = vec!["a b"];
        let requests = diff_lines(0, &a, &b, Granularity::Word);
        assert_eq!(requests, vec![MarkRequest::whole_line(DocumentId::A, 0, "x")]);
    }

    #[test]
    fn test_unrelated_replace_block_is_marked_whole() {
        let a = vec!["first old", "second old"];
        let b = vec!["completely", "different", "text"];
        let requests = diff_lines(0, &a, &b, Granularity::Word);
        assert_eq!(requests.len(), 5);
        assert!(requests.iter().all(|r| r.kind == MarkKind::WholeLine));
    }

    #[test]
    fn test_single_line_replace_always_escalates() {
        let requests = diff_lines(0, &["foo"], &["bar"], Granularity::Word);
        assert_eq!(
            requests,
            vec![
                MarkRequest::word(DocumentId::A, 0, "foo"),
                MarkRequest::word(DocumentId::B, 0, "bar"),
            ]
        );
    }

    #[test]
    fn test_blank_lines_are_not_marked() {
        let a = vec!["text", "   "];
        let b = vec!["text"];
        assert!(diff_lines(0, &a, &b, Granularity::Word).is_empty());
    }

    #[test]
    fn test_whitespace_only_change() {
        let a = vec!["a  b"];
        let b = vec!["a b"];
        assert!(diff_lines(0, &a, &b, Granularity::Word).is_empty());
    }

    #[test]
    fn test_owned_lines() {
        let a = vec!["x".to_string()];
        let b: Vec<String> = Vec::new();
        let requests = diff_lines(2, &a, &b, Granularity::Word);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].kind, MarkKind::WholeLine);
        assert_eq!(requests[0].page, 2);
    }
}
