//! Word-level refinement of a modified line pair.

use super::lcs::{opcodes, Opcode};
use super::tokenize::{is_blank, split_words};
use crate::model::{DocumentId, MarkRequest};

/// Compare two lines word by word and request a mark for every changed word.
///
/// Words kept in both lines produce nothing. Blank words never produce a
/// request.
pub fn diff_words(page: usize, line_a: &str, line_b: &str) -> Vec<MarkRequest> {
    let words_a = split_words(line_a);
    let words_b = split_words(line_b);

    let mut requests = Vec::new();
    for op in opcodes(&words_a, &words_b) {
        match op {
            Opcode::Equal { .. } => {}
            Opcode::Delete { a } => {
                push_words(&mut requests, DocumentId::A, page, &words_a[a]);
            }
            Opcode::Insert { b } => {
                push_words(&mut requests, DocumentId::B, page, &words_b[b]);
            }
            Opcode::Replace { a, b } => {
                push_words(&mut requests, DocumentId::A, page, &words_a[a]);
                push_words(&mut requests, DocumentId::B, page, &words_b[b]);
            }
        }
    }
    requests
}

/// Share of words two lines have in common, from `0.0` to `1.0`.
///
/// Twice the number of matched words over the total word count of both
/// lines. Two lines without words are identical.
pub fn similarity(line_a: &str, line_b: &str) -> f32 {
    let words_a = split_words(line_a);
    let words_b = split_words(line_b);

    let total = words_a.len() + words_b.len();
    if total == 0 {
        return 1.0;
    }

    let common: usize = opcodes(&words_a, &words_b)
        .iter()
        .map(|op| match op {
            Opcode::Equal { a, .. } => a.len(),
            _ => 0,
        })
        .sum();
    2.0 * common as f32 / total as f32
}

fn push_words(requests: &mut Vec<MarkRequest>, target: DocumentId, page: usize, words: &[&str]) {
    requests.extend(
        words
            .iter()
            .filter(|word| !is_blank(word))
            .map(|word| MarkRequest::word(target, page, *word)),
    );
}
