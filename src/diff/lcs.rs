//! Longest-common-subsequence alignment producing grouped opcodes.

use std::ops::Range;

/// A grouped edit step transforming sequence `a` into sequence `b`.
///
/// Ranges index into the input slices. Consecutive opcodes tile both
/// sequences from start to end without gaps or overlaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Opcode {
    /// `a[a]` and `b[b]` are identical
    Equal { a: Range<usize>, b: Range<usize> },
    /// `a[a]` exists only in the first sequence
    Delete { a: Range<usize> },
    /// `b[b]` exists only in the second sequence
    Insert { b: Range<usize> },
    /// `a[a]` was replaced by `b[b]` at the same aligned position
    Replace { a: Range<usize>, b: Range<usize> },
}

/// Align two token sequences and return the grouped edit script.
///
/// Minimises insertions plus deletions. Between two matched tokens, unmatched
/// tokens on both sides form a [`Opcode::Replace`]; unmatched tokens on one
/// side only form a [`Opcode::Delete`] or [`Opcode::Insert`]. The result is
/// deterministic for the same input.
pub fn opcodes<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Opcode> {
    let matches = matching_pairs(a, b);

    let mut ops = Vec::new();
    let mut a_pos = 0;
    let mut b_pos = 0;

    for (i, j) in matches {
        push_gap(&mut ops, a_pos..i, b_pos..j);
        push_equal(&mut ops, i, j);
        a_pos = i + 1;
        b_pos = j + 1;
    }
    push_gap(&mut ops, a_pos..a.len(), b_pos..b.len());

    ops
}

/// Indices of matched tokens, in increasing order on both sides.
fn matching_pairs<T: PartialEq>(a: &[T], b: &[T]) -> Vec<(usize, usize)> {
    let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    let suffix = a[prefix..]
        .iter()
        .rev()
        .zip(b[prefix..].iter().rev())
        .take_while(|(x, y)| x == y)
        .count();

    let mut pairs: Vec<(usize, usize)> = (0..prefix).map(|k| (k, k)).collect();

    let a_mid = &a[prefix..a.len() - suffix];
    let b_mid = &b[prefix..b.len() - suffix];
    pairs.extend(
        longest_common_subsequence(a_mid, b_mid)
            .into_iter()
            .map(|(i, j)| (i + prefix, j + prefix)),
    );

    let a_tail = a.len() - suffix;
    let b_tail = b.len() - suffix;
    pairs.extend((0..suffix).map(|k| (a_tail + k, b_tail + k)));

    pairs
}

fn longest_common_subsequence<T: PartialEq>(a: &[T], b: &[T]) -> Vec<(usize, usize)> {
    let n = a.len();
    let m = b.len();
    if n == 0 || m == 0 {
        return Vec::new();
    }

    // DP table
    let mut dp = vec![vec![0u32; m + 1]; n + 1];

    for i in 1..=n {
        for j in 1..=m {
            if a[i - 1] == b[j - 1] {
                dp[i][j] = dp[i - 1][j - 1] + 1;
            } else {
                dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
            }
        }
    }

    // Backtrack to find LCS
    let mut lcs = Vec::new();
    let mut i = n;
    let mut j = m;

    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            lcs.push((i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] >= dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    lcs.reverse();
    lcs
}

fn push_gap(ops: &mut Vec<Opcode>, a: Range<usize>, b: Range<usize>) {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => {}
        (false, true) => ops.push(Opcode::Delete { a }),
        (true, false) => ops.push(Opcode::Insert { b }),
        (false, false) => ops.push(Opcode::Replace { a, b }),
    }
}

fn push_equal(ops: &mut Vec<Opcode>, i: usize, j: usize) {
    if let Some(Opcode::Equal { a, b }) = ops.last_mut() {
        if a.end == i && b.end == j {
            a.end += 1;
            b.end += 1;
            return;
        }
    }
    ops.push(Opcode::Equal {
        a: i..i + 1,
        b: j..j + 1,
    });
}
