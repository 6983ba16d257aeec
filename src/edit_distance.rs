//! Levenshtein distance checks used as the word-ladder edge test.
//!
//! All comparisons operate on `char`s, so multi-byte letters count as a
//! single edit.

use std::mem;

/// Full Levenshtein distance between `a` and `b` (unit-cost insert, delete, substitute).
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut cur = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        cur[0] = i;
        for j in 1..=b.len() {
            let substitution = prev[j - 1] + usize::from(a[i - 1] != b[j - 1]);
            cur[j] = (prev[j] + 1).min(cur[j - 1] + 1).min(substitution);
        }
        mem::swap(&mut prev, &mut cur);
    }

    prev[b.len()]
}

/// Whether the edit distance between `a` and `b` is at most `d`.
///
/// Fills the DP table row by row and stops as soon as a whole row exceeds
/// `d`: every alignment passes through each row and costs never decrease
/// along it, so the final cell cannot come back under the bound.
pub fn edit_distance_within(a: &str, b: &str, d: usize) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len().abs_diff(b.len()) > d {
        return false;
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut cur = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        cur[0] = i;
        let mut row_min = i;
        for j in 1..=b.len() {
            let substitution = prev[j - 1] + usize::from(a[i - 1] != b[j - 1]);
            cur[j] = (prev[j] + 1).min(cur[j - 1] + 1).min(substitution);
            row_min = row_min.min(cur[j]);
        }
        if row_min > d {
            return false;
        }
        mem::swap(&mut prev, &mut cur);
    }

    prev[b.len()] <= d
}

/// Linear-time `edit_distance_within(a, b, 1)`.
///
/// Equal lengths allow one mismatched position. Lengths differing by one
/// allow skipping a single character of the longer word.
pub fn is_adjacent(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    match a.len().abs_diff(b.len()) {
        0 => a.iter().zip(&b).filter(|(x, y)| x != y).count() <= 1,
        1 => {
            let (longer, shorter) = if a.len() > b.len() { (&a, &b) } else { (&b, &a) };
            let (mut i, mut j) = (0, 0);
            let mut skipped = false;
            while i < longer.len() && j < shorter.len() {
                if longer[i] == shorter[j] {
                    j += 1;
                } else if skipped {
                    return false;
                } else {
                    skipped = true;
                }
                i += 1;
            }
            // Anything left over is the single trailing character of `longer`.
            true
        }
        _ => false,
    }
}
