//! Levenshtein edit distance and edit-distance substring search.
//!
//! Both work over any slice of comparable elements: characters when
//! matching headings, words when matching paragraphs and inline spans.

use mds_ir::Span;
use tracing::trace;

/// Minimum number of single-element insertions, deletions and
/// substitutions turning `x` into `y`.
///
/// Uses two rolling rows of length `y.len() + 1`.
pub fn distance<T: PartialEq>(x: &[T], y: &[T]) -> usize {
    if x.is_empty() {
        return y.len();
    }
    if y.is_empty() {
        return x.len();
    }

    let mut prev_row: Vec<usize> = (0..=y.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; y.len() + 1];

    for (i, a) in x.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b) in y.iter().enumerate() {
            let cost = usize::from(a != b);
            curr_row[j + 1] = (prev_row[j + 1] + 1) // deletion
                .min(curr_row[j] + 1) // insertion
                .min(prev_row[j] + cost); // substitution
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[y.len()]
}

/// Find the range of `haystack` closest to `needle` in edit distance.
///
/// Returns element indices `start..end`, or `None` when either input is
/// empty or the best match is ambiguous (several equally good end
/// positions, or an alignment whose start lies after its end).
pub fn search<T: PartialEq>(needle: &[T], haystack: &[T]) -> Option<Span> {
    if needle.is_empty() || haystack.is_empty() {
        return None;
    }
    let end = best_end(needle, haystack)?;

    // The end of the best match in the reversed sequences is its start.
    let rev_needle: Vec<&T> = needle.iter().rev().collect();
    let rev_haystack: Vec<&T> = haystack.iter().rev().collect();
    let start = haystack.len() - best_end(&rev_needle, &rev_haystack)?;

    if end < start {
        trace!(start, end, "search alignment crosses itself");
        return None;
    }
    Some(Span::new(start as u32, end as u32))
}

/// Column of the final DP row with the unique minimal distance.
///
/// The first row is all zeros so a match may begin anywhere in the
/// haystack at no cost.
fn best_end<T: PartialEq>(needle: &[T], haystack: &[T]) -> Option<usize> {
    let mut prev_row: Vec<usize> = vec![0; haystack.len() + 1];
    let mut curr_row: Vec<usize> = vec![0; haystack.len() + 1];

    for (i, a) in needle.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b) in haystack.iter().enumerate() {
            let cost = usize::from(a != b);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let min = *prev_row.iter().min()?;
    let mut hits = prev_row
        .iter()
        .enumerate()
        .filter(|(_, score)| **score == min)
        .map(|(column, _)| column);
    let column = hits.next()?;
    if hits.next().is_some() {
        trace!(min, "ambiguous search");
        return None;
    }
    Some(column)
}
