//! Property-based tests for the Levenshtein engine and tokenizer.
//!
//! 1. Metric laws: identity, symmetry, bounded by the longer input
//! 2. Search exactness: a unique verbatim occurrence is found exactly
//! 3. Tokenizer coverage: raw lines and words stay inside the buffer

use mds_fuzzy::{distance, find_span, raw_lines, search, words, LocatorConfig};
use mds_ir::Span;
use proptest::prelude::*;

fn word_seq(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(vec!["a", "b", "c"]), 0..max)
        .prop_map(|words| words.into_iter().map(String::from).collect())
}

fn char_seq() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::char::range('a', 'e'), 0..24)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn distance_to_self_is_zero(x in char_seq()) {
        prop_assert_eq!(distance(&x, &x), 0);
    }

    #[test]
    fn distance_is_symmetric(x in char_seq(), y in char_seq()) {
        prop_assert_eq!(distance(&x, &y), distance(&y, &x));
    }

    #[test]
    fn distance_bounded_by_longer(x in char_seq(), y in char_seq()) {
        let d = distance(&x, &y);
        prop_assert!(d <= x.len().max(y.len()));
        prop_assert!(d >= x.len().abs_diff(y.len()));
    }

    #[test]
    fn distance_triangle_inequality(x in char_seq(), y in char_seq(), z in char_seq()) {
        prop_assert!(distance(&x, &z) <= distance(&x, &y) + distance(&y, &z));
    }

    /// The marker word "z" appears once, so the occurrence is unique.
    #[test]
    fn unique_occurrence_found_exactly(
        prefix in word_seq(10),
        needle_head in word_seq(4),
        needle_tail in word_seq(4),
        suffix in word_seq(10),
    ) {
        let mut needle = needle_head;
        needle.push("z".to_string());
        needle.extend(needle_tail);

        let mut haystack = prefix.clone();
        haystack.extend(needle.iter().cloned());
        haystack.extend(suffix);

        let start = prefix.len() as u32;
        let expected = Span::new(start, start + needle.len() as u32);
        prop_assert_eq!(search(&needle, &haystack), Some(expected));
    }

    #[test]
    fn raw_lines_tile_the_buffer(text in "[ab\r\n]{0,40}") {
        let mut cursor = 0;
        for line in raw_lines(&text) {
            prop_assert_eq!(line.span.start, cursor);
            prop_assert_eq!(&text[line.span.to_range()], line.line);
            prop_assert!(!line.line.contains(['\r', '\n']));
            cursor = line.end_with_terminator();
        }
        prop_assert_eq!(cursor as usize, text.len());
    }

    #[test]
    fn words_point_into_text(text in "[a-c' .,\n]{0,40}") {
        for word in words(&text) {
            prop_assert_eq!(&text[word.span.to_range()], word.word);
        }
    }
}

#[test]
fn span_lookup_over_prose() {
    let text = "The parser reads a grammar. It then writes the grammar back out.";
    let found = find_span(text, &["writes", "the", "grammar"], &LocatorConfig::default());
    assert_eq!(found.map(|span| &text[span.to_range()]), Some("writes the grammar "));
}
