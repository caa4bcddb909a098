use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_line_lookup() {
    let index = LineIndex::new("ab\r\ncd\ne\rf");
    assert_eq!(index.line(0), 1);
    assert_eq!(index.line(1), 1);
    assert_eq!(index.line(3), 1);
    assert_eq!(index.line(4), 2);
    assert_eq!(index.line(7), 3);
    assert_eq!(index.line(9), 4);
    assert_eq!(index.line(10), 4);
}

#[test]
fn test_line_col() {
    let text = "first\n  second";
    let index = LineIndex::new(text);
    assert_eq!(index.line_col(text, 0), (1, 1));
    assert_eq!(index.line_col(text, 4), (1, 5));
    assert_eq!(index.line_col(text, 8), (2, 3));
    assert_eq!(index.line_col(text, 14), (2, 9));
}

#[test]
fn test_line_col_counts_characters() {
    let text = "\u{e9}t\u{e9} x";
    let index = LineIndex::new(text);
    // 'x' is at byte 6, character 4.
    assert_eq!(index.line_col(text, 6), (1, 5));
}

#[test]
fn test_empty_text() {
    let index = LineIndex::new("");
    assert_eq!(index.line(0), 1);
    assert_eq!(index.line_col("", 0), (1, 1));
}

#[test]
fn test_cache_keeps_first_index() {
    let first = line_index("line_index_tests/cache.md", "a\nb\n");
    let second = line_index("line_index_tests/cache.md", "different");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.line(2), 2);
}
