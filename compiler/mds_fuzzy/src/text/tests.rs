use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_words_keep_apostrophe() {
    let found = words("it's a test");
    let pairs: Vec<_> = found.iter().map(|w| (w.word, w.span)).collect();
    assert_eq!(
        pairs,
        vec![
            ("it's", Span::new(0, 4)),
            ("a", Span::new(5, 6)),
            ("test", Span::new(7, 11)),
        ]
    );
}

#[test]
fn test_words_skip_punctuation() {
    assert_eq!(word_list("A: 'x' B;"), vec!["A", "'x'", "B"]);
    assert_eq!(word_list("foo_bar-baz"), vec!["foo", "bar", "baz"]);
    assert_eq!(word_list("caf\u{e9} ok"), vec!["caf", "ok"]);
    assert!(words("").is_empty());
}

#[test]
fn test_raw_lines_terminators() {
    let lines = raw_lines("a\r\nb\nc\rd");
    let pairs: Vec<_> = lines.iter().map(|l| (l.line, l.span, l.terminator_len)).collect();
    assert_eq!(
        pairs,
        vec![
            ("a", Span::new(0, 1), 2),
            ("b", Span::new(3, 4), 1),
            ("c", Span::new(5, 6), 1),
            ("d", Span::new(7, 8), 0),
        ]
    );
}

#[test]
fn test_raw_lines_blank_and_trailing() {
    let lines = raw_lines("a\n\nb\n");
    let contents: Vec<_> = lines.iter().map(|l| l.line).collect();
    assert_eq!(contents, vec!["a", "", "b"]);
    assert_eq!(lines[1].span, Span::new(2, 2));
    assert!(raw_lines("").is_empty());
}

#[test]
fn test_fence_in_indented_list_item() {
    let text = "- item\n\n    ```antlr\n    A: 'x';\n    ```\nafter\n";
    let units = lines_and_code_fences(text);
    assert_eq!(units.len(), 4);
    assert_eq!(
        units[2],
        LineOrFence::Fence {
            language: "antlr",
            code: "A: 'x';\r\n".to_string(),
            span: Span::new(8, 41),
        }
    );
    assert!(matches!(units[3], LineOrFence::Line(LineSpan { line: "after", .. })));
}

#[test]
fn test_fence_close_rules() {
    // A shorter run does not close; a longer run of the same character does.
    let text = "````\n```\n~~~~\n`````  \nx";
    let units = lines_and_code_fences(text);
    assert_eq!(units.len(), 2);
    let LineOrFence::Fence { code, language, .. } = &units[0] else {
        panic!("expected fence, got {:?}", units[0]);
    };
    assert_eq!(code, "```\r\n~~~~\r\n");
    assert_eq!(*language, "");
}

#[test]
fn test_unterminated_fence_runs_to_end() {
    let text = "~~~ txt\nline\n";
    let units = lines_and_code_fences(text);
    assert_eq!(
        units,
        vec![LineOrFence::Fence {
            language: "txt",
            code: "line\r\n".to_string(),
            span: Span::new(0, 13),
        }]
    );
}

#[test]
fn test_two_backticks_is_not_a_fence() {
    let units = lines_and_code_fences("``x``\n");
    assert!(matches!(units[0], LineOrFence::Line(_)));
}

#[test]
fn test_paragraphs_grouping() {
    let text = "# Title\n\nSome words here.\n";
    let found = paragraphs(text);
    assert_eq!(
        found,
        vec![
            TextSpan {
                text: "# Title\r\n".to_string(),
                span: Span::new(0, 8),
            },
            TextSpan {
                text: "Some words here.\r\n".to_string(),
                span: Span::new(9, 26),
            },
        ]
    );
    assert_eq!(&text[found[1].span.to_range()], "Some words here.\n");
}

#[test]
fn test_paragraphs_multi_line_and_fence() {
    let text = "one\ntwo\n   \n```\ncode\n```\nthree";
    let found = paragraphs(text);
    let texts: Vec<_> = found.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, vec!["one\r\ntwo\r\n", "code\r\n", "three\r\n"]);
    assert_eq!(found[0].span, Span::new(0, 8));
    assert_eq!(found[2].span, Span::new(25, 30));
}

#[test]
fn test_sections() {
    let text = "intro\n# One\nbody\n## Two  \nmore\n";
    let found = sections(text);
    assert_eq!(
        found,
        vec![
            SectionSpan {
                hashes: "#",
                title: "One",
                span: Span::new(6, 17),
            },
            SectionSpan {
                hashes: "##",
                title: "Two",
                span: Span::new(17, 31),
            },
        ]
    );
    assert_eq!(found[1].level(), 2);
}
