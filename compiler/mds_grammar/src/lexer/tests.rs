#![allow(clippy::unwrap_used, reason = "tests panic on unexpected errors")]

use super::*;
use pretty_assertions::assert_eq;

fn kinds(text: &str) -> Vec<TokenKind> {
    lex(text).unwrap().into_iter().map(|t| t.kind).collect()
}

fn word(text: &str) -> TokenKind {
    TokenKind::Word(text.to_string())
}

fn ws(text: &str) -> TokenKind {
    TokenKind::Whitespace(text.to_string())
}

#[test]
fn test_simple_rule() {
    assert_eq!(
        kinds("a: 'x' b;"),
        vec![
            word("a"),
            TokenKind::Colon,
            ws(" "),
            TokenKind::Quoted("x".to_string()),
            ws(" "),
            word("b"),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_line_ends_count_once() {
    assert_eq!(
        kinds("\r\n\n\r"),
        vec![
            TokenKind::Newline,
            TokenKind::Newline,
            TokenKind::Newline,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_spans_cover_input() {
    let text = "rule:\r\n\t| x+ // c\r\n\t;";
    let tokens = lex(text).unwrap();
    let mut expected_start = 0;
    for token in &tokens {
        assert_eq!(token.span.start, expected_start);
        expected_start = token.span.end;
    }
    assert_eq!(expected_start as usize, text.len());
}

#[test]
fn test_operators_split_words() {
    assert_eq!(
        kinds("a*b?(c)"),
        vec![
            word("a"),
            TokenKind::Star,
            word("b"),
            TokenKind::Question,
            TokenKind::LParen,
            word("c"),
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_comment_stops_word() {
    assert_eq!(
        kinds("a// note\nb"),
        vec![
            word("a"),
            TokenKind::Comment(" note".to_string()),
            TokenKind::Newline,
            word("b"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_escapes() {
    assert_eq!(
        kinds(r#"'\\\'\"'"#),
        vec![TokenKind::Quoted(r#"\'""#.to_string()), TokenKind::Eof]
    );
}

#[test]
fn test_non_ascii_terminal() {
    assert_eq!(
        kinds("'é'"),
        vec![TokenKind::Quoted("é".to_string()), TokenKind::Eof]
    );
}

#[test]
fn test_invalid_escape() {
    let err = lex(r"'\n'").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::InvalidEscape);
    assert_eq!(err.span.start, 0);
}

#[test]
fn test_multi_line_terminal() {
    assert_eq!(
        lex("'a\nb'").unwrap_err().kind,
        SyntaxErrorKind::MultiLineTerminal
    );
}

#[test]
fn test_unterminated_terminal() {
    assert_eq!(
        lex("a: 'x").unwrap_err().kind,
        SyntaxErrorKind::UnterminatedTerminal
    );
}

#[test]
fn test_comment_with_block_close() {
    let err = lex("a: b; // oops *) here").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::CommentClosesBlock);
    assert_eq!(err.span, Span::new(6, 21));
}
