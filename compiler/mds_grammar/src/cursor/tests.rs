#![allow(clippy::unwrap_used, reason = "tests panic on unexpected errors")]

use super::*;
use crate::lexer::lex;

#[test]
fn test_advance_stops_at_eof() {
    let tokens = lex("a").unwrap();
    let mut cursor = Cursor::new(&tokens);
    assert_eq!(cursor.advance().kind, TokenKind::Word("a".to_string()));
    assert!(cursor.is_at_end());
    assert_eq!(cursor.advance().kind, TokenKind::Eof);
    assert!(cursor.is_at_end());
}

#[test]
fn test_check_ignores_payload() {
    let tokens = lex("name").unwrap();
    let cursor = Cursor::new(&tokens);
    assert!(cursor.check(&TokenKind::Word(String::new())));
    assert!(!cursor.check(&TokenKind::Colon));
    assert_eq!(cursor.current_span(), Span::new(0, 4));
}

#[test]
fn test_peek_and_skip_whitespace() {
    let tokens = lex("grammar  G;").unwrap();
    let mut cursor = Cursor::new(&tokens);
    assert_eq!(
        cursor.peek_past_blanks(),
        &TokenKind::Word("G".to_string())
    );
    cursor.advance();
    cursor.skip_whitespace();
    assert_eq!(cursor.current_kind(), &TokenKind::Word("G".to_string()));
    cursor.advance();
    assert!(cursor.eat(&TokenKind::Semicolon));
    assert!(!cursor.eat(&TokenKind::Semicolon));
    assert_eq!(cursor.peek_past_blanks(), &TokenKind::Eof);
}

#[test]
fn test_peek_skips_line_ends() {
    let tokens = lex("grammar \r\n\n  :").unwrap();
    let cursor = Cursor::new(&tokens);
    assert_eq!(cursor.peek_past_blanks(), &TokenKind::Colon);
}
