//! Hand-written lexer for the grammar notation.
//!
//! Scans the text byte by byte into a flat token list that always ends
//! with [`TokenKind::Eof`]. Every byte of the input belongs to exactly one
//! token, so trivia can be reattached to nodes by the parser.

use mds_ir::Span;
use tracing::trace;

use crate::error::{GrammarSyntaxError, SyntaxErrorKind};
use crate::token::{Token, TokenKind};

/// Lex `text` into tokens.
pub fn lex(text: &str) -> Result<Vec<Token>, GrammarSyntaxError> {
    let mut lexer = Lexer {
        text,
        bytes: text.as_bytes(),
        pos: 0,
    };
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }
    trace!(count = tokens.len(), "lexed grammar text");
    Ok(tokens)
}

fn is_inline_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | 0x0b | 0x0c)
}

fn is_word_terminator(b: u8) -> bool {
    is_inline_space(b)
        || matches!(
            b,
            b'\r' | b'\n' | b':' | b'*' | b'?' | b'|' | b'+' | b';' | b'(' | b')' | b'\''
        )
}

struct Lexer<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl Lexer<'_> {
    fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(start as u32, self.pos as u32)
    }

    fn error(&self, kind: SyntaxErrorKind, start: usize) -> GrammarSyntaxError {
        GrammarSyntaxError::new(kind, self.span_from(start))
    }

    fn next_token(&mut self) -> Result<Token, GrammarSyntaxError> {
        let start = self.pos;
        let Some(b) = self.peek(0) else {
            return Ok(Token::new(TokenKind::Eof, self.span_from(start)));
        };
        let kind = match b {
            b'\r' => {
                self.pos += if self.peek(1) == Some(b'\n') { 2 } else { 1 };
                TokenKind::Newline
            }
            b'\n' => {
                self.pos += 1;
                TokenKind::Newline
            }
            b if is_inline_space(b) => {
                while self.peek(0).is_some_and(is_inline_space) {
                    self.pos += 1;
                }
                TokenKind::Whitespace(self.text[start..self.pos].to_string())
            }
            b'/' if self.peek(1) == Some(b'/') => self.comment(start)?,
            b'\'' => self.quoted(start)?,
            b':' => self.single(TokenKind::Colon),
            b'*' => self.single(TokenKind::Star),
            b'?' => self.single(TokenKind::Question),
            b'|' => self.single(TokenKind::Pipe),
            b'+' => self.single(TokenKind::Plus),
            b';' => self.single(TokenKind::Semicolon),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            _ => self.word(start),
        };
        Ok(Token::new(kind, self.span_from(start)))
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.pos += 1;
        kind
    }

    fn comment(&mut self, start: usize) -> Result<TokenKind, GrammarSyntaxError> {
        self.pos += 2;
        while self.peek(0).is_some_and(|b| b != b'\r' && b != b'\n') {
            self.pos += 1;
        }
        let text = &self.text[start + 2..self.pos];
        if text.contains("*)") {
            return Err(self.error(SyntaxErrorKind::CommentClosesBlock, start));
        }
        Ok(TokenKind::Comment(text.to_string()))
    }

    /// A single-quoted terminal. Only `\\`, `\'` and `\"` are escapes.
    fn quoted(&mut self, start: usize) -> Result<TokenKind, GrammarSyntaxError> {
        self.pos += 1;
        let mut value = String::new();
        let mut segment = self.pos;
        loop {
            match self.peek(0) {
                None => return Err(self.error(SyntaxErrorKind::UnterminatedTerminal, start)),
                Some(b'\r' | b'\n') => {
                    return Err(self.error(SyntaxErrorKind::MultiLineTerminal, start));
                }
                Some(b'\'') => {
                    value.push_str(&self.text[segment..self.pos]);
                    self.pos += 1;
                    return Ok(TokenKind::Quoted(value));
                }
                Some(b'\\') => {
                    value.push_str(&self.text[segment..self.pos]);
                    let escaped = match self.peek(1) {
                        Some(b'\\') => '\\',
                        Some(b'\'') => '\'',
                        Some(b'"') => '"',
                        _ => {
                            self.pos += 1;
                            return Err(self.error(SyntaxErrorKind::InvalidEscape, start));
                        }
                    };
                    value.push(escaped);
                    self.pos += 2;
                    segment = self.pos;
                }
                Some(_) => self.pos += 1,
            }
        }
    }

    fn word(&mut self, start: usize) -> TokenKind {
        while let Some(b) = self.peek(0) {
            if is_word_terminator(b) || (b == b'/' && self.peek(1) == Some(b'/')) {
                break;
            }
            self.pos += 1;
        }
        TokenKind::Word(self.text[start..self.pos].to_string())
    }
}

#[cfg(test)]
mod tests;
