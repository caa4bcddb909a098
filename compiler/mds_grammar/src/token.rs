//! Tokens of the grammar notation.

use mds_ir::Span;
use std::fmt;

/// Token kinds.
///
/// Trivia (whitespace, comments, line ends) is kept in the stream so the
/// parser can reattach it to the node it follows.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `\r\n`, `\n`, or a lone `\r`.
    Newline,
    /// A run of spaces, tabs, vertical tabs, or form feeds.
    Whitespace(String),
    /// `//` to end of line; holds the text after the slashes.
    Comment(String),
    Colon,
    Star,
    Question,
    Pipe,
    Plus,
    Semicolon,
    LParen,
    RParen,
    /// A single-quoted terminal with escapes resolved.
    Quoted(String),
    /// Production name or reference.
    Word(String),
    Eof,
}

impl TokenKind {
    /// Short name used in messages and traces.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Newline => "line end",
            TokenKind::Whitespace(_) => "whitespace",
            TokenKind::Comment(_) => "comment",
            TokenKind::Colon => "':'",
            TokenKind::Star => "'*'",
            TokenKind::Question => "'?'",
            TokenKind::Pipe => "'|'",
            TokenKind::Plus => "'+'",
            TokenKind::Semicolon => "';'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Quoted(_) => "terminal",
            TokenKind::Word(_) => "name",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Word(word) => write!(f, "'{word}'"),
            _ => f.write_str(self.display_name()),
        }
    }
}

/// A token and where it came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}
