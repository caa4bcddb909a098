//! Token cursor.
//!
//! A position index over an immutable token slice. Parser helpers share
//! the cursor, never the slice, so consumption is always explicit.

use mds_ir::Span;
use std::mem::discriminant;
use tracing::trace;

use crate::token::{Token, TokenKind};

/// Cursor for navigating tokens.
///
/// Invariant: the slice is non-empty and ends with [`TokenKind::Eof`],
/// and the cursor never moves past that token.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(
            tokens.last().is_some_and(|t| t.kind == TokenKind::Eof),
            "token stream must end with EOF"
        );
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub(crate) fn current(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub(crate) fn current_span(&self) -> Span {
        self.current().span
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check the current token's kind, ignoring any payload.
    #[inline]
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        discriminant(self.current_kind()) == discriminant(kind)
    }

    /// Kind of the first token after the current one that is neither
    /// whitespace nor a line end.
    pub(crate) fn peek_past_blanks(&self) -> &'a TokenKind {
        self.tokens[self.pos + 1..]
            .iter()
            .find(|t| !matches!(t.kind, TokenKind::Whitespace(_) | TokenKind::Newline))
            .map_or(&self.tokens[self.tokens.len() - 1].kind, |t| &t.kind)
    }

    /// Consume the current token and return it. EOF is never consumed.
    pub(crate) fn advance(&mut self) -> &'a Token {
        let token = &self.tokens[self.pos];
        trace!(
            pos = self.pos,
            kind = token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skip same-line whitespace.
    pub(crate) fn skip_whitespace(&mut self) {
        while matches!(self.current_kind(), TokenKind::Whitespace(_)) {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests;
