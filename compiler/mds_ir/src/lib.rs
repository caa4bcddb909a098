//! mdspec IR - shared value types
//!
//! This crate holds the plain data that flows between the grammar
//! subsystem and the fuzzy locator:
//! - [`Span`] half-open byte ranges over a text buffer
//! - The EBNF grammar tree ([`Ebnf`], [`Production`], [`Grammar`])
//! - The prose-document tree ([`Block`], [`Inline`]) handed over by the
//!   external structural parser
//!
//! Nothing here parses or formats. Parsing lives in `mds_grammar`,
//! serialization in `mds_fmt`, and source mapping in `mds_fuzzy`.

pub mod document;
mod ebnf;
mod grammar;
mod span;

pub use document::{Block, Inline};
pub use ebnf::{Ebnf, EbnfKind, Trivia};
pub use grammar::{Grammar, LineEnding, Production, Rule};
pub use span::{Span, SpanError};
