//! Parser for the mdspec grammar notation.
//!
//! The notation is a small EBNF dialect:
//!
//! ```text
//! grammar Example;
//!
//! // statements
//! stat:
//!     | 'if' expr
//!     | 'while' expr
//!     ;
//! expr: term ( '+' term )*;  // left-associative
//! ```
//!
//! [`parse`] turns text into a [`Grammar`], keeping comments, blank lines
//! and line-break placement so `mds_fmt` can write the text back out.

mod cursor;
mod error;
mod lexer;
mod parser;
mod token;

use mds_ir::{Grammar, LineEnding};
use tracing::debug;

pub use error::{GrammarSyntaxError, SyntaxErrorKind};
pub use lexer::lex;
pub use token::{Token, TokenKind};

use parser::Parser;

/// Parse grammar text. The grammar is named by its `grammar <name>;`
/// header, or left unnamed.
pub fn parse(text: &str) -> Result<Grammar, GrammarSyntaxError> {
    parse_named(text, "")
}

/// Parse grammar text, naming it `fallback` when it has no header.
pub fn parse_named(text: &str, fallback: &str) -> Result<Grammar, GrammarSyntaxError> {
    let tokens = lexer::lex(text)?;
    let parsed = Parser::new(&tokens).parse_grammar()?;
    let has_header = parsed.header.is_some();
    let grammar = Grammar {
        has_header,
        line_ending: LineEnding::detect(text).unwrap_or_default(),
        productions: parsed.productions,
        ..Grammar::new(parsed.header.unwrap_or_else(|| fallback.to_string()))
    };
    debug!(
        name = %grammar.name,
        productions = grammar.productions.len(),
        "parsed grammar"
    );
    Ok(grammar)
}
