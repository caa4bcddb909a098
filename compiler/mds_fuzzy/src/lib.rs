//! mdspec fuzzy locator
//!
//! Parsed markdown elements arrive without source offsets. This crate
//! finds them again in the raw text:
//! - [`text`] tokenizes a buffer into words, lines, fenced blocks,
//!   paragraphs and `#` sections, all with byte spans
//! - [`levenshtein`] provides edit distance and edit-distance search
//! - [`render`] turns parsed elements into word sequences
//! - [`locate`] combines them into `file(line...)` locations
//!
//! A failed lookup is never an error; the location just gets coarser.

pub mod levenshtein;
mod line_index;
pub mod locate;
pub mod render;
pub mod text;

pub use levenshtein::{distance, search};
pub use line_index::{line_index, LineIndex};
pub use locate::{
    find_paragraph, find_section, find_span, locate, LocateTarget, LocatorConfig, SectionTarget,
};
pub use render::{block_words, blocks_words, inline_words};
pub use text::{
    lines_and_code_fences, paragraphs, raw_lines, sections, word_list, words, LineOrFence,
    LineSpan, SectionSpan, TextSpan, WordSpan,
};
