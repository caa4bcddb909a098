//! Word sequences of parsed markdown elements.
//!
//! A parsed element carries no source offsets, so it is matched back
//! to the raw text by the words it renders to. Markup contributes
//! nothing; only visible text (and link titles) produce words.

use mds_ir::{Block, Inline};

use crate::text::word_list;

/// Words of a run of inline content.
pub fn inline_words(inlines: &[Inline]) -> Vec<&str> {
    let mut out = Vec::new();
    for inline in inlines {
        push_inline(inline, &mut out);
    }
    out
}

/// Words of one block, recursing into containers.
pub fn block_words(block: &Block) -> Vec<&str> {
    let mut out = Vec::new();
    push_block(block, &mut out);
    out
}

/// Words of a sequence of blocks.
pub fn blocks_words(blocks: &[Block]) -> Vec<&str> {
    let mut out = Vec::new();
    for block in blocks {
        push_block(block, &mut out);
    }
    out
}

fn push_inline<'a>(inline: &'a Inline, out: &mut Vec<&'a str>) {
    match inline {
        Inline::Literal(text) | Inline::InlineCode(text) => out.extend(word_list(text)),
        Inline::Strong(inner) | Inline::Emphasis(inner) => {
            for child in inner {
                push_inline(child, out);
            }
        }
        Inline::Link { text, title, .. } => {
            for child in text {
                push_inline(child, out);
            }
            if let Some(title) = title {
                out.extend(word_list(title));
            }
        }
        Inline::Image { .. } | Inline::HardLineBreak => {}
    }
}

fn push_block<'a>(block: &'a Block, out: &mut Vec<&'a str>) {
    match block {
        Block::Heading { text, .. } | Block::Paragraph(text) => {
            for inline in text {
                push_inline(inline, out);
            }
        }
        Block::List(items) => {
            for item in items {
                push_blocks(item, out);
            }
        }
        Block::CodeBlock { code, language } => {
            if let Some(language) = language.as_deref().map(str::trim) {
                if !language.is_empty() {
                    out.push(language);
                }
            }
            out.extend(word_list(code));
        }
        Block::Table { header, rows } => {
            for cell in header.iter().flatten() {
                push_blocks(cell, out);
            }
            for cell in rows.iter().flatten() {
                push_blocks(cell, out);
            }
        }
        Block::Quote(blocks) => push_blocks(blocks, out),
        Block::HorizontalRule => {}
    }
}

fn push_blocks<'a>(blocks: &'a [Block], out: &mut Vec<&'a str>) {
    for block in blocks {
        push_block(block, out);
    }
}
