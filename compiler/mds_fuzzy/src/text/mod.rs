//! Word, line, fence, paragraph and section tokenization.
//!
//! Every function borrows the input and reports spans in its byte
//! coordinates. Nothing here knows markdown beyond fences and `#`
//! headings; the point is to recover positions, not structure.

use mds_ir::Span;

/// A word and where it sits in the buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WordSpan<'a> {
    pub word: &'a str,
    pub span: Span,
}

/// Word characters: ASCII letters, digits and the apostrophe.
#[inline]
pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'\''
}

/// Maximal runs of word characters, left to right.
pub fn words(text: &str) -> Vec<WordSpan<'_>> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut pos = 0;
    while pos < bytes.len() {
        if !is_word_byte(bytes[pos]) {
            pos += 1;
            continue;
        }
        let start = pos;
        while pos < bytes.len() && is_word_byte(bytes[pos]) {
            pos += 1;
        }
        out.push(WordSpan {
            word: &text[start..pos],
            span: Span::from_range(start..pos),
        });
    }
    out
}

/// Words of `text` without their spans.
pub fn word_list(text: &str) -> Vec<&str> {
    words(text).into_iter().map(|w| w.word).collect()
}

/// One physical line. `span` covers the content only.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LineSpan<'a> {
    pub line: &'a str,
    pub span: Span,
    /// Bytes of the terminator after the line: 0, 1 or 2.
    pub terminator_len: u32,
}

impl LineSpan<'_> {
    /// End offset including the line terminator.
    #[inline]
    pub fn end_with_terminator(&self) -> u32 {
        self.span.end + self.terminator_len
    }
}

/// Split on `\r\n`, `\r` or `\n`.
///
/// A trailing terminator does not start an extra empty line.
pub fn raw_lines(text: &str) -> Vec<LineSpan<'_>> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut start = 0;
    let mut pos = 0;
    while pos < bytes.len() {
        let terminator_len = match bytes[pos] {
            b'\r' if bytes.get(pos + 1) == Some(&b'\n') => 2,
            b'\r' | b'\n' => 1,
            _ => {
                pos += 1;
                continue;
            }
        };
        out.push(LineSpan {
            line: &text[start..pos],
            span: Span::from_range(start..pos),
            terminator_len,
        });
        pos += terminator_len as usize;
        start = pos;
    }
    if start < bytes.len() {
        out.push(LineSpan {
            line: &text[start..],
            span: Span::from_range(start..bytes.len()),
            terminator_len: 0,
        });
    }
    out
}

/// A plain line, or a whole fenced code block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOrFence<'a> {
    Line(LineSpan<'a>),
    Fence {
        /// Info string after the opening fence, possibly empty.
        language: &'a str,
        /// Interior lines with the fence indentation removed, each
        /// followed by `\r\n`.
        code: String,
        /// From the opening line to the end of the closing line,
        /// terminator included.
        span: Span,
    },
}

/// An opening fence: indentation width, fence run, info string.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct FenceOpen<'a> {
    indent: usize,
    fence: &'a str,
    language: &'a str,
}

/// `^( *)(```+|~~~+) *([^ ]*)`
fn fence_open(line: &str) -> Option<FenceOpen<'_>> {
    let bytes = line.as_bytes();
    let indent = bytes.iter().take_while(|b| **b == b' ').count();
    let marker = *bytes.get(indent)?;
    if marker != b'`' && marker != b'~' {
        return None;
    }
    let run = bytes[indent..].iter().take_while(|b| **b == marker).count();
    if run < 3 {
        return None;
    }
    let fence_end = indent + run;
    let rest = &line[fence_end..];
    let info = rest.trim_start_matches(' ');
    let language_len = info.find(' ').unwrap_or(info.len());
    Some(FenceOpen {
        indent,
        fence: &line[indent..fence_end],
        language: &info[..language_len],
    })
}

/// Remove up to `width` leading spaces.
fn strip_indent(line: &str, width: usize) -> &str {
    let spaces = line.bytes().take(width).take_while(|b| *b == b' ').count();
    &line[spaces..]
}

/// The opening fence run, then only fence characters and spaces.
fn closes_fence(line: &str, fence: &str) -> bool {
    let Some(rest) = line.strip_prefix(fence) else {
        return false;
    };
    let marker = fence.as_bytes()[0] as char;
    rest.trim_start_matches(marker).trim_start_matches(' ').is_empty()
}

/// Lines, with fenced code blocks folded into single units.
pub fn lines_and_code_fences(text: &str) -> Vec<LineOrFence<'_>> {
    let mut out = Vec::new();
    let mut lines = raw_lines(text).into_iter();

    while let Some(line) = lines.next() {
        let Some(open) = fence_open(line.line) else {
            out.push(LineOrFence::Line(line));
            continue;
        };

        let mut code = String::new();
        let mut end = line.end_with_terminator();
        for inner in lines.by_ref() {
            end = inner.end_with_terminator();
            let stripped = strip_indent(inner.line, open.indent);
            if closes_fence(stripped, open.fence) {
                break;
            }
            code.push_str(stripped);
            code.push_str("\r\n");
        }
        out.push(LineOrFence::Fence {
            language: open.language,
            code,
            span: Span::new(line.span.start, end),
        });
    }
    out
}

/// A paragraph or fenced block and the text it was built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextSpan {
    /// Lines joined, each followed by `\r\n`; code for fenced blocks.
    pub text: String,
    pub span: Span,
}

/// Runs of non-blank lines; each fenced block stands alone.
pub fn paragraphs(text: &str) -> Vec<TextSpan> {
    let mut out = Vec::new();
    let mut current: Option<TextSpan> = None;

    for unit in lines_and_code_fences(text) {
        match unit {
            LineOrFence::Line(line) if line.line.trim().is_empty() => {
                out.extend(current.take());
            }
            LineOrFence::Line(line) => {
                let paragraph = current.get_or_insert_with(|| TextSpan {
                    text: String::new(),
                    span: Span::new(line.span.start, line.span.start),
                });
                paragraph.text.push_str(line.line);
                paragraph.text.push_str("\r\n");
                paragraph.span.end = line.end_with_terminator();
            }
            LineOrFence::Fence { code, span, .. } => {
                out.extend(current.take());
                out.push(TextSpan { text: code, span });
            }
        }
    }
    out.extend(current);
    out
}

/// A `#` heading and everything up to the next one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SectionSpan<'a> {
    pub hashes: &'a str,
    pub title: &'a str,
    pub span: Span,
}

impl SectionSpan<'_> {
    /// Number of `#` characters.
    #[inline]
    pub fn level(&self) -> usize {
        self.hashes.len()
    }
}

/// Sections opened by lines starting with `#`.
///
/// Text before the first heading belongs to no section.
pub fn sections(text: &str) -> Vec<SectionSpan<'_>> {
    let mut out: Vec<SectionSpan<'_>> = Vec::new();
    for line in raw_lines(text) {
        let hash_count = line.line.bytes().take_while(|b| *b == b'#').count();
        if hash_count == 0 {
            continue;
        }
        if let Some(previous) = out.last_mut() {
            previous.span.end = line.span.start;
        }
        out.push(SectionSpan {
            hashes: &line.line[..hash_count],
            title: line.line[hash_count..].trim(),
            span: Span::from_range(line.span.start as usize..text.len()),
        });
    }
    out
}

#[cfg(test)]
mod tests;
