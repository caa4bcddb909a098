//! Fuzzy source location for parsed markdown elements.
//!
//! Lookups narrow the buffer step by step: a section, then a paragraph
//! inside it, then an inline span inside that. A stage that finds
//! nothing leaves the previous narrowing in place; a failed lookup only
//! makes the reported location coarser.

use mds_diagnostic::Location;
use mds_ir::Span;
use tracing::{debug, trace};

use crate::levenshtein::{distance, search};
use crate::line_index::line_index;
use crate::text::{paragraphs, sections, word_list, words};

/// Caps on word-level lookups.
///
/// Both searches are quadratic in the word counts involved; a lookup
/// exceeding a cap reports no match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocatorConfig {
    pub max_needle_words: Option<usize>,
    pub max_haystack_words: Option<usize>,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        LocatorConfig {
            max_needle_words: Some(1_000),
            max_haystack_words: Some(200_000),
        }
    }
}

impl LocatorConfig {
    /// No caps.
    pub fn unlimited() -> Self {
        LocatorConfig {
            max_needle_words: None,
            max_haystack_words: None,
        }
    }

    fn allows(&self, needle: usize, haystack: usize) -> bool {
        let fits = |cap: Option<usize>, n: usize| cap.is_none_or(|cap| n <= cap);
        fits(self.max_needle_words, needle) && fits(self.max_haystack_words, haystack)
    }
}

/// The section with `level` hashes whose title is closest to `title`.
pub fn find_section(text: &str, level: usize, title: &str) -> Option<Span> {
    let target: Vec<char> = title.chars().collect();
    sections(text)
        .into_iter()
        .filter(|section| section.level() == level)
        .min_by_key(|section| {
            let candidate: Vec<char> = section.title.chars().collect();
            distance(&candidate, &target)
        })
        .map(|section| section.span)
}

/// The paragraph (or fenced block) whose words are closest to `target`.
pub fn find_paragraph(text: &str, target: &[&str], config: &LocatorConfig) -> Option<Span> {
    let candidates = paragraphs(text);
    let total: usize = candidates.iter().map(|p| word_list(&p.text).len()).sum();
    if !config.allows(target.len(), total) {
        debug!(needle = target.len(), haystack = total, "paragraph lookup over cap");
        return None;
    }
    candidates
        .into_iter()
        .min_by_key(|paragraph| distance(&word_list(&paragraph.text), target))
        .map(|paragraph| paragraph.span)
}

/// The byte range of `text` best matching the word sequence `target`.
///
/// The range runs from the first matched word to the start of the word
/// after the match, or to the end of `text` when the match reaches the
/// last word.
pub fn find_span(text: &str, target: &[&str], config: &LocatorConfig) -> Option<Span> {
    let spans = words(text);
    if !config.allows(target.len(), spans.len()) {
        debug!(needle = target.len(), haystack = spans.len(), "span lookup over cap");
        return None;
    }
    let haystack: Vec<&str> = spans.iter().map(|w| w.word).collect();
    let matched = search(target, &haystack)?;
    let first = spans.get(matched.start as usize)?;
    let end = spans
        .get(matched.end as usize)
        .map_or(text.len() as u32, |next| next.span.start);
    Some(Span::new(first.span.start, end))
}

/// A heading to look for: its level and plain title text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionTarget {
    pub level: usize,
    pub title: String,
}

/// What to locate, broadest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocateTarget {
    pub section: Option<SectionTarget>,
    /// Rendered words of a paragraph-level block.
    pub paragraph: Option<Vec<String>>,
    /// Rendered words of an inline span.
    pub span: Option<Vec<String>>,
}

/// Resolve `target` inside `text` to a location string.
pub fn locate(file: &str, text: &str, target: &LocateTarget, config: &LocatorConfig) -> Location {
    let mut narrowed: Option<Span> = None;

    if let Some(section) = &target.section {
        narrowed = find_section(text, section.level, &section.title);
        trace!(?narrowed, title = %section.title, "section lookup");
    }

    if let Some(paragraph) = &target.paragraph {
        let needle: Vec<&str> = paragraph.iter().map(String::as_str).collect();
        if let Some(found) = within(text, narrowed, |slice| find_paragraph(slice, &needle, config)) {
            narrowed = Some(found);
        }
        trace!(?narrowed, "paragraph lookup");
    }

    let index = line_index(file, text);

    if let Some(span) = &target.span {
        let needle: Vec<&str> = span.iter().map(String::as_str).collect();
        if let Some(found) = within(text, narrowed, |slice| find_span(slice, &needle, config)) {
            trace!(?found, "span lookup");
            return Location::range(
                file,
                index.line_col(text, found.start),
                index.line_col(text, found.end),
            );
        }
    }

    match narrowed {
        Some(found) => {
            let last = found.end.saturating_sub(1).max(found.start);
            Location::lines(file, index.line(found.start), index.line(last))
        }
        None => Location::file(file),
    }
}

/// Run `lookup` on the narrowed slice of `text` and rebase its result.
fn within(
    text: &str,
    narrowed: Option<Span>,
    lookup: impl FnOnce(&str) -> Option<Span>,
) -> Option<Span> {
    let base = narrowed.unwrap_or_else(|| Span::from_range(0..text.len()));
    let slice = text.get(base.to_range())?;
    lookup(slice).map(|found| found.offset_by(base.start))
}
