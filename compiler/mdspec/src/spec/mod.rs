//! Reading sections and grammar blocks out of markdown documents.
//!
//! Each document is walked on its own (in parallel); the results are
//! then merged in document order, which is where numbering, bookmarks
//! and duplicate checks happen.

use std::path::Path;

use mds_diagnostic::{Diagnostic, ErrorCode, Location};
use mds_fuzzy::{block_words, locate, LineIndex, LocateTarget, SectionTarget};
use mds_grammar::parse;
use mds_ir::{Block, Grammar, Inline};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::config::SpecConfig;

/// One markdown file: its name, raw text and parsed block tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceDocument {
    pub file: String,
    pub text: String,
    pub blocks: Vec<Block>,
}

/// A numbered heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionRef {
    /// 1-based depth.
    pub level: u8,
    pub title: String,
    /// Dotted outline number, e.g. `10.1.2`.
    pub number: String,
    /// `file.md#slug`
    pub url: String,
    pub bookmark: String,
}

/// A grammar code block and the productions it defines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductionRef {
    pub code: String,
    pub production_names: Vec<String>,
    pub bookmark: String,
    /// Index of the owning document.
    pub document: usize,
    /// Index into [`Spec::sections`] of the heading above the block.
    pub section: Option<usize>,
    /// How to find the block again in its document's text.
    pub target: LocateTarget,
}

/// Sequential bookmark names: `prefix00001`, `prefix00002`, ...
#[derive(Clone, Debug)]
pub struct BookmarkCounter {
    prefix: String,
    next: u32,
}

impl BookmarkCounter {
    pub fn new(prefix: impl Into<String>) -> Self {
        BookmarkCounter {
            prefix: prefix.into(),
            next: 1,
        }
    }

    pub fn next_name(&mut self) -> String {
        let name = format!("{}{:05}", self.prefix, self.next);
        self.next += 1;
        name
    }
}

/// Everything read from a set of markdown documents.
#[derive(Clone, Debug, Default)]
pub struct Spec {
    pub sections: Vec<SectionRef>,
    pub production_refs: Vec<ProductionRef>,
    /// Every production of every grammar block, in document order.
    pub grammar: Grammar,
    pub diagnostics: Vec<Diagnostic>,
    /// `(rule name, index into production_refs)` per definition.
    definitions: Vec<(String, usize)>,
}

impl Spec {
    /// Read `documents` in order.
    pub fn read(documents: &[SourceDocument], config: &SpecConfig) -> Spec {
        let extracted: Vec<Vec<Event>> = documents
            .par_iter()
            .map(|document| Extractor::run(document, config))
            .collect();

        let mut builder = SpecBuilder::new(config);
        for (index, (document, events)) in documents.iter().zip(extracted).enumerate() {
            for event in events {
                builder.apply(index, document, event);
            }
        }
        let spec = builder.spec;
        debug!(
            documents = documents.len(),
            sections = spec.sections.len(),
            blocks = spec.production_refs.len(),
            productions = spec.grammar.productions.len(),
            "read spec"
        );
        spec
    }

    /// The section that introduced the first definition of `name`.
    pub fn link_for(&self, name: &str) -> Option<&SectionRef> {
        let (_, block) = self.definitions.iter().find(|(defined, _)| defined == name)?;
        let section = self.production_refs.get(*block)?.section?;
        self.sections.get(section)
    }

    /// The block holding the last definition of `name`, the one a
    /// grammar comparison sees.
    pub fn production_ref_for(&self, name: &str) -> Option<&ProductionRef> {
        let (_, block) = self.definitions.iter().rev().find(|(defined, _)| defined == name)?;
        self.production_refs.get(*block)
    }
}

/// Markdown files linked from list items of an index document.
///
/// Only direct links ending in `.md` count; each file is listed once.
pub fn linked_files(blocks: &[Block]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut files = Vec::new();
    for block in blocks {
        let Block::List(items) = block else {
            continue;
        };
        for item in items.iter().flatten() {
            let Block::Paragraph(inlines) = item else {
                continue;
            };
            for inline in inlines {
                if let Inline::Link { url, .. } = inline {
                    if url.to_ascii_lowercase().ends_with(".md") && seen.insert(url.as_str()) {
                        files.push(url.clone());
                    }
                }
            }
        }
    }
    files
}

/// Anchor slug of a heading title.
pub fn slug(title: &str) -> String {
    title
        .chars()
        .filter_map(|c| match c {
            'a'..='z' | '0'..='9' | '-' | '_' => Some(c),
            'A'..='Z' => Some(c.to_ascii_lowercase()),
            ' ' => Some('-'),
            _ => None,
        })
        .collect()
}

/// What a single document contributes, before cross-document merging.
enum Event {
    Heading(SectionTarget),
    Grammar {
        code: String,
        target: LocateTarget,
        parsed: Result<Grammar, Diagnostic>,
    },
}

struct Extractor<'a> {
    document: &'a SourceDocument,
    config: &'a SpecConfig,
    heading: Option<SectionTarget>,
    events: Vec<Event>,
}

impl<'a> Extractor<'a> {
    fn run(document: &'a SourceDocument, config: &'a SpecConfig) -> Vec<Event> {
        let mut extractor = Extractor {
            document,
            config,
            heading: None,
            events: Vec::new(),
        };
        extractor.walk(&document.blocks, true);
        extractor.events
    }

    /// Headings count at the top level only; grammar blocks anywhere.
    fn walk(&mut self, blocks: &[Block], top_level: bool) {
        for block in blocks {
            match block {
                Block::Heading { level, text } if top_level => {
                    let heading = SectionTarget {
                        level: usize::from(*level),
                        title: Inline::plain_text(text).trim().to_string(),
                    };
                    self.heading = Some(heading.clone());
                    self.events.push(Event::Heading(heading));
                }
                Block::CodeBlock { code, language }
                    if self.config.is_grammar_language(language.as_deref()) =>
                {
                    self.grammar_block(block, code);
                }
                Block::List(items) => {
                    for item in items {
                        self.walk(item, false);
                    }
                }
                Block::Quote(inner) => self.walk(inner, false),
                Block::Table { header, rows } => {
                    for cell in header.iter().flatten().chain(rows.iter().flatten()) {
                        self.walk(cell, false);
                    }
                }
                _ => {}
            }
        }
    }

    fn grammar_block(&mut self, block: &Block, code: &str) {
        let target = LocateTarget {
            section: self.heading.clone(),
            paragraph: Some(block_words(block).into_iter().map(String::from).collect()),
            span: None,
        };
        let parsed = parse(code).map_err(|error| {
            let (line, column) = LineIndex::new(code).line_col(code, error.span.start);
            trace!(file = %self.document.file, line, column, "grammar block failed to parse");
            error
                .to_diagnostic()
                .with_location(locate(
                    &self.document.file,
                    &self.document.text,
                    &target,
                    &self.config.locator,
                ))
                .with_note(format!("at line {line}, column {column} of the grammar block"))
        });
        self.events.push(Event::Grammar {
            code: code.to_string(),
            target,
            parsed,
        });
    }
}

struct SpecBuilder<'a> {
    config: &'a SpecConfig,
    spec: Spec,
    outline: Vec<u32>,
    section_bookmarks: BookmarkCounter,
    grammar_bookmarks: BookmarkCounter,
    current_section: Option<usize>,
    defined: FxHashSet<String>,
}

impl<'a> SpecBuilder<'a> {
    fn new(config: &'a SpecConfig) -> Self {
        SpecBuilder {
            config,
            spec: Spec::default(),
            outline: vec![0; usize::from(config.max_heading_depth)],
            section_bookmarks: BookmarkCounter::new(config.section_bookmark_prefix.as_str()),
            grammar_bookmarks: BookmarkCounter::new(config.grammar_bookmark_prefix.as_str()),
            current_section: None,
            defined: FxHashSet::default(),
        }
    }

    fn apply(&mut self, index: usize, document: &SourceDocument, event: Event) {
        match event {
            Event::Heading(heading) => self.heading(document, heading),
            Event::Grammar {
                code,
                target,
                parsed: Ok(grammar),
            } => self.grammar(index, document, code, target, grammar),
            Event::Grammar {
                parsed: Err(diagnostic),
                ..
            } => self.spec.diagnostics.push(diagnostic),
        }
    }

    fn heading(&mut self, document: &SourceDocument, heading: SectionTarget) {
        let depth = self.outline.len();
        if heading.level == 0 || heading.level > depth {
            let diagnostic = Diagnostic::error(ErrorCode::MD002)
                .with_message(format!(
                    "heading '{}' is deeper than the supported {depth} levels",
                    heading.title
                ))
                .with_location(self.locate_heading(document, &heading));
            self.spec.diagnostics.push(diagnostic);
            return;
        }

        let url = format!("{}#{}", file_name(&document.file), slug(&heading.title));
        if self.spec.sections.iter().any(|section| section.url == url) {
            let diagnostic = Diagnostic::error(ErrorCode::MD001)
                .with_message(format!("duplicate section title {url}"))
                .with_location(self.locate_heading(document, &heading));
            self.spec.diagnostics.push(diagnostic);
            return;
        }

        let level = heading.level;
        self.outline[level - 1] += 1;
        for deeper in &mut self.outline[level..] {
            *deeper = 0;
        }
        let number = self.outline[..level]
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".");

        self.current_section = Some(self.spec.sections.len());
        self.spec.sections.push(SectionRef {
            level: level as u8,
            title: heading.title,
            number,
            url,
            bookmark: self.section_bookmarks.next_name(),
        });
    }

    fn grammar(
        &mut self,
        index: usize,
        document: &SourceDocument,
        code: String,
        target: LocateTarget,
        grammar: Grammar,
    ) {
        let block = self.spec.production_refs.len();
        for rule in grammar.rules() {
            if !self.defined.insert(rule.name.clone()) {
                let diagnostic = Diagnostic::warning(ErrorCode::MD020)
                    .with_message(format!("duplicate grammar for '{}'", rule.name))
                    .with_location(locate(
                        &document.file,
                        &document.text,
                        &target,
                        &self.config.locator,
                    ));
                self.spec.diagnostics.push(diagnostic);
            }
            self.spec.definitions.push((rule.name.clone(), block));
        }

        self.spec.production_refs.push(ProductionRef {
            code,
            production_names: grammar.rule_names().into_iter().map(String::from).collect(),
            bookmark: self.grammar_bookmarks.next_name(),
            document: index,
            section: self.current_section,
            target,
        });
        self.spec.grammar.extend(grammar.productions);
    }

    fn locate_heading(
        &self,
        document: &SourceDocument,
        heading: &SectionTarget,
    ) -> Location {
        let target = LocateTarget {
            section: Some(heading.clone()),
            ..LocateTarget::default()
        };
        locate(&document.file, &document.text, &target, &self.config.locator)
    }
}

/// Final path component of `file`.
fn file_name(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
}
