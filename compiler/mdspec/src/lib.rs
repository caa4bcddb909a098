//! mdspec: grammar consistency for markdown specifications.
//!
//! A specification is a set of markdown documents whose ```` ```antlr ````
//! code blocks together spell out a grammar. This crate reads those
//! blocks ([`Spec::read`]), compares the result with an authoritative
//! grammar file ([`check_grammar`]) and reports every difference as a
//! [`Diagnostic`] located as precisely as the fuzzy locator allows.
//!
//! Markdown parsing is not done here: documents arrive as a block tree
//! ([`SourceDocument::blocks`]) alongside their raw text.

mod check;
mod config;
mod report;
mod spec;

use std::sync::Once;

use mds_fmt::{colorize_grammar, ColorizedLine};
use mds_grammar::{parse, GrammarSyntaxError};

pub use check::{canonical_body, compare, compare_excluding, Difference};
pub use config::{LocatorConfig, SpecConfig, MAX_HEADING_DEPTH, START_SENTINEL};
pub use mds_diagnostic::{Diagnostic, ErrorCode, Location, Severity};
pub use mds_fuzzy::{LocateTarget, SectionTarget};
pub use report::{check_grammar, escape_line_breaks};
pub use spec::{
    linked_files, slug, BookmarkCounter, ProductionRef, SectionRef, SourceDocument, Spec,
};

static TRACING_INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Does nothing unless `MDSPEC_LOG` or `RUST_LOG` is set; `MDSPEC_LOG`
/// wins when both are. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if std::env::var("MDSPEC_LOG").is_ok() {
            EnvFilter::from_env("MDSPEC_LOG")
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(filter)
            .init();
    });
}

/// Parse a grammar block and split it into styled lines for display.
pub fn colorize_source(text: &str) -> Result<Vec<ColorizedLine>, GrammarSyntaxError> {
    let grammar = parse(text)?;
    Ok(colorize_grammar(&grammar))
}

/// Read `documents` and check their grammar against an authority.
///
/// Returns the ingestion diagnostics followed by the check diagnostics.
pub fn check(
    documents: &[SourceDocument],
    authority_file: &str,
    authority_text: &str,
    config: &SpecConfig,
) -> (Spec, Vec<Diagnostic>) {
    let spec = Spec::read(documents, config);
    let mut diagnostics = spec.diagnostics.clone();
    diagnostics.extend(check_grammar(
        authority_file,
        authority_text,
        &spec,
        documents,
        config,
    ));
    (spec, diagnostics)
}
