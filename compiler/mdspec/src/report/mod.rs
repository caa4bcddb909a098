//! Turning grammar differences into diagnostics.

use std::path::Path;

use mds_diagnostic::{Diagnostic, ErrorCode, Location};
use mds_fuzzy::{line_index, locate};
use mds_grammar::parse_named;
use mds_ir::Span;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::check::{compare_excluding, Difference};
use crate::config::SpecConfig;
use crate::spec::{SourceDocument, Spec};

/// Check the grammar collected in `spec` against an authoritative
/// grammar file.
///
/// A syntax error in the authority is the only diagnostic reported;
/// nothing is compared against a grammar that failed to parse.
pub fn check_grammar(
    authority_file: &str,
    authority_text: &str,
    spec: &Spec,
    documents: &[SourceDocument],
    config: &SpecConfig,
) -> Vec<Diagnostic> {
    let stem = Path::new(authority_file)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(authority_file);
    let authority = match parse_named(authority_text, stem) {
        Ok(grammar) => grammar,
        Err(error) => {
            let location = span_location(authority_file, authority_text, error.span);
            return vec![error.to_diagnostic().with_location(location)];
        }
    };

    let mut diagnostics = Vec::new();
    let mut seen = FxHashSet::default();
    for rule in authority.rules() {
        if !seen.insert(rule.name.as_str()) {
            diagnostics.push(
                Diagnostic::warning(ErrorCode::MD020)
                    .with_message(format!("duplicate grammar for '{}'", rule.name))
                    .with_location(span_location(authority_file, authority_text, rule.name_span)),
            );
        }
    }

    let authority_name = Path::new(authority_file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(authority_file);

    for difference in compare_excluding(&authority, &spec.grammar, &config.start_sentinel) {
        let diagnostic = match difference {
            Difference::ExtraInCopy(name) => Diagnostic {
                location: markdown_location(spec, documents, config, &name),
                ..Diagnostic::error(ErrorCode::MD021)
                    .with_message(format!("markdown has superfluous production '{name}'"))
            },
            Difference::MissingInCopy(name) => Diagnostic {
                location: authority
                    .rule(&name)
                    .map(|rule| span_location(authority_file, authority_text, rule.name_span)),
                ..Diagnostic::error(ErrorCode::MD022)
                    .with_message(format!("markdown lacks production '{name}'"))
            },
            Difference::Mismatch {
                name,
                authority,
                copy,
            } => Diagnostic {
                location: markdown_location(spec, documents, config, &name),
                ..Diagnostic::error(ErrorCode::MD023)
                    .with_message(format!(
                        "production '{name}' differs between markdown and {authority_name}"
                    ))
                    .with_note(format!("{authority_name} says {}", escape_line_breaks(&authority)))
                    .with_note(format!("markdown says {}", escape_line_breaks(&copy)))
            },
        };
        diagnostics.push(diagnostic);
    }

    debug!(count = diagnostics.len(), "checked grammar");
    diagnostics
}

/// Location of the markdown block that defines `name`.
fn markdown_location(
    spec: &Spec,
    documents: &[SourceDocument],
    config: &SpecConfig,
    name: &str,
) -> Option<Location> {
    let block = spec.production_ref_for(name)?;
    let document = documents.get(block.document)?;
    Some(locate(
        &document.file,
        &document.text,
        &block.target,
        &config.locator,
    ))
}

fn span_location(file: &str, text: &str, span: Span) -> Location {
    let index = line_index(file, text);
    Location::range(
        file,
        index.line_col(text, span.start),
        index.line_col(text, span.end),
    )
}

/// `\r` and `\n` as visible escapes, so a body fits on one line.
pub fn escape_line_breaks(text: &str) -> String {
    text.replace('\r', "\\r").replace('\n', "\\n")
}
