//! Canonical serialization.
//!
//! Produces the one text a grammar tree always maps to. Two rule bodies
//! are considered the same exactly when their canonical texts match, so
//! the output must only depend on the tree.
//!
//! Layout rules:
//! - a rule is `name:`, a tab, the body and `;`; when the body started on
//!   its own line the tab follows a line break and is followed by `| `
//! - choices join with ` | `, or `| ` right after a line break
//! - sequences join with a space, parenthesizing choice elements
//! - unary operators parenthesize choice and sequence operands
//! - a node's comment follows it as ` //text`; a node's line break is
//!   written as a line break plus a tab, and a comment always gets one
//!
//! Intra-line whitespace recorded by the parser is ignored.

use mds_ir::{Ebnf, EbnfKind, Grammar, LineEnding, Production, Rule};
use mds_stack::ensure_sufficient_stack;

use crate::emitter::{Emitter, StringEmitter, Style};

/// Serialize a whole grammar using its own line ending.
pub fn format_grammar(grammar: &Grammar) -> String {
    let mut emitter = StringEmitter::new(grammar.line_ending);
    write_grammar(grammar, &mut emitter);
    emitter.output()
}

pub fn format_production(production: &Production, line_ending: LineEnding) -> String {
    let mut emitter = StringEmitter::new(line_ending);
    write_production(production, &mut emitter);
    emitter.output()
}

/// Serialize one rule body.
pub fn format_ebnf(node: &Ebnf, line_ending: LineEnding) -> String {
    let mut emitter = StringEmitter::new(line_ending);
    write_ebnf(node, &mut emitter);
    emitter.output()
}

pub fn write_grammar<E: Emitter>(grammar: &Grammar, emitter: &mut E) {
    if grammar.has_header {
        emitter.emit("grammar ", Style::Plain);
        emitter.emit(&grammar.name, Style::ProductionName);
        emitter.emit(";", Style::Plain);
        emitter.emit_line_break();
    }
    for production in &grammar.productions {
        write_production(production, emitter);
    }
}

pub fn write_production<E: Emitter>(production: &Production, emitter: &mut E) {
    match production {
        Production::Blank => emitter.emit_line_break(),
        Production::Comment(text) => {
            emitter.emit(&format!("//{text}"), Style::Comment);
            emitter.emit_line_break();
        }
        Production::Rule(rule) => write_rule(rule, emitter),
    }
}

fn write_rule<E: Emitter>(rule: &Rule, emitter: &mut E) {
    emitter.emit(&rule.name, Style::ProductionName);
    emitter.emit(":", Style::Plain);
    if rule.starts_on_new_line {
        emitter.emit_line_break();
    }
    emitter.emit("\t", Style::Plain);
    if rule.starts_on_new_line {
        emitter.emit("| ", Style::Plain);
    }
    write_ebnf(&rule.body, emitter);
    emitter.emit(";", Style::Plain);
    if let Some(comment) = &rule.comment {
        emitter.emit(&format!("  //{comment}"), Style::Comment);
    }
    emitter.emit_line_break();
}

pub fn write_ebnf<E: Emitter>(node: &Ebnf, emitter: &mut E) {
    ensure_sufficient_stack(|| write_node(node, emitter));
}

fn write_node<E: Emitter>(node: &Ebnf, emitter: &mut E) {
    match &node.kind {
        EbnfKind::Terminal(text) => {
            emitter.emit(&format!("'{}'", escape(text)), Style::Terminal);
        }
        EbnfKind::ExtendedTerminal(text) => {
            emitter.emit(&format!("'<{}>'", escape(text)), Style::ExtendedTerminal);
        }
        EbnfKind::Reference(name) => emitter.emit(name, Style::ProductionName),
        EbnfKind::OneOrMore(child) => write_unary(child, "+", emitter),
        EbnfKind::ZeroOrMore(child) => write_unary(child, "*", emitter),
        EbnfKind::ZeroOrOne(child) => write_unary(child, "?", emitter),
        EbnfKind::Choice(alternatives) => {
            for (i, alternative) in alternatives.iter().enumerate() {
                if i > 0 {
                    let separator = if emitter.ends_with_tab() { "| " } else { " | " };
                    emitter.emit(separator, Style::Plain);
                }
                write_ebnf(alternative, emitter);
            }
        }
        EbnfKind::Sequence(elements) => {
            for (i, element) in elements.iter().enumerate() {
                if i > 0 && !emitter.ends_with_tab() {
                    emitter.emit(" ", Style::Plain);
                }
                if element.is_choice() {
                    write_grouped(element, emitter);
                } else {
                    write_ebnf(element, emitter);
                }
            }
        }
    }
    let has_comment = !node.trivia.comment.is_empty();
    if has_comment {
        emitter.emit(&format!(" //{}", node.trivia.comment), Style::Comment);
    }
    // A comment runs to the end of its line.
    if node.trivia.newline || has_comment {
        emitter.emit_line_break();
        emitter.emit("\t", Style::Plain);
    }
}

fn write_unary<E: Emitter>(child: &Ebnf, operator: &str, emitter: &mut E) {
    if child.is_choice() || child.is_sequence() {
        write_grouped(child, emitter);
    } else {
        write_ebnf(child, emitter);
    }
    emitter.emit(operator, Style::Plain);
}

fn write_grouped<E: Emitter>(node: &Ebnf, emitter: &mut E) {
    emitter.emit("( ", Style::Plain);
    write_ebnf(node, emitter);
    emitter.emit(" )", Style::Plain);
}

/// Quote-escape terminal text.
pub(crate) fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}
