//! Syntax coloring for grammar blocks.
//!
//! Walks the same tree as the serializer but replays the spacing the
//! author typed instead of normalizing it, and tags every fragment with
//! a [`Style`] for the rendering layer. Extended terminals are shown by
//! name, without quotes or angle brackets.

use mds_ir::{Ebnf, EbnfKind, Grammar, Production};

use mds_stack::ensure_sufficient_stack;

use crate::emitter::{ColorEmitter, ColorizedLine, Emitter, Style};
use crate::serialize::escape;

/// Colorize a parsed grammar into styled lines.
pub fn colorize_grammar(grammar: &Grammar) -> Vec<ColorizedLine> {
    let mut emitter = ColorEmitter::new();
    for production in &grammar.productions {
        colorize_production(production, &mut emitter);
    }
    emitter.finish()
}

fn colorize_production<E: Emitter>(production: &Production, emitter: &mut E) {
    match production {
        Production::Blank => emitter.emit_line_break(),
        Production::Comment(text) => {
            emitter.emit(&format!("//{text}"), Style::Comment);
            emitter.emit_line_break();
        }
        Production::Rule(rule) => {
            emitter.emit(&rule.name, Style::ProductionName);
            emitter.emit(":", Style::Plain);
            if rule.starts_on_new_line {
                emitter.emit_line_break();
                emitter.emit("\t| ", Style::Plain);
            } else {
                emitter.emit(" ", Style::Plain);
            }
            colorize_ebnf(&rule.body, emitter);
            emitter.emit(";", Style::Plain);
            if let Some(comment) = &rule.comment {
                emitter.emit(&format!("  //{comment}"), Style::Comment);
            }
            emitter.emit_line_break();
        }
    }
}

fn colorize_ebnf<E: Emitter>(node: &Ebnf, emitter: &mut E) {
    ensure_sufficient_stack(|| colorize_node(node, emitter));
}

fn colorize_node<E: Emitter>(node: &Ebnf, emitter: &mut E) {
    match &node.kind {
        EbnfKind::Terminal(text) => {
            emitter.emit(&format!("'{}'", escape(text)), Style::Terminal);
        }
        EbnfKind::ExtendedTerminal(text) => emitter.emit(text, Style::ExtendedTerminal),
        EbnfKind::Reference(name) => emitter.emit(name, Style::ProductionName),
        EbnfKind::OneOrMore(child) => colorize_unary(child, "+", emitter),
        EbnfKind::ZeroOrMore(child) => colorize_unary(child, "*", emitter),
        EbnfKind::ZeroOrOne(child) => colorize_unary(child, "?", emitter),
        EbnfKind::Choice(alternatives) => {
            for (i, alternative) in alternatives.iter().enumerate() {
                if i > 0 {
                    emitter.emit("| ", Style::Plain);
                }
                colorize_ebnf(alternative, emitter);
            }
        }
        EbnfKind::Sequence(elements) => {
            for (i, element) in elements.iter().enumerate() {
                // Continuation lines line up under the first element.
                if i > 0 && emitter.ends_with_tab() {
                    emitter.emit("  ", Style::Plain);
                }
                if element.is_choice() {
                    colorize_grouped(element, emitter);
                } else {
                    colorize_ebnf(element, emitter);
                }
            }
        }
    }
    if node.trivia.newline {
        if !node.trivia.comment.is_empty() {
            emitter.emit(&format!(" //{}", node.trivia.comment), Style::Comment);
        }
        emitter.emit_line_break();
        emitter.emit("\t", Style::Plain);
    } else {
        emitter.emit(&node.trivia.whitespace, Style::Plain);
        if !node.trivia.comment.is_empty() {
            emitter.emit(&format!("//{}", node.trivia.comment), Style::Comment);
            emitter.emit_line_break();
            emitter.emit("\t", Style::Plain);
        }
    }
}

fn colorize_unary<E: Emitter>(child: &Ebnf, operator: &str, emitter: &mut E) {
    if child.is_choice() || child.is_sequence() {
        colorize_grouped(child, emitter);
    } else {
        colorize_ebnf(child, emitter);
    }
    emitter.emit(operator, Style::Plain);
}

fn colorize_grouped<E: Emitter>(node: &Ebnf, emitter: &mut E) {
    emitter.emit("( ", Style::Plain);
    colorize_ebnf(node, emitter);
    let close = if emitter.last_char().is_some_and(char::is_whitespace) {
        ")"
    } else {
        " )"
    };
    emitter.emit(close, Style::Plain);
}
