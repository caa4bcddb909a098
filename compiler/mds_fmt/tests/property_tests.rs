//! Property-based tests for the grammar serializer.
//!
//! Random grammar trees are written out canonically, parsed back and
//! written again:
//! 1. Round-trip: format(parse(text)) == text for canonical text
//! 2. Idempotence: format(parse(format(parse(text)))) == format(parse(text))

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use mds_fmt::format_grammar;
use mds_grammar::parse;
use mds_ir::{Ebnf, EbnfKind, Grammar, LineEnding, Production, Rule};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// -- Tree Generation Strategies --

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,7}").expect("valid regex")
}

/// Terminal text: quotes and backslashes get escaped, never `"` so
/// mixed quoting cannot occur, never `<` so it cannot read as extended.
fn terminal_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-z0-9 +*()|;:'\\/]{1,6}").expect("valid regex")
}

/// Comment text as the lexer returns it: a leading space, no trailing
/// whitespace, nothing that could close or open another comment.
fn comment_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]([a-z ]{0,6}[a-z])?")
        .expect("valid regex")
        .prop_map(|c| format!(" {c}"))
}

fn leaf_strategy() -> impl Strategy<Value = Ebnf> {
    let kind = prop_oneof![
        3 => name_strategy().prop_map(Ebnf::reference),
        2 => terminal_strategy().prop_map(Ebnf::terminal),
        1 => prop::string::string_regex("[a-z][a-z ]{0,5}")
            .expect("valid regex")
            .prop_map(Ebnf::extended_terminal),
    ];
    (kind, prop::bool::weighted(0.2), prop::option::weighted(0.15, comment_strategy())).prop_map(
        |(mut node, newline, comment)| {
            node.trivia.newline = newline;
            if let Some(comment) = comment {
                node.trivia.comment = comment;
            }
            node
        },
    )
}

fn ebnf_strategy() -> impl Strategy<Value = Ebnf> {
    leaf_strategy().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            inner
                .clone()
                .prop_map(|n| Ebnf::new(EbnfKind::OneOrMore(Box::new(n)))),
            inner
                .clone()
                .prop_map(|n| Ebnf::new(EbnfKind::ZeroOrMore(Box::new(n)))),
            inner
                .clone()
                .prop_map(|n| Ebnf::new(EbnfKind::ZeroOrOne(Box::new(n)))),
            prop::collection::vec(inner.clone(), 2..4)
                .prop_map(|items| Ebnf::new(EbnfKind::Choice(items))),
            prop::collection::vec(inner, 2..4)
                .prop_map(|items| Ebnf::new(EbnfKind::Sequence(items))),
        ]
    })
}

fn rule_strategy() -> impl Strategy<Value = Rule> {
    (
        name_strategy(),
        ebnf_strategy(),
        any::<bool>(),
        prop::option::of(comment_strategy()),
    )
        .prop_map(|(name, body, starts_on_new_line, comment)| {
            let mut rule = Rule::new(name, body);
            rule.starts_on_new_line = starts_on_new_line;
            rule.comment = comment;
            rule
        })
}

fn production_strategy() -> impl Strategy<Value = Production> {
    prop_oneof![
        4 => rule_strategy().prop_map(Production::Rule),
        1 => prop::string::string_regex("[ a-z]{0,10}")
            .expect("valid regex")
            .prop_map(Production::Comment),
        1 => Just(Production::Blank),
    ]
}

fn grammar_strategy() -> impl Strategy<Value = Grammar> {
    (
        prop::option::of(prop::string::string_regex("[A-Z][a-z]{0,5}").expect("valid regex")),
        prop_oneof![
            Just(LineEnding::Crlf),
            Just(LineEnding::Lf),
            Just(LineEnding::Cr)
        ],
        prop::collection::vec(production_strategy(), 0..6),
    )
        .prop_map(|(header, line_ending, productions)| Grammar {
            has_header: header.is_some(),
            name: header.unwrap_or_default(),
            line_ending,
            productions,
        })
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn canonical_text_round_trips(grammar in grammar_strategy()) {
        let text = format_grammar(&grammar);
        let reparsed = parse(&text).unwrap();
        prop_assert_eq!(format_grammar(&reparsed), text);
    }

    #[test]
    fn serialization_is_idempotent(grammar in grammar_strategy()) {
        let once = format_grammar(&parse(&format_grammar(&grammar)).unwrap());
        let twice = format_grammar(&parse(&once).unwrap());
        prop_assert_eq!(twice, once);
    }
}

// -- Fixed Examples --

#[test]
fn choice_rule_round_trips_with_either_line_ending() {
    for text in [
        "stat:\r\n\t| 'if' expr\r\n\t| 'while' expr\r\n\t;\r\n",
        "stat:\n\t| 'if' expr\n\t| 'while' expr\n\t;\n",
    ] {
        assert_eq!(format_grammar(&parse(text).unwrap()), text);
    }
}

#[test]
fn canonical_file_round_trips() {
    let text = "grammar Expressions;\r\n\
                // Arithmetic\r\n\
                \r\n\
                expr:\tterm ( ( '+' | '-' ) term )*;  // left-assoc\r\n\
                term:\r\n\t| factor\r\n\t| term '*' factor\r\n\t;\r\n\
                factor:\t'(' expr ')' | '<decimal digit>'+;\r\n";
    assert_eq!(format_grammar(&parse(text).unwrap()), text);
}

#[test]
fn trailing_comment_without_semicolon_is_stable() {
    let once = format_grammar(&parse("a: b // c").unwrap());
    assert_eq!(once, "a:\tb // c\r\n\t;\r\n");
    let twice = format_grammar(&parse(&once).unwrap());
    assert_eq!(twice, once);
}

#[test]
fn long_operator_chain_formats() {
    let text = format!("A:\ta{};\r\n", "*".repeat(5_000));
    assert_eq!(format_grammar(&parse(&text).unwrap()), text);
}

#[test]
fn non_canonical_spacing_is_normalized() {
    let grammar = parse("a :  b   c|d ;\n").unwrap();
    assert_eq!(format_grammar(&grammar), "a:\tb c | d;\n");
}
