//! Property-based tests for the grammar checker.
//!
//! 1. Symmetry: names missing from the copy are exactly the names extra
//!    in the copy when the roles are swapped
//! 2. Reflexivity: a grammar never differs from itself

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use mds_grammar::parse;
use mds_ir::Grammar;
use mdspec::{compare, Difference};
use proptest::prelude::*;

fn grammar_strategy() -> impl Strategy<Value = Grammar> {
    let rule = (
        prop::sample::select(vec!["start", "a", "b", "c", "d", "e"]),
        prop::sample::select(vec!["x", "'y'", "x | z", "( x y )*"]),
    );
    prop::collection::vec(rule, 0..8).prop_map(|rules| {
        let text: String = rules
            .iter()
            .map(|(name, body)| format!("{name}: {body};\r\n"))
            .collect();
        parse(&text).expect("generated grammar parses")
    })
}

fn missing(differences: &[Difference]) -> Vec<&str> {
    differences
        .iter()
        .filter_map(|d| match d {
            Difference::MissingInCopy(name) => Some(name.as_str()),
            _ => None,
        })
        .collect()
}

fn extra(differences: &[Difference]) -> Vec<&str> {
    differences
        .iter()
        .filter_map(|d| match d {
            Difference::ExtraInCopy(name) => Some(name.as_str()),
            _ => None,
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn presence_checks_are_symmetric(a in grammar_strategy(), b in grammar_strategy()) {
        let forward = compare(&a, &b);
        let backward = compare(&b, &a);
        prop_assert_eq!(missing(&forward), extra(&backward));
        prop_assert_eq!(extra(&forward), missing(&backward));
    }

    #[test]
    fn mismatches_are_symmetric(a in grammar_strategy(), b in grammar_strategy()) {
        let count = |differences: &[Difference]| {
            differences
                .iter()
                .filter(|d| matches!(d, Difference::Mismatch { .. }))
                .count()
        };
        prop_assert_eq!(count(&compare(&a, &b)), count(&compare(&b, &a)));
    }

    #[test]
    fn grammar_matches_itself(a in grammar_strategy()) {
        prop_assert!(compare(&a, &a).is_empty());
    }
}
