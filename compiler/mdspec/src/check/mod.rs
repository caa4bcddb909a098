//! Production-by-production comparison of two grammars.
//!
//! Two productions are the same when their bodies serialize to the same
//! canonical text. Standalone comments, blank lines and line endings
//! never count.

use mds_fmt::format_ebnf;
use mds_ir::{Grammar, LineEnding, Rule};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::config::START_SENTINEL;

/// One way two grammars disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Difference {
    /// Defined in the copy only.
    ExtraInCopy(String),
    /// Defined in the authority only.
    MissingInCopy(String),
    /// Defined in both with different canonical bodies.
    Mismatch {
        name: String,
        authority: String,
        copy: String,
    },
}

impl Difference {
    pub fn name(&self) -> &str {
        match self {
            Difference::ExtraInCopy(name)
            | Difference::MissingInCopy(name)
            | Difference::Mismatch { name, .. } => name,
        }
    }
}

/// Compare `copy` against `authority`, ignoring the `start` production
/// for presence checks.
pub fn compare(authority: &Grammar, copy: &Grammar) -> Vec<Difference> {
    compare_excluding(authority, copy, START_SENTINEL)
}

/// Compare `copy` against `authority`.
///
/// Mismatches come first in authority order, then missing names in
/// authority order, then extra names in copy order. `sentinel` is never
/// reported missing or extra.
pub fn compare_excluding(authority: &Grammar, copy: &Grammar, sentinel: &str) -> Vec<Difference> {
    let authority = RuleMap::new(authority);
    let copy = RuleMap::new(copy);
    let mut differences = Vec::new();

    for (name, rule) in authority.iter() {
        let Some(other) = copy.get(name) else {
            continue;
        };
        let authority_text = canonical_body(rule);
        let copy_text = canonical_body(other);
        if authority_text != copy_text {
            differences.push(Difference::Mismatch {
                name: name.to_string(),
                authority: authority_text,
                copy: copy_text,
            });
        }
    }

    for (name, _) in authority.iter() {
        if name != sentinel && copy.get(name).is_none() {
            differences.push(Difference::MissingInCopy(name.to_string()));
        }
    }

    for (name, _) in copy.iter() {
        if name != sentinel && authority.get(name).is_none() {
            differences.push(Difference::ExtraInCopy(name.to_string()));
        }
    }

    debug!(count = differences.len(), "compared grammars");
    differences
}

/// Body text used for comparison; always CRLF.
pub fn canonical_body(rule: &Rule) -> String {
    format_ebnf(&rule.body, LineEnding::Crlf)
}

/// Rules by name; a later definition replaces an earlier one but keeps
/// the position where the name first appeared.
struct RuleMap<'a> {
    order: Vec<&'a str>,
    rules: FxHashMap<&'a str, &'a Rule>,
}

impl<'a> RuleMap<'a> {
    fn new(grammar: &'a Grammar) -> Self {
        let mut order = Vec::new();
        let mut rules = FxHashMap::default();
        for rule in grammar.rules() {
            if rules.insert(rule.name.as_str(), rule).is_none() {
                order.push(rule.name.as_str());
            }
        }
        RuleMap { order, rules }
    }

    fn get(&self, name: &str) -> Option<&'a Rule> {
        self.rules.get(name).copied()
    }

    fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Rule)> + '_ {
        self.order
            .iter()
            .filter_map(|name| Some((*name, self.get(name)?)))
    }
}
