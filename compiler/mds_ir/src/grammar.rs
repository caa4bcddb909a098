//! Grammars: ordered productions plus header metadata.

use crate::{Ebnf, Span};

/// Line terminator used when a grammar is written back out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineEnding {
    #[default]
    Crlf,
    Lf,
    Cr,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
            LineEnding::Cr => "\r",
        }
    }

    /// The first line terminator in `text`, or `None` if there is none.
    pub fn detect(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        let idx = bytes.iter().position(|&b| b == b'\r' || b == b'\n')?;
        Some(match (bytes[idx], bytes.get(idx + 1)) {
            (b'\r', Some(b'\n')) => LineEnding::Crlf,
            (b'\r', _) => LineEnding::Cr,
            _ => LineEnding::Lf,
        })
    }
}

/// A named rule, `name: body;`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    pub name: String,
    /// Where the name sits in the parsed text.
    pub name_span: Span,
    pub body: Ebnf,
    /// Comments between the colon and the body, loose comments around
    /// `|`, and a same-line comment after the `;`.
    pub comment: Option<String>,
    /// The body started on the line after the colon.
    pub starts_on_new_line: bool,
}

impl Rule {
    pub fn new(name: impl Into<String>, body: Ebnf) -> Self {
        Rule {
            name: name.into(),
            name_span: Span::DUMMY,
            body,
            comment: None,
            starts_on_new_line: false,
        }
    }
}

/// One entry of a grammar, in source order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Production {
    Rule(Rule),
    /// A standalone `//` comment line (text without the slashes).
    Comment(String),
    /// An empty line.
    Blank,
}

impl Production {
    pub fn as_rule(&self) -> Option<&Rule> {
        match self {
            Production::Rule(rule) => Some(rule),
            Production::Comment(_) | Production::Blank => None,
        }
    }
}

/// A parsed grammar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grammar {
    pub name: String,
    /// The text began with a `grammar <name>;` line.
    pub has_header: bool,
    pub line_ending: LineEnding,
    pub productions: Vec<Production>,
}

impl Grammar {
    /// An empty, headerless grammar.
    pub fn new(name: impl Into<String>) -> Self {
        Grammar {
            name: name.into(),
            ..Grammar::default()
        }
    }

    /// Rules in source order, skipping comments and blanks.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.productions.iter().filter_map(Production::as_rule)
    }

    /// The first rule named `name`.
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules().find(|rule| rule.name == name)
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules().map(|rule| rule.name.as_str()).collect()
    }

    /// Append productions from another grammar, keeping this grammar's
    /// name and header.
    pub fn extend(&mut self, productions: impl IntoIterator<Item = Production>) {
        self.productions.extend(productions);
    }
}
