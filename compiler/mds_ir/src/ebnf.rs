//! EBNF expression tree.
//!
//! A rule body is a tree of [`Ebnf`] nodes. Every node carries the
//! [`Trivia`] that followed it in the source text. Trivia is formatting
//! metadata, not meaning: it lets the serializer put comments and line
//! breaks back where they were, and lets the colorizer replay the
//! original spacing.

/// Formatting metadata trailing a node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trivia {
    /// Intra-line whitespace seen after the node, verbatim.
    pub whitespace: String,
    /// Text of `//` comments after the node (without the slashes),
    /// joined by a space when they span several lines.
    pub comment: String,
    /// A line break followed the node.
    pub newline: bool,
}

impl Trivia {
    /// Append another run of trivia after this one.
    pub fn absorb(&mut self, other: Trivia) {
        self.whitespace.push_str(&other.whitespace);
        self.comment.push_str(&other.comment);
        let trimmed = self.comment.trim_end().len();
        self.comment.truncate(trimmed);
        self.newline |= other.newline;
    }
}

/// Node kinds of the grammar notation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EbnfKind {
    /// Literal text, `'if'`.
    Terminal(String),
    /// Named special terminal, `'<any character>'`. Never contains `?`.
    ExtendedTerminal(String),
    /// Reference to another production by name.
    Reference(String),
    /// `child+`
    OneOrMore(Box<Ebnf>),
    /// `child*`
    ZeroOrMore(Box<Ebnf>),
    /// `child?`
    ZeroOrOne(Box<Ebnf>),
    /// `a | b | c`, at least two alternatives.
    Choice(Vec<Ebnf>),
    /// `a b c`, at least two elements.
    Sequence(Vec<Ebnf>),
}

/// One node of a rule body.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ebnf {
    pub kind: EbnfKind,
    pub trivia: Trivia,
}

impl Ebnf {
    /// Create a node with no trailing trivia.
    pub fn new(kind: EbnfKind) -> Self {
        Ebnf {
            kind,
            trivia: Trivia::default(),
        }
    }

    pub fn terminal(text: impl Into<String>) -> Self {
        Self::new(EbnfKind::Terminal(text.into()))
    }

    pub fn extended_terminal(text: impl Into<String>) -> Self {
        Self::new(EbnfKind::ExtendedTerminal(text.into()))
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Self::new(EbnfKind::Reference(name.into()))
    }

    /// Build a choice, collapsing a single alternative to itself.
    ///
    /// # Panics
    /// Panics on an empty list; the parser never produces one.
    pub fn choice(mut alternatives: Vec<Ebnf>) -> Self {
        assert!(!alternatives.is_empty(), "choice needs an alternative");
        if alternatives.len() == 1 {
            return alternatives.remove(0);
        }
        Self::new(EbnfKind::Choice(alternatives))
    }

    /// Build a sequence, collapsing a single element to itself.
    ///
    /// # Panics
    /// Panics on an empty list; the parser never produces one.
    pub fn sequence(mut elements: Vec<Ebnf>) -> Self {
        assert!(!elements.is_empty(), "sequence needs an element");
        if elements.len() == 1 {
            return elements.remove(0);
        }
        Self::new(EbnfKind::Sequence(elements))
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.kind, EbnfKind::Choice(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self.kind, EbnfKind::Sequence(_))
    }
}
