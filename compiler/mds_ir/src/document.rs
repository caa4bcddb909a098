//! Pre-parsed markdown documents.
//!
//! Markdown parsing itself is out of scope; callers hand in a tree of
//! blocks and inlines produced by whatever parser they use.

/// Inline markdown content.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Inline {
    Literal(String),
    Strong(Vec<Inline>),
    Emphasis(Vec<Inline>),
    InlineCode(String),
    Link {
        text: Vec<Inline>,
        url: String,
        title: Option<String>,
    },
    Image {
        alt: Vec<Inline>,
        url: String,
        title: Option<String>,
    },
    HardLineBreak,
}

/// Block-level markdown content.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Block {
    Heading {
        level: u8,
        text: Vec<Inline>,
    },
    Paragraph(Vec<Inline>),
    /// Items, each a list of blocks.
    List(Vec<Vec<Block>>),
    CodeBlock {
        code: String,
        language: Option<String>,
    },
    /// Rows of cells; each cell is a list of blocks.
    Table {
        header: Option<Vec<Vec<Block>>>,
        rows: Vec<Vec<Vec<Block>>>,
    },
    Quote(Vec<Block>),
    HorizontalRule,
}

impl Inline {
    /// Concatenated plain text, markup stripped.
    pub fn plain_text(inlines: &[Inline]) -> String {
        let mut out = String::new();
        for inline in inlines {
            inline.push_plain(&mut out);
        }
        out
    }

    fn push_plain(&self, out: &mut String) {
        match self {
            Inline::Literal(text) | Inline::InlineCode(text) => out.push_str(text),
            Inline::Strong(inner) | Inline::Emphasis(inner) => {
                for inline in inner {
                    inline.push_plain(out);
                }
            }
            Inline::Link { text, .. } => {
                for inline in text {
                    inline.push_plain(out);
                }
            }
            Inline::Image { .. } => {}
            Inline::HardLineBreak => out.push('\n'),
        }
    }
}
