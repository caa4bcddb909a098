//! Serialization for the mdspec grammar notation.
//!
//! - [`format_grammar`] and friends produce canonical text; comparing
//!   canonical texts is how two grammars are checked for agreement.
//! - [`colorize_grammar`] produces styled lines for the rendering layer.
//!
//! Both walk the tree through the [`Emitter`] trait.

mod colorize;
mod emitter;
mod serialize;

pub use colorize::colorize_grammar;
pub use emitter::{ColorEmitter, ColorizedLine, ColorizedWord, Emitter, StringEmitter, Style};
pub use serialize::{
    format_ebnf, format_grammar, format_production, write_ebnf, write_grammar, write_production,
};
