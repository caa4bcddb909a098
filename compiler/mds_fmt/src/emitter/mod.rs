//! Output Emitter
//!
//! Abstraction for output production during serialization. The same walk
//! can build a plain string or a list of styled lines.

use mds_ir::LineEnding;

/// Category of an emitted fragment, for syntax coloring.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Style {
    #[default]
    Plain,
    /// Rule names and references.
    ProductionName,
    Terminal,
    ExtendedTerminal,
    Comment,
}

/// Trait for emitting serialized output.
pub trait Emitter {
    /// Emit a text fragment. Fragments never contain line breaks.
    fn emit(&mut self, text: &str, style: Style);

    /// End the current line.
    fn emit_line_break(&mut self);

    /// Last character emitted on the current line.
    fn last_char(&self) -> Option<char>;

    /// Whether the current line ends with a tab.
    fn ends_with_tab(&self) -> bool {
        self.last_char() == Some('\t')
    }
}

/// String-based emitter.
pub struct StringEmitter {
    buffer: String,
    line_ending: LineEnding,
}

impl StringEmitter {
    pub fn new(line_ending: LineEnding) -> Self {
        StringEmitter {
            buffer: String::new(),
            line_ending,
        }
    }

    /// Get the formatted output.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Default for StringEmitter {
    fn default() -> Self {
        Self::new(LineEnding::default())
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str, _style: Style) {
        self.buffer.push_str(text);
    }

    fn emit_line_break(&mut self) {
        self.buffer.push_str(self.line_ending.as_str());
    }

    fn last_char(&self) -> Option<char> {
        self.buffer
            .chars()
            .next_back()
            .filter(|c| *c != '\n' && *c != '\r')
    }
}

/// One styled fragment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorizedWord {
    pub text: String,
    pub style: Style,
}

/// One output line of styled fragments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorizedLine {
    pub words: Vec<ColorizedWord>,
}

impl ColorizedLine {
    /// Concatenated text without styling.
    pub fn text(&self) -> String {
        self.words.iter().map(|w| w.text.as_str()).collect()
    }
}

/// Emitter producing styled lines.
///
/// Every line break closes the current line, so a trailing break yields
/// no extra empty line, while two breaks in a row yield an empty one.
#[derive(Default)]
pub struct ColorEmitter {
    lines: Vec<ColorizedLine>,
    current: ColorizedLine,
}

impl ColorEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finished lines, including an unterminated last line.
    pub fn finish(mut self) -> Vec<ColorizedLine> {
        if !self.current.words.is_empty() {
            self.lines.push(self.current);
        }
        self.lines
    }
}

impl Emitter for ColorEmitter {
    fn emit(&mut self, text: &str, style: Style) {
        if text.is_empty() {
            return;
        }
        self.current.words.push(ColorizedWord {
            text: text.to_string(),
            style,
        });
    }

    fn emit_line_break(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
    }

    fn last_char(&self) -> Option<char> {
        self.current
            .words
            .last()
            .and_then(|w| w.text.chars().next_back())
    }
}

#[cfg(test)]
mod tests;
