//! Human-readable source locations.

use std::fmt;

/// Where a diagnostic points, at whatever precision could be recovered.
///
/// Lines and columns are 1-based.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Location {
    /// Only the file is known: `file`.
    File(String),
    /// A single line: `file(line)`.
    Line { file: String, line: u32 },
    /// A run of lines: `file(start-end)`.
    Lines { file: String, start: u32, end: u32 },
    /// An exact range: `file(startLine,startCol,endLine,endCol)`.
    Range {
        file: String,
        start_line: u32,
        start_col: u32,
        end_line: u32,
        end_col: u32,
    },
}

impl Location {
    pub fn file(file: impl Into<String>) -> Self {
        Location::File(file.into())
    }

    /// A line range; collapses to [`Location::Line`] when it is one line.
    pub fn lines(file: impl Into<String>, start: u32, end: u32) -> Self {
        let file = file.into();
        if start >= end {
            Location::Line { file, line: start }
        } else {
            Location::Lines { file, start, end }
        }
    }

    pub fn range(
        file: impl Into<String>,
        (start_line, start_col): (u32, u32),
        (end_line, end_col): (u32, u32),
    ) -> Self {
        Location::Range {
            file: file.into(),
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::File(file) => write!(f, "{file}"),
            Location::Line { file, line } => write!(f, "{file}({line})"),
            Location::Lines { file, start, end } => write!(f, "{file}({start}-{end})"),
            Location::Range {
                file,
                start_line,
                start_col,
                end_line,
                end_col,
            } => write!(f, "{file}({start_line},{start_col},{end_line},{end_col})"),
        }
    }
}

#[cfg(test)]
mod tests;
