//! Byte offset to line/column conversion, with a process-wide cache.

use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use tracing::trace;

use crate::text::raw_lines;

/// Start offsets of every line in one buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    starts: Vec<u32>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut starts: Vec<u32> = raw_lines(text).iter().map(|l| l.span.start).collect();
        if starts.is_empty() {
            starts.push(0);
        }
        LineIndex { starts }
    }

    /// 1-based line containing `offset`.
    ///
    /// Offsets inside a terminator belong to the line it ends.
    pub fn line(&self, offset: u32) -> u32 {
        match self.starts.binary_search(&offset) {
            Ok(line) => line as u32 + 1,
            Err(next) => next as u32,
        }
    }

    /// 1-based `(line, column)`; columns count characters.
    pub fn line_col(&self, text: &str, offset: u32) -> (u32, u32) {
        let line = self.line(offset);
        let start = self.starts[line as usize - 1];
        let column = text
            .get(start as usize..offset as usize)
            .map_or(offset - start, |prefix| prefix.chars().count() as u32);
        (line, column + 1)
    }
}

type LineIndexCache = DashMap<String, Arc<LineIndex>, FxBuildHasher>;

static LINE_INDEXES: OnceLock<LineIndexCache> = OnceLock::new();

/// The cached index for `file`, built from `text` on first use.
///
/// Buffers are write-once: a later call with different text for the
/// same file name gets the index built the first time.
pub fn line_index(file: &str, text: &str) -> Arc<LineIndex> {
    let cache = LINE_INDEXES.get_or_init(|| DashMap::with_hasher(FxBuildHasher));
    if let Some(hit) = cache.get(file) {
        return Arc::clone(hit.value());
    }
    let entry = cache.entry(file.to_owned()).or_insert_with(|| {
        trace!(file, "building line index");
        Arc::new(LineIndex::new(text))
    });
    Arc::clone(entry.value())
}

#[cfg(test)]
mod tests;
