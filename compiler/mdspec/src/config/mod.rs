//! Settings for spec ingestion and grammar checking.

pub use mds_fuzzy::LocatorConfig;

/// Production name never reported as missing or extra.
pub const START_SENTINEL: &str = "start";

/// Deepest heading numbered by default (`####`).
pub const MAX_HEADING_DEPTH: u8 = 4;

/// Configuration for reading a markdown specification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecConfig {
    /// Code block info strings that mark a grammar block.
    pub grammar_languages: Vec<String>,

    /// Production ignored by missing/extra checks.
    pub start_sentinel: String,

    /// Headings deeper than this are rejected (MD002).
    pub max_heading_depth: u8,

    /// Prefix of section bookmarks (`_Toc00001`).
    pub section_bookmark_prefix: String,

    /// Prefix of grammar block bookmarks (`_Grm00001`).
    pub grammar_bookmark_prefix: String,

    pub locator: LocatorConfig,
}

impl Default for SpecConfig {
    fn default() -> Self {
        Self {
            grammar_languages: vec!["antlr".to_string()],
            start_sentinel: START_SENTINEL.to_string(),
            max_heading_depth: MAX_HEADING_DEPTH,
            section_bookmark_prefix: "_Toc".to_string(),
            grammar_bookmark_prefix: "_Grm".to_string(),
            locator: LocatorConfig::default(),
        }
    }
}

impl SpecConfig {
    /// Whether a code block tagged `language` holds grammar.
    pub fn is_grammar_language(&self, language: Option<&str>) -> bool {
        language
            .map(str::trim)
            .is_some_and(|tag| self.grammar_languages.iter().any(|known| known == tag))
    }
}

#[cfg(test)]
mod tests;
